use super::{a, case_sensitive_transform, p, Definition, Space, CS, CSS, N, NONE, PN, SS};

pub(crate) static SVG: Space = Space {
    name: "svg",
    transform: case_sensitive_transform,
    definitions: DEFINITIONS,
};

static DEFINITIONS: &[Definition] = &[
    // Hyphenated presentation and font attributes
    a("accentHeight", "accent-height", N),
    a("alignmentBaseline", "alignment-baseline", NONE),
    a("arabicForm", "arabic-form", NONE),
    a("baselineShift", "baseline-shift", NONE),
    a("capHeight", "cap-height", N),
    a("className", "class", SS),
    a("clipPath", "clip-path", NONE),
    a("clipRule", "clip-rule", NONE),
    a("colorInterpolation", "color-interpolation", NONE),
    a("colorInterpolationFilters", "color-interpolation-filters", NONE),
    a("colorProfile", "color-profile", NONE),
    a("colorRendering", "color-rendering", NONE),
    a("dataType", "datatype", NONE),
    a("dominantBaseline", "dominant-baseline", NONE),
    a("enableBackground", "enable-background", NONE),
    a("fillOpacity", "fill-opacity", N),
    a("fillRule", "fill-rule", NONE),
    a("floodColor", "flood-color", NONE),
    a("floodOpacity", "flood-opacity", N),
    a("fontFamily", "font-family", NONE),
    a("fontSize", "font-size", NONE),
    a("fontSizeAdjust", "font-size-adjust", NONE),
    a("fontStretch", "font-stretch", NONE),
    a("fontStyle", "font-style", NONE),
    a("fontVariant", "font-variant", NONE),
    a("fontWeight", "font-weight", NONE),
    a("glyphName", "glyph-name", CS),
    a("glyphOrientationHorizontal", "glyph-orientation-horizontal", NONE),
    a("glyphOrientationVertical", "glyph-orientation-vertical", NONE),
    a("hrefLang", "hreflang", NONE),
    a("horizAdvX", "horiz-adv-x", N),
    a("horizOriginX", "horiz-origin-x", N),
    a("horizOriginY", "horiz-origin-y", N),
    a("imageRendering", "image-rendering", NONE),
    a("letterSpacing", "letter-spacing", NONE),
    a("lightingColor", "lighting-color", NONE),
    a("markerEnd", "marker-end", NONE),
    a("markerMid", "marker-mid", NONE),
    a("markerStart", "marker-start", NONE),
    a("navDown", "nav-down", NONE),
    a("navDownLeft", "nav-down-left", NONE),
    a("navDownRight", "nav-down-right", NONE),
    a("navLeft", "nav-left", NONE),
    a("navNext", "nav-next", NONE),
    a("navPrev", "nav-prev", NONE),
    a("navRight", "nav-right", NONE),
    a("navUp", "nav-up", NONE),
    a("navUpLeft", "nav-up-left", NONE),
    a("navUpRight", "nav-up-right", NONE),
    a("overlinePosition", "overline-position", N),
    a("overlineThickness", "overline-thickness", N),
    a("paintOrder", "paint-order", NONE),
    a("panose1", "panose-1", NONE),
    a("pointerEvents", "pointer-events", NONE),
    a("renderingIntent", "rendering-intent", NONE),
    a("shapeRendering", "shape-rendering", NONE),
    a("stopColor", "stop-color", NONE),
    a("stopOpacity", "stop-opacity", N),
    a("strikethroughPosition", "strikethrough-position", N),
    a("strikethroughThickness", "strikethrough-thickness", N),
    a("strokeDashArray", "stroke-dasharray", CSS),
    a("strokeDashOffset", "stroke-dashoffset", NONE),
    a("strokeLineCap", "stroke-linecap", NONE),
    a("strokeLineJoin", "stroke-linejoin", NONE),
    a("strokeMiterLimit", "stroke-miterlimit", PN),
    a("strokeOpacity", "stroke-opacity", N),
    a("strokeWidth", "stroke-width", NONE),
    a("tabIndex", "tabindex", N),
    a("textAnchor", "text-anchor", NONE),
    a("textDecoration", "text-decoration", NONE),
    a("textRendering", "text-rendering", NONE),
    a("transformOrigin", "transform-origin", NONE),
    a("typeOf", "typeof", CSS),
    a("underlinePosition", "underline-position", N),
    a("underlineThickness", "underline-thickness", N),
    a("unicodeBidi", "unicode-bidi", NONE),
    a("unicodeRange", "unicode-range", NONE),
    a("unitsPerEm", "units-per-em", N),
    a("vAlphabetic", "v-alphabetic", N),
    a("vHanging", "v-hanging", N),
    a("vIdeographic", "v-ideographic", N),
    a("vMathematical", "v-mathematical", N),
    a("vectorEffect", "vector-effect", NONE),
    a("vertAdvY", "vert-adv-y", N),
    a("vertOriginX", "vert-origin-x", N),
    a("vertOriginY", "vert-origin-y", N),
    a("wordSpacing", "word-spacing", NONE),
    a("writingMode", "writing-mode", NONE),
    a("xHeight", "x-height", N),
    // Attributes spelled like their property
    p("about", CSS),
    p("accumulate", NONE),
    p("additive", NONE),
    p("alphabetic", N),
    p("amplitude", N),
    p("ascent", N),
    p("attributeName", NONE),
    p("attributeType", NONE),
    p("azimuth", N),
    p("bandwidth", NONE),
    p("baseFrequency", NONE),
    p("baseProfile", NONE),
    p("bbox", NONE),
    p("begin", NONE),
    p("bias", N),
    p("by", NONE),
    p("calcMode", NONE),
    p("clip", NONE),
    p("clipPathUnits", NONE),
    p("color", NONE),
    p("contentScriptType", NONE),
    p("contentStyleType", NONE),
    p("crossOrigin", NONE),
    p("cursor", NONE),
    p("cx", NONE),
    p("cy", NONE),
    p("d", NONE),
    p("defaultAction", NONE),
    p("descent", N),
    p("diffuseConstant", N),
    p("direction", NONE),
    p("display", NONE),
    p("dur", NONE),
    p("divisor", N),
    p("dx", NONE),
    p("dy", NONE),
    p("edgeMode", NONE),
    p("editable", NONE),
    p("elevation", N),
    p("end", NONE),
    p("event", NONE),
    p("exponent", N),
    p("externalResourcesRequired", NONE),
    p("fill", NONE),
    p("filter", NONE),
    p("filterRes", NONE),
    p("filterUnits", NONE),
    p("focusable", NONE),
    p("focusHighlight", NONE),
    p("format", NONE),
    p("fr", NONE),
    p("from", NONE),
    p("fx", NONE),
    p("fy", NONE),
    p("g1", CS),
    p("g2", CS),
    p("glyphRef", NONE),
    p("gradientTransform", NONE),
    p("gradientUnits", NONE),
    p("handler", NONE),
    p("hanging", N),
    p("hatchContentUnits", NONE),
    p("hatchUnits", NONE),
    p("height", NONE),
    p("href", NONE),
    p("id", NONE),
    p("ideographic", N),
    p("initialVisibility", NONE),
    p("in", NONE),
    p("in2", NONE),
    p("intercept", N),
    p("k", N),
    p("k1", N),
    p("k2", N),
    p("k3", N),
    p("k4", N),
    p("kernelMatrix", CSS),
    p("kernelUnitLength", NONE),
    p("keyPoints", NONE),
    p("keySplines", NONE),
    p("keyTimes", NONE),
    p("kerning", NONE),
    p("lang", NONE),
    p("lengthAdjust", NONE),
    p("limitingConeAngle", N),
    p("local", NONE),
    p("markerHeight", NONE),
    p("markerUnits", NONE),
    p("markerWidth", NONE),
    p("mask", NONE),
    p("maskContentUnits", NONE),
    p("maskUnits", NONE),
    p("mathematical", NONE),
    p("max", NONE),
    p("media", NONE),
    p("mediaCharacterEncoding", NONE),
    p("mediaContentEncodings", NONE),
    p("mediaSize", N),
    p("mediaTime", NONE),
    p("method", NONE),
    p("min", NONE),
    p("mode", NONE),
    p("name", NONE),
    p("numOctaves", NONE),
    p("observer", NONE),
    p("offset", NONE),
    p("opacity", NONE),
    p("operator", NONE),
    p("order", NONE),
    p("orient", NONE),
    p("orientation", NONE),
    p("origin", NONE),
    p("overflow", NONE),
    p("path", NONE),
    p("pathLength", N),
    p("patternContentUnits", NONE),
    p("patternTransform", NONE),
    p("patternUnits", NONE),
    p("phase", NONE),
    p("ping", SS),
    p("pitch", NONE),
    p("playbackOrder", NONE),
    p("points", NONE),
    p("pointsAtX", N),
    p("pointsAtY", N),
    p("pointsAtZ", N),
    p("preserveAlpha", NONE),
    p("preserveAspectRatio", NONE),
    p("primitiveUnits", NONE),
    p("propagate", NONE),
    p("property", CSS),
    p("r", NONE),
    p("radius", NONE),
    p("refX", NONE),
    p("refY", NONE),
    p("rel", CSS),
    p("rev", CSS),
    p("repeatCount", NONE),
    p("repeatDur", NONE),
    p("requiredExtensions", CSS),
    p("requiredFeatures", CSS),
    p("requiredFonts", CSS),
    p("requiredFormats", CSS),
    p("resource", NONE),
    p("restart", NONE),
    p("result", NONE),
    p("rotate", NONE),
    p("rx", NONE),
    p("ry", NONE),
    p("scale", NONE),
    p("seed", NONE),
    p("side", NONE),
    p("slope", NONE),
    p("snapshotTime", NONE),
    p("specularConstant", N),
    p("specularExponent", N),
    p("spreadMethod", NONE),
    p("spacing", NONE),
    p("startOffset", NONE),
    p("stdDeviation", NONE),
    p("stemh", NONE),
    p("stemv", NONE),
    p("stitchTiles", NONE),
    p("string", NONE),
    p("stroke", NONE),
    p("style", NONE),
    p("surfaceScale", N),
    p("syncBehavior", NONE),
    p("syncBehaviorDefault", NONE),
    p("syncMaster", NONE),
    p("syncTolerance", NONE),
    p("syncToleranceDefault", NONE),
    p("systemLanguage", CSS),
    p("tableValues", NONE),
    p("target", NONE),
    p("targetX", N),
    p("targetY", N),
    p("textLength", NONE),
    p("timelineBegin", NONE),
    p("title", NONE),
    p("to", NONE),
    p("transform", NONE),
    p("transformBehavior", NONE),
    p("type", NONE),
    p("u1", NONE),
    p("u2", NONE),
    p("unicode", NONE),
    p("values", NONE),
    p("version", NONE),
    p("viewBox", NONE),
    p("viewTarget", NONE),
    p("visibility", NONE),
    p("width", NONE),
    p("widths", NONE),
    p("x", NONE),
    p("x1", NONE),
    p("x2", NONE),
    p("xChannelSelector", NONE),
    p("y", NONE),
    p("y1", NONE),
    p("y2", NONE),
    p("yChannelSelector", NONE),
    p("z", NONE),
    p("zoomAndPan", NONE),
];
