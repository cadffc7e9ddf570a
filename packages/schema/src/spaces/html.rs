use super::{a, case_insensitive_transform, p, Definition, Space, B, CS, N, NONE, OB, SS};

pub(crate) static HTML: Space = Space {
    name: "html",
    transform: case_insensitive_transform,
    definitions: DEFINITIONS,
};

static DEFINITIONS: &[Definition] = &[
    // Standard
    p("abbr", NONE),
    p("accept", CS),
    a("acceptCharset", "accept-charset", SS),
    p("accessKey", SS),
    p("action", NONE),
    p("allow", NONE),
    p("allowFullScreen", B),
    p("allowPaymentRequest", B),
    p("allowUserMedia", B),
    p("alt", NONE),
    p("as", NONE),
    p("async", B),
    p("autoCapitalize", NONE),
    p("autoComplete", SS),
    p("autoFocus", B),
    p("autoPlay", B),
    p("blocking", SS),
    p("capture", NONE),
    p("charSet", NONE),
    p("checked", B),
    p("cite", NONE),
    a("className", "class", SS),
    p("cols", N),
    p("colSpan", NONE),
    p("content", NONE),
    p("contentEditable", NONE),
    p("controls", B),
    p("controlsList", SS),
    p("coords", N.union(CS)),
    p("crossOrigin", NONE),
    p("data", NONE),
    p("dateTime", NONE),
    p("decoding", NONE),
    p("default", B),
    p("defer", B),
    p("dir", NONE),
    p("dirName", NONE),
    p("disabled", B),
    p("download", OB),
    p("draggable", NONE),
    p("encType", NONE),
    p("enterKeyHint", NONE),
    p("fetchPriority", NONE),
    p("form", NONE),
    p("formAction", NONE),
    p("formEncType", NONE),
    p("formMethod", NONE),
    p("formNoValidate", B),
    p("formTarget", NONE),
    p("headers", SS),
    p("height", N),
    p("hidden", B),
    p("high", N),
    p("href", NONE),
    p("hrefLang", NONE),
    a("htmlFor", "for", SS),
    a("httpEquiv", "http-equiv", SS),
    p("id", NONE),
    p("imageSizes", NONE),
    p("imageSrcSet", NONE),
    p("inert", B),
    p("inputMode", NONE),
    p("integrity", NONE),
    p("is", NONE),
    p("isMap", B),
    p("itemId", NONE),
    p("itemProp", SS),
    p("itemRef", SS),
    p("itemScope", B),
    p("itemType", SS),
    p("kind", NONE),
    p("label", NONE),
    p("lang", NONE),
    p("language", NONE),
    p("list", NONE),
    p("loading", NONE),
    p("loop", B),
    p("low", N),
    p("manifest", NONE),
    p("max", NONE),
    p("maxLength", N),
    p("media", NONE),
    p("method", NONE),
    p("min", NONE),
    p("minLength", N),
    p("multiple", B),
    p("muted", B),
    p("name", NONE),
    p("nonce", NONE),
    p("noModule", B),
    p("noValidate", B),
    p("onAbort", NONE),
    p("onBlur", NONE),
    p("onChange", NONE),
    p("onClick", NONE),
    p("onFocus", NONE),
    p("onInput", NONE),
    p("onKeyDown", NONE),
    p("onKeyUp", NONE),
    p("onLoad", NONE),
    p("onSubmit", NONE),
    p("open", B),
    p("optimum", N),
    p("pattern", NONE),
    p("ping", SS),
    p("placeholder", NONE),
    p("playsInline", B),
    p("popover", NONE),
    p("popoverTarget", NONE),
    p("popoverTargetAction", NONE),
    p("poster", NONE),
    p("preload", NONE),
    p("readOnly", B),
    p("referrerPolicy", NONE),
    p("rel", SS),
    p("required", B),
    p("reversed", B),
    p("rows", N),
    p("rowSpan", N),
    p("sandbox", SS),
    p("scope", NONE),
    p("scoped", B),
    p("seamless", B),
    p("selected", B),
    p("shadowRootClonable", B),
    p("shadowRootDelegatesFocus", B),
    p("shadowRootMode", NONE),
    p("shape", NONE),
    p("size", N),
    p("sizes", NONE),
    p("slot", NONE),
    p("span", N),
    p("spellCheck", NONE),
    p("src", NONE),
    p("srcDoc", NONE),
    p("srcLang", NONE),
    p("srcSet", NONE),
    p("start", N),
    p("step", NONE),
    p("style", NONE),
    p("tabIndex", N),
    p("target", NONE),
    p("title", NONE),
    p("translate", NONE),
    p("type", NONE),
    p("typeMustMatch", B),
    p("useMap", NONE),
    p("value", NONE),
    p("width", N),
    p("wrap", NONE),
    p("writingSuggestions", NONE),
    // Legacy
    p("align", NONE),
    p("aLink", NONE),
    p("archive", SS),
    p("axis", NONE),
    p("background", NONE),
    p("bgColor", NONE),
    p("border", N),
    p("borderColor", NONE),
    p("bottomMargin", N),
    p("cellPadding", NONE),
    p("cellSpacing", NONE),
    p("char", NONE),
    p("charOff", NONE),
    p("classId", NONE),
    p("clear", NONE),
    p("code", NONE),
    p("codeBase", NONE),
    p("codeType", NONE),
    p("color", NONE),
    p("compact", B),
    p("declare", B),
    p("event", NONE),
    p("face", NONE),
    p("frame", NONE),
    p("frameBorder", NONE),
    p("hSpace", N),
    p("leftMargin", N),
    p("link", NONE),
    p("longDesc", NONE),
    p("lowSrc", NONE),
    p("marginHeight", N),
    p("marginWidth", N),
    p("noResize", B),
    p("noHref", B),
    p("noShade", B),
    p("noWrap", B),
    p("object", NONE),
    p("profile", NONE),
    p("prompt", NONE),
    p("rev", NONE),
    p("rightMargin", N),
    p("rules", NONE),
    p("scheme", NONE),
    p("scrolling", NONE),
    p("standby", NONE),
    p("summary", NONE),
    p("text", NONE),
    p("topMargin", N),
    p("valueType", NONE),
    p("version", NONE),
    p("vAlign", NONE),
    p("vLink", NONE),
    p("vSpace", N),
    // Non-standard
    p("allowTransparency", NONE),
    p("autoCorrect", NONE),
    p("autoSave", NONE),
    p("disablePictureInPicture", B),
    p("disableRemotePlayback", B),
    p("prefix", NONE),
    p("property", NONE),
    p("results", N),
    p("security", NONE),
    p("unselectable", NONE),
];
