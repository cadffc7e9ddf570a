use super::{p, Definition, Space, NONE};

pub(crate) static XLINK: Space = Space {
    name: "xlink",
    transform: xlink_transform,
    definitions: DEFINITIONS,
};

/// `xLinkArcRole` → `xlink:arcrole`
fn xlink_transform(property: &str) -> String {
    format!("xlink:{}", property.get(5..).unwrap_or_default().to_ascii_lowercase())
}

static DEFINITIONS: &[Definition] = &[
    p("xLinkActuate", NONE),
    p("xLinkArcRole", NONE),
    p("xLinkHref", NONE),
    p("xLinkRole", NONE),
    p("xLinkShow", NONE),
    p("xLinkTitle", NONE),
    p("xLinkType", NONE),
];
