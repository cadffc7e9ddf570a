use super::{p, Definition, Space, NONE};

pub(crate) static XML: Space = Space {
    name: "xml",
    transform: xml_transform,
    definitions: DEFINITIONS,
};

/// `xmlSpace` → `xml:space`
fn xml_transform(property: &str) -> String {
    format!("xml:{}", property.get(3..).unwrap_or_default().to_ascii_lowercase())
}

static DEFINITIONS: &[Definition] = &[
    p("xmlBase", NONE),
    p("xmlLang", NONE),
    p("xmlSpace", NONE),
];
