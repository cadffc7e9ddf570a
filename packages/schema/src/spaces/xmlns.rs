use super::{a, case_insensitive_transform, p, Definition, Space, NONE};

pub(crate) static XMLNS: Space = Space {
    name: "xmlns",
    transform: case_insensitive_transform,
    definitions: DEFINITIONS,
};

static DEFINITIONS: &[Definition] = &[
    p("xmlns", NONE),
    a("xmlnsXLink", "xmlns:xlink", NONE),
];
