//! Property definitions, grouped by the space (vocabulary) they belong to

pub(crate) mod aria;
pub(crate) mod html;
pub(crate) mod svg;
pub(crate) mod xlink;
pub(crate) mod xml;
pub(crate) mod xmlns;

use crate::info::PropertyKind;

pub(crate) const NONE: PropertyKind = PropertyKind::NONE;
pub(crate) const B: PropertyKind = PropertyKind::BOOLEAN;
pub(crate) const OB: PropertyKind = PropertyKind::OVERLOADED_BOOLEAN;
pub(crate) const N: PropertyKind = PropertyKind::NUMBER;
pub(crate) const PN: PropertyKind = PropertyKind::POSITIVE_NUMBER;
pub(crate) const SS: PropertyKind = PropertyKind::SPACE_SEPARATED;
pub(crate) const CS: PropertyKind = PropertyKind::COMMA_SEPARATED;
pub(crate) const CSS: PropertyKind = PropertyKind::COMMA_OR_SPACE_SEPARATED;

/// One known property
#[derive(Debug, Clone, Copy)]
pub(crate) struct Definition {
    pub property: &'static str,
    /// Attribute spelling when the space's transform does not produce it
    pub attribute: Option<&'static str>,
    pub kind: PropertyKind,
}

/// Property whose attribute follows the space's transform.
pub(crate) const fn p(property: &'static str, kind: PropertyKind) -> Definition {
    Definition {
        property,
        attribute: None,
        kind,
    }
}

/// Property with an explicit attribute spelling.
pub(crate) const fn a(property: &'static str, attribute: &'static str, kind: PropertyKind) -> Definition {
    Definition {
        property,
        attribute: Some(attribute),
        kind,
    }
}

/// A vocabulary of properties sharing one attribute-naming transform
pub(crate) struct Space {
    pub name: &'static str,
    pub transform: fn(&str) -> String,
    pub definitions: &'static [Definition],
}

impl Space {
    pub fn attribute_of(&self, definition: &Definition) -> String {
        match definition.attribute {
            Some(attribute) => attribute.to_string(),
            None => (self.transform)(definition.property),
        }
    }
}

/// Attribute is the property lower-cased (`tabIndex` → `tabindex`).
pub(crate) fn case_insensitive_transform(property: &str) -> String {
    property.to_ascii_lowercase()
}

/// Attribute is spelled exactly like the property (`viewBox`).
pub(crate) fn case_sensitive_transform(property: &str) -> String {
    property.to_string()
}
