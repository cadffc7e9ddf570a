//! Property information records

use std::fmt;
use std::ops::BitOr;

/// Value-kind flags of a property
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PropertyKind(u8);

impl PropertyKind {
    pub const NONE: PropertyKind = PropertyKind(0);
    pub const BOOLEAN: PropertyKind = PropertyKind(1);
    pub const OVERLOADED_BOOLEAN: PropertyKind = PropertyKind(1 << 1);
    pub const NUMBER: PropertyKind = PropertyKind(1 << 2);
    pub const POSITIVE_NUMBER: PropertyKind = PropertyKind(1 << 3);
    pub const SPACE_SEPARATED: PropertyKind = PropertyKind(1 << 4);
    pub const COMMA_SEPARATED: PropertyKind = PropertyKind(1 << 5);
    pub const COMMA_OR_SPACE_SEPARATED: PropertyKind = PropertyKind(1 << 6);

    pub const fn union(self, other: PropertyKind) -> PropertyKind {
        PropertyKind(self.0 | other.0)
    }

    pub const fn contains(self, other: PropertyKind) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_boolean(self) -> bool {
        self.contains(Self::BOOLEAN)
    }

    pub fn is_overloaded_boolean(self) -> bool {
        self.contains(Self::OVERLOADED_BOOLEAN)
    }

    pub fn is_number(self) -> bool {
        self.contains(Self::NUMBER)
    }

    pub fn is_positive_number(self) -> bool {
        self.contains(Self::POSITIVE_NUMBER)
    }

    pub fn is_space_separated(self) -> bool {
        self.contains(Self::SPACE_SEPARATED)
    }

    pub fn is_comma_separated(self) -> bool {
        self.contains(Self::COMMA_SEPARATED)
    }

    pub fn is_comma_or_space_separated(self) -> bool {
        self.contains(Self::COMMA_OR_SPACE_SEPARATED)
    }
}

impl BitOr for PropertyKind {
    type Output = PropertyKind;

    fn bitor(self, rhs: PropertyKind) -> PropertyKind {
        self.union(rhs)
    }
}

impl fmt::Debug for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(PropertyKind, &str); 7] = [
            (PropertyKind::BOOLEAN, "boolean"),
            (PropertyKind::OVERLOADED_BOOLEAN, "overloadedBoolean"),
            (PropertyKind::NUMBER, "number"),
            (PropertyKind::POSITIVE_NUMBER, "positiveNumber"),
            (PropertyKind::SPACE_SEPARATED, "spaceSeparated"),
            (PropertyKind::COMMA_SEPARATED, "commaSeparated"),
            (PropertyKind::COMMA_OR_SPACE_SEPARATED, "commaOrSpaceSeparated"),
        ];

        let mut list = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                list.entry(&format_args!("{}", name));
            }
        }
        list.finish()
    }
}

/// Resolved information about one attribute or property name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Canonical property key (`className`, `ariaValueNow`, `dataFoo`)
    pub property: String,
    /// Attribute spelling (`class`, `aria-valuenow`, `data-foo`)
    pub attribute: String,
    pub kind: PropertyKind,
    /// Whether the name is known to the schema (or is a valid `data-*` name)
    pub defined: bool,
    /// Space the definition came from (`html`, `svg`, `aria`, ...)
    pub space: Option<&'static str>,
}

impl PropertyInfo {
    /// Information for a name the schema knows nothing about: passes
    /// through unchanged, no value coercion.
    pub fn unknown(name: &str) -> Self {
        Self {
            property: name.to_string(),
            attribute: name.to_string(),
            kind: PropertyKind::NONE,
            defined: false,
            space: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_flags() {
        let kind = PropertyKind::NUMBER | PropertyKind::COMMA_SEPARATED;
        assert!(kind.is_number());
        assert!(kind.is_comma_separated());
        assert!(!kind.is_space_separated());
        assert!(PropertyKind::NONE.is_empty());
        assert_eq!(format!("{:?}", kind), r#"{number, commaSeparated}"#);
    }
}
