//! # hastscript schema
//!
//! Property information for the two tag vocabularies hastscript builds:
//! HTML and SVG. Given an attribute or property name, a [`Schema`] returns
//! the canonical property key and how values of that property are coerced
//! (boolean, number, space/comma separated list).
//!
//! Both schemas also know the shared `xml`, `xlink`, `xmlns` and `aria`
//! names. Indices are built once, on first use, and are read-only after.

pub mod index;
pub mod info;
mod spaces;
pub mod svg_tag_names;
pub mod tokens;

pub use index::PropertyIndex;
pub use info::{PropertyInfo, PropertyKind};
pub use svg_tag_names::SVG_CASE_SENSITIVE_TAG_NAMES;
pub use tokens::{parse_comma_or_space_separated, parse_comma_separated, parse_space_separated};

use spaces::{aria::ARIA, html::HTML, svg::SVG, xlink::XLINK, xml::XML, xmlns::XMLNS};
use std::fmt;
use std::sync::OnceLock;

/// Attribute/property lookup for one tag vocabulary
pub trait Schema: fmt::Debug + Send + Sync {
    /// Name of the vocabulary (`html`, `svg`)
    fn space(&self) -> &'static str;

    /// Known property for a lower-cased attribute or property name.
    fn lookup(&self, normal: &str) -> Option<&PropertyInfo>;

    /// Information for any name: known properties, `data-*` names, or a
    /// pass-through record for unknown names.
    fn find(&self, name: &str) -> PropertyInfo {
        find(self, name)
    }
}

/// Resolve `name` against `schema`.
///
/// Matching is case-insensitive on both the attribute spelling and the
/// property spelling (`class`, `CLASS` and `className` all give
/// `className`). Unknown `data-*` attributes become camel-cased property
/// keys (`data-foo-bar` → `dataFooBar`); everything else unknown passes
/// through unchanged.
pub fn find<S: Schema + ?Sized>(schema: &S, name: &str) -> PropertyInfo {
    let normal = name.to_ascii_lowercase();

    if let Some(info) = schema.lookup(&normal) {
        return info.clone();
    }

    if normal.len() > 4 && normal.starts_with("data") && is_valid_data_name(name) {
        let rest = &name[4..];
        let (property, attribute) = if let Some(attribute_rest) = rest.strip_prefix('-') {
            let camel = dash_to_camel(attribute_rest);
            (format!("data{}", upper_first(&camel)), name.to_string())
        } else if has_dash_lowercase(rest) {
            (name.to_string(), name.to_string())
        } else {
            let mut dashes = camel_to_dash(rest);
            if !dashes.starts_with('-') {
                dashes.insert(0, '-');
            }
            (name.to_string(), format!("data{}", dashes))
        };

        return PropertyInfo {
            property,
            attribute,
            kind: PropertyKind::NONE,
            defined: true,
            space: None,
        };
    }

    PropertyInfo::unknown(name)
}

/// `^data[-\w.:]+$`, case-insensitive
fn is_valid_data_name(name: &str) -> bool {
    match (name.get(..4), name.get(4..)) {
        (Some(prefix), Some(rest)) => {
            prefix.eq_ignore_ascii_case("data")
                && !rest.is_empty()
                && rest
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
        }
        _ => false,
    }
}

fn has_dash_lowercase(value: &str) -> bool {
    value
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'-' && pair[1].is_ascii_lowercase())
}

/// `foo-bar` → `fooBar`: a dash followed by a lowercase letter collapses.
fn dash_to_camel(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '-' && next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// `FooBar` → `-foo-bar`
fn camel_to_dash(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// HTML vocabulary
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSchema;

/// SVG vocabulary
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgSchema;

pub static HTML_SCHEMA: HtmlSchema = HtmlSchema;
pub static SVG_SCHEMA: SvgSchema = SvgSchema;

static HTML_INDEX: OnceLock<PropertyIndex> = OnceLock::new();
static SVG_INDEX: OnceLock<PropertyIndex> = OnceLock::new();

impl HtmlSchema {
    pub fn index(&self) -> &'static PropertyIndex {
        HTML_INDEX.get_or_init(|| PropertyIndex::build("html", &[&XML, &XLINK, &XMLNS, &ARIA, &HTML]))
    }
}

impl SvgSchema {
    pub fn index(&self) -> &'static PropertyIndex {
        SVG_INDEX.get_or_init(|| PropertyIndex::build("svg", &[&XML, &XLINK, &XMLNS, &ARIA, &SVG]))
    }
}

impl Schema for HtmlSchema {
    fn space(&self) -> &'static str {
        "html"
    }

    fn lookup(&self, normal: &str) -> Option<&PropertyInfo> {
        self.index().get(normal)
    }
}

impl Schema for SvgSchema {
    fn space(&self) -> &'static str {
        "svg"
    }

    fn lookup(&self, normal: &str) -> Option<&PropertyInfo> {
        self.index().get(normal)
    }
}
