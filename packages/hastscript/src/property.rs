//! Property resolution: name normalization and value coercion

use crate::value::{render_declarations, Value};
use hastscript_proto::{ListItem, Properties, PropertyValue};
use hastscript_schema::{
    parse_comma_or_space_separated, parse_comma_separated, parse_space_separated, PropertyInfo,
    Schema,
};
use tracing::trace;

const CLASS_NAME: &str = "className";
const STYLE: &str = "style";

/// Accumulates the properties of the element being built
///
/// Holds exclusive access to the element's property map for the duration
/// of the property phase; the selector's id and classes are already in it.
pub struct PropertiesBuilder<'a> {
    schema: &'a dyn Schema,
    properties: &'a mut Properties,
}

impl<'a> PropertiesBuilder<'a> {
    pub fn new(schema: &'a dyn Schema, properties: &'a mut Properties) -> Self {
        Self { schema, properties }
    }

    pub fn add(&mut self, key: &str, value: &Value) {
        add_property(self.schema, self.properties, key, value);
    }

    /// Add every entry of a property bag, in its own order.
    pub fn extend<'v, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'v str, &'v Value)>,
    {
        for (key, value) in entries {
            self.add(key, value);
        }
    }
}

/// Resolved value before primitive coercion
enum Resolved {
    Scalar(PropertyValue),
    List(Vec<ListItem>),
}

/// Resolve `key` against `schema`, coerce `value`, and store it in
/// `properties` under the canonical key.
///
/// Null and NaN values are dropped. `className` values are appended to the
/// classes already present (from the selector).
pub fn add_property(schema: &dyn Schema, properties: &mut Properties, key: &str, value: &Value) {
    let info = schema.find(key);

    if value.is_nullish() {
        trace!(key, property = %info.property, "Dropping nullish property");
        return;
    }

    if info.property == STYLE {
        let style = match value {
            Value::String(text) => text.clone(),
            Value::Object(object) => render_declarations(object),
            other => other.to_string(),
        };
        trace!(key, property = %info.property, "Resolved style");
        properties.insert(info.property, PropertyValue::String(style));
        return;
    }

    let mut resolved = match value {
        Value::String(text) => split_list(&info, text),
        Value::Array(items) => Resolved::List(list_items(items)),
        other => match to_property_value(other) {
            Some(scalar) => Resolved::Scalar(scalar),
            None => return,
        },
    };

    if info.property == CLASS_NAME {
        let mut classes: Vec<ListItem> = match properties.get(CLASS_NAME) {
            Some(PropertyValue::List(existing)) => existing.clone(),
            _ => Vec::new(),
        };
        let added = match resolved {
            Resolved::List(items) => items,
            Resolved::Scalar(scalar) => vec![ListItem::String(scalar.to_string())],
        };
        classes.extend(added.into_iter().map(|item| ListItem::String(item.to_string())));
        resolved = Resolved::List(classes);
    }

    let value = match resolved {
        Resolved::Scalar(PropertyValue::String(text)) => coerce_primitive(&info, text),
        Resolved::Scalar(scalar) => scalar,
        Resolved::List(items) => PropertyValue::List(
            items
                .into_iter()
                .map(|item| match item {
                    ListItem::String(text) => match coerce_primitive(&info, text) {
                        PropertyValue::Number(n) => ListItem::Number(n),
                        other => ListItem::String(other.to_string()),
                    },
                    number => number,
                })
                .collect(),
        ),
    };

    trace!(key, property = %info.property, "Resolved property");
    properties.insert(info.property, value);
}

/// Split a string value according to the property's list kind.
fn split_list(info: &PropertyInfo, text: &str) -> Resolved {
    let kind = info.kind;
    let tokens = if kind.is_space_separated() {
        parse_space_separated(text)
    } else if kind.is_comma_separated() {
        parse_comma_separated(text)
    } else if kind.is_comma_or_space_separated() {
        parse_comma_or_space_separated(text)
    } else {
        return Resolved::Scalar(PropertyValue::String(text.to_string()));
    };
    Resolved::List(tokens.into_iter().map(ListItem::String).collect())
}

/// Items of an array value: numbers and strings are kept, null and NaN
/// dropped, anything else stringified.
fn list_items(items: &[Value]) -> Vec<ListItem> {
    items
        .iter()
        .filter(|item| !item.is_nullish())
        .map(|item| match item {
            Value::Number(n) => ListItem::Number(*n),
            Value::String(s) => ListItem::String(s.clone()),
            other => ListItem::String(other.to_string()),
        })
        .collect()
}

/// Convert a value to a property value without consulting a schema.
///
/// Mappings become `key: value` declaration strings (which is how `style`
/// objects are stored); nodes become their text. Null and NaN give `None`.
pub(crate) fn to_property_value(value: &Value) -> Option<PropertyValue> {
    match value {
        Value::Null => None,
        Value::Number(n) if n.is_nan() => None,
        Value::Number(n) => Some(PropertyValue::Number(*n)),
        Value::Boolean(b) => Some(PropertyValue::Boolean(*b)),
        Value::String(s) => Some(PropertyValue::String(s.clone())),
        Value::Array(items) => Some(PropertyValue::List(list_items(items))),
        Value::Object(object) => Some(PropertyValue::String(render_declarations(object))),
        Value::Node(node) => Some(PropertyValue::String(node.text_content())),
    }
}

/// Coerce a string value according to the property's kind.
///
/// - number kinds: a numeric literal becomes a number
/// - boolean kinds: `""` or the property's own name (any case) becomes `true`
pub fn coerce_primitive(info: &PropertyInfo, value: String) -> PropertyValue {
    let kind = info.kind;

    if kind.is_number() || kind.is_positive_number() {
        if let Some(number) = parse_number(&value) {
            return PropertyValue::Number(number);
        }
    }

    if (kind.is_boolean() || kind.is_overloaded_boolean())
        && (value.is_empty() || value.to_lowercase() == info.property.to_lowercase())
    {
        return PropertyValue::Boolean(true);
    }

    PropertyValue::String(value)
}

/// Parse a numeric literal: decimal with optional sign, fraction and
/// exponent; `0x`/`0o`/`0b` integers; `Infinity`. Surrounding whitespace is
/// allowed, an empty or blank string is not a number.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if unsigned.starts_with(&['+', '-'][..]) {
        return None;
    }
    let sign = if negative { -1.0 } else { 1.0 };

    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    let radix = match unsigned.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        // Prefixed integers take no sign.
        if unsigned.len() != trimmed.len() {
            return None;
        }
        return u64::from_str_radix(&unsigned[2..], radix).ok().map(|n| n as f64);
    }

    let is_decimal_literal = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        && unsigned.bytes().any(|b| b.is_ascii_digit());
    if !is_decimal_literal {
        return None;
    }

    unsigned.parse::<f64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;
    use hastscript_schema::{HTML_SCHEMA, SVG_SCHEMA};

    fn resolve(schema: &dyn Schema, key: &str, value: impl Into<Value>) -> Properties {
        let mut properties = Properties::new();
        add_property(schema, &mut properties, key, &value.into());
        properties
    }

    #[test]
    fn test_canonical_keys() {
        assert!(resolve(&HTML_SCHEMA, "class", "foo").contains_key("className"));
        assert!(resolve(&HTML_SCHEMA, "CLASS", "foo").contains_key("className"));
        assert!(resolve(&HTML_SCHEMA, "class-name", "foo").contains_key("class-name"));
        assert!(resolve(&HTML_SCHEMA, "aria-valuenow", 1).contains_key("ariaValueNow"));
        assert!(resolve(&HTML_SCHEMA, "data-foo", true).contains_key("dataFoo"));
    }

    #[test]
    fn test_nullish_values_are_dropped() {
        assert!(resolve(&HTML_SCHEMA, "foo", Value::Null).is_empty());
        assert!(resolve(&HTML_SCHEMA, "foo", f64::NAN).is_empty());
        assert!(resolve(&HTML_SCHEMA, "cols", None::<i32>).is_empty());
    }

    #[test]
    fn test_overloaded_boolean() {
        let get = |value: &str| resolve(&HTML_SCHEMA, "download", value).get("download").cloned();
        assert_eq!(get(""), Some(PropertyValue::Boolean(true)));
        assert_eq!(get("downLOAD"), Some(PropertyValue::Boolean(true)));
        assert_eq!(get("example.ogg"), Some(PropertyValue::from("example.ogg")));
    }

    #[test]
    fn test_boolean() {
        let get = |value: Value| resolve(&HTML_SCHEMA, "allowFullScreen", value).get("allowFullScreen").cloned();
        assert_eq!(get("".into()), Some(PropertyValue::Boolean(true)));
        assert_eq!(get("allowfullscreen".into()), Some(PropertyValue::Boolean(true)));
        assert_eq!(get("yup".into()), Some(PropertyValue::from("yup")));
        assert_eq!(get(true.into()), Some(PropertyValue::Boolean(true)));
        assert_eq!(get(false.into()), Some(PropertyValue::Boolean(false)));
    }

    #[test]
    fn test_numbers() {
        let get = |value: Value| resolve(&HTML_SCHEMA, "cols", value).get("cols").cloned();
        assert_eq!(get("3".into()), Some(PropertyValue::Number(3.0)));
        assert_eq!(get("one".into()), Some(PropertyValue::from("one")));
        assert_eq!(get("".into()), Some(PropertyValue::from("")));
        assert_eq!(get(4.into()), Some(PropertyValue::Number(4.0)));
    }

    #[test]
    fn test_lists() {
        let properties = resolve(&HTML_SCHEMA, "class", "foo bar  baz");
        assert_eq!(properties.get("className"), Some(&PropertyValue::strings(["foo", "bar", "baz"])));

        let properties = resolve(&HTML_SCHEMA, "accept", "video/*, image/*");
        assert_eq!(properties.get("accept"), Some(&PropertyValue::strings(["video/*", "image/*"])));

        let properties = resolve(&HTML_SCHEMA, "coords", vec!["0", "0", "82", "126"]);
        assert_eq!(properties.get("coords"), Some(&PropertyValue::numbers([0.0, 0.0, 82.0, 126.0])));

        let properties = resolve(&HTML_SCHEMA, "list", vec!["bar", "baz"]);
        assert_eq!(properties.get("list"), Some(&PropertyValue::strings(["bar", "baz"])));
    }

    #[test]
    fn test_comma_or_space_separated() {
        let properties = resolve(&SVG_SCHEMA, "requiredFeatures", "a, b c");
        assert_eq!(properties.get("requiredFeatures"), Some(&PropertyValue::strings(["a", "b", "c"])));
    }

    #[test]
    fn test_class_name_concatenates() {
        let mut properties = Properties::new();
        properties.insert("className", PropertyValue::strings(["bar"]));
        add_property(&HTML_SCHEMA, &mut properties, "class", &Value::from("baz qux"));
        assert_eq!(properties.get("className"), Some(&PropertyValue::strings(["bar", "baz", "qux"])));

        add_property(&HTML_SCHEMA, &mut properties, "className", &Value::from(5));
        assert_eq!(
            properties.get("className"),
            Some(&PropertyValue::strings(["bar", "baz", "qux", "5"]))
        );
    }

    #[test]
    fn test_style_object() {
        let style = Object::new().with("color", "red").with("-webkit-border-radius", "3px");
        let properties = resolve(&HTML_SCHEMA, "style", style);
        assert_eq!(
            properties.get("style"),
            Some(&PropertyValue::from("color: red; -webkit-border-radius: 3px"))
        );

        let text = "color:/*red*/purple; -webkit-border-radius: 3px";
        assert_eq!(resolve(&HTML_SCHEMA, "style", text).get("style"), Some(&PropertyValue::from(text)));
    }

    #[test]
    fn test_style_is_always_text() {
        let get = |value: Value| resolve(&HTML_SCHEMA, "style", value).get("style").cloned();
        assert_eq!(get(5.into()), Some(PropertyValue::from("5")));
        assert_eq!(get(true.into()), Some(PropertyValue::from("true")));
        assert_eq!(get(vec!["a", "b"].into()), Some(PropertyValue::from("a,b")));
        assert_eq!(get(Value::Null), None);
    }

    #[test]
    fn test_builder_extends_in_order() {
        let mut properties = Properties::new();
        let bag = Object::new().with("id", "a").with("title", "t").with("hidden", Value::Null);
        PropertiesBuilder::new(&HTML_SCHEMA, &mut properties).extend(bag.iter());
        assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["id", "title"]);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3"), Some(3.0));
        assert_eq!(parse_number(" 0.7 "), Some(0.7));
        assert_eq!(parse_number("-1e3"), Some(-1000.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("0x10"), Some(16.0));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("  "), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1px"), None);
        assert_eq!(parse_number("-0x10"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("+-1"), None);
    }
}
