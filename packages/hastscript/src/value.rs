//! Dynamic constructor arguments
//!
//! Arguments to a factory call can be property bags or children, and which
//! one they are is only known once the call is inspected. `Value` carries
//! them untyped until then.

use hastscript_proto::{number_to_string, ListItem, Node, PropertyValue};
use indexmap::IndexMap;
use std::fmt;

/// Untyped constructor argument
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
    Node(Node),
}

/// Insertion-ordered key/value bag (property bags, style maps)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    entries: IndexMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// String `type` discriminator, if any.
    pub fn node_type(&self) -> Option<&str> {
        match self.get("type") {
            Some(Value::String(node_type)) => Some(node_type),
            _ => None,
        }
    }

    /// Whether this looks like a node: it has a string `type` field.
    pub fn is_node_shaped(&self) -> bool {
        self.node_type().is_some()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect(),
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// What a node-shaped argument looks like, for telling property bags and
/// children apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Shape<'a> {
    pub node_type: &'a str,
    pub has_children_list: bool,
    pub has_value: bool,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Null or NaN: values that are dropped rather than stored.
    pub fn is_nullish(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Shape of a node or node-shaped object; `None` for anything else.
    pub(crate) fn shape(&self) -> Option<Shape<'_>> {
        match self {
            Value::Node(node) => Some(Shape {
                node_type: node.node_type(),
                has_children_list: !node.is_text(),
                has_value: node.is_text(),
            }),
            Value::Object(object) => object.node_type().map(|node_type| Shape {
                node_type,
                has_children_list: matches!(object.get("children"), Some(Value::Array(_))),
                has_value: object.contains_key("value"),
            }),
            _ => None,
        }
    }
}

/// Spell out a node as a plain object, field by field.
pub(crate) fn node_to_object(node: Node) -> Object {
    match node {
        Node::Root(root) => Object::new()
            .with("type", "root")
            .with("children", root.children),
        Node::Element(element) => {
            let properties: Object = element.properties.into_iter().collect();
            Object::new()
                .with("type", "element")
                .with("tagName", element.tag_name)
                .with("properties", properties)
                .with("children", element.children)
        }
        Node::Text(text) => Object::new().with("type", "text").with("value", text.value),
    }
}

/// Render an object as `key: value` declarations joined by `; `.
pub(crate) fn render_declarations(object: &Object) -> String {
    object
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join("; ")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&number_to_string(*n)),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_null() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(object) => f.write_str(&render_declarations(object)),
            Value::Node(node) => f.write_str(&node.text_content()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(value)
    }
}

impl From<hastscript_proto::Root> for Value {
    fn from(value: hastscript_proto::Root) -> Self {
        Value::Node(Node::Root(value))
    }
}

impl From<hastscript_proto::Element> for Value {
    fn from(value: hastscript_proto::Element) -> Self {
        Value::Node(Node::Element(value))
    }
}

impl From<hastscript_proto::Text> for Value {
    fn from(value: hastscript_proto::Text) -> Self {
        Value::Node(Node::Text(value))
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<ListItem> for Value {
    fn from(value: ListItem) -> Self {
        match value {
            ListItem::Number(n) => Value::Number(n),
            ListItem::String(s) => Value::String(s),
        }
    }
}

impl From<PropertyValue> for Value {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Boolean(b) => Value::Boolean(b),
            PropertyValue::Number(n) => Value::Number(n),
            PropertyValue::String(s) => Value::String(s),
            PropertyValue::List(items) => items.into(),
        }
    }
}
