//! HAST nodes

use crate::properties::Properties;
use serde::{Deserialize, Serialize};

/// HAST node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Document fragment
    Root(Root),

    /// HTML or SVG element
    Element(Element),

    /// Text node
    Text(Text),
}

/// Root of a (sub)tree; never appears as a direct child of another node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,

    #[serde(default)]
    pub properties: Properties,

    #[serde(default)]
    pub children: Vec<Node>,

    /// Template contents (only set on `template` elements)
    #[serde(default, skip_serializing_if = "Option::is_none", with = "tagged_root")]
    pub content: Option<Root>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root { children })
    }

    pub fn element(tag_name: impl Into<String>) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Discriminator as it appears in the serialized `type` field.
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Element(_) => "element",
            Node::Text(_) => "text",
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Node::Root(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_root(&self) -> Option<&Root> {
        match self {
            Node::Root(root) => Some(root),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(root) => &root.children,
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants, including
    /// template contents.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&text.value),
        Node::Root(root) => {
            for child in &root.children {
                collect_text(child, out);
            }
        }
        Node::Element(element) => {
            for child in &element.children {
                collect_text(child, out);
            }
            if let Some(content) = &element.content {
                for child in &content.children {
                    collect_text(child, out);
                }
            }
        }
    }
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children: Vec::new(),
            content: None,
        }
    }
}

impl From<Root> for Node {
    fn from(root: Root) -> Self {
        Node::Root(root)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// `content` is a bare `Root`, but serializes with its `"type": "root"` tag.
mod tagged_root {
    use super::{Node, Root};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    #[serde(tag = "type", rename = "root")]
    struct TaggedRef<'a> {
        children: &'a [Node],
    }

    #[derive(Deserialize)]
    struct Tagged {
        #[serde(default)]
        children: Vec<Node>,
    }

    pub fn serialize<S: Serializer>(content: &Option<Root>, serializer: S) -> Result<S::Ok, S::Error> {
        match content {
            Some(root) => serializer.serialize_some(&TaggedRef {
                children: &root.children,
            }),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Root>, D::Error> {
        let tagged = Option::<Tagged>::deserialize(deserializer)?;
        Ok(tagged.map(|t| Root {
            children: t.children,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropertyValue;

    #[test]
    fn test_element_json_shape() {
        let mut element = Element::new("a");
        element
            .properties
            .insert("className", PropertyValue::strings(["alpha"]));
        element.children.push(Node::text("delta"));

        let json = serde_json::to_value(Node::Element(element)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "element",
                "tagName": "a",
                "properties": {"className": ["alpha"]},
                "children": [{"type": "text", "value": "delta"}]
            })
        );
    }

    #[test]
    fn test_template_content_is_tagged() {
        let mut element = Element::new("template");
        element.content = Some(Root {
            children: vec![Node::text("Alpha")],
        });

        let json = serde_json::to_value(Node::Element(element.clone())).unwrap();
        assert_eq!(
            json["content"],
            serde_json::json!({"type": "root", "children": [{"type": "text", "value": "Alpha"}]})
        );

        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, Node::Element(element));
    }

    #[test]
    fn test_deserialize_root() {
        let node: Node = serde_json::from_str(
            r#"{"type":"root","children":[{"type":"element","tagName":"p","properties":{},"children":[]}]}"#,
        )
        .unwrap();

        assert!(node.is_root());
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].as_element().map(|e| e.tag_name.as_str()), Some("p"));
    }

    #[test]
    fn test_text_content() {
        let mut element = Element::new("p");
        element.children.push(Node::text("a"));
        element.children.push(Node::Element(Element {
            children: vec![Node::text("b")],
            ..Element::new("b")
        }));
        assert_eq!(Node::Element(element).text_content(), "ab");
    }
}
