//! Child flattening
//!
//! Turns the variadic tail of a constructor call into a flat list of nodes:
//! nested arrays are spliced in order, roots are unwrapped, primitives become
//! text. Nesting depth is bounded only by the stack.

use crate::error::{HastscriptError, HastscriptResult};
use crate::property::to_property_value;
use crate::value::{Object, Value};
use hastscript_proto::{Element, Node, Properties, Text};

/// Append `value` to `nodes`, flattening as it goes.
pub fn add_child(nodes: &mut Vec<Node>, value: Value) -> HastscriptResult<()> {
    match value {
        Value::Null => Ok(()),
        Value::String(text) => {
            nodes.push(Node::text(text));
            Ok(())
        }
        number @ Value::Number(_) => {
            nodes.push(Node::text(number.to_string()));
            Ok(())
        }
        Value::Array(items) => add_children(nodes, items),
        Value::Node(Node::Root(root)) => {
            nodes.extend(root.children);
            Ok(())
        }
        Value::Node(node) => {
            nodes.push(node);
            Ok(())
        }
        Value::Object(object) if object.is_node_shaped() => {
            match node_from_object(object)? {
                Node::Root(root) => nodes.extend(root.children),
                node => nodes.push(node),
            }
            Ok(())
        }
        other => Err(HastscriptError::InvalidChild {
            value: other.to_string(),
        }),
    }
}

/// Append every value in order.
pub fn add_children<I>(nodes: &mut Vec<Node>, values: I) -> HastscriptResult<()>
where
    I: IntoIterator<Item = Value>,
{
    for value in values {
        add_child(nodes, value)?;
    }
    Ok(())
}

/// Build a node from a plain object with a string `type`.
///
/// `text` needs a `value`, `element` needs a `tagName`; `children` lists are
/// flattened. Properties are taken as given, without schema coercion.
pub fn node_from_object(object: Object) -> HastscriptResult<Node> {
    let node_type = object.node_type().unwrap_or_default().to_string();
    let invalid = |reason: &str| HastscriptError::InvalidNode {
        node_type: node_type.clone(),
        reason: reason.to_string(),
    };

    match node_type.as_str() {
        "text" => match object.get("value") {
            Some(Value::Null) | None => Err(invalid("missing `value`")),
            Some(value) => Ok(Node::Text(Text {
                value: value.to_string(),
            })),
        },
        "element" => {
            let tag_name = match object.get("tagName") {
                Some(Value::String(tag_name)) => tag_name.clone(),
                _ => return Err(invalid("missing string `tagName`")),
            };
            let mut element = Element::new(tag_name);
            for (key, value) in object {
                match (key.as_str(), value) {
                    ("properties", Value::Object(properties)) => {
                        element.properties = properties_from_object(&properties);
                    }
                    ("properties", Value::Null) => {}
                    ("properties", _) => return Err(invalid("`properties` is not a mapping")),
                    ("children", children) => add_child(&mut element.children, children)?,
                    _ => {}
                }
            }
            Ok(Node::Element(element))
        }
        "root" => {
            let mut children = Vec::new();
            if let Some(value) = object.get("children") {
                add_child(&mut children, value.clone())?;
            }
            Ok(Node::root(children))
        }
        _ => Err(invalid("unsupported node type")),
    }
}

fn properties_from_object(object: &Object) -> Properties {
    object
        .iter()
        .filter_map(|(key, value)| to_property_value(value).map(|value| (key, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hastscript_proto::PropertyValue;

    fn flatten(value: impl Into<Value>) -> HastscriptResult<Vec<Node>> {
        let mut nodes = Vec::new();
        add_child(&mut nodes, value.into())?;
        Ok(nodes)
    }

    #[test]
    fn test_primitives_become_text() {
        assert_eq!(flatten("foo").unwrap(), vec![Node::text("foo")]);
        assert_eq!(flatten(1).unwrap(), vec![Node::text("1")]);
        assert_eq!(flatten(1.5).unwrap(), vec![Node::text("1.5")]);
        assert_eq!(flatten(1e21).unwrap(), vec![Node::text("1e+21")]);
        assert_eq!(flatten(1e-7).unwrap(), vec![Node::text("1e-7")]);
        assert!(flatten(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_nested_arrays_are_spliced() {
        let nested = Value::from(vec![
            Value::from("a"),
            Value::from(vec![Value::from("b"), Value::from(vec!["c"])]),
            Value::from("d"),
        ]);
        let flat = Value::from(vec!["a", "b", "c", "d"]);
        assert_eq!(flatten(nested).unwrap(), flatten(flat).unwrap());
    }

    #[test]
    fn test_root_is_spliced() {
        let root = Node::root(vec![Node::text("x"), Node::element("y")]);
        assert_eq!(flatten(root).unwrap(), vec![Node::text("x"), Node::element("y")]);
    }

    #[test]
    fn test_invalid_children() {
        assert_eq!(
            flatten(true).unwrap_err(),
            HastscriptError::InvalidChild { value: "true".to_string() }
        );
        assert!(matches!(
            flatten(Object::new().with("foo", "bar")),
            Err(HastscriptError::InvalidChild { .. })
        ));
    }

    #[test]
    fn test_error_aborts_remaining_children() {
        let mut nodes = Vec::new();
        let result = add_children(&mut nodes, vec![Value::from("a"), Value::from(false), Value::from("b")]);
        assert!(result.is_err());
        assert_eq!(nodes, vec![Node::text("a")]);
    }

    #[test]
    fn test_node_shaped_objects() {
        let text = Object::new().with("type", "text").with("value", "foo");
        assert_eq!(flatten(text).unwrap(), vec![Node::text("foo")]);

        let element = Object::new()
            .with("type", "element")
            .with("tagName", "span")
            .with("properties", Object::new().with("className", vec!["a"]).with("hidden", true))
            .with("children", vec!["x"]);
        let nodes = flatten(element).unwrap();
        let span = nodes[0].as_element().unwrap();
        assert_eq!(span.tag_name, "span");
        assert_eq!(span.properties.get("className"), Some(&PropertyValue::strings(["a"])));
        assert_eq!(span.properties.get("hidden"), Some(&PropertyValue::Boolean(true)));
        assert_eq!(span.children, vec![Node::text("x")]);

        let root = Object::new().with("type", "root").with("children", vec!["a", "b"]);
        assert_eq!(flatten(root).unwrap(), vec![Node::text("a"), Node::text("b")]);
    }

    #[test]
    fn test_unconvertible_node_shapes() {
        let comment = Object::new().with("type", "comment").with("value", "x");
        assert!(matches!(
            flatten(comment),
            Err(HastscriptError::InvalidNode { node_type, .. }) if node_type == "comment"
        ));

        let element = Object::new().with("type", "element");
        assert!(matches!(flatten(element), Err(HastscriptError::InvalidNode { .. })));
    }
}
