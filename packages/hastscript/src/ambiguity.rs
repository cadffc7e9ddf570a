//! Telling a property bag apart from a node-shaped child
//!
//! The first argument after the selector may be either. Plain mappings are
//! property bags; a mapping with a string `type` could be a node, so the
//! tag name and the mapping's keys decide.

use crate::value::{Shape, Value};

/// `type` values that make a `<button>` property bag
const BUTTON_TYPES: [&str; 4] = ["menu", "submit", "reset", "button"];

/// What the first argument after the selector is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Properties,
    Child,
}

/// Classify `value` as the first argument of an element with `tag_name`
/// (lower-cased).
pub fn classify(tag_name: &str, value: &Value) -> Argument {
    if !matches!(value, Value::Object(_) | Value::Node(_)) {
        return Argument::Child;
    }

    // `<input type="text" value="..">` is always a property bag.
    if tag_name == "input" {
        return Argument::Properties;
    }

    let shape = match value.shape() {
        Some(shape) if !shape.node_type.is_empty() => shape,
        _ => return Argument::Properties,
    };

    if shape.has_children_list {
        return Argument::Child;
    }

    if tag_name == "button" {
        return button_argument(&shape);
    }

    if shape.has_value {
        Argument::Child
    } else {
        Argument::Properties
    }
}

fn button_argument(shape: &Shape<'_>) -> Argument {
    let button_type = shape.node_type.to_lowercase();
    if BUTTON_TYPES.contains(&button_type.as_str()) {
        Argument::Properties
    } else {
        Argument::Child
    }
}
