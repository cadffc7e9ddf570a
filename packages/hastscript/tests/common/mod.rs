//! Shared helpers for integration tests

#![allow(dead_code)]

use hastscript::{Element, Node, Properties, PropertyValue};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test subscriber once; `RUST_LOG=hastscript=trace` shows the
/// construction events.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with_test_writer()
            .try_init();
    });
}

/// Expected element node.
pub fn element(tag_name: &str, properties: Vec<(&str, PropertyValue)>, children: Vec<Node>) -> Node {
    let mut element = Element::new(tag_name);
    element.properties = properties.into_iter().collect::<Properties>();
    element.children = children;
    Node::Element(element)
}

/// Expected element without properties or children.
pub fn bare(tag_name: &str) -> Node {
    Node::element(tag_name)
}

pub fn text(value: &str) -> Node {
    Node::text(value)
}
