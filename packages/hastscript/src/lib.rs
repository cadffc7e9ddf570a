//! # hastscript
//!
//! Hyperscript-style construction of HAST trees. A selector, an optional
//! property bag and any number of children become an element:
//!
//! ```
//! use hastscript::{h, props, PropertyValue};
//!
//! let node = h!(
//!     "a.alpha",
//!     props! { "class" => "bravo charlie", "download" => "download" },
//!     vec!["delta", "echo"]
//! )?;
//!
//! let element = node.as_element().unwrap();
//! assert_eq!(
//!     element.properties.get("className"),
//!     Some(&PropertyValue::strings(["alpha", "bravo", "charlie"]))
//! );
//! assert_eq!(element.properties.get("download"), Some(&PropertyValue::Boolean(true)));
//! # Ok::<(), hastscript::HastscriptError>(())
//! ```
//!
//! [`h`] builds HTML (default tag `div`), [`s`] builds SVG (default tag
//! `g`, mixed-case tag names such as `clipPath` restored). Both are
//! instances of [`Factory`], which can be built for custom schemas too.

mod ambiguity;
mod case_table;
mod children;
pub mod config;
pub mod error;
pub mod factory;
#[macro_use]
mod macros;
pub mod property;
pub mod selector;
pub mod value;

pub use ambiguity::{classify, Argument};
pub use case_table::CaseAdjustTable;
pub use children::{add_child, add_children, node_from_object};
pub use config::{FactoryConfig, Space};
pub use error::{ConfigError, HastscriptError, HastscriptResult};
pub use factory::Factory;
pub use property::{add_property, PropertiesBuilder};
pub use selector::{parse_selector, Selector};
pub use value::{Object, Value};

pub use hastscript_proto::{Element, ListItem, Node, Properties, PropertyValue, Root, Text};
pub use hastscript_schema::{HtmlSchema, PropertyInfo, PropertyKind, Schema, SvgSchema};

use hastscript_schema::{HTML_SCHEMA, SVG_CASE_SENSITIVE_TAG_NAMES, SVG_SCHEMA};
use std::sync::OnceLock;

static HTML: OnceLock<Factory> = OnceLock::new();
static SVG: OnceLock<Factory> = OnceLock::new();

/// The shared HTML factory.
pub fn html() -> &'static Factory {
    HTML.get_or_init(|| Factory::new(&HTML_SCHEMA, "div", None))
}

/// The shared SVG factory.
pub fn svg() -> &'static Factory {
    SVG.get_or_init(|| Factory::new(&SVG_SCHEMA, "g", Some(SVG_CASE_SENSITIVE_TAG_NAMES)))
}

/// Build an HTML node. `None` as selector gives a root.
pub fn h<I>(selector: Option<&str>, args: I) -> HastscriptResult<Node>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    html().create(selector, args.into_iter().map(Into::into))
}

/// Build an SVG node. `None` as selector gives a root.
pub fn s<I>(selector: Option<&str>, args: I) -> HastscriptResult<Node>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    svg().create(selector, args.into_iter().map(Into::into))
}
