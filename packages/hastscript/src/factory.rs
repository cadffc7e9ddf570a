//! Node construction
//!
//! A [`Factory`] binds a schema, a default tag name and an optional case
//! table. `h` and `s` are the HTML and SVG instances.

use crate::ambiguity::{classify, Argument};
use crate::case_table::CaseAdjustTable;
use crate::children::add_children;
use crate::config::{FactoryConfig, Space};
use crate::error::{ConfigError, HastscriptResult};
use crate::property::PropertiesBuilder;
use crate::selector::parse_selector;
use crate::value::{node_to_object, Object, Value};
use hastscript_proto::{Element, Node, PropertyValue, Root};
use hastscript_schema::{Schema, HTML_SCHEMA, SVG_CASE_SENSITIVE_TAG_NAMES, SVG_SCHEMA};
use std::fmt;
use tracing::{debug, instrument};

const TEMPLATE: &str = "template";

/// Hyperscript-style node constructor for one tag vocabulary
pub struct Factory {
    schema: &'static dyn Schema,
    default_tag_name: String,
    case_table: Option<CaseAdjustTable>,
}

impl Factory {
    /// Create a factory for `schema`.
    ///
    /// `case_sensitive_tag_names` lists tag names whose canonical spelling
    /// is not lowercase; selectors are matched against it case-insensitively.
    pub fn new(
        schema: &'static dyn Schema,
        default_tag_name: impl Into<String>,
        case_sensitive_tag_names: Option<&[&str]>,
    ) -> Self {
        Self {
            schema,
            default_tag_name: default_tag_name.into(),
            case_table: case_sensitive_tag_names.map(CaseAdjustTable::new),
        }
    }

    pub fn from_config(config: &FactoryConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let schema: &'static dyn Schema = match config.space {
            Space::Html => &HTML_SCHEMA,
            Space::Svg => &SVG_SCHEMA,
        };
        let case_sensitive_tag_names = config.adjust_case.then_some(SVG_CASE_SENSITIVE_TAG_NAMES);

        debug!(
            space = %config.space,
            default_tag_name = %config.default_tag_name,
            adjust_case = config.adjust_case,
            "Creating factory"
        );
        Ok(Self::new(schema, config.default_tag_name.clone(), case_sensitive_tag_names))
    }

    pub fn schema(&self) -> &'static dyn Schema {
        self.schema
    }

    pub fn default_tag_name(&self) -> &str {
        &self.default_tag_name
    }

    /// Build a node.
    ///
    /// Without a selector the result is a root and every argument is a
    /// child. With one, the first argument is either a property bag or the
    /// first child (see [`classify`]), and the rest are children.
    #[instrument(skip(self, args), fields(space = self.schema.space()))]
    pub fn create<I>(&self, selector: Option<&str>, args: I) -> HastscriptResult<Node>
    where
        I: IntoIterator<Item = Value>,
    {
        let Some(selector) = selector else {
            return self.root(args).map(Node::Root);
        };

        let mut element = self.skeleton(selector);
        let mut args = args.into_iter().peekable();

        if let Some(first) = args.peek() {
            if classify(&element.tag_name, first) == Argument::Properties {
                if let Some(bag) = args.next() {
                    self.add_properties(&mut element, bag);
                }
            } else {
                debug!(tag_name = %element.tag_name, "First argument is a child");
            }
        }

        add_children(&mut element.children, args)?;
        Ok(Node::Element(finish(element)))
    }

    /// Build a root from `children`.
    pub fn root<I>(&self, children: I) -> HastscriptResult<Root>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut root = Root::new();
        add_children(&mut root.children, children)?;
        Ok(root)
    }

    /// Build an element from an explicit property bag, skipping the
    /// property-or-child guess.
    pub fn element<I>(&self, selector: &str, properties: Object, children: I) -> HastscriptResult<Element>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut element = self.skeleton(selector);
        PropertiesBuilder::new(self.schema, &mut element.properties).extend(properties.iter());
        add_children(&mut element.children, children)?;
        Ok(finish(element))
    }

    /// Element with the selector's tag name, id and classes.
    fn skeleton(&self, selector: &str) -> Element {
        let parsed = parse_selector(selector, &self.default_tag_name);
        let tag_name = match &self.case_table {
            Some(table) => table.adjust(parsed.tag_name),
            None => parsed.tag_name,
        };

        debug!(
            tag_name = %tag_name,
            id = ?parsed.id,
            classes = parsed.class_names.len(),
            "Resolved selector"
        );

        let mut element = Element::new(tag_name);
        if let Some(id) = parsed.id {
            element.properties.insert("id", PropertyValue::String(id));
        }
        if !parsed.class_names.is_empty() {
            element
                .properties
                .insert("className", PropertyValue::strings(parsed.class_names));
        }
        element
    }

    fn add_properties(&self, element: &mut Element, bag: Value) {
        let object = match bag {
            Value::Object(object) => object,
            Value::Node(node) => node_to_object(node),
            _ => return,
        };
        PropertiesBuilder::new(self.schema, &mut element.properties).extend(object.iter());
    }
}

/// Move a template's children into its content root.
fn finish(mut element: Element) -> Element {
    if element.tag_name == TEMPLATE {
        let children = std::mem::take(&mut element.children);
        element.content = Some(Root { children });
    }
    element
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("space", &self.schema.space())
            .field("default_tag_name", &self.default_tag_name)
            .field("case_table", &self.case_table.as_ref().map(CaseAdjustTable::len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HastscriptError;

    fn html() -> Factory {
        Factory::new(&HTML_SCHEMA, "div", None)
    }

    #[test]
    fn test_no_selector_builds_root() {
        let node = html().create(None, vec![Value::from("a"), Value::from(vec!["b"])]).unwrap();
        assert_eq!(node, Node::root(vec![Node::text("a"), Node::text("b")]));
    }

    #[test]
    fn test_selector_properties() {
        let node = html().create(Some("#a.b.c"), Vec::new()).unwrap();
        let element = node.as_element().unwrap();
        assert_eq!(element.tag_name, "div");
        assert_eq!(element.properties.get("id"), Some(&PropertyValue::from("a")));
        assert_eq!(element.properties.get("className"), Some(&PropertyValue::strings(["b", "c"])));
    }

    #[test]
    fn test_first_argument_as_child() {
        let node = html().create(Some("p"), vec![Value::from("a"), Value::from("b")]).unwrap();
        assert_eq!(node.children(), &[Node::text("a"), Node::text("b")]);
    }

    #[test]
    fn test_explicit_properties() {
        let properties = Object::new().with("type", "text").with("value", "Send");
        let element = html().element("button", properties, Vec::new()).unwrap();
        assert_eq!(element.properties.get("type"), Some(&PropertyValue::from("text")));
        assert!(element.children.is_empty());
    }

    #[test]
    fn test_template_content() {
        let node = html().create(Some("template"), vec![Value::from("x")]).unwrap();
        let element = node.as_element().unwrap();
        assert!(element.children.is_empty());
        assert_eq!(element.content, Some(Root { children: vec![Node::text("x")] }));
    }

    #[test]
    fn test_case_table() {
        let factory = Factory::from_config(&FactoryConfig::svg()).unwrap();
        let node = factory.create(Some("FEFUNCA"), Vec::new()).unwrap();
        assert_eq!(node.as_element().unwrap().tag_name, "feFuncA");

        let node = html().create(Some("feFuncA"), Vec::new()).unwrap();
        assert_eq!(node.as_element().unwrap().tag_name, "fefunca");
    }

    #[test]
    fn test_invalid_child_aborts() {
        let result = html().create(Some("foo"), vec![Value::from(Object::new()), Value::from(true)]);
        assert_eq!(result, Err(HastscriptError::InvalidChild { value: "true".to_string() }));
    }

    #[test]
    fn test_from_config_rejects_empty_default() {
        let config = FactoryConfig {
            default_tag_name: String::new(),
            ..FactoryConfig::html()
        };
        assert!(matches!(Factory::from_config(&config), Err(ConfigError::EmptyDefaultTagName)));
    }
}
