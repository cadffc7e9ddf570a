//! Trees serialize to the HAST JSON shape

mod common;

use common::init_tracing;
use hastscript::{h, props, Factory, FactoryConfig, Node, Space};
use serde_json::json;

#[test]
fn test_element_shape() {
    init_tracing();

    let node = h!("a#home.nav", props! { "href" => "/", "hidden" => true, "tabIndex" => "-1" }, "Home").unwrap();
    let value = serde_json::to_value(&node).unwrap();

    assert_eq!(
        value,
        json!({
            "type": "element",
            "tagName": "a",
            "properties": {
                "id": "home",
                "className": ["nav"],
                "href": "/",
                "hidden": true,
                "tabIndex": -1
            },
            "children": [{"type": "text", "value": "Home"}]
        })
    );
}

#[test]
fn test_numbers_keep_host_shape() {
    init_tracing();

    let node = h!("textarea", props! { "cols" => "3", "rows" => 2.5 }, 1e21).unwrap();
    let value = serde_json::to_value(&node).unwrap();

    assert_eq!(value["properties"]["cols"], json!(3));
    assert_eq!(value["properties"]["rows"], json!(2.5));
    assert_eq!(value["children"][0]["value"], json!("1e+21"));
    assert!(serde_json::to_string(&node).unwrap().contains(r#""cols":3,"#));
}

#[test]
fn test_template_shape() {
    init_tracing();

    let node = h!("template", "x").unwrap();
    let value = serde_json::to_value(&node).unwrap();

    assert_eq!(
        value,
        json!({
            "type": "element",
            "tagName": "template",
            "properties": {},
            "children": [],
            "content": {"type": "root", "children": [{"type": "text", "value": "x"}]}
        })
    );
}

#[test]
fn test_round_trip() {
    init_tracing();

    let node = h(
        None,
        [
            h!("p", props! { "cols" => "3", "class" => "a b" }, "one").unwrap(),
            h!("template", h!("b", "two").unwrap()).unwrap(),
        ],
    )
    .unwrap();

    let text = serde_json::to_string(&node).unwrap();
    let parsed: Node = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, node);
    assert_eq!(parsed.text_content(), "onetwo");
}

#[test]
fn test_factory_from_json_config() {
    init_tracing();

    let config: FactoryConfig =
        serde_json::from_str(r#"{"space": "svg", "defaultTagName": "svg", "adjustCase": true}"#).unwrap();
    assert_eq!(config.space, Space::Svg);

    let factory = Factory::from_config(&config).unwrap();
    let node = factory.create(Some(".icon"), Vec::new()).unwrap();
    let element = node.as_element().unwrap();
    assert_eq!(element.tag_name, "svg");

    let node = factory.create(Some("LINEARGRADIENT"), Vec::new()).unwrap();
    assert_eq!(node.as_element().unwrap().tag_name, "linearGradient");
}
