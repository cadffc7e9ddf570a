//! Lookup index over merged spaces

use crate::info::PropertyInfo;
use crate::spaces::Space;
use std::collections::HashMap;
use tracing::debug;

/// Properties of several spaces, addressable by lower-cased property or
/// attribute name. Later spaces override earlier ones.
#[derive(Debug)]
pub struct PropertyIndex {
    infos: Vec<PropertyInfo>,
    normal: HashMap<String, usize>,
}

impl PropertyIndex {
    pub(crate) fn build(name: &'static str, spaces: &[&Space]) -> Self {
        let mut infos = Vec::new();
        let mut normal = HashMap::new();

        for space in spaces {
            for definition in space.definitions {
                let attribute = space.attribute_of(definition);
                let index = infos.len();
                normal.insert(definition.property.to_ascii_lowercase(), index);
                normal.insert(attribute.to_ascii_lowercase(), index);
                infos.push(PropertyInfo {
                    property: definition.property.to_string(),
                    attribute,
                    kind: definition.kind,
                    defined: true,
                    space: Some(space.name),
                });
            }
        }

        debug!(schema = name, properties = infos.len(), names = normal.len(), "Built property index");

        Self { infos, normal }
    }

    pub fn get(&self, normal: &str) -> Option<&PropertyInfo> {
        self.normal.get(normal).map(|&index| &self.infos[index])
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}
