use crate::core::attribute::AttributeMetadata;
use std::collections::HashMap;

/// Read-only attribute lookup consulted during filter compilation.
pub trait AttributeSchema {
    fn attribute(&self, name: &str) -> Option<&AttributeMetadata>;
}

/// In-memory schema keyed by attribute name.
#[derive(Debug, Clone, Default)]
pub struct FeatureSchema {
    attributes: HashMap<String, AttributeMetadata>,
}

impl FeatureSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, attribute: AttributeMetadata) -> Self {
        self.insert(attribute);
        self
    }

    pub fn insert(&mut self, attribute: AttributeMetadata) {
        self.attributes.insert(attribute.name.clone(), attribute);
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AttributeSchema for FeatureSchema {
    fn attribute(&self, name: &str) -> Option<&AttributeMetadata> {
        self.attributes.get(name)
    }
}

impl AttributeSchema for HashMap<String, AttributeMetadata> {
    fn attribute(&self, name: &str) -> Option<&AttributeMetadata> {
        self.get(name)
    }
}

impl FromIterator<AttributeMetadata> for FeatureSchema {
    fn from_iter<I: IntoIterator<Item = AttributeMetadata>>(iter: I) -> Self {
        let mut schema = FeatureSchema::new();
        for attribute in iter {
            schema.insert(attribute);
        }
        schema
    }
}
