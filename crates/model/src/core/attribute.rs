use crate::core::data_type::{DataType, GeometryKind};
use serde::{Deserialize, Serialize};

/// Schema facts about one feature attribute that drive filter translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeMetadata {
    pub name: String,
    /// Backend field path, when it differs from the attribute name.
    pub full_name: Option<String>,
    pub data_type: DataType,
    pub nested: bool,
    pub analyzed: bool,
    pub geometry_kind: GeometryKind,
    /// Declared date formats, most preferred first.
    pub date_formats: Vec<String>,
}

impl AttributeMetadata {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            full_name: None,
            data_type,
            nested: false,
            analyzed: false,
            geometry_kind: GeometryKind::None,
            date_formats: Vec::new(),
        }
    }

    /// Builds metadata from a backend mapping type name such as `geo_point`.
    pub fn from_backend_type(name: &str, type_name: &str) -> Result<Self, String> {
        let (data_type, geometry_kind) = DataType::from_backend_type(type_name)?;
        let mut meta = Self::new(name, data_type);
        meta.geometry_kind = geometry_kind;
        meta.analyzed = type_name.eq_ignore_ascii_case("text");
        Ok(meta)
    }

    pub fn nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    pub fn analyzed(mut self, analyzed: bool) -> Self {
        self.analyzed = analyzed;
        self
    }

    pub fn with_full_name(mut self, full_name: &str) -> Self {
        self.full_name = Some(full_name.to_string());
        self
    }

    pub fn with_geometry_kind(mut self, kind: GeometryKind) -> Self {
        self.geometry_kind = kind;
        self
    }

    /// Adds one or more formats; `||` separates alternatives.
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_formats.extend(
            format
                .split("||")
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string),
        );
        self
    }

    /// Field name written into compiled queries.
    pub fn encoded_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_date(&self) -> bool {
        self.data_type == DataType::Date
    }
}
