use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Declared value type (binding) of a feature attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Date,
    Geometry,
}

/// How a geometry attribute is indexed by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum GeometryKind {
    #[default]
    None,
    Point,
    Shape,
}

lazy_static! {
    static ref BACKEND_TYPE_MAP: HashMap<&'static str, (DataType, GeometryKind)> =
        build_backend_type_map();
}

impl DataType {
    /// Resolves a document-store mapping type name (e.g. `keyword`, `geo_point`).
    pub fn from_backend_type(type_name: &str) -> Result<(Self, GeometryKind), String> {
        let normalized = type_name.trim().to_ascii_lowercase();
        BACKEND_TYPE_MAP
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| format!("Unknown backend field type: {type_name}"))
    }

    pub fn is_integral(&self) -> bool {
        matches!(self, DataType::Short | DataType::Int | DataType::Long)
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, DataType::Float | DataType::Double)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integral() || self.is_floating()
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Short => "short",
            DataType::Int => "integer",
            DataType::Long => "long",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Boolean => "boolean",
            DataType::Date => "date",
            DataType::Geometry => "geometry",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn build_backend_type_map() -> HashMap<&'static str, (DataType, GeometryKind)> {
    use DataType::*;

    let scalar = GeometryKind::None;
    HashMap::from([
        ("keyword", (String, scalar)),
        ("text", (String, scalar)),
        ("string", (String, scalar)),
        ("byte", (Short, scalar)),
        ("short", (Short, scalar)),
        ("integer", (Int, scalar)),
        ("long", (Long, scalar)),
        ("float", (Float, scalar)),
        ("half_float", (Float, scalar)),
        ("scaled_float", (Float, scalar)),
        ("double", (Double, scalar)),
        ("boolean", (Boolean, scalar)),
        ("date", (Date, scalar)),
        ("geo_point", (Geometry, GeometryKind::Point)),
        ("geo_shape", (Geometry, GeometryKind::Shape)),
    ])
}
