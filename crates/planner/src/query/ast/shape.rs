//! Backend shape primitives referenced by geo query nodes.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// `[x, y]`, i.e. `[lon, lat]`.
pub type Position = [f64; 2];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(Position),
    LineString(Vec<Position>),
    Polygon(Vec<Vec<Position>>),
    MultiPoint(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
    GeometryCollection(Vec<Shape>),
}

impl Shape {
    /// Closed five-point ring for an envelope.
    pub fn envelope(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Shape::Polygon(vec![vec![
            [min_x, min_y],
            [min_x, max_y],
            [max_x, max_y],
            [max_x, min_y],
            [min_x, min_y],
        ]])
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::LineString(_) => "linestring",
            Shape::Polygon(_) => "polygon",
            Shape::MultiPoint(_) => "multipoint",
            Shape::MultiLineString(_) => "multilinestring",
            Shape::MultiPolygon(_) => "multipolygon",
            Shape::GeometryCollection(_) => "geometrycollection",
        }
    }
}

fn write_positions(f: &mut fmt::Formatter<'_>, positions: &[Position]) -> fmt::Result {
    write!(f, "(")?;
    for (i, [x, y]) in positions.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{x} {y}")?;
    }
    write!(f, ")")
}

fn write_rings(f: &mut fmt::Formatter<'_>, rings: &[Vec<Position>]) -> fmt::Result {
    write!(f, "(")?;
    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_positions(f, ring)?;
    }
    write!(f, ")")
}

/// Well-known text.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Point([x, y]) => write!(f, "POINT ({x} {y})"),
            Shape::LineString(points) => {
                write!(f, "LINESTRING ")?;
                write_positions(f, points)
            }
            Shape::Polygon(rings) => {
                write!(f, "POLYGON ")?;
                write_rings(f, rings)
            }
            Shape::MultiPoint(points) => {
                write!(f, "MULTIPOINT ")?;
                write_positions(f, points)
            }
            Shape::MultiLineString(lines) => {
                write!(f, "MULTILINESTRING ")?;
                write_rings(f, lines)
            }
            Shape::MultiPolygon(polygons) => {
                write!(f, "MULTIPOLYGON (")?;
                for (i, polygon) in polygons.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_rings(f, polygon)?;
                }
                write!(f, ")")
            }
            Shape::GeometryCollection(shapes) => {
                write!(f, "GEOMETRYCOLLECTION (")?;
                for (i, shape) in shapes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{shape}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeRelation {
    Intersects,
    Disjoint,
    Within,
    Contains,
}

impl ShapeRelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeRelation::Intersects => "INTERSECTS",
            ShapeRelation::Disjoint => "DISJOINT",
            ShapeRelation::Within => "WITHIN",
            ShapeRelation::Contains => "CONTAINS",
        }
    }
}

impl fmt::Display for ShapeRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Inches,
    Feet,
    Yards,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DistanceUnit::Millimeters => "mm",
            DistanceUnit::Centimeters => "cm",
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Inches => "in",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Yards => "yd",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nmi",
        }
    }

    pub fn meters_per_unit(&self) -> f64 {
        match self {
            DistanceUnit::Millimeters => 0.001,
            DistanceUnit::Centimeters => 0.01,
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => 1000.0,
            DistanceUnit::Inches => 0.0254,
            DistanceUnit::Feet => 0.3048,
            DistanceUnit::Yards => 0.9144,
            DistanceUnit::Miles => 1609.344,
            DistanceUnit::NauticalMiles => 1852.0,
        }
    }

    pub fn to_meters(&self, distance: f64) -> f64 {
        distance * self.meters_per_unit()
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                DistanceUnit::Millimeters
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                DistanceUnit::Centimeters
            }
            "" | "m" | "meter" | "meters" | "metre" | "metres" => DistanceUnit::Meters,
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                DistanceUnit::Kilometers
            }
            "in" | "inch" | "inches" => DistanceUnit::Inches,
            "ft" | "foot" | "feet" => DistanceUnit::Feet,
            "yd" | "yard" | "yards" => DistanceUnit::Yards,
            "mi" | "mile" | "miles" => DistanceUnit::Miles,
            "nmi" | "nm" | "nauticalmiles" | "nautical_miles" => DistanceUnit::NauticalMiles,
            _ => return Err(format!("Unknown distance unit: {s}")),
        };
        Ok(unit)
    }
}
