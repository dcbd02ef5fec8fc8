//! Geometry literal encoding: world clipping, empty detection and
//! conversion into backend shape primitives.

use crate::error::CompileError;
use geo::{BooleanOps, BoundingRect, Centroid, CoordsIter};
use geo_types::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, Rect, coord,
};
use planner::query::ast::shape::{GeoPoint, Position, Shape};
use std::iter;
use tracing::debug;

/// Valid longitude/latitude extent.
pub fn world() -> Rect<f64> {
    Rect::new(coord! { x: -180.0, y: -90.0 }, coord! { x: 180.0, y: 90.0 })
}

/// A non-empty geometry clipped to the world, with its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedGeometry {
    pub geometry: Geometry<f64>,
    pub shape: Shape,
}

impl EncodedGeometry {
    /// Centroid, or the point itself for point geometries.
    pub fn representative_point(&self) -> Option<GeoPoint> {
        self.geometry
            .centroid()
            .map(|p: Point<f64>| GeoPoint::new(p.y(), p.x()))
    }

    /// Exterior ring as lat/lon points, for single-polygon geometries.
    pub fn polygon_points(&self) -> Option<Vec<GeoPoint>> {
        let polygon = match &self.geometry {
            Geometry::Polygon(p) => p.clone(),
            Geometry::Rect(r) => r.to_polygon(),
            Geometry::Triangle(t) => t.to_polygon(),
            Geometry::MultiPolygon(mp) if mp.0.len() == 1 => mp.0[0].clone(),
            _ => return None,
        };
        Some(
            polygon
                .exterior()
                .coords()
                .map(|c| GeoPoint::new(c.y, c.x))
                .collect(),
        )
    }
}

/// Encodes a geometry literal. `Ok(None)` means the geometry is empty,
/// either as given or after clipping to the world.
pub fn encode(geometry: &Geometry<f64>) -> Result<Option<EncodedGeometry>, CompileError> {
    check_finite(geometry)?;

    Ok(clip_to_world(geometry).map(|clipped| EncodedGeometry {
        shape: to_shape(&clipped),
        geometry: clipped,
    }))
}

/// Clips a bounding-box envelope to the world. `Ok(None)` when nothing is left.
pub fn clip_envelope(envelope: &Rect<f64>) -> Result<Option<Rect<f64>>, CompileError> {
    let (min, max) = (envelope.min(), envelope.max());
    if ![min.x, min.y, max.x, max.y].iter().all(|v| v.is_finite()) {
        return Err(CompileError::precondition(format!(
            "bounding box has non-finite bounds: {:?}",
            envelope
        )));
    }

    let world = world();
    let (min_x, min_y) = (min.x.max(world.min().x), min.y.max(world.min().y));
    let (max_x, max_y) = (max.x.min(world.max().x), max.y.min(world.max().y));
    if min_x > max_x || min_y > max_y {
        debug!("Bounding box {envelope:?} lies outside the world");
        return Ok(None);
    }

    Ok(Some(Rect::new(
        coord! { x: min_x, y: min_y },
        coord! { x: max_x, y: max_y },
    )))
}

pub fn is_empty(geometry: &Geometry<f64>) -> bool {
    match geometry {
        Geometry::Point(_) | Geometry::Line(_) | Geometry::Rect(_) | Geometry::Triangle(_) => false,
        Geometry::LineString(ls) => ls.0.is_empty(),
        Geometry::Polygon(p) => p.exterior().0.is_empty(),
        Geometry::MultiPoint(mp) => mp.0.is_empty(),
        Geometry::MultiLineString(mls) => mls.0.iter().all(|ls| ls.0.is_empty()),
        Geometry::MultiPolygon(mp) => mp.0.iter().all(|p| p.exterior().0.is_empty()),
        Geometry::GeometryCollection(gc) => gc.0.iter().all(is_empty),
    }
}

fn check_finite(geometry: &Geometry<f64>) -> Result<(), CompileError> {
    if geometry
        .coords_iter()
        .all(|c| c.x.is_finite() && c.y.is_finite())
    {
        Ok(())
    } else {
        Err(CompileError::precondition(
            "geometry has non-finite coordinates",
        ))
    }
}

fn in_world(c: Coord<f64>) -> bool {
    let world = world();
    c.x >= world.min().x && c.x <= world.max().x && c.y >= world.min().y && c.y <= world.max().y
}

/// Removes empty members from multi-geometries and collections. `None`
/// when nothing is left.
fn drop_empty_parts(geometry: &Geometry<f64>) -> Option<Geometry<f64>> {
    if is_empty(geometry) {
        return None;
    }

    let stripped = match geometry {
        Geometry::MultiLineString(mls) => Geometry::MultiLineString(MultiLineString(
            mls.0.iter().filter(|ls| !ls.0.is_empty()).cloned().collect(),
        )),
        Geometry::MultiPolygon(mp) => Geometry::MultiPolygon(MultiPolygon(
            mp.0.iter()
                .filter(|p| !p.exterior().0.is_empty())
                .cloned()
                .collect(),
        )),
        Geometry::GeometryCollection(gc) => Geometry::GeometryCollection(GeometryCollection(
            gc.0.iter().filter_map(drop_empty_parts).collect(),
        )),
        other => other.clone(),
    };
    Some(stripped)
}

fn clip_to_world(geometry: &Geometry<f64>) -> Option<Geometry<f64>> {
    let stripped = drop_empty_parts(geometry)?;
    let geometry = &stripped;

    let rect = geometry.bounding_rect()?;
    if in_world(rect.min()) && in_world(rect.max()) {
        return Some(geometry.clone());
    }

    debug!("Clipping geometry with bounds {rect:?} to the world");
    let world = MultiPolygon(vec![world().to_polygon()]);
    match geometry {
        Geometry::Point(p) => in_world(p.0).then_some(Geometry::Point(*p)),
        Geometry::MultiPoint(mp) => {
            let points: Vec<Point<f64>> = mp.0.iter().copied().filter(|p| in_world(p.0)).collect();
            match points.len() {
                0 => None,
                1 => Some(Geometry::Point(points[0])),
                _ => Some(Geometry::MultiPoint(MultiPoint(points))),
            }
        }
        Geometry::Line(line) => clip_lines(
            &world,
            MultiLineString(vec![LineString::from(vec![line.start, line.end])]),
        ),
        Geometry::LineString(ls) => clip_lines(&world, MultiLineString(vec![ls.clone()])),
        Geometry::MultiLineString(mls) => clip_lines(&world, mls.clone()),
        Geometry::Polygon(p) => clip_polygons(&world, MultiPolygon(vec![p.clone()])),
        Geometry::MultiPolygon(mp) => clip_polygons(&world, mp.clone()),
        Geometry::Rect(r) => clip_polygons(&world, MultiPolygon(vec![r.to_polygon()])),
        Geometry::Triangle(t) => clip_polygons(&world, MultiPolygon(vec![t.to_polygon()])),
        Geometry::GeometryCollection(gc) => {
            let parts: Vec<Geometry<f64>> = gc.0.iter().filter_map(clip_to_world).collect();
            if parts.is_empty() {
                None
            } else {
                Some(Geometry::GeometryCollection(GeometryCollection(parts)))
            }
        }
    }
}

fn clip_lines(world: &MultiPolygon<f64>, lines: MultiLineString<f64>) -> Option<Geometry<f64>> {
    let mut clipped = world.clip(&lines, false);
    clipped.0.retain(|ls| ls.0.len() > 1);
    match clipped.0.len() {
        0 => None,
        1 => clipped.0.pop().map(Geometry::LineString),
        _ => Some(Geometry::MultiLineString(clipped)),
    }
}

fn clip_polygons(world: &MultiPolygon<f64>, polygons: MultiPolygon<f64>) -> Option<Geometry<f64>> {
    let mut clipped = polygons.intersection(world);
    match clipped.0.len() {
        0 => None,
        1 => clipped.0.pop().map(Geometry::Polygon),
        _ => Some(Geometry::MultiPolygon(clipped)),
    }
}

fn position(c: &Coord<f64>) -> Position {
    [c.x, c.y]
}

fn ring(ls: &LineString<f64>) -> Vec<Position> {
    ls.0.iter().map(position).collect()
}

fn rings(polygon: &Polygon<f64>) -> Vec<Vec<Position>> {
    iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(ring)
        .collect()
}

fn to_shape(geometry: &Geometry<f64>) -> Shape {
    match geometry {
        Geometry::Point(p) => Shape::Point(position(&p.0)),
        Geometry::Line(line) => Shape::LineString(vec![position(&line.start), position(&line.end)]),
        Geometry::LineString(ls) => Shape::LineString(ring(ls)),
        Geometry::Polygon(p) => Shape::Polygon(rings(p)),
        Geometry::MultiPoint(mp) => Shape::MultiPoint(mp.0.iter().map(|p| position(&p.0)).collect()),
        Geometry::MultiLineString(mls) => Shape::MultiLineString(mls.0.iter().map(ring).collect()),
        Geometry::MultiPolygon(mp) => Shape::MultiPolygon(mp.0.iter().map(rings).collect()),
        Geometry::Rect(r) => Shape::envelope(r.min().x, r.min().y, r.max().x, r.max().y),
        Geometry::Triangle(t) => Shape::Polygon(rings(&t.to_polygon())),
        Geometry::GeometryCollection(gc) => {
            Shape::GeometryCollection(gc.0.iter().map(to_shape).collect())
        }
    }
}
