use crate::discretize::circle_points;
use crate::model::{Arc2D, Circle2D, Polyline2D, SectionEntity};
use crate::polygon::Polygon2D;

/// Sweep at or beyond this many degrees makes an arc a full circle.
const FULL_SWEEP_DEG: f64 = 360.0;

/// Map one entity to a closed ring, or to nothing when it cannot bound an
/// area on its own. Malformed parameters are skipped, never an error.
pub fn entity_to_polygon(entity: &SectionEntity, curve_segments: usize) -> Option<Polygon2D> {
    match entity {
        SectionEntity::Polyline(poly) => closed_polyline_ring(poly),
        SectionEntity::Circle(circle) => circle_ring(circle, curve_segments),
        SectionEntity::Arc(arc) => full_sweep_arc_ring(arc, curve_segments),
    }
}

/// Convert every entity of one drawing, dropping rings that come out
/// degenerate or self-intersecting.
pub fn collect_polygons(entities: &[SectionEntity], curve_segments: usize) -> Vec<Polygon2D> {
    entities
        .iter()
        .filter_map(|e| entity_to_polygon(e, curve_segments))
        .filter(|p| p.is_valid() && p.area() > 0.0)
        .collect()
}

fn closed_polyline_ring(poly: &Polyline2D) -> Option<Polygon2D> {
    if !poly.closed || poly.vertices.len() < 3 {
        return None;
    }
    Some(Polygon2D::new(poly.vertices.clone()))
}

fn circle_ring(circle: &Circle2D, segments: usize) -> Option<Polygon2D> {
    let pts = circle_points(circle.center, circle.radius, segments);
    if pts.is_empty() {
        return None;
    }
    Some(Polygon2D::new(pts))
}

fn full_sweep_arc_ring(arc: &Arc2D, segments: usize) -> Option<Polygon2D> {
    if !arc.start_angle_deg.is_finite() || !arc.end_angle_deg.is_finite() {
        return None;
    }
    // An open arc cannot bound an area by itself.
    if (arc.end_angle_deg - arc.start_angle_deg).abs() < FULL_SWEEP_DEG {
        return None;
    }
    let pts = circle_points(arc.center, arc.radius, segments);
    if pts.is_empty() {
        return None;
    }
    Some(Polygon2D::new(pts))
}
