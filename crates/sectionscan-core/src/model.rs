use crate::geom::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline2D {
    pub vertices: Vec<Vec2>,
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle2D {
    pub center: Vec2,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc2D {
    pub center: Vec2,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

/// Drawing primitives that can contribute a closed contour. Entity kinds
/// with no chance of bounding an area (lines, text, dimensions) are dropped
/// at import and never reach this model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SectionEntity {
    Polyline(Polyline2D),
    Circle(Circle2D),
    Arc(Arc2D),
}
