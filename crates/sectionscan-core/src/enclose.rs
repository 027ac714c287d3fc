use crate::polygon::Polygon2D;
use serde::{Deserialize, Serialize};

/// Algorithm used to approximate the smallest circle around the outer ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnclosingCircleRule {
    /// Center at the vertex mean, radius to the farthest vertex. Tracks
    /// dense circular samplings closely; overestimates eccentric outlines.
    CentroidMaxRadius,
}

impl EnclosingCircleRule {
    pub fn diameter(self, ring: &Polygon2D) -> f64 {
        match self {
            EnclosingCircleRule::CentroidMaxRadius => centroid_max_radius_diameter(ring),
        }
    }
}

pub fn centroid_max_radius_diameter(ring: &Polygon2D) -> f64 {
    let center = ring.centroid();
    let max_r = ring
        .points
        .iter()
        .map(|p| center.dist(*p))
        .fold(0.0, f64::max);
    2.0 * max_r
}
