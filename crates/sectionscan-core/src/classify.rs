use crate::polygon::Polygon2D;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How the outer boundary is told apart from interior chambers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OuterRule {
    /// The largest ring by area is the outer boundary and every other ring
    /// counts as a chamber. Nesting is assumed, not checked, so disjoint
    /// shapes in one drawing produce a misleading net area.
    LargestArea,
    /// Like `LargestArea`, but a ring only counts as a chamber when its
    /// centroid lies inside the outer boundary. Disjoint rings are dropped.
    VerifiedContainment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourSet {
    pub outer: Polygon2D,
    pub inners: Vec<Polygon2D>,
}

impl ContourSet {
    /// Partition the rings of one drawing into outer boundary and chambers.
    /// Returns `None` for an empty set. Area ties keep discovery order.
    pub fn classify(polygons: Vec<Polygon2D>, rule: OuterRule) -> Option<ContourSet> {
        if polygons.is_empty() {
            return None;
        }
        let mut ranked: Vec<(f64, Polygon2D)> =
            polygons.into_iter().map(|p| (p.area(), p)).collect();
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        let mut rings = ranked.into_iter().map(|(_, p)| p);
        let outer = rings.next()?;
        let mut inners: Vec<Polygon2D> = rings.collect();

        if rule == OuterRule::VerifiedContainment {
            inners.retain(|p| outer.contains_point(p.centroid()));
        }

        Some(ContourSet { outer, inners })
    }

    /// Outer area minus the summed chamber areas. Scalar arithmetic only;
    /// no boolean subtraction is performed.
    pub fn net_area(&self) -> f64 {
        let holes: f64 = self.inners.iter().map(|p| p.area()).sum();
        self.outer.area() - holes
    }

    pub fn chamber_count(&self) -> usize {
        self.inners.len()
    }
}
