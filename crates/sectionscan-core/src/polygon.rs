use crate::geom::Vec2;
use serde::{Deserialize, Serialize};

/// A closed planar ring. The first point is not repeated at the end; the
/// ring closes implicitly from the last point back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon2D {
    pub points: Vec<Vec2>,
}

impl Polygon2D {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn area(&self) -> f64 {
        signed_area(&self.points).abs()
    }

    /// Arithmetic mean of the ring vertices. Not the area centroid.
    pub fn centroid(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::new(0.0, 0.0);
        }
        let mut cx = 0.0;
        let mut cy = 0.0;
        for p in &self.points {
            cx += p.x;
            cy += p.y;
        }
        let n = self.points.len() as f64;
        Vec2::new(cx / n, cy / n)
    }

    pub fn is_valid(&self) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        if self.points.iter().any(|p| !p.is_finite()) {
            return false;
        }
        self.area() > 0.0 && !has_self_intersection(&self.points)
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

fn signed_area(points: &[Vec2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

fn has_self_intersection(points: &[Vec2]) -> bool {
    let n = points.len();
    if n < 4 {
        return false;
    }
    for i in 0..n {
        let a1 = points[i];
        let a2 = points[(i + 1) % n];
        for j in (i + 1)..n {
            // Edges sharing an endpoint cannot properly cross.
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let b1 = points[j];
            let b2 = points[(j + 1) % n];
            if segments_cross(a1, a2, b1, b2) {
                return true;
            }
        }
    }
    false
}

fn segments_cross(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let d1 = cross(p3, p4, p1);
    let d2 = cross(p3, p4, p2);
    let d3 = cross(p1, p2, p3);
    let d4 = cross(p1, p2, p4);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

fn cross(o: Vec2, a: Vec2, b: Vec2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}
