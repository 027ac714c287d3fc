use crate::geom::Vec2;
use std::f64::consts::TAU;

/// Sample `segments` points along a circular sweep at equal angular steps.
/// The start angle is included and the end angle is not, so a full-turn
/// sweep yields a ring without a duplicated seam point. `end` is normalized
/// to lie at or above `start` by adding one full turn when needed.
pub fn sweep_points(
    center: Vec2,
    radius: f64,
    start: f64,
    end: f64,
    segments: usize,
) -> Vec<Vec2> {
    if !radius.is_finite() || radius <= 0.0 || segments < 3 {
        return Vec::new();
    }
    if !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }
    let mut end = end;
    if end < start {
        end += TAU;
    }
    let step = (end - start) / segments as f64;
    let mut pts = Vec::with_capacity(segments);
    for i in 0..segments {
        let a = start + step * i as f64;
        pts.push(Vec2::new(
            center.x + radius * a.cos(),
            center.y + radius * a.sin(),
        ));
    }
    pts
}

pub fn circle_points(center: Vec2, radius: f64, segments: usize) -> Vec<Vec2> {
    sweep_points(center, radius, 0.0, TAU, segments)
}
