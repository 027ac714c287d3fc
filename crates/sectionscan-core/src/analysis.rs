use crate::classify::{ContourSet, OuterRule};
use crate::convert::collect_polygons;
use crate::enclose::EnclosingCircleRule;
use crate::error::AnalyzeError;
use crate::model::SectionEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub curve_segments: usize,
    pub outer_rule: OuterRule,
    pub enclosing_circle: EnclosingCircleRule,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            curve_segments: 180,
            outer_rule: OuterRule::LargestArea,
            enclosing_circle: EnclosingCircleRule::CentroidMaxRadius,
        }
    }
}

/// Full-precision metrics for one drawing. Rounding happens where the
/// results table is built, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionMetrics {
    pub net_area: f64,
    pub circumscribed_diameter: f64,
    pub chambers: usize,
}

pub struct SectionAnalyzer {
    cfg: AnalysisConfig,
}

impl SectionAnalyzer {
    pub fn new(cfg: AnalysisConfig) -> Self {
        Self { cfg }
    }

    pub fn analyze(&self, entities: &[SectionEntity]) -> Result<SectionMetrics, AnalyzeError> {
        let polygons = collect_polygons(entities, self.cfg.curve_segments);
        let contours = ContourSet::classify(polygons, self.cfg.outer_rule)
            .ok_or(AnalyzeError::NoGeometry)?;
        Ok(SectionMetrics {
            net_area: contours.net_area(),
            circumscribed_diameter: self.cfg.enclosing_circle.diameter(&contours.outer),
            chambers: contours.chamber_count(),
        })
    }
}
