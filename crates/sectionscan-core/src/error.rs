use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("no valid closed contours found")]
    NoGeometry,
}
