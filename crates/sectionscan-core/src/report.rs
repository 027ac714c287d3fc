use crate::analysis::SectionMetrics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    #[serde(rename = "OK")]
    Ok,
    Error,
}

impl FileStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::Ok => "OK",
            FileStatus::Error => "Error",
        }
    }
}

/// One row of the results table. Built once per file and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub file_name: String,
    pub net_area: Option<f64>,
    pub circumscribed_diameter: Option<f64>,
    pub chambers: Option<usize>,
    pub status: FileStatus,
    pub error: Option<String>,
}

impl FileRecord {
    /// Metrics enter the table rounded to three decimals.
    pub fn ok(file_name: String, metrics: &SectionMetrics) -> Self {
        Self {
            file_name,
            net_area: Some(round3(metrics.net_area)),
            circumscribed_diameter: Some(round3(metrics.circumscribed_diameter)),
            chambers: Some(metrics.chambers),
            status: FileStatus::Ok,
            error: None,
        }
    }

    pub fn error(file_name: String, message: String) -> Self {
        Self {
            file_name,
            net_area: None,
            circumscribed_diameter: None,
            chambers: None,
            status: FileStatus::Error,
            error: Some(message),
        }
    }
}

/// All rows of one run, in directory-listing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub rows: Vec<FileRecord>,
}

impl BatchReport {
    pub fn ok_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.status == FileStatus::Ok)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.rows.len() - self.ok_count()
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
