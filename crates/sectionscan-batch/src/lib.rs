use sectionscan_core::analysis::{AnalysisConfig, SectionAnalyzer, SectionMetrics};
use sectionscan_core::error::AnalyzeError;
use sectionscan_core::report::{BatchReport, FileRecord};
use sectionscan_import_dxf::ImportError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// File written into the scanned folder when no explicit output is given.
pub const DEFAULT_OUTPUT_NAME: &str = "DXF_Analysis_Output.xlsx";

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_path: Option<PathBuf>,
    pub analysis: AnalysisConfig,
}

impl BatchConfig {
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_path: None,
            analysis: AnalysisConfig::default(),
        }
    }

    pub fn resolve_output(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.input_dir.join(DEFAULT_OUTPUT_NAME))
    }
}

/// Failures that stop the whole run, not just one file.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("scan folder {}: {source}", path.display())]
    ScanDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Export(#[from] sectionscan_export_xlsx::ExportError),
}

/// Why one file failed. Never escapes the file's row in a batch run.
#[derive(Debug, Error)]
pub enum FileError {
    #[error(transparent)]
    Decode(#[from] ImportError),
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
}

pub fn analyze_file(path: &Path, analyzer: &SectionAnalyzer) -> Result<SectionMetrics, FileError> {
    let entities = sectionscan_import_dxf::import_dxf(path)?;
    Ok(analyzer.analyze(&entities)?)
}

/// Analyze every `.dxf` file directly inside the configured folder and
/// write the results spreadsheet. Rows keep directory-listing order.
pub fn run_batch(cfg: &BatchConfig) -> Result<BatchReport, BatchError> {
    let analyzer = SectionAnalyzer::new(cfg.analysis.clone());

    let mut rows = Vec::new();
    for path in list_dxf_files(&cfg.input_dir)? {
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        match analyze_file(&path, &analyzer) {
            Ok(metrics) => rows.push(FileRecord::ok(file_name, &metrics)),
            Err(err) => {
                warn!(file = %file_name, error = %err, "file failed, continuing");
                rows.push(FileRecord::error(file_name, err.to_string()));
            }
        }
    }

    let report = BatchReport { rows };
    let output = cfg.resolve_output();
    sectionscan_export_xlsx::write_results(&output, &report)?;
    info!(
        files = report.rows.len(),
        ok = report.ok_count(),
        failed = report.error_count(),
        output = %output.display(),
        "batch complete"
    );
    Ok(report)
}

fn list_dxf_files(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let scan_err = |source| BatchError::ScanDir {
        path: dir.to_path_buf(),
        source,
    };
    // Directory order as the OS reports it; no recursion into subfolders.
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_err)? {
        let path = entry.map_err(scan_err)?.path();
        if path.is_file() && has_dxf_extension(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

fn has_dxf_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("dxf")
    )
}
