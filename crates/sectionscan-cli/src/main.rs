use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sectionscan_batch::{analyze_file, run_batch, BatchConfig};
use sectionscan_core::analysis::{AnalysisConfig, SectionAnalyzer};
use sectionscan_core::classify::OuterRule;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sectionscan")]
#[command(about = "Cross-section metrics (net area, chambers, bounding circle) for DXF profiles.")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze every .dxf file in a folder and write a spreadsheet summary.
    Batch {
        input_dir: PathBuf,
        /// Spreadsheet path; defaults to DXF_Analysis_Output.xlsx in the folder.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also write the results table as JSON.
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long, default_value_t = 180)]
        curve_segments: usize,
        /// Count a ring as a chamber only when it lies inside the outer boundary.
        #[arg(long)]
        verify_containment: bool,
    },
    /// Analyze a single drawing and print full-precision metrics as JSON.
    Analyze {
        input: PathBuf,
        #[arg(long, default_value_t = 180)]
        curve_segments: usize,
        #[arg(long)]
        verify_containment: bool,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Batch {
            input_dir,
            output,
            report,
            curve_segments,
            verify_containment,
        } => batch(
            &input_dir,
            output,
            report.as_deref(),
            analysis_config(curve_segments, verify_containment),
        ),
        Command::Analyze {
            input,
            curve_segments,
            verify_containment,
        } => analyze(&input, analysis_config(curve_segments, verify_containment)),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn analysis_config(curve_segments: usize, verify_containment: bool) -> AnalysisConfig {
    AnalysisConfig {
        curve_segments,
        outer_rule: if verify_containment {
            OuterRule::VerifiedContainment
        } else {
            OuterRule::LargestArea
        },
        ..AnalysisConfig::default()
    }
}

fn batch(
    input_dir: &Path,
    output: Option<PathBuf>,
    report: Option<&Path>,
    analysis: AnalysisConfig,
) -> Result<()> {
    ensure_input_dir(input_dir)?;

    let cfg = BatchConfig {
        input_dir: input_dir.to_path_buf(),
        output_path: output,
        analysis,
    };
    let table = run_batch(&cfg)?;

    if let Some(path) = report {
        let json = serde_json::to_string_pretty(&table).context("serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        std::fs::write(path, &json).with_context(|| format!("write report: {path:?}"))?;
    }

    println!(
        "{} file(s): {} OK, {} failed -> {}",
        table.rows.len(),
        table.ok_count(),
        table.error_count(),
        cfg.resolve_output().display()
    );
    Ok(())
}

fn analyze(input: &Path, analysis: AnalysisConfig) -> Result<()> {
    let analyzer = SectionAnalyzer::new(analysis);
    let metrics =
        analyze_file(input, &analyzer).with_context(|| format!("analyze: {input:?}"))?;
    let json = serde_json::to_string_pretty(&metrics).context("serialize metrics")?;
    println!("{json}");
    Ok(())
}

fn ensure_input_dir(input: &Path) -> Result<()> {
    match std::fs::metadata(input) {
        Ok(meta) => {
            if meta.is_dir() {
                Ok(())
            } else {
                bail!("input is not a folder: {input:?}");
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            bail!("input folder not found: {input:?} (cwd: {cwd:?})");
        }
        Err(err) => Err(err).with_context(|| format!("stat input: {input:?}")),
    }
}
