//! Annotation preview tool.
//!
//! Loads an annotation file (JSON or YAML) and a dataset (JSON), renders every
//! annotation onto a recording surface and prints the resulting draw calls:
//! - Draw calls and failures as JSON on stdout
//! - Outline textures as PNG files when `--texture-dir` is given
//! - Non-zero exit status when any annotation fails

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use map_annotations::{AnnotationFile, RecordingSurface};
use viz_common::{Dataset, FieldNames, VisualizationContext};

use report::Report;

#[derive(Parser, Debug)]
#[command(name = "annotation-check")]
#[command(about = "Render annotations against a glacier dataset and report the draw calls")]
struct Args {
    /// Annotation file (.json, .yaml or .yml)
    #[arg(long, env = "ANNOTATION_FILE")]
    annotations: PathBuf,

    /// Dataset JSON with `srs` and `fields`
    #[arg(long, env = "DATASET_FILE")]
    dataset: PathBuf,

    /// Name of the x coordinate field
    #[arg(long, default_value = "x")]
    x_field: String,

    /// Name of the y coordinate field
    #[arg(long, default_value = "y")]
    y_field: String,

    /// Name of the bedrock elevation field
    #[arg(long, default_value = "topo_bedrock")]
    bedrock_field: String,

    /// Directory to write outline textures to
    #[arg(long, env = "TEXTURE_DIR")]
    texture_dir: Option<PathBuf>,

    /// Stop at the first failing annotation
    #[arg(long)]
    strict: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout carries the report, logs go to stderr
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.json_logs {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    let report = run(&args)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.failures.is_empty() {
        anyhow::bail!("{} annotation(s) failed to render", report.failures.len());
    }
    Ok(())
}

fn run(args: &Args) -> Result<Report> {
    let file = AnnotationFile::from_file(&args.annotations)
        .with_context(|| format!("Failed to load annotations from {:?}", args.annotations))?;

    let raw = std::fs::read_to_string(&args.dataset)
        .with_context(|| format!("Failed to read dataset from {:?}", args.dataset))?;
    let dataset = Dataset::from_json(&raw)
        .with_context(|| format!("Failed to parse dataset from {:?}", args.dataset))?;

    let names = FieldNames {
        x: args.x_field.clone(),
        y: args.y_field.clone(),
        topo_bedrock: args.bedrock_field.clone(),
    };
    let ctx = VisualizationContext::with_names(dataset, names)
        .context("Failed to build visualization context")?;

    let mut set = file.build().context("Invalid annotation configuration")?;
    info!(
        annotations = set.len(),
        srs = ctx.srs(),
        "Rendering annotations"
    );

    let mut surface = RecordingSurface::new();
    let failures = if args.strict {
        set.render_all(&ctx, &mut surface)
            .context("Annotation failed to render")?;
        Vec::new()
    } else {
        set.render_each(&ctx, &mut surface)
    };

    let mut report = Report::new(&set, surface.into_calls(), failures);

    if let Some(dir) = &args.texture_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create texture directory {:?}", dir))?;
        report.write_textures(dir)?;
    }

    Ok(report)
}
