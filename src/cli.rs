use crate::config::{Config, load_config};
use crate::layout::compute_layout;
use crate::layout_dump::{render_layout_dump, write_layout_dump};
use crate::parser::parse_sequence;
use crate::render::{render_svg, write_output_svg};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "seqflow",
    version,
    about = "A tool for creating SVG sequence diagrams from text input files."
)]
pub struct Args {
    /// Flow text file, or '-' for stdin
    #[arg(short = 'i', long = "in", value_name = "TEXT_FLOW_FILE")]
    pub input: PathBuf,

    /// Output file. SVG goes to stdout if omitted.
    #[arg(short = 'o', long = "out", value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, layout, render)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Raster scale for PNG output
    #[arg(short = 's', long = "scale")]
    pub scale: Option<f32>,

    /// Write the computed layout as JSON
    #[arg(long = "dumpLayout", value_name = "JSON_FILE")]
    pub dump_layout: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

enum Target {
    Svg(Option<PathBuf>),
    Png(PathBuf),
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);
    run_with_args(&args)
}

/// `-d` forces DEBUG; otherwise `RUST_LOG` wins, falling back to INFO.
fn log_filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new(tracing::Level::DEBUG.as_str());
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()))
}

fn init_tracing(debug: bool) {
    // stdout may carry the SVG, so logs always go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(debug))
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run_with_args(args: &Args) -> Result<()> {
    info!("process start");
    let mut config = load_config(args.config.as_deref())?;
    if let Some(scale) = args.scale {
        config.render.scale = scale;
    }

    let (input, title) = read_input(&args.input)?;
    info!(input = %args.input.display(), "processing sequence text file");

    let target = match args.output_format {
        OutputFormat::Svg => Target::Svg(args.output.clone()),
        OutputFormat::Png => Target::Png(ensure_output(&args.output, "png")?),
    };

    let seq = parse_sequence(&input)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    let layout = compute_layout(&seq, &title, &config.theme, &config.layout);
    let svg = render_svg(&layout, &config.theme, &config.layout);
    debug!(bytes = svg.len(), "svg rendered");

    // a failed dump must leave no diagram on disk
    if let Some(path) = &args.dump_layout {
        let dump = render_layout_dump(&layout)?;
        write_layout_dump(path, &dump)?;
    }
    match &target {
        Target::Svg(path) => write_output_svg(&svg, path.as_deref())?,
        Target::Png(path) => write_png(&svg, path, &config)?,
    }
    info!("diagram saved");
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path, config: &Config) -> Result<()> {
    crate::render::write_output_png(svg, output, &config.render)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path, _config: &Config) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

/// Reads the flow text and derives the header title from the file name.
fn read_input(path: &Path) -> Result<(String, String)> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok((buf, "stdin".to_string()));
    }
    if !path.is_file() {
        return Err(anyhow::anyhow!("File {} not found", path.display()));
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok((content, source_title(path)))
}

fn source_title(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
