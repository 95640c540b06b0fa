use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "blazefix", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the analytics chart as SVG or PNG.
    Chart(ChartArgs),
    /// Replay a scripted host session and write per-frame styles as JSON.
    Simulate(SimulateArgs),
    /// Load and validate a config and a dataset.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct ChartArgs {
    /// Output path; the format follows the extension unless `--format` is given.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum)]
    format: Option<ChartFormat>,

    /// Dataset JSON (defaults to the built-in sample data).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Dashboard config JSON, for the chart style.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the chart width in pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Override the chart height in pixels.
    #[arg(long)]
    height: Option<f64>,

    /// Draw the tooltip for the sample with this label.
    #[arg(long)]
    hover: Option<String>,

    /// Raster scale for PNG output.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ChartFormat {
    Svg,
    Png,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Script JSON: `{fps, frames, layout?, events: [{frame, event}]}`.
    #[arg(long)]
    script: PathBuf,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    data: Option<PathBuf>,

    /// Output JSON path (stdout when absent).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Only write the final frame.
    #[arg(long)]
    last_only: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Chart(args) => cmd_chart(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<blazefix::DashboardConfig> {
    match path {
        Some(p) => blazefix::DashboardConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(blazefix::DashboardConfig::default()),
    }
}

fn load_dataset(path: Option<&Path>) -> anyhow::Result<blazefix::Dataset> {
    match path {
        Some(p) => blazefix::Dataset::from_path(p)
            .with_context(|| format!("load dataset '{}'", p.display())),
        None => blazefix::Dataset::builtin().context("load built-in dataset"),
    }
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_chart(args: ChartArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let data = load_dataset(args.data.as_deref())?;

    let mut style = config.chart;
    if let Some(w) = args.width {
        style.width = w;
    }
    if let Some(h) = args.height {
        style.height = h;
    }
    let renderer = blazefix::ChartRenderer::new(style)?;
    let chart = renderer.render(&data.fire_stats);

    let hover = match &args.hover {
        Some(label) => {
            let point = chart
                .points
                .iter()
                .find(|p| &p.label == label)
                .with_context(|| format!("no sample labelled '{label}'"))?;
            chart.tooltip_at(point.position.x)
        }
        None => None,
    };

    let format = match args.format {
        Some(f) => f,
        None => match args.out.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => ChartFormat::Png,
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ChartFormat::Svg,
            _ => anyhow::bail!(
                "cannot infer chart format from '{}', pass --format",
                args.out.display()
            ),
        },
    };

    create_parent_dir(&args.out)?;
    match format {
        ChartFormat::Svg => {
            let svg = blazefix::chart::svg::to_svg(&chart, hover.as_ref());
            std::fs::write(&args.out, svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        ChartFormat::Png => {
            blazefix::chart::raster::write_png(&chart, hover.as_ref(), &args.out, args.scale)?;
        }
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let data = load_dataset(args.data.as_deref())?;
    let scenario = blazefix::Scenario::from_path(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;

    let report = scenario.run(config, data)?;
    let json = if args.last_only {
        serde_json::to_string_pretty(&report.last())
    } else {
        serde_json::to_string_pretty(&report)
    }
    .context("serialize frames")?;

    match &args.out {
        Some(out) => {
            create_parent_dir(out)?;
            std::fs::write(out, json)
                .with_context(|| format!("write frames '{}'", out.display()))?;
            eprintln!("wrote {} ({} frames)", out.display(), report.frames.len());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let data = load_dataset(args.data.as_deref())?;
    config.validate()?;
    data.validate()?;

    println!(
        "ok: {} trigger group(s), {} risk level(s), {} alert(s), {} chart point(s)",
        config.triggers.len(),
        data.risk_levels.len(),
        data.alerts.len(),
        data.fire_stats.len()
    );
    Ok(())
}
