use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "inkwalk", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a sketch plan JSON from an image.
    Plan(PlanArgs),
    /// Render a sketch (or a prefix of it) as a PNG.
    Render(RenderArgs),
    /// Write the progressive reveal as numbered PNG frames.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input image (any format `image` decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output plan JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Deterministic seed for the stroke walk.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Tunables JSON (partial; unset fields keep their defaults).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image (any format `image` decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Deterministic seed for the stroke walk.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Fraction of the plan to reveal, in (0, 1].
    #[arg(long, default_value_t = 1.0)]
    progress: f64,

    /// Tunables JSON (partial; unset fields keep their defaults).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input image (any format `image` decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for frame PNGs.
    #[arg(long)]
    out_dir: PathBuf,

    /// Deterministic seed for the stroke walk.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Reveal duration in seconds.
    #[arg(long, default_value_t = 6.0)]
    duration_secs: f64,

    /// Playback frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Keep every k-th frame (the final frame is always written).
    #[arg(long, default_value_t = 1)]
    every: usize,

    /// Tunables JSON (partial; unset fields keep their defaults).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Render(args) => cmd_render(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<inkwalk::SketchConfig> {
    let Some(path) = path else {
        return Ok(inkwalk::SketchConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let config: inkwalk::SketchConfig =
        serde_json::from_reader(BufReader::new(f)).context("parse config JSON")?;
    Ok(config)
}

fn generate_plan(
    in_path: &Path,
    config_path: Option<&Path>,
    seed: u64,
) -> anyhow::Result<(inkwalk::SketchPlan, inkwalk::GenerateStats)> {
    let buffer = inkwalk::assets::decode::load_image(in_path)?;
    let config = load_config(config_path)?;
    Ok(inkwalk::generate_with_stats(&buffer, &config, seed)?)
}

fn write_png(path: &Path, frame: &inkwalk::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let (plan, stats) = generate_plan(&args.in_path, args.config.as_deref(), args.seed)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    plan.write_to_path(&args.out)?;

    eprintln!(
        "{} dark points, {} strokes, {} segments ({} dark left uncovered)",
        stats.dark_points, stats.strokes, stats.segments, stats.residual_dark
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if !(args.progress > 0.0 && args.progress <= 1.0) {
        anyhow::bail!("--progress must be in (0, 1]");
    }
    let (plan, _) = generate_plan(&args.in_path, args.config.as_deref(), args.seed)?;

    let reveal = ((plan.segments.len() as f64) * args.progress).ceil() as usize;
    let reveal = reveal.min(plan.segments.len());
    let frame = inkwalk::render_segments(
        plan.canvas,
        &plan.segments[..reveal],
        &inkwalk::RenderOpts::default(),
    )?;

    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let (plan, _) = generate_plan(&args.in_path, args.config.as_deref(), args.seed)?;

    let fps = inkwalk::Fps::new(args.fps, 1)?;
    let schedule = inkwalk::PlaybackSchedule::new(plan.segments.len(), fps, args.duration_secs)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let keep = args.every.max(1);
    let frames = schedule.frames();
    let opts = inkwalk::RenderOpts::default();
    let mut written = 0usize;
    for (i, batch) in schedule.batches().enumerate() {
        if i % keep != 0 && i + 1 != frames {
            continue;
        }
        let frame = inkwalk::render_segments(plan.canvas, &plan.segments[..batch.end], &opts)?;
        let path = args.out_dir.join(format!("frame_{i:05}.png"));
        write_png(&path, &frame)?;
        written += 1;
    }

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}
