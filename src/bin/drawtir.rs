use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use drawtir::{Project, TimeUnit, TimingOpts};

#[derive(Parser, Debug)]
#[command(name = "drawtir", version)]
struct Cli {
    /// Log timing diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recompute frame start times and durations.
    Timings(TimingsArgs),
    /// Show which frame is active at a playhead time.
    At(AtArgs),
    /// Print the total presentation length.
    Total(TotalArgs),
    /// Check a project for malformed timing data.
    Validate(InputArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct TimingsArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Minimum auto-mode frame duration in seconds.
    #[arg(long, default_value_t = drawtir::DEFAULT_MIN_FRAME_DURATION)]
    min_duration: f64,
}

#[derive(Parser, Debug)]
struct AtArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Playhead position in seconds.
    #[arg(long)]
    time: f64,

    /// Minimum auto-mode frame duration in seconds.
    #[arg(long, default_value_t = drawtir::DEFAULT_MIN_FRAME_DURATION)]
    min_duration: f64,
}

#[derive(Parser, Debug)]
struct TotalArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Display unit.
    #[arg(long, value_enum, default_value_t = UnitChoice::S)]
    unit: UnitChoice,

    /// Minimum auto-mode frame duration in seconds.
    #[arg(long, default_value_t = drawtir::DEFAULT_MIN_FRAME_DURATION)]
    min_duration: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitChoice {
    S,
    Ms,
}

impl From<UnitChoice> for TimeUnit {
    fn from(value: UnitChoice) -> Self {
        match value {
            UnitChoice::S => TimeUnit::Seconds,
            UnitChoice::Ms => TimeUnit::Millis,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Timings(args) => cmd_timings(args),
        Command::At(args) => cmd_at(args),
        Command::Total(args) => cmd_total(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> anyhow::Result<Project> {
    Project::from_path(path).with_context(|| format!("load project '{}'", path.display()))
}

fn load_timed(path: &Path, min_duration: f64) -> anyhow::Result<Project> {
    let project = load(path)?;
    Ok(project.with_timings(&TimingOpts::with_min_duration(min_duration)))
}

fn cmd_timings(args: TimingsArgs) -> anyhow::Result<()> {
    let timed = load_timed(&args.input.in_path, args.min_duration)?;
    let json = timed.to_json_pretty()?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_at(args: AtArgs) -> anyhow::Result<()> {
    let timed = load_timed(&args.input.in_path, args.min_duration)?;
    let pos = drawtir::locate(&timed.frames, args.time)
        .with_context(|| format!("'{}' has no frames", args.input.in_path.display()))?;
    println!(
        "{}\t{}\t{}",
        pos.index,
        pos.frame_id,
        drawtir::format_time_string(pos.local_time, TimeUnit::Seconds)
    );
    Ok(())
}

fn cmd_total(args: TotalArgs) -> anyhow::Result<()> {
    let timed = load_timed(&args.input.in_path, args.min_duration)?;
    let total = drawtir::get_total_duration(&timed.frames);
    println!("{}", drawtir::format_time_string(total, args.unit.into()));
    Ok(())
}

fn cmd_validate(args: InputArgs) -> anyhow::Result<()> {
    let project = load(&args.in_path)?;
    project
        .validate()
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;
    eprintln!("ok: {} frames", project.frames.len());
    Ok(())
}
