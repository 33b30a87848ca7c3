use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "marquee", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drive a scroller row for N frames and print a JSON report.
    Simulate(SimulateArgs),
    /// Parse and validate a catalog JSON file.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input catalog JSON (array of {label, icon_ref}).
    #[arg(long)]
    catalog: PathBuf,

    /// Number of frames to simulate.
    #[arg(long)]
    frames: u64,

    /// Scroll direction.
    #[arg(long, value_enum, default_value_t = DirectionChoice::Forward)]
    direction: DirectionChoice,

    /// Speed in pixel-units per frame.
    #[arg(long, default_value_t = 0.5)]
    velocity: f64,

    /// Item slot width in pixel-units.
    #[arg(long, default_value_t = 80.0)]
    item_width: f64,

    /// Gap between items in pixel-units.
    #[arg(long, default_value_t = 64.0)]
    gap: f64,

    /// Include per-frame offsets in the report.
    #[arg(long)]
    dump_offsets: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input catalog JSON (array of {label, icon_ref}).
    #[arg(long)]
    catalog: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionChoice {
    Forward,
    Reverse,
}

impl From<DirectionChoice> for marquee::Direction {
    fn from(value: DirectionChoice) -> Self {
        match value {
            DirectionChoice::Forward => marquee::Direction::Forward,
            DirectionChoice::Reverse => marquee::Direction::Reverse,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn read_catalog(path: &Path) -> anyhow::Result<marquee::Catalog> {
    let f = File::open(path).with_context(|| format!("open catalog '{}'", path.display()))?;
    let catalog = marquee::Catalog::from_json_reader(BufReader::new(f))
        .with_context(|| format!("parse catalog '{}'", path.display()))?;
    Ok(catalog)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog)?;

    let config = marquee::RowConfig {
        direction: args.direction.into(),
        velocity: marquee::Velocity::new(args.velocity)?,
        metrics: marquee::SurfaceMetrics {
            slot_width: args.item_width,
            gap: args.gap,
        },
    };
    let mut row = marquee::ScrollerRow::new(&catalog, config)?;

    // Static layout: the surface's analytic width stands in for the
    // host's live measurement.
    let measure = marquee::FixedMeasure(row.surface().track_width());
    let report = marquee::simulate(&mut row, &measure, args.frames, args.dump_offsets);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog)?;
    eprintln!(
        "{}: {} item(s), ok",
        args.catalog.display(),
        catalog.len()
    );
    Ok(())
}
