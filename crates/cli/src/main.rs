use anyhow::Result;
use clap::{Parser, Subcommand};
use figures::sample::{random_shape, SampleCfg};
use figures::{Shape, ShapeKind};
use rand::{rngs::StdRng, SeedableRng};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod menu;
mod report;
mod tokens;

#[derive(Parser)]
#[command(name = "figures-cli")]
#[command(about = "Build, validate and inspect trapezoids, rhombi and pentagons")]
struct Cmd {
    /// Log debug events (rejected candidates, ignored operations) to stderr
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Interactive figure manager on stdin/stdout
    Menu,
    /// Validate one shape given as coordinates and print centre and area
    Check {
        #[arg(long)]
        kind: ShapeKind,
        /// x1 y1 x2 y2 ...
        #[arg(required = true, allow_negative_numbers = true)]
        coords: Vec<String>,
    },
    /// Validate a file of shapes (one `<kind> <coords..>` per line) into a JSON report
    Report {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print random valid shapes
    Sample {
        #[arg(long)]
        kind: ShapeKind,
        #[arg(long, default_value_t = 3)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Menu => run_menu(),
        Action::Check { kind, coords } => check(kind, coords),
        Action::Report { input, out } => run_report(input, out),
        Action::Sample { kind, count, seed } => sample(kind, count, seed),
    }
}

fn run_menu() -> Result<()> {
    let stdin = io::stdin();
    let mut session = menu::Session::new(stdin.lock(), io::stdout());
    session.run()
}

fn check(kind: ShapeKind, coords: Vec<String>) -> Result<()> {
    tracing::info!(%kind, n = coords.len(), "check");
    let shape = Shape::parse(kind, &coords.join(" "))?;
    let c = shape.centroid()?;
    println!("{shape}");
    println!("Centre: ({}, {}), Area: {}", c.x, c.y, shape.area()?);
    Ok(())
}

fn run_report(input: PathBuf, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "report");
    let report = report::write_report(&input, &out)?;
    tracing::info!(
        shapes = report.shapes.len(),
        rejected = report.rejected.len(),
        total_area = report.total_area,
        "report written"
    );
    Ok(())
}

fn sample(kind: ShapeKind, count: usize, seed: u64) -> Result<()> {
    tracing::info!(%kind, count, seed, "sample");
    let mut rng = StdRng::seed_from_u64(seed);
    let cfg = SampleCfg::default();
    for _ in 0..count {
        println!("{}", random_shape(&mut rng, kind, &cfg));
    }
    Ok(())
}
