use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use standplan::collision::find_overlaps;
use standplan::config::{ConfigError, PlacementConfig, Preset, parse_clearance};
use standplan::geom::Point2;
use standplan::layout::{Configuration, EntityRef};
use standplan::scene::build_scene_index;
use standplan::session::{PlacementSession, SessionError};
use standplan::stand::StandError;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("invalid layout JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid stand: {0}")]
    Stand(#[from] StandError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("placement error: {0}")]
    Session(#[from] SessionError),
    #[error("{0} overlapping pair(s) found")]
    Overlaps(usize),
}

#[derive(Parser, Debug)]
#[command(name = "standplan", about = "Stand layout placement and collision checks")]
struct Cli {
    /// Clearance preset; overrides STANDPLAN_PRESET.
    #[arg(long)]
    preset: Option<Preset>,

    /// Collision clearance in metres; overrides the preset.
    #[arg(long, value_parser = clearance_arg)]
    clearance: Option<f64>,

    /// Box wall-mounted screens into the floor collision set.
    #[arg(long)]
    wall_screens_collide: bool,

    /// Leave the truss support columns out of the floor collision set.
    #[arg(long)]
    no_truss: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report every pair of overlapping entities in a layout.
    Check { layout: PathBuf },
    /// Print the scene index of a layout, one box per line.
    Index { layout: PathBuf },
    /// Drag one entity to a target position and print the resulting actions.
    Move {
        layout: PathBuf,
        /// `cabin`, `truss`, `counter:<id>` or `screen:<id>`.
        entity: EntityRef,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        z: f64,
    },
}

fn clearance_arg(raw: &str) -> Result<f64, ConfigError> {
    parse_clearance("--clearance", raw)
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Check { layout } => run_check(&layout, &config),
        Command::Index { layout } => run_index(&layout, &config),
        Command::Move { layout, entity, x, z } => run_move(&layout, &config, entity, Point2::new(x, z)),
    }
}

fn resolve_config(cli: &Cli) -> Result<PlacementConfig, CliError> {
    let mut config = PlacementConfig::from_env()?;
    if let Some(preset) = cli.preset {
        config.clearance = preset.clearance();
    }
    if let Some(clearance) = cli.clearance {
        config.clearance = clearance;
    }
    if cli.wall_screens_collide {
        config.include_wall_screens = true;
    }
    if cli.no_truss {
        config.include_truss_columns = false;
    }
    tracing::debug!(?config, "placement config resolved");
    Ok(config)
}

fn load_layout(path: &Path) -> Result<Configuration, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.display().to_string(), source })?;
    let configuration: Configuration = serde_json::from_str(&raw)?;
    configuration.stand.validate()?;
    Ok(configuration)
}

fn run_check(path: &Path, config: &PlacementConfig) -> Result<(), CliError> {
    let configuration = load_layout(path)?;
    let overlaps = find_overlaps(&configuration, config);
    for (a, b) in &overlaps {
        println!("{a}\t{b}");
    }
    if overlaps.is_empty() {
        println!("ok");
        return Ok(());
    }
    Err(CliError::Overlaps(overlaps.len()))
}

fn run_index(path: &Path, config: &PlacementConfig) -> Result<(), CliError> {
    let configuration = load_layout(path)?;
    for aabb in build_scene_index(&configuration, config) {
        println!("{}", serde_json::to_string(&aabb)?);
    }
    Ok(())
}

fn run_move(path: &Path, config: &PlacementConfig, entity: EntityRef, target: Point2) -> Result<(), CliError> {
    let configuration = load_layout(path)?;
    let Some(start) = configuration.position_of(&entity) else {
        return Err(SessionError::UnknownEntity(entity).into());
    };

    let mut session = PlacementSession::new(configuration, *config);
    session.begin_drag(entity, start)?;
    let mut actions = session.drag_to(target);
    actions.extend(session.end_drag());

    for action in &actions {
        println!("{}", serde_json::to_string(action)?);
    }
    Ok(())
}
