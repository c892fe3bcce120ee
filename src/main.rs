// Level tools for the push-block puzzle rules.
// play:       W/A/S/D or arrow keys move, U undoes, R restarts, Q quits.
// verify:     replays a JSON list of directions, e.g. ["Right","Right","Up"], and reports the result.
// symmetries: prints the eight orientations of the trimmed level.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use grid_rules::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal, ConsoleInput};
use grid_rules::core::{Direction, GameState, ORIENTATION_COUNT};
use grid_rules::level::{self, validate_level, LevelGrid};
use grid_rules::models::GameRenderState;
use grid_rules::orientation::{choose_orientation, Orientation};
use grid_rules::replay::verify_solution;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "grid-rules")]
#[command(about = "Play, verify and transform push-block puzzle levels")]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Play {
        level: PathBuf,
        #[arg(long, default_value_t = false)]
        free_undo: bool,
    },
    Verify {
        level: PathBuf,
        moves: PathBuf,
        #[arg(long)]
        claimed_steps: Option<usize>,
    },
    Validate {
        level: PathBuf,
    },
    Transform {
        level: PathBuf,
        #[arg(value_enum)]
        op: TransformOp,
    },
    Symmetries {
        level: PathBuf,
    },
    Orient {
        level: PathBuf,
        #[arg(long)]
        match_id: String,
        #[arg(long)]
        level_id: String,
        #[arg(long, default_value_t = ORIENTATION_COUNT)]
        modulus: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TransformOp {
    Trim,
    RotateCcw,
    RotateCw,
    FlipX,
    FlipY,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Play { level, free_undo } => cmd_play(&level, free_undo),
        Commands::Verify { level, moves, claimed_steps } => cmd_verify(&level, &moves, claimed_steps),
        Commands::Validate { level } => cmd_validate(&level),
        Commands::Transform { level, op } => cmd_transform(&level, op),
        Commands::Symmetries { level } => cmd_symmetries(&level),
        Commands::Orient { level, match_id, level_id, modulus } => {
            cmd_orient(&level, &match_id, &level_id, modulus)
        }
    }
}

fn read_level(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read level {}", path.display()))?;
    Ok(text.trim_end().to_string())
}

fn cmd_play(path: &Path, allow_free_undo: bool) -> Result<()> {
    let level = read_level(path)?;
    let initial = GameState::initialize(&level)
        .with_context(|| format!("invalid level {}", path.display()))?;

    let mut terminal = setup_terminal()?;
    let mut state = GameRenderState {
        game: initial.clone(),
        allow_free_undo,
        error: None,
        last_change: None,
    };

    let result = (|| -> io::Result<()> {
        loop {
            render_game(&mut terminal, &state)?;
            match handle_input()? {
                ConsoleInput::Move(direction) => {
                    match state.game.try_move(direction, state.allow_free_undo) {
                        Ok(change) => {
                            state.last_change = Some(change);
                            state.error = None;
                        }
                        Err(reason) => state.error = Some(reason.to_string()),
                    }
                }
                ConsoleInput::Undo => match state.game.try_undo() {
                    Ok(change) => {
                        state.last_change = Some(change);
                        state.error = None;
                    }
                    Err(reason) => state.error = Some(reason.to_string()),
                },
                ConsoleInput::Restart => {
                    state.game = initial.clone();
                    state.error = None;
                    state.last_change = None;
                }
                ConsoleInput::Quit => return Ok(()),
                ConsoleInput::Timeout | ConsoleInput::Unknown => {}
            }
        }
    })();

    cleanup_terminal()?;
    result?;

    let moves: Vec<Direction> = state.game.moves.iter().map(|m| m.direction).collect();
    info!(moves = moves.len(), complete = state.game.is_complete(), "session finished");
    if state.game.is_complete() {
        println!("{}", serde_json::to_string(&moves)?);
    }
    Ok(())
}

fn cmd_verify(level_path: &Path, moves_path: &Path, claimed_steps: Option<usize>) -> Result<()> {
    let level = read_level(level_path)?;
    let moves_text = fs::read_to_string(moves_path)
        .with_context(|| format!("failed to read moves {}", moves_path.display()))?;
    let directions: Vec<Direction> = serde_json::from_str(&moves_text)
        .with_context(|| format!("moves file {} is not a JSON list of directions", moves_path.display()))?;

    let report = verify_solution(&level, &directions)
        .with_context(|| format!("invalid level {}", level_path.display()))?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    let claimed_steps = claimed_steps.unwrap_or(directions.len());
    if !report.is_valid_solution(claimed_steps) {
        bail!("solution does not reach an exit in {} steps", claimed_steps);
    }
    Ok(())
}

fn cmd_validate(path: &Path) -> Result<()> {
    let level = read_level(path)?;
    let grid = validate_level(&level)
        .with_context(|| format!("invalid level {}", path.display()))?;
    println!("OK: {}x{}", grid.width(), grid.height());
    Ok(())
}

fn cmd_transform(path: &Path, op: TransformOp) -> Result<()> {
    let text = read_level(path)?;
    let transformed = match op {
        TransformOp::Trim => level::trim(&text),
        TransformOp::RotateCcw => level::rotate_ccw(&text),
        TransformOp::RotateCw => level::rotate_cw(&text),
        TransformOp::FlipX => level::flip_x(&text),
        TransformOp::FlipY => level::flip_y(&text),
    }
    .with_context(|| format!("invalid level {}", path.display()))?;
    println!("{}", transformed);
    Ok(())
}

fn cmd_symmetries(path: &Path) -> Result<()> {
    let text = read_level(path)?;
    let symmetries = level::get_all_level_symmetries(&text)
        .with_context(|| format!("invalid level {}", path.display()))?;
    for (orientation, symmetry) in Orientation::all().iter().zip(&symmetries) {
        println!("{:?}\n{}\n", orientation, symmetry);
    }
    Ok(())
}

fn cmd_orient(path: &Path, match_id: &str, level_id: &str, modulus: u32) -> Result<()> {
    let text = read_level(path)?;
    let grid = LevelGrid::parse(&text)
        .with_context(|| format!("invalid level {}", path.display()))?;

    let index = choose_orientation(match_id, level_id, modulus);
    let Some(orientation) = Orientation::from_index(index) else {
        bail!("orientation {} is outside the {} known orientations", index, ORIENTATION_COUNT);
    };
    info!(index, ?orientation, "orientation chosen");
    println!("{}", orientation.apply(&grid.trim()));
    Ok(())
}
