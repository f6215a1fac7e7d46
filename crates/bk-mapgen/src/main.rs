//! Backrooms map generator CLI
//!
//! Generates a seeded occupancy grid in one of three modes and writes
//! the map file the game's renderer consumes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bk_core::{GeneratedMap, MapKind, MapStats, generate, render, save_map};

/// Backrooms map generator
#[derive(Parser, Debug)]
#[command(name = "bk-mapgen")]
#[command(author, version, about = "Generate seeded backrooms maps", long_about = None)]
struct Args {
    /// Map width in cells (minimum 5)
    #[arg(short = 'W', long, default_value_t = 100)]
    width: usize,

    /// Map height in cells (minimum 5)
    #[arg(short = 'H', long, default_value_t = 100)]
    height: usize,

    /// Generation seed; drawn at random (and recorded) when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generation mode (maze, open-space, room-based)
    #[arg(short, long, default_value_t = MapKind::Maze)]
    mode: MapKind,

    /// Output map file
    #[arg(short, long, default_value = "maps/generated_map.json")]
    output: PathBuf,

    /// Preview window size in cells (0 disables the preview)
    #[arg(long, default_value_t = 20)]
    preview_size: usize,

    /// Suppress the preview and stats output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("bk-mapgen: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let map = generate(args.width, args.height, args.seed, args.mode)
        .map_err(|e| e.to_string())?;

    if !args.quiet {
        report(args, &map);
    }

    save_map(&map.grid, map.seed, &args.output).map_err(|e| e.to_string())?;

    if !args.quiet {
        println!("Map saved to {}", args.output.display());
    }

    Ok(())
}

fn report(args: &Args, map: &GeneratedMap) {
    if args.preview_size > 0 {
        println!("Preview ({} map):", map.kind);
        print!("{}", render(&map.grid, args.preview_size, args.preview_size));
    }

    let stats = MapStats::of(&map.grid);
    println!("Dimensions: {} x {}", map.grid.width(), map.grid.height());
    println!("Total cells: {}", stats.total());
    println!("Paths: {}", stats.paths);
    println!("Walls: {}", stats.walls);
    println!("Seed: {}", map.seed);

    if let Some(placement) = &map.placement
        && !placement.met_target()
    {
        println!(
            "Placed {} of {} rooms in {} attempts (map is sparser than requested)",
            placement.rooms.len(),
            placement.target,
            placement.attempts
        );
    }
}
