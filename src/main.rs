//! Calendar Puzzle Solver
//!
//! Solves the 6x9 calendar tiling puzzle: given a month, day, and weekday,
//! arranges ten five-cell pieces so exactly those three labeled cells (and
//! the board's one forbidden cell) stay uncovered. Prints the solved board
//! and writes a JSON payload for external rendering.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use dateblock::{board, persistence, pieces, solver};

/// Solves the calendar tiling puzzle for a date selection.
#[derive(Parser)]
#[command(name = "dateblock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve for a month/day/weekday selection and save the result.
    Solve {
        /// Month label, e.g. JAN.
        month: String,
        /// Day label, e.g. 2.
        day: String,
        /// Weekday label, e.g. FRI.
        weekday: String,
        /// Output path for the JSON payload.
        #[arg(long, default_value = "solution.json")]
        out: PathBuf,
    },
    /// Print the piece atlas.
    Atlas,
    /// Display a previously saved solution.
    Show {
        /// Path of a payload written by `solve`.
        #[arg(default_value = "solution.json")]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            month,
            day,
            weekday,
            out,
        } => run_solve(&month, &day, &weekday, &out),
        Command::Atlas => {
            run_atlas();
            ExitCode::SUCCESS
        }
        Command::Show { file } => run_show(&file),
    }
}

/// Resolves the labels, solves, prints the board, and saves the payload.
fn run_solve(month: &str, day: &str, weekday: &str, out: &std::path::Path) -> ExitCode {
    let labels = [month, day, weekday];
    let mut must_cover = [(0, 0); 3];
    for (slot, label) in must_cover.iter_mut().zip(labels) {
        match board::find_label(&label.to_uppercase()) {
            Some(cell) => *slot = cell,
            None => {
                eprintln!("Unknown board label: {label}");
                return ExitCode::FAILURE;
            }
        }
    }

    match solver::solve(must_cover) {
        Ok(Some(solution)) => {
            print!("{}", board::format_solution(&must_cover, &solution));
            if let Err(e) = persistence::save(out, &must_cover, &solution) {
                eprintln!("Failed to save solution: {e}");
            } else {
                println!("Saved payload to {}", out.display());
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("No solution for {month} {day} {weekday}.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid selection: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints every catalog piece as ASCII art.
fn run_atlas() {
    println!("Piece atlas:");
    for piece_index in 0..pieces::NUM_PIECES {
        println!("{}", pieces::format_piece(piece_index));
    }
}

/// Loads a saved payload and reprints its board without solving.
fn run_show(file: &std::path::Path) -> ExitCode {
    let Some(record) = persistence::load(file) else {
        eprintln!("No payload at {}. Run 'dateblock solve' first.", file.display());
        return ExitCode::FAILURE;
    };
    let Some(solution) = record.placements() else {
        eprintln!("Payload at {} has malformed placements.", file.display());
        return ExitCode::FAILURE;
    };

    print!(
        "{}",
        board::format_solution(&record.must_cover_cells(), &solution)
    );
    ExitCode::SUCCESS
}
