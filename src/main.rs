//! Puzzle Cube
//!
//! Renders an interactive 3x3x3 puzzle cube in a 3D viewer, scrambles it
//! with a random move sequence, and solves it by replaying the inverse
//! sequence. Headless subcommands run the same simulation without a window.

mod visualization;

use std::time::Duration;

use clap::{Parser, Subcommand};

use cuber::cube::Cube;
use cuber::moves;
use cuber::scramble::Scrambler;
use cuber::sequencer::{self, Sequencer};

/// Renders and scrambles a 3x3x3 puzzle cube.
#[derive(Parser)]
#[command(name = "cuber")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive 3D viewer.
    View,
    /// Scramble a cube without a window and print the sequence and net.
    Scramble {
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence without a window and print the resulting net.
    Apply {
        /// Moves in face notation, e.g. "R U Ri Ui".
        moves: Vec<String>,
    },
}

/// Frame length used when draining moves without a display.
const HEADLESS_FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Scramble { seed }) => run_scramble(seed),
        Some(Command::Apply { moves }) => run_apply(&moves),
        Some(Command::View) | None => {
            println!("Controls: S scramble, Return solve, drag to orbit");
            visualization::display();
        }
    }
}

/// Scrambles a fresh cube headlessly and prints the outcome.
fn run_scramble(seed: Option<u64>) {
    let mut cube = Cube::new();
    let mut sequencer = Sequencer::new();
    let mut scrambler = match seed {
        Some(seed) => Scrambler::with_seed(seed),
        None => Scrambler::new(),
    };

    scrambler.scramble(&mut sequencer);
    println!("Scramble: {}", moves::format_sequence(scrambler.record()));

    sequencer::run_to_completion(&mut cube, &mut sequencer, HEADLESS_FRAME);
    print!("{}", cube.format_net());
}

/// Applies a user-supplied move sequence headlessly and prints the net.
///
/// Unknown names are reported by the sequencer and skipped.
fn run_apply(args: &[String]) {
    let mut cube = Cube::new();
    let mut sequencer = Sequencer::new();

    for name in moves::parse_sequence(&args.join(" ")) {
        sequencer.enqueue(name);
    }
    sequencer::run_to_completion(&mut cube, &mut sequencer, HEADLESS_FRAME);

    print!("{}", cube.format_net());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexy_move_has_order_six() {
        // R U Ri Ui repeated six times is the identity; fewer repeats are not
        for repeats in 1..=6 {
            let mut cube = Cube::new();
            let mut sequencer = Sequencer::new();
            let solved_net = cube.format_net();

            for _ in 0..repeats {
                for name in ["R", "U", "Ri", "Ui"] {
                    sequencer.enqueue(name);
                }
            }
            sequencer::run_to_completion(&mut cube, &mut sequencer, HEADLESS_FRAME);

            if repeats == 6 {
                assert!(cube.is_solved(), "six repeats must restore the cube");
                assert_eq!(cube.format_net(), solved_net);
            } else {
                assert!(!cube.is_solved(), "{repeats} repeats must not solve");
            }
        }
    }

    #[test]
    fn test_apply_path_tolerates_unknown_names() {
        let mut cube = Cube::new();
        let mut sequencer = Sequencer::new();
        let solved_net = cube.format_net();

        for name in moves::parse_sequence("R bogus Ri") {
            sequencer.enqueue(name);
        }
        sequencer::run_to_completion(&mut cube, &mut sequencer, HEADLESS_FRAME);

        assert_eq!(cube.format_net(), solved_net);
    }
}
