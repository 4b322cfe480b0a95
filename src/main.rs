//! Eight-Puzzle Solver
//!
//! Command-line front end: solves a 3x3 sliding puzzle between two boards,
//! checks whether two boards are connected, or deals a random board.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use eight_puzzle::replay::{apply_moves, format_steps};
use eight_puzzle::solvability::is_solvable;
use eight_puzzle::{solve_with_stats, Board, Outcome, PuzzleInstance, SearchStats, Strategy};

/// Solves 3x3 sliding-tile puzzles with a bidirectional search.
#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the tiles to move to turn the initial board into the goal.
    Solve {
        /// Initial board, e.g. "1,2,3,4,5,6,7,0,8" or "123456708" (0 is the blank).
        #[arg(short, long)]
        initial: Board,
        /// Goal board.
        #[arg(short, long, default_value = "1,2,3,4,5,6,7,8,0")]
        goal: Board,
        #[arg(short, long, value_enum, default_value_t = Algorithm::AStar)]
        algorithm: Algorithm,
        /// Depth bound for depth-limited search.
        #[arg(short, long, default_value_t = 100)]
        max_depth: u32,
        /// Print every board along the solution.
        #[arg(long)]
        show_steps: bool,
    },
    /// Report whether the goal can be reached from the initial board.
    Check {
        #[arg(short, long)]
        initial: Board,
        #[arg(short, long, default_value = "1,2,3,4,5,6,7,8,0")]
        goal: Board,
    },
    /// Print a random board that can reach the goal.
    Random {
        #[arg(short, long, default_value = "1,2,3,4,5,6,7,8,0")]
        goal: Board,
        /// Seed for a reproducible board.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    /// Misplaced-tile heuristic from both ends.
    AStar,
    /// Breadth-first from both ends; shortest answer.
    Bfs,
    /// Depth-limited from both ends, bounded by --max-depth.
    Dls,
}

impl Algorithm {
    fn strategy(self, max_depth: u32) -> Strategy {
        match self {
            Algorithm::AStar => Strategy::AStar,
            Algorithm::Bfs => Strategy::Bfs,
            Algorithm::Dls => Strategy::DepthLimited { max_depth },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve {
            initial,
            goal,
            algorithm,
            max_depth,
            show_steps,
        } => run_solve(
            PuzzleInstance::new(initial, goal),
            algorithm.strategy(max_depth),
            show_steps,
        ),
        Command::Check { initial, goal } => {
            if is_solvable(&initial, &goal) {
                println!("solvable");
            } else {
                println!("not solvable");
            }
            Ok(())
        }
        Command::Random { goal, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let board = Board::random_solvable(&goal, &mut rng);
            println!("{}", flat(&board));
            println!("{}", board);
            Ok(())
        }
    }
}

/// Installs the stderr subscriber, honouring `RUST_LOG` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("eight_puzzle={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Solves, prints the report, and fails when there is no answer.
fn run_solve(instance: PuzzleInstance, strategy: Strategy, show_steps: bool) -> anyhow::Result<()> {
    tracing::info!(?strategy, "solving");
    let (outcome, stats) = solve_with_stats(&instance, strategy);

    match outcome {
        Outcome::Solved(moves) => {
            print!("{}", format_report(&instance, &moves, &stats, show_steps)?);
            Ok(())
        }
        Outcome::Unsolvable => bail!("this puzzle is not solvable"),
        Outcome::Exhausted => bail!(
            "max depth reached but no answer found ({} iterations)",
            stats.iterations
        ),
    }
}

/// Renders a solved report: the move list, search counters and optionally
/// every intermediate board.
fn format_report(
    instance: &PuzzleInstance,
    moves: &[u8],
    stats: &SearchStats,
    show_steps: bool,
) -> anyhow::Result<String> {
    let noun = if moves.len() == 1 { "move" } else { "moves" };
    let listed: Vec<String> = moves.iter().map(|tile| tile.to_string()).collect();

    let mut output = format!("Solved in {} {}: {}\n", moves.len(), noun, listed.join(" "));
    output.push_str(&format!(
        "Search: {} iterations, {} forward nodes, {} backward nodes\n",
        stats.iterations, stats.forward_nodes, stats.backward_nodes
    ));

    if show_steps {
        let boards = apply_moves(&instance.initial, moves)
            .context("solver returned a move list that does not replay")?;
        output.push('\n');
        output.push_str(&format_steps(&boards, moves));
    }

    Ok(output)
}

/// Comma-separated row-major tiles, the form `--initial` accepts.
fn flat(board: &Board) -> String {
    board
        .tiles()
        .iter()
        .map(|tile| tile.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
