//! Eight-Puzzle Solver Library
//!
//! Finds a sequence of tile moves turning one 3x3 sliding-puzzle board into
//! another using a bidirectional search: one search grows forward from the
//! initial board, another backward from the goal, and the answer is stitched
//! together where they meet.

pub mod board;
pub mod cost;
pub mod error;
pub mod expand;
pub mod frontier;
pub mod node;
pub mod replay;
pub mod solvability;
pub mod solver;

pub use board::{Board, Direction};
pub use error::{PuzzleError, ReplayError};
pub use solver::{solve, solve_with_stats, Outcome, SearchStats, Strategy};

/// The pair of boards a solve works on. Fixed for the whole solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleInstance {
    pub initial: Board,
    pub goal: Board,
}

impl PuzzleInstance {
    pub const fn new(initial: Board, goal: Board) -> Self {
        Self { initial, goal }
    }

    /// Solves this instance with `strategy`.
    pub fn solve(&self, strategy: Strategy) -> Outcome {
        solver::solve(self, strategy)
    }
}

/// Solves from flat row-major boards and numeric settings.
///
/// `algorithm` is `0` for A*, `1` for BFS and `2` for depth-limited search,
/// in which case `max_depth` bounds the depth of expanded nodes. The result
/// is the list of tiles to slide into the blank, or `[-2]` when the boards
/// are not mutually reachable, or `[-1]` when the search ran dry.
pub fn solve_flat(
    initial: &[i32],
    goal: &[i32],
    algorithm: i32,
    max_depth: i32,
) -> Result<Vec<i32>, PuzzleError> {
    let instance = PuzzleInstance::new(Board::from_flat(initial)?, Board::from_flat(goal)?);
    let strategy = Strategy::from_code(algorithm, max_depth)?;
    Ok(instance.solve(strategy).codes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: [i32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

    #[test]
    fn test_solve_flat_single_move() {
        let initial = [1, 2, 3, 4, 5, 6, 7, 0, 8];
        assert_eq!(solve_flat(&initial, &SOLVED, 0, 100), Ok(vec![8]));
        assert_eq!(solve_flat(&initial, &SOLVED, 1, 100), Ok(vec![8]));
    }

    #[test]
    fn test_solve_flat_sentinels() {
        let swapped = [2, 1, 3, 4, 5, 6, 7, 8, 0];
        assert_eq!(solve_flat(&swapped, &SOLVED, 0, 100), Ok(vec![-2]));

        let initial = [1, 2, 3, 4, 5, 6, 7, 0, 8];
        assert_eq!(solve_flat(&initial, &SOLVED, 2, 0), Ok(vec![-1]));
    }

    #[test]
    fn test_solve_flat_validates_input() {
        assert_eq!(
            solve_flat(&[1, 2, 3], &SOLVED, 0, 0),
            Err(PuzzleError::WrongLength { actual: 3 })
        );
        assert_eq!(
            solve_flat(&SOLVED, &[1, 1, 3, 4, 5, 6, 7, 8, 0], 0, 0),
            Err(PuzzleError::DuplicateTile { value: 1 })
        );
        assert_eq!(
            solve_flat(&SOLVED, &SOLVED, 5, 0),
            Err(PuzzleError::UnknownAlgorithm(5))
        );
    }
}
