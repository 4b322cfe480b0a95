//! Ordering keys for frontier extraction.

use crate::board::Board;
use crate::node::SearchNode;
use crate::PuzzleInstance;

/// How a frontier ranks its nodes. Lower keys are extracted first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostMode {
    /// Misplaced tiles against the goal board plus depth.
    TowardGoal,
    /// Misplaced tiles against the initial board plus depth.
    TowardStart,
    /// Depth only.
    Breadth,
    /// Every node ranks the same; extraction order is left to the queue.
    Unranked,
}

impl CostMode {
    /// Ordering key of `node` under this mode.
    pub fn cost(self, node: &SearchNode, instance: &PuzzleInstance) -> u32 {
        match self {
            CostMode::TowardGoal => misplaced_tiles(&node.board, &instance.goal) + node.depth,
            CostMode::TowardStart => misplaced_tiles(&node.board, &instance.initial) + node.depth,
            CostMode::Breadth => node.depth,
            CostMode::Unranked => 0,
        }
    }
}

/// Number of non-blank tiles of `board` not where `reference` has them.
pub fn misplaced_tiles(board: &Board, reference: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .zip(reference.tiles())
        .filter(|&(&tile, &expected)| tile != 0 && tile != expected)
        .count() as u32
}
