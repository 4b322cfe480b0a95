//! Bidirectional search driver.
//!
//! Two frontiers grow in lockstep: the forward one from the initial board
//! and the backward one from the goal. Each iteration pops one node from
//! each side and stops as soon as
//! - the forward node is the goal,
//! - the backward node is the initial board, or
//! - either node's board has already been recorded by the other side.
//!
//! When the searches meet in the middle, moves that one side makes and the
//! other immediately undoes at the seam are trimmed before the two halves
//! are joined.

use tracing::{debug, trace};

use crate::cost::CostMode;
use crate::error::PuzzleError;
use crate::expand::expand;
use crate::frontier::Frontier;
use crate::node::NodeId;
use crate::solvability::is_solvable;
use crate::PuzzleInstance;

/// Code reported when the search runs out of nodes.
pub const EXHAUSTED_CODE: i32 = -1;

/// Code reported when the boards have different inversion parity.
pub const UNSOLVABLE_CODE: i32 = -2;

/// Search strategy, applied to both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Misplaced tiles plus depth, each side measured against the other's root.
    #[default]
    AStar,
    /// Depth-ordered search; returns a shortest sequence.
    Bfs,
    /// Nodes at `max_depth` are not expanded and repeated boards are dropped.
    DepthLimited { max_depth: u32 },
}

impl Strategy {
    /// Decodes the numeric settings pair: `0` = A*, `1` = BFS, `2` = DLS.
    ///
    /// `max_depth` is only read for DLS.
    pub fn from_code(algorithm: i32, max_depth: i32) -> Result<Self, PuzzleError> {
        match algorithm {
            0 => Ok(Strategy::AStar),
            1 => Ok(Strategy::Bfs),
            2 => u32::try_from(max_depth)
                .map(|max_depth| Strategy::DepthLimited { max_depth })
                .map_err(|_| PuzzleError::NegativeDepth(max_depth)),
            other => Err(PuzzleError::UnknownAlgorithm(other)),
        }
    }

    /// Ordering used by the search rooted at the initial board.
    pub fn forward_mode(self) -> CostMode {
        match self {
            Strategy::AStar => CostMode::TowardGoal,
            Strategy::Bfs => CostMode::Breadth,
            Strategy::DepthLimited { .. } => CostMode::Unranked,
        }
    }

    /// Ordering used by the search rooted at the goal board.
    pub fn backward_mode(self) -> CostMode {
        match self {
            Strategy::AStar => CostMode::TowardStart,
            Strategy::Bfs => CostMode::Breadth,
            Strategy::DepthLimited { .. } => CostMode::Unranked,
        }
    }

    /// Depth at which nodes stop being expanded, if any.
    pub fn depth_limit(self) -> Option<u32> {
        match self {
            Strategy::DepthLimited { max_depth } => Some(max_depth),
            _ => None,
        }
    }

    /// Whether children already recorded by their frontier are dropped.
    pub fn suppresses_duplicates(self) -> bool {
        matches!(self, Strategy::DepthLimited { .. })
    }
}

/// Terminal result of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Tiles to slide into the blank, in order, from initial to goal.
    Solved(Vec<u8>),
    /// The boards have different inversion parity.
    Unsolvable,
    /// A frontier emptied before the searches met.
    Exhausted,
}

impl Outcome {
    /// The move list, or a single sentinel code.
    pub fn codes(&self) -> Vec<i32> {
        match self {
            Outcome::Solved(moves) => moves.iter().map(|&tile| i32::from(tile)).collect(),
            Outcome::Unsolvable => vec![UNSOLVABLE_CODE],
            Outcome::Exhausted => vec![EXHAUSTED_CODE],
        }
    }

    pub fn moves(&self) -> Option<&[u8]> {
        match self {
            Outcome::Solved(moves) => Some(moves),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// Counters describing how much work a solve did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Loop iterations, each popping one node per direction.
    pub iterations: usize,
    pub forward_nodes: usize,
    pub backward_nodes: usize,
    /// Distinct boards recorded by the forward search.
    pub forward_boards: usize,
    /// Distinct boards recorded by the backward search.
    pub backward_boards: usize,
}

/// Solves `instance` with `strategy`.
pub fn solve(instance: &PuzzleInstance, strategy: Strategy) -> Outcome {
    solve_with_stats(instance, strategy).0
}

/// Solves `instance` with `strategy` and reports search counters.
pub fn solve_with_stats(instance: &PuzzleInstance, strategy: Strategy) -> (Outcome, SearchStats) {
    if !is_solvable(&instance.initial, &instance.goal) {
        debug!("inversion parity differs, not searching");
        return (Outcome::Unsolvable, SearchStats::default());
    }

    debug!(?strategy, "starting bidirectional search");

    let mut forward = Frontier::new(*instance, instance.initial, strategy.forward_mode());
    let mut backward = Frontier::new(*instance, instance.goal, strategy.backward_mode());
    let mut iterations = 0;

    let outcome = loop {
        let (Some(forward_id), Some(backward_id)) = (forward.pop(), backward.pop()) else {
            debug!(iterations, "a frontier ran empty");
            break Outcome::Exhausted;
        };
        iterations += 1;

        trace!(
            iterations,
            forward_depth = forward.node(forward_id).depth,
            backward_depth = backward.node(backward_id).depth,
            "popped"
        );

        // every registry lookup of this iteration happens before either side grows
        if let Some(moves) = check_termination(instance, &forward, forward_id, &backward, backward_id)
        {
            debug!(iterations, moves = moves.len(), "searches met");
            break Outcome::Solved(moves);
        }

        expand(&mut forward, forward_id, strategy);
        expand(&mut backward, backward_id, strategy);
    };

    let stats = SearchStats {
        iterations,
        forward_nodes: forward.node_count(),
        backward_nodes: backward.node_count(),
        forward_boards: forward.registry_len(),
        backward_boards: backward.registry_len(),
    };
    (outcome, stats)
}

/// Runs the three termination checks for the nodes popped this iteration.
fn check_termination(
    instance: &PuzzleInstance,
    forward: &Frontier,
    forward_id: NodeId,
    backward: &Frontier,
    backward_id: NodeId,
) -> Option<Vec<u8>> {
    let forward_board = forward.node(forward_id).board;
    let backward_board = backward.node(backward_id).board;

    if forward_board == instance.goal {
        trace!("forward search reached the goal");
        let mut moves = forward.arena().moves_to_root(forward_id);
        moves.reverse();
        return Some(moves);
    }

    if backward_board == instance.initial {
        trace!("backward search reached the initial board");
        return Some(backward.arena().moves_to_root(backward_id));
    }

    if let Some(meeting) = forward.find(&backward_board) {
        trace!("backward node already seen by forward search");
        return Some(join_at_meeting(forward, meeting, backward, backward_id));
    }

    if let Some(meeting) = backward.find(&forward_board) {
        trace!("forward node already seen by backward search");
        return Some(join_at_meeting(forward, forward_id, backward, meeting));
    }

    None
}

/// Joins the forward chain ending at `forward_id` with the backward chain
/// ending at `backward_id`; both nodes hold the same board.
///
/// While the parents of the two nodes are also equal, the last forward
/// move is undone by the first backward move, so both pointers step up.
fn join_at_meeting(
    forward: &Frontier,
    mut forward_id: NodeId,
    backward: &Frontier,
    mut backward_id: NodeId,
) -> Vec<u8> {
    while let (Some(forward_parent), Some(backward_parent)) = (
        forward.node(forward_id).parent,
        backward.node(backward_id).parent,
    ) {
        if forward.node(forward_parent).board != backward.node(backward_parent).board {
            break;
        }
        forward_id = forward_parent;
        backward_id = backward_parent;
    }

    let mut moves = forward.arena().moves_to_root(forward_id);
    moves.reverse();
    moves.extend(backward.arena().moves_to_root(backward_id));
    moves
}
