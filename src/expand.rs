//! Successor generation for search nodes.

use crate::board::Direction;
use crate::frontier::Frontier;
use crate::node::{NodeId, SearchNode};
use crate::solver::Strategy;

/// Generates the children of `node` (stored under `id`).
///
/// A direction is used when the blank stays on the board, it does not undo
/// `node.last_direction`, and `node.depth` is below `depth_limit` if one is
/// given.
pub fn successors(node: &SearchNode, id: NodeId, depth_limit: Option<u32>) -> Vec<SearchNode> {
    if depth_limit.is_some_and(|limit| node.depth >= limit) {
        return Vec::new();
    }

    Direction::ALL
        .iter()
        .filter(|&&direction| node.last_direction != Some(direction.opposite()))
        .filter_map(|&direction| {
            let (board, moved_tile) = node.board.slide(direction)?;
            Some(SearchNode {
                board,
                depth: node.depth + 1,
                last_direction: Some(direction),
                moved_tile: Some(moved_tile),
                parent: Some(id),
            })
        })
        .collect()
}

/// Expands the node `id` of `frontier` and pushes its children back into it.
///
/// Under the depth-limited strategy children whose board the frontier has
/// already recorded are dropped. Returns the number of children pushed.
pub fn expand(frontier: &mut Frontier, id: NodeId, strategy: Strategy) -> usize {
    let node = *frontier.node(id);
    let mut pushed = 0;

    for child in successors(&node, id, strategy.depth_limit()) {
        if strategy.suppresses_duplicates() && frontier.contains(&child.board) {
            continue;
        }
        frontier.push(child);
        pushed += 1;
    }

    pushed
}
