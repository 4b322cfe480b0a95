//! Priority-ordered open set for one search direction.
//!
//! Besides the open queue, each frontier keeps a registry of every board it
//! has ever been handed. The registry only grows during a solve and is used
//! for meeting-point lookup and, under the depth-limited strategy, for
//! duplicate suppression.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::board::Board;
use crate::cost::CostMode;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::PuzzleInstance;

/// Heap entry ordered by cost alone, lowest first.
///
/// Ties are not broken by id; equal-cost nodes come out in heap order.
#[derive(Clone, Copy, Debug)]
struct Entry {
    cost: u32,
    id: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other.cost.cmp(&self.cost)
    }
}

/// Open set, node storage and registry of one search direction.
#[derive(Debug)]
pub struct Frontier {
    instance: PuzzleInstance,
    mode: CostMode,
    arena: NodeArena,
    open: BinaryHeap<Entry>,
    /// First node recorded for each board.
    registry: FxHashMap<Board, NodeId>,
}

impl Frontier {
    /// Creates a frontier seeded with a root node for `root`.
    pub fn new(instance: PuzzleInstance, root: Board, mode: CostMode) -> Self {
        let mut frontier = Self {
            instance,
            mode,
            arena: NodeArena::new(),
            open: BinaryHeap::new(),
            registry: FxHashMap::default(),
        };
        frontier.push(SearchNode::root(root));
        frontier
    }

    /// Stores `node`, queues it by cost and records it in the registry.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let cost = self.mode.cost(&node, &self.instance);
        let id = self.arena.push(node);
        self.open.push(Entry { cost, id });
        self.registry.entry(node.board).or_insert(id);
        id
    }

    /// Removes and returns the lowest-cost open node.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.open.pop().map(|entry| entry.id)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.arena.get(id)
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn mode(&self) -> CostMode {
        self.mode
    }

    /// First recorded node whose board equals `board`.
    pub fn find(&self, board: &Board) -> Option<NodeId> {
        self.registry.get(board).copied()
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.registry.contains_key(board)
    }

    /// True when no open nodes remain.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Number of open nodes.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Number of distinct boards recorded.
    pub fn registry_len(&self) -> usize {
        self.registry.len()
    }

    /// Number of nodes ever pushed, duplicates included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }
}
