//! Search nodes and the arena that owns them.
//!
//! Each search direction grows a tree of nodes rooted at its starting board.
//! Nodes are stored in a `Vec` and refer to their parent by index, so the
//! whole tree is released in one step when the arena is dropped.

use crate::board::{Board, Direction};

/// Index of a node inside its [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A board reached at a given depth, with the move that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    /// Number of moves from the root of this node's tree.
    pub depth: u32,
    /// Direction the blank moved to reach this node; `None` for roots.
    pub last_direction: Option<Direction>,
    /// Tile that slid into the previous blank position; `None` for roots.
    pub moved_tile: Option<u8>,
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// A tree root: depth 0, no move, no parent.
    pub fn root(board: Board) -> Self {
        Self {
            board,
            depth: 0,
            last_direction: None,
            moved_tile: None,
            parent: None,
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Owns every node of one search tree.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `node` and returns its id.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Panics if `id` does not belong to this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates from `id` up to the root, `id` included.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }

    /// Tiles moved along the chain from `id` back to the root, in that
    /// order (nearest move first).
    pub fn moves_to_root(&self, id: NodeId) -> Vec<u8> {
        self.ancestors(id)
            .filter_map(|(_, node)| node.moved_tile)
            .collect()
    }
}

/// Iterator over a node's ancestor chain.
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a SearchNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.arena.get(id);
        self.next = node.parent;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a chain root -> Left -> Up from the solved board.
    fn chain() -> (NodeArena, NodeId) {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode::root(Board::SOLVED));

        let mut parent = root;
        for direction in [Direction::Left, Direction::Up] {
            let node = *arena.get(parent);
            let (board, moved_tile) = node.board.slide(direction).unwrap();
            parent = arena.push(SearchNode {
                board,
                depth: node.depth + 1,
                last_direction: Some(direction),
                moved_tile: Some(moved_tile),
                parent: Some(parent),
            });
        }

        (arena, parent)
    }

    #[test]
    fn test_ancestors_walk_to_root() {
        let (arena, leaf) = chain();
        let depths: Vec<u32> = arena.ancestors(leaf).map(|(_, node)| node.depth).collect();
        assert_eq!(depths, vec![2, 1, 0]);

        let (_, last) = arena.ancestors(leaf).last().unwrap();
        assert!(last.is_root());
        assert_eq!(last.board, Board::SOLVED);
    }

    #[test]
    fn test_moves_to_root_skip_the_root() {
        let (arena, leaf) = chain();
        // Left slides 8 right, then Up slides 5 down
        assert_eq!(arena.moves_to_root(leaf), vec![5, 8]);
        assert_eq!(arena.len(), 3);
    }
}
