//! Parity test deciding whether one board can reach another.

use crate::board::Board;

/// Counts pairs of non-blank tiles that appear out of order in row-major
/// reading order.
pub fn inversion_count(board: &Board) -> u32 {
    let tiles: Vec<u8> = board
        .tiles()
        .iter()
        .copied()
        .filter(|&tile| tile != 0)
        .collect();

    let mut inversions = 0;
    for (i, &earlier) in tiles.iter().enumerate() {
        inversions += tiles[i + 1..]
            .iter()
            .filter(|&&later| earlier > later)
            .count() as u32;
    }
    inversions
}

/// Returns true iff a sequence of blank moves turns `initial` into `goal`.
///
/// On a 3x3 board a blank move never changes inversion parity, and any two
/// boards with equal parity are connected.
pub fn is_solvable(initial: &Board, goal: &Board) -> bool {
    inversion_count(initial) % 2 == inversion_count(goal) % 2
}
