//! Board representation and blank moves for the 3x3 sliding puzzle.
//!
//! A board is a flat row-major array of nine tiles where `0` is the blank.
//! Boards are small `Copy` values: every move produces a new board and the
//! old one is never mutated.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::PuzzleError;
use crate::solvability::is_solvable;

/// Number of rows (and columns) on the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// One of the four ways the blank can move.
///
/// The discriminants match the classic encoding where direction `i` and
/// direction `3 - i` undo each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down = 0,
    Left = 1,
    Right = 2,
    Up = 3,
}

/// Row delta of the blank for each direction, indexed by discriminant.
const ROW_DELTA: [i32; 4] = [1, 0, 0, -1];

/// Column delta of the blank for each direction, indexed by discriminant.
const COL_DELTA: [i32; 4] = [0, -1, 1, 0];

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Up,
    ];

    /// Index of this direction in `0..4`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction that exactly undoes this one.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::ALL[3 - self.index()]
    }

    /// `(row, column)` offset applied to the blank.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        (ROW_DELTA[self.index()], COL_DELTA[self.index()])
    }
}

/// An immutable 3x3 arrangement of the tiles `0..=8`.
///
/// Equality and hashing are element-wise over the tiles; the cached blank
/// position is derived from them and never disagrees.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: u8,
}

impl Board {
    /// The conventional goal: tiles in order with the blank bottom-right.
    pub const SOLVED: Board = Board {
        tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        blank: 8,
    };

    /// Builds a board from row-major tiles, checking they are a permutation
    /// of `0..=8`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELLS];
        for &value in &tiles {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(PuzzleError::TileOutOfRange {
                    value: value.into(),
                })?;
            if *slot {
                return Err(PuzzleError::DuplicateTile { value });
            }
            *slot = true;
        }
        Ok(Self::from_permutation(tiles))
    }

    /// Builds a board from a flat integer slice as handed over by callers
    /// of the numeric boundary.
    pub fn from_flat(values: &[i32]) -> Result<Self, PuzzleError> {
        Self::from_values(values.iter().map(|&value| i64::from(value)))
    }

    fn from_values(values: impl ExactSizeIterator<Item = i64>) -> Result<Self, PuzzleError> {
        if values.len() != CELLS {
            return Err(PuzzleError::WrongLength {
                actual: values.len(),
            });
        }

        let mut tiles = [0u8; CELLS];
        for (cell, value) in tiles.iter_mut().zip(values) {
            *cell = u8::try_from(value)
                .ok()
                .filter(|&tile| (tile as usize) < CELLS)
                .ok_or(PuzzleError::TileOutOfRange { value })?;
        }
        Self::new(tiles)
    }

    /// Caller guarantees `tiles` is a permutation of `0..=8`.
    fn from_permutation(tiles: [u8; CELLS]) -> Self {
        let blank = tiles.iter().position(|&tile| tile == 0).unwrap_or(0) as u8;
        Self { tiles, blank }
    }

    /// Row-major tiles.
    #[inline]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Tile at `(row, col)`.
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * SIDE + col]
    }

    /// Flat index of the blank.
    #[inline]
    pub fn blank_index(&self) -> usize {
        self.blank as usize
    }

    #[inline]
    pub fn blank_row(&self) -> usize {
        self.blank_index() / SIDE
    }

    #[inline]
    pub fn blank_col(&self) -> usize {
        self.blank_index() % SIDE
    }

    /// Moves the blank one step in `direction`.
    ///
    /// Returns the new board together with the tile that slid into the old
    /// blank position, or `None` if the blank would leave the board.
    pub fn slide(&self, direction: Direction) -> Option<(Board, u8)> {
        let (row_delta, col_delta) = direction.delta();
        let row = self.blank_row() as i32 + row_delta;
        let col = self.blank_col() as i32 + col_delta;

        let bounds = 0..SIDE as i32;
        if !bounds.contains(&row) || !bounds.contains(&col) {
            return None;
        }

        let target = row as usize * SIDE + col as usize;
        let mut tiles = self.tiles;
        let moved_tile = tiles[target];
        tiles.swap(self.blank_index(), target);

        Some((
            Board {
                tiles,
                blank: target as u8,
            },
            moved_tile,
        ))
    }

    /// Slides `tile` into the blank, if the tile is next to it.
    pub fn slide_tile(&self, tile: u8) -> Option<Board> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.slide(direction))
            .find(|&(_, moved_tile)| moved_tile == tile && tile != 0)
            .map(|(board, _)| board)
    }

    /// Shuffles the tiles of `goal` until the result can reach `goal`.
    ///
    /// Half of all permutations qualify, so this terminates quickly.
    pub fn random_solvable<R: Rng + ?Sized>(goal: &Board, rng: &mut R) -> Board {
        let mut tiles = goal.tiles;
        loop {
            tiles.shuffle(rng);
            let candidate = Board::from_permutation(tiles);
            if is_solvable(&candidate, goal) {
                return candidate;
            }
        }
    }

    /// Walks the blank `steps` random moves away from this board, never
    /// immediately undoing the previous move.
    pub fn scrambled<R: Rng + ?Sized>(&self, steps: usize, rng: &mut R) -> Board {
        let mut board = *self;
        let mut last: Option<Direction> = None;

        for _ in 0..steps {
            let candidates: Vec<(Board, Direction)> = Direction::ALL
                .iter()
                .filter(|&&direction| last != Some(direction.opposite()))
                .filter_map(|&direction| board.slide(direction).map(|(next, _)| (next, direction)))
                .collect();

            if let Some(&(next, direction)) = candidates.choose(rng) {
                board = next;
                last = Some(direction);
            }
        }

        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl fmt::Display for Board {
    /// Three rows of space-separated tiles, blank shown as `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.tile(row, col) {
                    0 => write!(f, "_")?,
                    tile => write!(f, "{}", tile)?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.tiles)
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Accepts `1,2,3,4,5,6,7,0,8`, whitespace-separated values, or the
    /// compact nine-digit form `123456708`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let tokens: Vec<&str> = if trimmed.len() == CELLS && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            (0..CELLS).map(|i| &trimmed[i..i + 1]).collect()
        } else {
            trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .collect()
        };

        let values = tokens
            .iter()
            .map(|token| {
                token.parse::<i64>().map_err(|_| PuzzleError::InvalidToken {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<i64>, _>>()?;

        Self::from_values(values.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().index(), 3 - direction.index());
            assert_eq!(direction.opposite().opposite(), direction);

            let (row, col) = direction.delta();
            let (opposite_row, opposite_col) = direction.opposite().delta();
            assert_eq!((row + opposite_row, col + opposite_col), (0, 0));
        }
    }

    #[test]
    fn test_new_rejects_non_permutations() {
        assert_eq!(
            Board::new([1, 1, 2, 3, 4, 5, 6, 7, 0]),
            Err(PuzzleError::DuplicateTile { value: 1 })
        );
        assert_eq!(
            Board::new([9, 1, 2, 3, 4, 5, 6, 7, 0]),
            Err(PuzzleError::TileOutOfRange { value: 9 })
        );
        assert_eq!(Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]), Ok(Board::SOLVED));
    }

    #[test]
    fn test_from_flat_checks_length_and_range() {
        assert_eq!(
            Board::from_flat(&[1, 2, 3]),
            Err(PuzzleError::WrongLength { actual: 3 })
        );
        assert_eq!(
            Board::from_flat(&[-1, 2, 3, 4, 5, 6, 7, 8, 0]),
            Err(PuzzleError::TileOutOfRange { value: -1 })
        );
        let board = Board::from_flat(&[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        assert_eq!((board.blank_row(), board.blank_col()), (1, 1));
    }

    #[test]
    fn test_parse_accepts_all_notations() {
        let expected = Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!("1,2,3,4,5,6,7,0,8".parse::<Board>(), Ok(expected));
        assert_eq!("1 2 3 4 5 6 7 0 8".parse::<Board>(), Ok(expected));
        assert_eq!("1, 2, 3,\n4, 5, 6,\n7, 0, 8".parse::<Board>(), Ok(expected));
        assert_eq!("123456708".parse::<Board>(), Ok(expected));
        assert_eq!(
            "1,2,x,4,5,6,7,0,8".parse::<Board>(),
            Err(PuzzleError::InvalidToken {
                token: "x".to_string()
            })
        );
        assert_eq!(
            "12345678".parse::<Board>(),
            Err(PuzzleError::WrongLength { actual: 1 })
        );
    }

    #[test]
    fn test_slide_respects_bounds() {
        // blank in the bottom-right corner can only move up or left
        let board = Board::SOLVED;
        assert!(board.slide(Direction::Down).is_none());
        assert!(board.slide(Direction::Right).is_none());

        let (up, moved) = board.slide(Direction::Up).unwrap();
        assert_eq!(moved, 6);
        assert_eq!(up.tiles(), &[1, 2, 3, 4, 5, 0, 7, 8, 6]);
        assert_eq!(up.blank_index(), 5);

        let (left, moved) = board.slide(Direction::Left).unwrap();
        assert_eq!(moved, 8);
        assert_eq!(left.tiles(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
    }

    #[test]
    fn test_slide_tile_requires_adjacency() {
        let board = Board::SOLVED;
        assert_eq!(
            board.slide_tile(8).map(|b| *b.tiles()),
            Some([1, 2, 3, 4, 5, 6, 7, 0, 8])
        );
        assert!(board.slide_tile(1).is_none());
        assert!(board.slide_tile(0).is_none());
    }

    #[test]
    fn test_display() {
        insta::assert_snapshot!(Board::SOLVED.to_string(), @r"
        1 2 3
        4 5 6
        7 8 _
        ");
    }

    #[test]
    fn test_random_boards_are_solvable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let board = Board::random_solvable(&Board::SOLVED, &mut rng);
            assert!(is_solvable(&board, &Board::SOLVED));

            let scrambled = board.scrambled(25, &mut rng);
            assert!(is_solvable(&scrambled, &board));
        }
    }
}
