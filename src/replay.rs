//! Playing a move list out and rendering the intermediate boards.

use crate::board::{Board, SIDE};
use crate::error::ReplayError;

/// Boards per row of rendered output.
const BOARDS_PER_ROW: usize = 6;

/// Width of one rendered board: `SIDE` tiles separated by spaces.
const BOARD_WIDTH: usize = SIDE * 2 - 1;

/// Slides each tile of `moves` into the blank, starting from `initial`.
///
/// Returns every board along the way, `initial` first, so the result has
/// `moves.len() + 1` entries.
pub fn apply_moves(initial: &Board, moves: &[u8]) -> Result<Vec<Board>, ReplayError> {
    let mut boards = Vec::with_capacity(moves.len() + 1);
    boards.push(*initial);

    let mut current = *initial;
    for (step, &tile) in moves.iter().enumerate() {
        current = current
            .slide_tile(tile)
            .ok_or(ReplayError::NotAdjacent {
                step: step + 1,
                tile,
            })?;
        boards.push(current);
    }

    Ok(boards)
}

/// Renders boards side by side, each headed by the move that produced it.
///
/// `moves[i]` labels `boards[i + 1]`; the first board is labelled `start`.
pub fn format_steps(boards: &[Board], moves: &[u8]) -> String {
    let labels: Vec<String> = std::iter::once("start".to_string())
        .chain(
            moves
                .iter()
                .enumerate()
                .map(|(i, tile)| format!("{}:{}", i + 1, tile)),
        )
        .collect();

    let mut output = String::new();
    for (chunk_index, chunk) in boards.chunks(BOARDS_PER_ROW).enumerate() {
        if chunk_index > 0 {
            output.push('\n');
        }
        let first = chunk_index * BOARDS_PER_ROW;

        let header: Vec<String> = (first..first + chunk.len())
            .map(|i| {
                let label = labels.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", label, width = BOARD_WIDTH)
            })
            .collect();
        push_line(&mut output, &header.join("  "));

        for row in 0..SIDE {
            let cells: Vec<String> = chunk.iter().map(|board| render_row(board, row)).collect();
            push_line(&mut output, &cells.join("  "));
        }
    }

    output
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line.trim_end());
    output.push('\n');
}

fn render_row(board: &Board, row: usize) -> String {
    (0..SIDE)
        .map(|col| match board.tile(row, col) {
            0 => "_".to_string(),
            tile => tile.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
