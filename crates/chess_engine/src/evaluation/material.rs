//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::Board;
use crate::constants::material_value;
use crate::types::*;

/// Material balance from `perspective`'s point of view
pub fn evaluate_material(board: &Board, perspective: Color) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = material_value(piece.piece_type);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{KNIGHT_VALUE, QUEEN_VALUE};

    #[test]
    fn test_starting_material_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(evaluate_material(&board, Color::White), 0);
        assert_eq!(evaluate_material(&board, Color::Black), 0);
    }

    #[test]
    fn test_material_after_queen_loss() {
        let mut board = Board::starting_position();
        board.take(Square::at(7, 3));
        board.take(Square::at(0, 1));
        assert_eq!(
            evaluate_material(&board, Color::Black),
            QUEEN_VALUE - KNIGHT_VALUE
        );
        assert_eq!(
            evaluate_material(&board, Color::White),
            KNIGHT_VALUE - QUEEN_VALUE
        );
    }
}
