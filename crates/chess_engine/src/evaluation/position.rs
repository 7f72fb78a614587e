//! Full position evaluation
//!
//! Evaluates positions using material, piece-square tables and a flat check
//! adjustment.

use super::pst::pst_value;
use crate::constants::*;
use crate::move_gen::is_in_check;
use crate::position::Position;
use crate::types::*;

/// Static score of `pos` from `perspective`'s point of view
///
/// Sum of material plus positional bonus for every piece (positive for
/// `perspective`, negative for the opponent), then `CHECK_PENALTY` against
/// whichever side is currently in check.
pub fn evaluate_position(pos: &Position, perspective: Color) -> i32 {
    let mut score: i32 = pos
        .board
        .pieces()
        .map(|(square, piece)| {
            let value = material_value(piece.piece_type) + pst_value(piece, square);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum();

    if is_in_check(pos, perspective) {
        score -= CHECK_PENALTY;
    }
    if is_in_check(pos, perspective.opposite()) {
        score += CHECK_PENALTY;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_starting_position_is_symmetric() {
        let pos = Position::new();
        assert_eq!(evaluate_position(&pos, Color::White), 0);
        assert_eq!(evaluate_position(&pos, Color::Black), 0);
    }

    #[test]
    fn test_perspective_flips_sign() {
        let mut pos = Position::new();
        pos.board.take(Square::at(6, 0));
        let black = evaluate_position(&pos, Color::Black);
        assert!(black > 0);
        assert_eq!(evaluate_position(&pos, Color::White), -black);
    }

    #[test]
    fn test_check_penalty_applies_to_side_in_check() {
        let mut board = Board::empty();
        board.set(Square::at(0, 4), Some(Piece::new(PieceType::King, Color::Black)));
        board.set(Square::at(7, 4), Some(Piece::new(PieceType::King, Color::White)));
        let quiet = evaluate_position(&Position::from_board(board), Color::Black);

        board.set(Square::at(4, 4), Some(Piece::new(PieceType::Rook, Color::White)));
        let rook = Piece::new(PieceType::Rook, Color::White);
        let in_check = evaluate_position(&Position::from_board(board), Color::Black);
        let rook_worth = material_value(PieceType::Rook) + pst_value(rook, Square::at(4, 4));
        assert_eq!(in_check, quiet - rook_worth - CHECK_PENALTY);
    }

    #[test]
    fn test_pawn_advance_raises_score() {
        let kings = || {
            let mut board = Board::empty();
            board.set(Square::at(0, 0), Some(Piece::new(PieceType::King, Color::Black)));
            board.set(Square::at(7, 7), Some(Piece::new(PieceType::King, Color::White)));
            board
        };
        let pawn = Piece::new(PieceType::Pawn, Color::Black);

        let mut home = kings();
        home.set(Square::at(1, 3), Some(pawn));
        let mut advanced = kings();
        advanced.set(Square::at(6, 3), Some(pawn));

        assert!(
            evaluate_position(&Position::from_board(advanced), Color::Black)
                > evaluate_position(&Position::from_board(home), Color::Black)
        );
    }

    #[test]
    fn test_king_on_enemy_back_rank_scores_lower() {
        let lone = |king: Square| {
            let mut board = Board::empty();
            board.set(king, Some(Piece::new(PieceType::King, Color::Black)));
            evaluate_position(&Position::from_board(board), Color::Black)
        };
        // g8 vs g1
        assert!(lone(Square::at(0, 6)) > lone(Square::at(7, 6)));
    }
}
