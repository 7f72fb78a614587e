//! Rook move generation: orthogonal rays

use super::sliding::generate_sliding_moves;
use crate::constants::ROOK_DIRS;
use crate::position::Position;
use crate::types::*;

pub(super) fn generate_rook_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_sliding_moves(pos, from, color, &ROOK_DIRS, moves);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_rook_on_empty_board_has_fourteen_moves() {
        let mut board = Board::empty();
        board.set(Square::at(3, 3), Some(Piece::new(PieceType::Rook, Color::Black)));
        let pos = Position::from_board(board);
        let mut moves = Vec::new();
        generate_rook_moves(&pos, Square::at(3, 3), Color::Black, &mut moves);
        assert_eq!(moves.len(), 14);
    }
}
