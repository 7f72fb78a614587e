//! Bishop move generation: diagonal rays

use super::sliding::generate_sliding_moves;
use crate::constants::BISHOP_DIRS;
use crate::position::Position;
use crate::types::*;

pub(super) fn generate_bishop_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_sliding_moves(pos, from, color, &BISHOP_DIRS, moves);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_bishop_in_corner_covers_long_diagonal() {
        let mut board = Board::empty();
        board.set(Square::at(7, 0), Some(Piece::new(PieceType::Bishop, Color::White)));
        let pos = Position::from_board(board);
        let mut moves = Vec::new();
        generate_bishop_moves(&pos, Square::at(7, 0), Color::White, &mut moves);
        assert_eq!(moves.len(), 7);
    }
}
