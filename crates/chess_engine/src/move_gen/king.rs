//! King move generation, including castling
//!
//! ## Castling
//!
//! Castling is offered only while the king stands on its home square
//! (column 4 of its home row). For each side the move is admissible iff:
//! 1. The matching castling-rights flag is still set
//! 2. Every square between king and rook is empty
//! 3. A rook of the king's color still sits on its home square
//! 4. None of the king's start, transit and destination squares is attacked
//!
//! Attacks are judged on the current board, before the king moves.

use super::attack::is_square_attacked;
use crate::constants::*;
use crate::position::Position;
use crate::types::*;

/// One-step king moves (no castling)
pub(super) fn generate_king_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    for &(dr, dc) in &KING_OFFSETS {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        if !pos.board.is_color(to, color) {
            moves.push(Move::new(from, to, MoveKind::Normal));
        }
    }
}

pub(super) fn generate_castling_moves(
    pos: &Position,
    from: Square,
    color: Color,
    moves: &mut Vec<Move>,
) {
    let row = color.home_row();
    if from != Square::at(row, KING_HOME_COL) {
        return;
    }
    let rights = pos.castling.side(color);

    if rights.kingside
        && can_castle(
            pos,
            color,
            KINGSIDE_ROOK_COL,
            &[5, 6],
            &[KING_HOME_COL, 5, KINGSIDE_KING_TARGET],
        )
    {
        moves.push(Move::new(
            from,
            Square::at(row, KINGSIDE_KING_TARGET),
            MoveKind::CastleKingside,
        ));
    }

    if rights.queenside
        && can_castle(
            pos,
            color,
            QUEENSIDE_ROOK_COL,
            &[1, 2, 3],
            &[KING_HOME_COL, 3, QUEENSIDE_KING_TARGET],
        )
    {
        moves.push(Move::new(
            from,
            Square::at(row, QUEENSIDE_KING_TARGET),
            MoveKind::CastleQueenside,
        ));
    }
}

fn can_castle(pos: &Position, color: Color, rook_col: u8, between: &[u8], king_path: &[u8]) -> bool {
    let row = color.home_row();

    let rook_home = pos.piece_at(Square::at(row, rook_col));
    if rook_home != Some(Piece::new(PieceType::Rook, color)) {
        return false;
    }
    if !between.iter().all(|&col| pos.board.is_empty(Square::at(row, col))) {
        return false;
    }
    let enemy = color.opposite();
    !king_path
        .iter()
        .any(|&col| is_square_attacked(&pos.board, Square::at(row, col), enemy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn castling_setup() -> Position {
        let mut board = Board::empty();
        board.set(Square::at(7, 4), Some(Piece::new(PieceType::King, Color::White)));
        board.set(Square::at(7, 7), Some(Piece::new(PieceType::Rook, Color::White)));
        board.set(Square::at(7, 0), Some(Piece::new(PieceType::Rook, Color::White)));
        board.set(Square::at(0, 4), Some(Piece::new(PieceType::King, Color::Black)));
        Position::from_parts(board, CastlingRights::default(), None)
    }

    fn castles(pos: &Position) -> Vec<MoveKind> {
        let mut moves = Vec::new();
        generate_castling_moves(pos, Square::at(7, 4), Color::White, &mut moves);
        moves.into_iter().map(|m| m.kind).collect()
    }

    #[test]
    fn test_both_castles_available() {
        let pos = castling_setup();
        assert_eq!(
            castles(&pos),
            vec![MoveKind::CastleKingside, MoveKind::CastleQueenside]
        );
    }

    #[test]
    fn test_castling_requires_rights() {
        let mut pos = castling_setup();
        pos.castling.revoke_rook_square(Color::White, Square::at(7, 7));
        assert_eq!(castles(&pos), vec![MoveKind::CastleQueenside]);
    }

    #[test]
    fn test_castling_blocked_by_piece_between() {
        let mut pos = castling_setup();
        // b1 only matters for queenside
        pos.board.set(Square::at(7, 1), Some(Piece::new(PieceType::Knight, Color::White)));
        assert_eq!(castles(&pos), vec![MoveKind::CastleKingside]);
    }

    #[test]
    fn test_castling_through_attacked_square() {
        let mut pos = castling_setup();
        // Black rook on f8 covers f1
        pos.board.set(Square::at(0, 5), Some(Piece::new(PieceType::Rook, Color::Black)));
        assert_eq!(castles(&pos), vec![MoveKind::CastleQueenside]);
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let mut pos = castling_setup();
        pos.board.set(Square::at(3, 4), Some(Piece::new(PieceType::Rook, Color::Black)));
        // Black rook on e5 gives check
        assert!(castles(&pos).is_empty());
    }

    #[test]
    fn test_castling_needs_rook_on_home_square() {
        let mut pos = castling_setup();
        pos.board.take(Square::at(7, 0));
        assert_eq!(castles(&pos), vec![MoveKind::CastleKingside]);
    }

    #[test]
    fn test_b1_attack_does_not_stop_queenside() {
        let mut pos = castling_setup();
        // Bishop on e4 hits b1 only
        pos.board.set(Square::at(4, 4), Some(Piece::new(PieceType::Bishop, Color::Black)));
        assert!(castles(&pos).contains(&MoveKind::CastleQueenside));
    }
}
