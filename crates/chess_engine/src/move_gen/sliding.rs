//! Sliding piece move generation
//!
//! Common ray casting for bishops, rooks and queens. A ray continues to the
//! board edge until it meets an occupied square; that square is included as
//! a capture only when the occupant is an enemy.

use crate::board::Board;
use crate::position::Position;
use crate::types::*;

/// Append every square reachable along `dirs` from `from`
pub(super) fn generate_sliding_moves(
    pos: &Position,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            match pos.piece_at(to) {
                None => moves.push(Move::new(from, to, MoveKind::Normal)),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(Move::new(from, to, MoveKind::Normal));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// True if `to` lies on one of `dirs` from `from` with nothing in between
pub(super) fn ray_reaches(board: &Board, from: Square, to: Square, dirs: &[(i8, i8)]) -> bool {
    let dr = (to.row as i8 - from.row as i8).signum();
    let dc = (to.col as i8 - from.col as i8).signum();
    if (dr, dc) == (0, 0) || !dirs.contains(&(dr, dc)) {
        return false;
    }
    // Must be a straight line or a true diagonal
    let rows = (to.row as i8 - from.row as i8).abs();
    let cols = (to.col as i8 - from.col as i8).abs();
    if dr != 0 && dc != 0 && rows != cols {
        return false;
    }

    let mut current = from;
    while let Some(next) = current.offset(dr, dc) {
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BISHOP_DIRS, ROOK_DIRS};

    #[test]
    fn test_ray_stops_at_first_piece() {
        let mut board = Board::empty();
        let from = Square::at(4, 0);
        board.set(from, Some(Piece::new(PieceType::Rook, Color::White)));
        board.set(Square::at(4, 3), Some(Piece::new(PieceType::Pawn, Color::Black)));
        board.set(Square::at(2, 0), Some(Piece::new(PieceType::Pawn, Color::White)));
        let pos = Position::from_board(board);

        let mut moves = Vec::new();
        generate_sliding_moves(&pos, from, Color::White, &ROOK_DIRS, &mut moves);
        let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();

        assert!(targets.contains(&Square::at(4, 3)), "enemy blocker is a capture");
        assert!(!targets.contains(&Square::at(4, 4)), "ray ends at the blocker");
        assert!(targets.contains(&Square::at(3, 0)));
        assert!(!targets.contains(&Square::at(2, 0)), "own piece is not a target");
        assert_eq!(targets.len(), 3 + 1 + 3);
    }

    #[test]
    fn test_ray_reaches_respects_blockers_and_geometry() {
        let mut board = Board::empty();
        board.set(Square::at(2, 2), Some(Piece::new(PieceType::Knight, Color::Black)));

        assert!(ray_reaches(&board, Square::at(0, 0), Square::at(1, 1), &BISHOP_DIRS));
        assert!(!ray_reaches(&board, Square::at(0, 0), Square::at(3, 3), &BISHOP_DIRS));
        assert!(!ray_reaches(&board, Square::at(0, 0), Square::at(1, 2), &BISHOP_DIRS));
        assert!(!ray_reaches(&board, Square::at(0, 0), Square::at(1, 1), &ROOK_DIRS));
        assert!(ray_reaches(&board, Square::at(7, 0), Square::at(0, 0), &ROOK_DIRS));
    }
}
