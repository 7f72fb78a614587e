//! Shallow tactical tiers: mate in one, greedy capture and random fallback

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::constants::capture_value;
use crate::make_unmake::MoveGuard;
use crate::move_gen::{captured_piece, is_checkmate};
use crate::position::Position;
use crate::types::*;

/// First move after which `target` is (advisory) checkmated
pub(crate) fn find_mating_move(pos: &mut Position, moves: &[Move], target: Color) -> Option<Move> {
    for &mv in moves {
        let guard = MoveGuard::new(pos, mv);
        if is_checkmate(&guard, target) {
            return Some(mv);
        }
    }
    None
}

/// Capture of the most valuable target; ties go to the first one found
pub(crate) fn best_capture(pos: &Position, moves: &[Move]) -> Option<(Move, Piece)> {
    let mut best: Option<(Move, Piece)> = None;
    for &mv in moves {
        let Some(victim) = captured_piece(pos, &mv) else {
            continue;
        };
        let better = best.map_or(true, |(_, current)| {
            capture_value(victim.piece_type) > capture_value(current.piece_type)
        });
        if better {
            best = Some((mv, victim));
        }
    }
    best
}

/// Uniformly random move
pub(crate) fn random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::move_gen::generate_moves;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn test_best_capture_prefers_highest_value() {
        let mut board = Board::empty();
        board.set(sq("d4"), Some(Piece::new(PieceType::Queen, Color::Black)));
        board.set(sq("c3"), Some(Piece::new(PieceType::Pawn, Color::White)));
        board.set(sq("d1"), Some(Piece::new(PieceType::Rook, Color::White)));
        board.set(sq("b4"), Some(Piece::new(PieceType::Knight, Color::White)));
        let pos = Position::from_board(board);

        let moves = generate_moves(&pos, Color::Black);
        let (mv, victim) = best_capture(&pos, &moves).unwrap();
        assert_eq!(victim.piece_type, PieceType::Rook);
        assert_eq!(mv.to, sq("d1"));
    }

    #[test]
    fn test_best_capture_ties_keep_first_found() {
        let mut board = Board::empty();
        board.set(sq("d4"), Some(Piece::new(PieceType::Rook, Color::Black)));
        board.set(sq("d2"), Some(Piece::new(PieceType::Knight, Color::White)));
        board.set(sq("b4"), Some(Piece::new(PieceType::Bishop, Color::White)));
        let pos = Position::from_board(board);

        let moves = generate_moves(&pos, Color::Black);
        let first_capture = moves
            .iter()
            .copied()
            .find(|m| captured_piece(&pos, m).is_some())
            .unwrap();
        let (mv, _) = best_capture(&pos, &moves).unwrap();
        assert_eq!(mv, first_capture);
    }

    #[test]
    fn test_no_captures_yields_none() {
        let pos = Position::new();
        let moves = generate_moves(&pos, Color::White);
        assert!(best_capture(&pos, &moves).is_none());
    }

    #[test]
    fn test_find_mating_move_restores_position() {
        // Black king a8 walled in by its own pieces; Ne6-c7 is mate
        let mut board = Board::empty();
        board.set(sq("a8"), Some(Piece::new(PieceType::King, Color::Black)));
        board.set(sq("b8"), Some(Piece::new(PieceType::Rook, Color::Black)));
        board.set(sq("c8"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        for rank in 1..=7 {
            board.set(sq(&format!("a{rank}")), Some(Piece::new(PieceType::Pawn, Color::Black)));
            board.set(sq(&format!("b{rank}")), Some(Piece::new(PieceType::Pawn, Color::Black)));
        }
        board.set(sq("e6"), Some(Piece::new(PieceType::Knight, Color::White)));
        board.set(sq("h1"), Some(Piece::new(PieceType::King, Color::White)));
        let mut pos = Position::from_board(board);
        let before = pos.clone();

        let moves = generate_moves(&pos, Color::White);
        let mate = find_mating_move(&mut pos, &moves, Color::Black).unwrap();
        assert_eq!((mate.from, mate.to), (sq("e6"), sq("c7")));
        assert_eq!(pos, before);
    }

    #[test]
    fn test_random_move_is_reproducible_with_seed() {
        let pos = Position::new();
        let moves = generate_moves(&pos, Color::White);
        let a = random_move(&moves, &mut StdRng::seed_from_u64(7));
        let b = random_move(&moves, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(random_move(&[], &mut StdRng::seed_from_u64(7)).is_none());
    }
}
