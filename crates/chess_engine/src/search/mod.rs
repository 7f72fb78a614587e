//! Move selection for the computer-controlled side
//!
//! This module implements the AI's tiered move choice. The first tier that
//! produces a move wins:
//! 1. Immediate mate: a move after which the opponent is checkmated
//! 2. Greedy capture: the capture of the most valuable target
//! 3. Minimax with alpha-beta pruning at a difficulty-dependent depth, with
//!    captures ordered first and a per-node branching cap
//! 4. Random: a uniformly chosen move, also used instead of tier 3 by the
//!    lowest difficulty band
//!
//! The search runs synchronously on the caller's thread and mutates the
//! given position in place through make/unmake; the position is identical
//! when [`choose_move`] returns.
//!
//! ## Module Organization
//!
//! - `difficulty` - The 1-15 difficulty ladder and its bands
//! - `tactics` - Mate-in-one, greedy capture and random tiers
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `ordering` - Move ordering heuristics

mod alphabeta;
mod difficulty;
mod ordering;
mod tactics;

pub use difficulty::Difficulty;

use rand::Rng;
use tracing::debug;

use alphabeta::{search_root, SearchContext};
use crate::move_gen::generate_moves;
use crate::position::Position;
use crate::types::*;

/// Which selection tier produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTier {
    Mate,
    Capture,
    Minimax,
    Random,
}

/// Move chosen by [`choose_move`] with search statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub mv: Move,
    pub tier: SearchTier,
    /// Minimax score from the AI's perspective (minimax tier only)
    pub score: Option<i32>,
    pub nodes: u64,
}

/// Choose a move for `ai_color`
///
/// Returns `None` only when `ai_color` has no moves at all; callers are
/// expected to have ended the game by stalemate detection before asking.
/// Promotions chosen by the AI are always to a queen.
pub fn choose_move<R: Rng + ?Sized>(
    pos: &mut Position,
    ai_color: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<SearchResult> {
    let moves = generate_moves(pos, ai_color);
    if moves.is_empty() {
        debug!("[SEARCH] {} has no moves", ai_color);
        return None;
    }

    let result = select(pos, &moves, ai_color, difficulty, rng)?;
    let result = SearchResult {
        mv: with_queen_promotion(pos, result.mv),
        ..result
    };

    debug!(
        "[SEARCH] {} plays {} via {:?} (difficulty {}, score {:?}, nodes {})",
        ai_color,
        result.mv,
        result.tier,
        difficulty.value(),
        result.score,
        result.nodes
    );
    Some(result)
}

fn select<R: Rng + ?Sized>(
    pos: &mut Position,
    moves: &[Move],
    ai_color: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<SearchResult> {
    let found = |mv, tier| SearchResult {
        mv,
        tier,
        score: None,
        nodes: 0,
    };

    if let Some(mv) = tactics::find_mating_move(pos, moves, ai_color.opposite()) {
        return Some(found(mv, SearchTier::Mate));
    }

    if let Some((mv, _victim)) = tactics::best_capture(pos, moves) {
        return Some(found(mv, SearchTier::Capture));
    }

    if difficulty.uses_search() {
        let mut ctx = SearchContext::new(ai_color, difficulty.branch_cap());
        if let Some((mv, score)) = search_root(pos, difficulty.depth(), &mut ctx) {
            debug!(
                "[SEARCH] depth {} cap {}: {} nodes, {} cutoffs",
                difficulty.depth(),
                difficulty.branch_cap(),
                ctx.nodes,
                ctx.cutoffs
            );
            return Some(SearchResult {
                mv,
                tier: SearchTier::Minimax,
                score: Some(score),
                nodes: ctx.nodes,
            });
        }
    }

    tactics::random_move(moves, rng).map(|mv| found(mv, SearchTier::Random))
}

/// Attach a queen promotion to a pawn move onto its promotion row
fn with_queen_promotion(pos: &Position, mv: Move) -> Move {
    match pos.piece_at(mv.from) {
        Some(piece)
            if piece.piece_type == PieceType::Pawn
                && mv.to.row == piece.color.promotion_row()
                && mv.promotion.is_none() =>
        {
            mv.with_promotion(PieceType::Queen)
        }
        _ => mv,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::move_gen::moves_from;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn difficulty(v: u8) -> Difficulty {
        Difficulty::new(v).unwrap()
    }

    #[test]
    fn test_mate_tier_wins_over_capture() {
        // Black king a8 walled in by its own pieces. White may take a free
        // pawn with Rxh3 but Ne6-c7 mates.
        let mut board = Board::empty();
        board.set(sq("a8"), Some(Piece::new(PieceType::King, Color::Black)));
        board.set(sq("b8"), Some(Piece::new(PieceType::Rook, Color::Black)));
        board.set(sq("c8"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        for rank in 1..=7 {
            board.set(sq(&format!("a{rank}")), Some(Piece::new(PieceType::Pawn, Color::Black)));
            board.set(sq(&format!("b{rank}")), Some(Piece::new(PieceType::Pawn, Color::Black)));
        }
        board.set(sq("h3"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        board.set(sq("h2"), Some(Piece::new(PieceType::Rook, Color::White)));
        board.set(sq("e6"), Some(Piece::new(PieceType::Knight, Color::White)));
        board.set(sq("h1"), Some(Piece::new(PieceType::King, Color::White)));
        let mut pos = Position::from_board(board);
        let before = pos.clone();

        let mut rng = StdRng::seed_from_u64(1);
        let result = choose_move(&mut pos, Color::White, difficulty(8), &mut rng).unwrap();
        assert_eq!(result.tier, SearchTier::Mate);
        assert_eq!((result.mv.from, result.mv.to), (sq("e6"), sq("c7")));
        assert_eq!(pos, before);
    }

    #[test]
    fn test_capture_tier_at_lowest_difficulty() {
        let mut pos = Position::new();
        // Hang a white knight on e5 in front of the black d6 pawn
        pos.board.take(Square::at(1, 3));
        pos.board.set(sq("d6"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        pos.board.set(sq("e5"), Some(Piece::new(PieceType::Knight, Color::White)));

        let mut rng = StdRng::seed_from_u64(3);
        let result = choose_move(&mut pos, Color::Black, difficulty(1), &mut rng).unwrap();
        assert_eq!(result.tier, SearchTier::Capture);
        assert_eq!((result.mv.from, result.mv.to), (sq("d6"), sq("e5")));
    }

    #[test]
    fn test_minimax_tier_restores_position() {
        let mut pos = Position::new();
        let before = pos.clone();
        let mut rng = StdRng::seed_from_u64(5);
        let result = choose_move(&mut pos, Color::Black, difficulty(5), &mut rng).unwrap();
        assert_eq!(result.tier, SearchTier::Minimax);
        assert!(result.score.is_some());
        assert!(result.nodes > 0);
        assert_eq!(pos, before);
        assert!(moves_from(&pos, result.mv.from).contains(&result.mv));
    }

    #[test]
    fn test_lowest_band_plays_random_move() {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(9);
        let result = choose_move(&mut pos, Color::Black, Difficulty::MIN, &mut rng).unwrap();
        assert_eq!(result.tier, SearchTier::Random);
        assert_eq!(result.score, None);
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::new(PieceType::King, Color::White)));
        let mut pos = Position::from_board(board);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(choose_move(&mut pos, Color::Black, difficulty(15), &mut rng).is_none());
    }

    #[test]
    fn test_ai_promotes_to_queen() {
        let mut board = Board::empty();
        board.set(sq("a2"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        let pos = Position::from_board(board);
        let push = Move::new(sq("a2"), sq("a1"), MoveKind::Normal);
        assert_eq!(with_queen_promotion(&pos, push).promotion, Some(PieceType::Queen));

        let quiet = Move::new(sq("a2"), sq("a1"), MoveKind::Normal).with_promotion(PieceType::Rook);
        assert_eq!(with_queen_promotion(&pos, quiet).promotion, Some(PieceType::Rook));
    }
}
