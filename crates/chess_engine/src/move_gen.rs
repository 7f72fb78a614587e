//! Pseudo-legal move generation
//!
//! Moves are generated per piece with an exhaustive match on [`PieceType`].
//! Generated moves are NOT filtered for leaving the mover's own king in
//! check: a player may move into or stay in check, and the checkmate flag
//! computed from these moves is advisory. Only stalemate and a direct king
//! capture end a game.
//!
//! ## Module Organization
//!
//! - `pawn` - pushes, double pushes, diagonal and en passant captures
//! - `knight` / `king` - fixed offset tables, plus castling for the king
//! - `sliding` - shared ray casting used by `bishop`, `rook` and `queen`
//! - `attack` - the attack/check oracle

mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

pub use attack::{is_in_check, is_square_attacked};

use crate::position::Position;
use crate::types::*;

/// Moves available to the piece on `from`
///
/// An empty or off-board origin yields an empty list. The side to move is
/// not consulted; the caller decides whose turn it is.
pub fn moves_from(pos: &Position, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    if !from.is_on_board() {
        return moves;
    }
    if let Some(piece) = pos.piece_at(from) {
        push_piece_moves(pos, from, piece, &mut moves);
    }
    moves
}

/// All moves for `color`, in row-major order of the origin squares
pub fn generate_moves(pos: &Position, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    for (from, piece) in pos.board.pieces_of(color) {
        push_piece_moves(pos, from, piece, &mut moves);
    }
    moves
}

/// True if `color` has at least one move
pub fn has_any_move(pos: &Position, color: Color) -> bool {
    let mut scratch = Vec::new();
    pos.board.pieces_of(color).any(|(from, piece)| {
        scratch.clear();
        push_piece_moves(pos, from, piece, &mut scratch);
        !scratch.is_empty()
    })
}

/// Advisory checkmate: in check and no move at all
pub fn is_checkmate(pos: &Position, color: Color) -> bool {
    is_in_check(pos, color) && !has_any_move(pos, color)
}

/// Not in check and no move at all; ends the game as a draw
pub fn is_stalemate(pos: &Position, color: Color) -> bool {
    !is_in_check(pos, color) && !has_any_move(pos, color)
}

/// Piece removed from the board by `mv`, including an en passant victim
pub fn captured_piece(pos: &Position, mv: &Move) -> Option<Piece> {
    match mv.kind {
        MoveKind::EnPassant => {
            let mover = pos.piece_at(mv.from)?;
            let victim = Square::new(
                (mv.to.row as i8 - mover.color.pawn_direction()) as u8,
                mv.to.col,
            )?;
            pos.piece_at(victim)
        }
        _ => pos.piece_at(mv.to),
    }
}

#[inline]
pub fn is_capture(pos: &Position, mv: &Move) -> bool {
    captured_piece(pos, mv).is_some()
}

fn push_piece_moves(pos: &Position, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    match piece.piece_type {
        PieceType::Pawn => pawn::generate_pawn_moves(pos, from, piece.color, moves),
        PieceType::Knight => knight::generate_knight_moves(pos, from, piece.color, moves),
        PieceType::Bishop => bishop::generate_bishop_moves(pos, from, piece.color, moves),
        PieceType::Rook => rook::generate_rook_moves(pos, from, piece.color, moves),
        PieceType::Queen => queen::generate_queen_moves(pos, from, piece.color, moves),
        PieceType::King => {
            king::generate_king_moves(pos, from, piece.color, moves);
            king::generate_castling_moves(pos, from, piece.color, moves);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let pos = Position::new();
        assert_eq!(generate_moves(&pos, Color::White).len(), 20);
        assert_eq!(generate_moves(&pos, Color::Black).len(), 20);
    }

    #[test]
    fn test_empty_origin_yields_no_moves() {
        let pos = Position::new();
        assert!(moves_from(&pos, sq("e4")).is_empty());
    }

    #[test]
    fn test_off_board_origin_yields_no_moves() {
        let pos = Position::new();
        assert!(moves_from(&pos, Square { row: 8, col: 0 }).is_empty());
        assert!(moves_from(&pos, Square { row: 0, col: 200 }).is_empty());
        assert_eq!(pos.piece_at(Square { row: 255, col: 255 }), None);
    }

    #[test]
    fn test_moves_into_check_are_not_filtered() {
        // White king on e1 may step onto e2, which a black rook on e8 attacks
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::new(PieceType::King, Color::White)));
        board.set(sq("e8"), Some(Piece::new(PieceType::Rook, Color::Black)));
        board.set(sq("a8"), Some(Piece::new(PieceType::King, Color::Black)));
        let pos = Position::from_board(board);

        let moves = moves_from(&pos, sq("e1"));
        assert!(moves.iter().any(|m| m.to == sq("e2")));
        assert!(is_in_check(&pos, Color::White));
    }

    /// Black king a8 walled in by its own immobile pieces, white king h1.
    /// `c7` holds whatever blocks the c8 pawn.
    fn walled_corner(c7: Piece) -> Position {
        let mut board = Board::empty();
        board.set(sq("a8"), Some(Piece::new(PieceType::King, Color::Black)));
        board.set(sq("b8"), Some(Piece::new(PieceType::Rook, Color::Black)));
        board.set(sq("c8"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        for rank in 1..=7 {
            board.set(sq(&format!("a{rank}")), Some(Piece::new(PieceType::Pawn, Color::Black)));
            board.set(sq(&format!("b{rank}")), Some(Piece::new(PieceType::Pawn, Color::Black)));
        }
        board.set(sq("c7"), Some(c7));
        board.set(sq("h1"), Some(Piece::new(PieceType::King, Color::White)));
        Position::from_board(board)
    }

    #[test]
    fn test_checkmate_is_check_without_moves() {
        let pos = walled_corner(Piece::new(PieceType::Knight, Color::White));
        assert!(is_in_check(&pos, Color::Black));
        assert!(!has_any_move(&pos, Color::Black));
        assert!(is_checkmate(&pos, Color::Black));
        assert!(!is_stalemate(&pos, Color::Black));
    }

    #[test]
    fn test_check_with_an_escape_is_not_checkmate() {
        // Rook gives check on the back rank; the king may still step to g8
        // (even though g8 is attacked) so the flag stays clear.
        let mut board = Board::empty();
        board.set(sq("h8"), Some(Piece::new(PieceType::King, Color::Black)));
        board.set(sq("g7"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        board.set(sq("h7"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        board.set(sq("a8"), Some(Piece::new(PieceType::Rook, Color::White)));
        board.set(sq("e1"), Some(Piece::new(PieceType::King, Color::White)));
        let pos = Position::from_board(board);

        assert!(is_in_check(&pos, Color::Black));
        assert!(moves_from(&pos, sq("h8")).iter().any(|m| m.to == sq("g8")));
        assert!(!is_checkmate(&pos, Color::Black));
    }

    #[test]
    fn test_stalemate_detection() {
        let pos = walled_corner(Piece::new(PieceType::Pawn, Color::White));
        assert!(!is_in_check(&pos, Color::Black));
        assert!(!has_any_move(&pos, Color::Black));
        assert!(is_stalemate(&pos, Color::Black));
        assert!(!is_checkmate(&pos, Color::Black));

        // Starting position is neither
        assert!(!is_stalemate(&Position::new(), Color::White));
    }

    #[test]
    fn test_captured_piece_reports_en_passant_victim() {
        let mut board = Board::empty();
        board.set(sq("e4"), Some(Piece::new(PieceType::Pawn, Color::White)));
        board.set(sq("d4"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        let mut pos = Position::from_board(board);
        pos.en_passant = Some(sq("e3"));

        let ep = moves_from(&pos, sq("d4"))
            .into_iter()
            .find(|m| m.kind == MoveKind::EnPassant)
            .unwrap();
        assert_eq!(
            captured_piece(&pos, &ep),
            Some(Piece::new(PieceType::Pawn, Color::White))
        );
    }
}
