//! Move making and unmaking for search
//!
//! [`make_move`] applies the full board effect of a move and returns an
//! [`Undo`] record; [`unmake_move`] restores every field of the position
//! from it. The pair must stay exactly symmetric: the search runs thousands
//! of make/unmake cycles on one position and any drift corrupts the game.
//!
//! [`MoveGuard`] ties the unmake to a scope so every exit path restores the
//! position, including early returns.

use std::ops::{Deref, DerefMut};

use crate::board::KingSquares;
use crate::constants::*;
use crate::position::Position;
use crate::types::*;

/// Information needed to undo a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    pub mv: Move,
    /// Piece that stood on `mv.from`; `None` if the move was a no-op
    pub moved: Option<Piece>,
    pub captured: Option<Piece>,
    /// Where the captured piece stood (differs from `mv.to` for en passant)
    pub captured_square: Square,
    castling: CastlingRights,
    en_passant: Option<Square>,
    kings: KingSquares,
}

impl Undo {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Make a move on the position (returns undo information)
///
/// A pawn reaching its promotion row becomes `mv.promotion`, or a queen when
/// no piece was supplied. Moving from an empty square changes nothing.
pub fn make_move(pos: &mut Position, mv: Move) -> Undo {
    let mut undo = Undo {
        mv,
        moved: None,
        captured: None,
        captured_square: mv.to,
        castling: pos.castling,
        en_passant: pos.en_passant,
        kings: pos.kings(),
    };

    let Some(piece) = pos.board.take(mv.from) else {
        return undo;
    };
    undo.moved = Some(piece);
    let color = piece.color;

    if mv.kind == MoveKind::EnPassant {
        if let Some(victim) = mv.to.offset(-color.pawn_direction(), 0) {
            undo.captured_square = victim;
        }
    }
    undo.captured = pos.board.take(undo.captured_square);

    let placed = if piece.piece_type == PieceType::Pawn && mv.to.row == color.promotion_row() {
        Piece::new(mv.promotion.unwrap_or(PieceType::Queen), color)
    } else {
        piece
    };
    pos.board.set(mv.to, Some(placed));

    if let Some((rook_from, rook_to)) = castle_rook_squares(mv, color) {
        let rook = pos.board.take(rook_from);
        pos.board.set(rook_to, rook);
    }

    // Castling rights
    match piece.piece_type {
        PieceType::King => pos.castling.revoke_all(color),
        PieceType::Rook => pos.castling.revoke_rook_square(color, mv.from),
        _ => {}
    }
    if let Some(captured) = undo.captured {
        if captured.piece_type == PieceType::Rook {
            pos.castling
                .revoke_rook_square(captured.color, undo.captured_square);
        }
    }

    pos.en_passant = if mv.kind == MoveKind::DoublePawnPush {
        mv.from.offset(color.pawn_direction(), 0)
    } else {
        None
    };

    // King cache
    if piece.piece_type == PieceType::King {
        pos.set_king_square(color, Some(mv.to));
    }
    if let Some(captured) = undo.captured {
        if captured.piece_type == PieceType::King {
            pos.set_king_square(captured.color, None);
        }
    }

    undo
}

/// Unmake a move, restoring the position exactly as it was before `make_move`
pub fn unmake_move(pos: &mut Position, undo: Undo) {
    let Some(piece) = undo.moved else {
        return;
    };
    let mv = undo.mv;

    if let Some((rook_from, rook_to)) = castle_rook_squares(mv, piece.color) {
        let rook = pos.board.take(rook_to);
        pos.board.set(rook_from, rook);
    }

    pos.board.set(mv.to, None);
    pos.board.set(mv.from, Some(piece));
    pos.board.set(undo.captured_square, undo.captured);

    pos.castling = undo.castling;
    pos.en_passant = undo.en_passant;
    pos.restore_kings(undo.kings);
}

/// Rook origin and destination for a castling move
pub fn castle_rook_squares(mv: Move, color: Color) -> Option<(Square, Square)> {
    let row = color.home_row();
    match mv.kind {
        MoveKind::CastleKingside => Some((
            Square::at(row, KINGSIDE_ROOK_COL),
            Square::at(row, KINGSIDE_ROOK_TARGET),
        )),
        MoveKind::CastleQueenside => Some((
            Square::at(row, QUEENSIDE_ROOK_COL),
            Square::at(row, QUEENSIDE_ROOK_TARGET),
        )),
        _ => None,
    }
}

/// Scoped make/unmake
///
/// The move is made when the guard is created and unmade when it is dropped.
/// The guard derefs to the position so nested guards can be stacked for
/// deeper plies.
pub struct MoveGuard<'a> {
    pos: &'a mut Position,
    undo: Option<Undo>,
}

impl<'a> MoveGuard<'a> {
    pub fn new(pos: &'a mut Position, mv: Move) -> Self {
        let undo = make_move(pos, mv);
        MoveGuard {
            pos,
            undo: Some(undo),
        }
    }

    /// Undo record of the move this guard holds
    pub fn undo(&self) -> Option<&Undo> {
        self.undo.as_ref()
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.pos
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.pos
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            unmake_move(self.pos, undo);
        }
    }
}
