//! Component module unit tests
//!
//! Components are pure data, so these tests check defaults, the helpers the
//! front-end relies on, and the JSON shape of records that end up in
//! snapshots.

use super::*;
use crate::game::resources::PendingPromotion;
use chess_engine::{Color, MoveKind, Piece, PieceType, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

// ============================================================================
// GamePhase Tests
// ============================================================================

#[test]
fn test_game_phase_default() {
    //! A fresh game waits for White

    let phase = GamePhase::default();
    assert_eq!(phase, GamePhase::AwaitingMove(Color::White));
    assert_eq!(phase.awaiting(), Some(Color::White));
    assert!(!phase.is_game_over());
}

#[test]
fn test_game_phase_pending_and_over_await_nobody() {
    let pending = GamePhase::PromotionPending(PendingPromotion {
        from: sq("a7"),
        to: sq("a8"),
        color: Color::White,
        kind: MoveKind::Normal,
        captured: None,
    });
    assert_eq!(pending.awaiting(), None);

    let over = GamePhase::GameOver(GameOutcome::stalemate());
    assert_eq!(over.awaiting(), None);
    assert!(over.is_game_over());
}

// ============================================================================
// GameOutcome Tests
// ============================================================================

#[test]
fn test_outcome_messages() {
    assert_eq!(
        GameOutcome::king_captured(Color::Black).message(),
        "black wins by capturing the king"
    );
    assert_eq!(GameOutcome::stalemate().message(), "Draw by stalemate");
    assert_eq!(GameOutcome::stalemate().winner, None);
}

// ============================================================================
// MoveRecord Tests
// ============================================================================

#[test]
fn test_move_record_notation() {
    let record = MoveRecord {
        from: sq("e7"),
        to: sq("e8"),
        piece_type: PieceType::Pawn,
        captured: None,
        promotion: Some(PieceType::Knight),
    };
    assert_eq!(record.notation(), "e7e8n");

    let quiet = MoveRecord {
        promotion: None,
        ..record
    };
    assert_eq!(quiet.notation(), "e7e8");
}

#[test]
fn test_move_record_json_uses_camel_case() {
    //! Records are stored inside snapshots, so the field names are part of
    //! the persisted format

    let record = MoveRecord {
        from: sq("d4"),
        to: sq("e5"),
        piece_type: PieceType::Pawn,
        captured: Some(Piece::new(PieceType::Knight, Color::Black)),
        promotion: None,
    };
    let json = serde_json::to_value(record).unwrap();
    assert_eq!(json["pieceType"], "pawn");
    assert_eq!(json["captured"]["type"], "knight");
    assert_eq!(json["captured"]["color"], "black");
    assert_eq!(json["from"]["row"], 4);
    assert!(json["promotion"].is_null());

    let back: MoveRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}
