//! Serializable game snapshot
//!
//! After every completed ply the host may persist a [`GameSnapshot`] and
//! later hand it back to resume the game. The JSON field names are fixed:
//!
//! ```json
//! {
//!   "board": [[{"type": "rook", "color": "black"}, ...], ...],
//!   "currentPlayer": "white",
//!   "moveHistory": [{"from": {"row": 6, "col": 4}, "to": ..., "pieceType": "pawn", ...}],
//!   "castlingRights": {"white": {"kingside": true, "queenside": true}, ...},
//!   "enPassantTarget": {"row": 5, "col": 4},
//!   "checkmateState": {"white": false, "black": false},
//!   "gameOver": false,
//!   "winner": null,
//!   "difficulty": 5,
//!   "gameMode": "single",
//!   "round": 1
//! }
//! ```
//!
//! King positions are not stored; they are recomputed by scanning the board
//! on restore. `round` may be absent and then reads as round 1.

use std::fs;
use std::path::Path;

use chess_engine::{square_checked, Board, CastlingRights, Color, Difficulty, Position, Square};
use serde::{Deserialize, Serialize};

use crate::game::ai::GameMode;
use crate::game::components::{GameOutcome, GameOverReason, GamePhase};
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{CapturedPieces, CheckmateState, MoveHistory, MAX_ROUND};
use crate::game::rules::GameState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Color,
    pub move_history: MoveHistory,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub checkmate_state: CheckmateState,
    pub game_over: bool,
    pub winner: Option<Color>,
    pub difficulty: Difficulty,
    pub game_mode: GameMode,
    /// Round of the single-player ladder
    #[serde(default = "first_round")]
    pub round: u8,
}

fn first_round() -> u8 {
    1
}

impl GameSnapshot {
    /// Snapshot a state between plies
    ///
    /// Fails while a promotion choice is pending: that ply is incomplete.
    pub fn capture(state: &GameState, difficulty: Difficulty, game_mode: GameMode) -> GameResult<Self> {
        if let Some(pending) = state.pending_promotion() {
            return Err(GameError::Snapshot {
                message: format!("promotion on {} is still pending", pending.to),
            });
        }
        Ok(GameSnapshot {
            board: *state.board(),
            current_player: state.current_player(),
            move_history: state.history().clone(),
            castling_rights: state.castling_rights(),
            en_passant_target: state.en_passant_target(),
            checkmate_state: state.checkmate_state(),
            game_over: state.is_game_over(),
            winner: state.winner(),
            difficulty,
            game_mode,
            round: first_round(),
        })
    }

    pub fn with_round(self, round: u8) -> Self {
        GameSnapshot { round, ..self }
    }

    /// Rebuild the game state this snapshot describes
    pub fn restore(&self) -> GameState {
        let position = Position::from_parts(self.board, self.castling_rights, self.en_passant_target);
        let phase = if self.game_over {
            let reason = match self.winner {
                Some(_) => GameOverReason::KingCaptured,
                None => GameOverReason::Stalemate,
            };
            GamePhase::GameOver(GameOutcome {
                winner: self.winner,
                reason,
            })
        } else {
            GamePhase::AwaitingMove(self.current_player)
        };

        let mut captured = CapturedPieces::default();
        for piece in self.move_history.iter().filter_map(|r| r.captured) {
            captured.add_capture(piece);
        }

        GameState {
            position,
            current_player: self.current_player,
            phase,
            history: self.move_history.clone(),
            checkmate: self.checkmate_state,
            captured,
        }
    }

    pub fn to_json(&self) -> GameResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::Snapshot {
            message: e.to_string(),
        })
    }

    /// Decode a snapshot; coordinates outside the board are rejected
    pub fn from_json(text: &str) -> GameResult<Self> {
        let snapshot: GameSnapshot = serde_json::from_str(text).map_err(|e| GameError::Snapshot {
            message: e.to_string(),
        })?;
        if !(1..=MAX_ROUND).contains(&snapshot.round) {
            return Err(GameError::Snapshot {
                message: format!("round {} is outside 1-{MAX_ROUND}", snapshot.round),
            });
        }
        if let Some(target) = snapshot.en_passant_target {
            square_checked(target.row, target.col)?;
        }
        for record in snapshot.move_history.iter() {
            square_checked(record.from.row, record.from.col)?;
            square_checked(record.to.row, record.to.col)?;
        }
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> GameResult<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| GameError::Snapshot {
            message: format!("cannot write {}: {e}", path.display()),
        })
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| GameError::Snapshot {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::PieceType;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_snapshot_field_names() {
        let snapshot =
            GameSnapshot::capture(&GameState::new(), Difficulty::default(), GameMode::Single)
                .unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();
        for key in [
            "board",
            "currentPlayer",
            "moveHistory",
            "castlingRights",
            "enPassantTarget",
            "checkmateState",
            "gameOver",
            "winner",
            "difficulty",
            "gameMode",
            "round",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["currentPlayer"], "white");
        assert_eq!(json["difficulty"], 5);
        assert_eq!(json["gameMode"], "single");
        assert_eq!(json["board"][0][4]["type"], "king");
        assert!(json["board"][4][4].is_null());
    }

    #[test]
    fn test_restore_rescans_kings_and_rebuilds_captures() {
        let mut state = GameState::new();
        for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5")] {
            state.submit_move(sq(from), sq(to), None).unwrap();
        }
        let snapshot = GameSnapshot::capture(&state, Difficulty::MAX, GameMode::Multi).unwrap();
        let restored = GameSnapshot::from_json(&snapshot.to_json().unwrap())
            .unwrap()
            .restore();

        assert_eq!(restored, state);
        assert_eq!(restored.position().king_square(Color::Black), Some(sq("e8")));
        assert_eq!(restored.captured().white_captured, vec![PieceType::Pawn]);
    }

    #[test]
    fn test_cannot_snapshot_pending_promotion() {
        let mut board = Board::empty();
        board.set(
            sq("h2"),
            Some(chess_engine::Piece::new(PieceType::Pawn, Color::Black)),
        );
        board.set(
            sq("a8"),
            Some(chess_engine::Piece::new(PieceType::King, Color::Black)),
        );
        board.set(
            sq("e4"),
            Some(chess_engine::Piece::new(PieceType::King, Color::White)),
        );
        let mut state = GameState::from_position(Position::from_board(board), Color::Black);
        state.submit_move(sq("h2"), sq("h1"), None).unwrap();

        let err = GameSnapshot::capture(&state, Difficulty::default(), GameMode::Multi).unwrap_err();
        assert!(matches!(err, GameError::Snapshot { .. }));
    }

    #[test]
    fn test_from_json_rejects_off_board_target() {
        let snapshot =
            GameSnapshot::capture(&GameState::new(), Difficulty::default(), GameMode::Single)
                .unwrap();
        let mut json = serde_json::to_value(&snapshot).unwrap();
        json["enPassantTarget"] = serde_json::json!({"row": 9, "col": 4});
        assert!(matches!(
            GameSnapshot::from_json(&json.to_string()),
            Err(GameError::Engine(_))
        ));
    }

    #[test]
    fn test_round_defaults_and_bounds() {
        let snapshot =
            GameSnapshot::capture(&GameState::new(), Difficulty::default(), GameMode::Single)
                .unwrap()
                .with_round(7);
        let mut json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["round"], 7);

        json.as_object_mut().unwrap().remove("round");
        assert_eq!(GameSnapshot::from_json(&json.to_string()).unwrap().round, 1);

        json["round"] = serde_json::json!(13);
        assert!(matches!(
            GameSnapshot::from_json(&json.to_string()),
            Err(GameError::Snapshot { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            GameSnapshot::from_json("{\"board\": 3}"),
            Err(GameError::Snapshot { .. })
        ));
    }
}
