//! Game session: one game, its configuration and the AI opponent
//!
//! [`Session`] is what a front-end drives. Human moves go through
//! [`Session::submit_move`]; when that leaves the AI on move, the AI turn is
//! scheduled automatically and its result is applied by [`Session::poll_ai`]
//! or [`Session::wait_for_ai`]. Scheduling needs a running tokio runtime.
//!
//! Resetting or switching mode cancels any AI turn in flight; a move computed
//! for the old game is never applied to the new one.
//!
//! A session also tracks the single-player round ladder. Once a game ends,
//! [`Session::next_round`] settles it and starts the next game; an explicit
//! reset goes back to round 1.

use chess_engine::{Difficulty, Move, PieceType, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::game::ai::{AiPoll, AiRequest, AiScheduler, AiStatistics, GameMode};
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{RoundLadder, RoundResult};
use crate::game::rules::{GameState, MoveOutcome};
use crate::game::snapshot::GameSnapshot;

pub struct Session {
    config: SessionConfig,
    state: GameState,
    scheduler: AiScheduler,
    stats: AiStatistics,
    ladder: RoundLadder,
    rng: StdRng,
}

impl Session {
    /// New game at the starting position
    ///
    /// Nothing is scheduled yet; call [`Session::resume_ai`] once a runtime
    /// is available if the AI plays White.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Session {
            config,
            state: GameState::new(),
            scheduler: AiScheduler::new(),
            stats: AiStatistics::default(),
            ladder: RoundLadder::default(),
            rng,
        }
    }

    /// Resume a persisted game; mode and difficulty come from the snapshot
    pub fn from_snapshot(mut config: SessionConfig, snapshot: &GameSnapshot) -> Self {
        config.mode = snapshot.game_mode;
        config.difficulty = snapshot.difficulty;
        let mut session = Self::new(config);
        session.state = snapshot.restore();
        session.ladder = RoundLadder::at(snapshot.round).unwrap_or_default();
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn statistics(&self) -> &AiStatistics {
        &self.stats
    }

    /// Current round of the ladder, from 1
    pub fn round(&self) -> u8 {
        self.ladder.round()
    }

    pub fn epoch(&self) -> u64 {
        self.scheduler.epoch()
    }

    pub fn is_ai_thinking(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// True when the game waits for the computer
    pub fn is_ai_turn(&self) -> bool {
        self.state
            .phase()
            .awaiting()
            .is_some_and(|color| self.config.is_ai(color))
    }

    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        self.state.legal_moves_from(square)
    }

    /// Submit a human move
    ///
    /// If the move leaves the AI on move, its turn is scheduled before this
    /// returns. A scheduling failure is reported as an error even though the
    /// move itself has been applied.
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> GameResult<MoveOutcome> {
        if let Some(color) = self.state.phase().awaiting().filter(|c| self.config.is_ai(*c)) {
            return Err(GameError::NotYourTurn { color });
        }
        let outcome = self.state.submit_move(from, to, promotion)?;
        self.resume_ai()?;
        Ok(outcome)
    }

    /// Complete a pending human promotion
    pub fn choose_promotion(&mut self, piece_type: PieceType) -> GameResult<MoveOutcome> {
        let outcome = self.state.choose_promotion(piece_type)?;
        self.resume_ai()?;
        Ok(outcome)
    }

    /// Schedule the AI's turn if it is due and none is in flight
    ///
    /// Returns whether a task was spawned.
    pub fn resume_ai(&mut self) -> GameResult<bool> {
        if !self.is_ai_turn() || self.scheduler.is_pending() {
            return Ok(false);
        }
        let request = AiRequest {
            position: self.state.position().clone(),
            ai_color: self.config.ai_color,
            difficulty: self.config.difficulty,
            delay: self.config.ai_delay(),
            seed: self.rng.random(),
        };
        self.scheduler.spawn(request)?;
        Ok(true)
    }

    /// Apply the AI's move if its task has finished; never blocks
    pub fn poll_ai(&mut self) -> GameResult<Option<MoveOutcome>> {
        let poll = self.scheduler.poll();
        self.apply_ai(poll)
    }

    /// Wait for the AI's move and apply it
    pub async fn wait_for_ai(&mut self) -> GameResult<Option<MoveOutcome>> {
        let poll = self.scheduler.wait().await;
        self.apply_ai(poll)
    }

    fn apply_ai(&mut self, poll: AiPoll) -> GameResult<Option<MoveOutcome>> {
        let ai_move = match poll {
            AiPoll::Ready(ai_move) => ai_move,
            AiPoll::Idle | AiPoll::Thinking | AiPoll::NoMove => return Ok(None),
        };
        if !self.is_ai_turn() || ai_move.color != self.config.ai_color {
            warn!("[AI] Discarding move {}: not the computer's turn", ai_move.mv);
            return Ok(None);
        }

        info!("[AI] ========== AI MOVE READY FOR EXECUTION ==========");
        let mv = ai_move.mv;
        let outcome = self.state.submit_move(mv.from, mv.to, mv.promotion)?;
        self.stats = AiStatistics {
            last_tier: Some(ai_move.tier),
            last_score: ai_move.score,
            last_nodes: ai_move.nodes,
            thinking_time: ai_move.thinking_time,
            moves_played: self.stats.moves_played + 1,
        };
        Ok(Some(outcome))
    }

    /// Start over from round 1 with the same settings
    pub fn reset(&mut self) -> GameResult<()> {
        self.ladder.restart();
        self.start_game()
    }

    /// Settle the finished game on the round ladder and start the next one
    ///
    /// Only a win by the human side in single-player mode advances the
    /// ladder; every other ending replays the round.
    pub fn next_round(&mut self) -> GameResult<RoundResult> {
        let outcome = self.state.outcome().ok_or(GameError::GameInProgress)?;
        let human = self.config.ai_color.opposite();
        let won = self.config.mode.has_ai() && outcome.winner == Some(human);
        let result = self.ladder.settle(won);
        info!("[GAME] Round settled: {:?}", result);
        self.start_game()?;
        Ok(result)
    }

    fn start_game(&mut self) -> GameResult<()> {
        let epoch = self.scheduler.cancel();
        self.state = GameState::new();
        self.stats = AiStatistics::default();
        info!(
            "[GAME] ========== NEW GAME: ROUND {} (epoch {}) ==========",
            self.ladder.round(),
            epoch
        );
        self.resume_ai()?;
        Ok(())
    }

    /// Switch between single and multi player; always starts a new game
    pub fn set_mode(&mut self, mode: GameMode) -> GameResult<()> {
        info!("[GAME] Mode {} -> {}", self.config.mode, mode);
        self.config.mode = mode;
        self.reset()
    }

    /// Takes effect from the next AI turn
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    pub fn snapshot(&self) -> GameResult<GameSnapshot> {
        GameSnapshot::capture(&self.state, self.config.difficulty, self.config.mode)
            .map(|snapshot| snapshot.with_round(self.ladder.round()))
    }

    /// Replace the current game with a snapshot
    pub fn restore(&mut self, snapshot: &GameSnapshot) -> GameResult<()> {
        self.scheduler.cancel();
        self.config.mode = snapshot.game_mode;
        self.config.difficulty = snapshot.difficulty;
        self.state = snapshot.restore();
        self.ladder = RoundLadder::at(snapshot.round).unwrap_or_default();
        self.stats = AiStatistics::default();
        self.resume_ai()?;
        Ok(())
    }
}
