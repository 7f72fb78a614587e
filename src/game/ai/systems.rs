//! AI turn scheduling
//!
//! When the AI is to move, [`AiScheduler::spawn`] starts a tokio task that
//! waits the UI delay and then runs the search on the blocking pool with its
//! own copy of the position. The host either polls the task once per frame
//! ([`AiScheduler::poll`]) or awaits it ([`AiScheduler::wait`]).
//!
//! Every task is stamped with the scheduler's epoch. [`AiScheduler::cancel`]
//! aborts the running task and bumps the epoch, so a result computed for a
//! game that has since been reset is never handed out. A search already on
//! the blocking pool runs to completion; its result is dropped.

use std::time::{Duration, Instant};

use chess_engine::{choose_move, Color, Difficulty, Move, Position, SearchTier};
use futures_lite::future;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::game::error::{GameError, GameResult};

/// AI move representation with search statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiMove {
    /// Scheduler epoch the move was computed in
    pub epoch: u64,
    pub color: Color,
    pub mv: Move,
    pub tier: SearchTier,
    pub score: Option<i32>,
    pub nodes: u64,
    pub thinking_time: Duration,
}

/// Input for one AI turn
#[derive(Debug, Clone)]
pub struct AiRequest {
    /// Copy of the game position; the live state is never shared with the task
    pub position: Position,
    pub ai_color: Color,
    pub difficulty: Difficulty,
    pub delay: Duration,
    pub seed: u64,
}

/// State of the scheduled AI turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiPoll {
    /// Nothing scheduled
    Idle,
    Thinking,
    Ready(AiMove),
    /// The task finished without a move (no moves, stale epoch or a failed task)
    NoMove,
}

#[derive(Debug)]
struct PendingAiMove {
    epoch: u64,
    task: JoinHandle<Option<AiMove>>,
}

/// Owns at most one in-flight AI task
#[derive(Debug, Default)]
pub struct AiScheduler {
    pending: Option<PendingAiMove>,
    epoch: u64,
}

impl AiScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Spawn the AI turn on the current tokio runtime
    ///
    /// Replaces any task already in flight for the same epoch.
    pub fn spawn(&mut self, request: AiRequest) -> GameResult<()> {
        let handle = Handle::try_current().map_err(|_| GameError::NoRuntime)?;
        if let Some(previous) = self.pending.take() {
            previous.task.abort();
        }

        let epoch = self.epoch;
        info!("[AI] ========== AI TASK SPAWNED ==========");
        info!(
            "[AI] AI Color: {} | Difficulty: {} ({}) | Delay: {}ms | Epoch: {}",
            request.ai_color,
            request.difficulty,
            request.difficulty.description(),
            request.delay.as_millis(),
            epoch
        );

        let task = handle.spawn(async move {
            tokio::time::sleep(request.delay).await;
            // The search never yields; keep it off the runtime's workers
            match tokio::task::spawn_blocking(move || compute_ai_move(request, epoch)).await {
                Ok(ai_move) => ai_move,
                Err(e) => {
                    error!("[AI] Search thread failed: {}", e);
                    None
                }
            }
        });
        self.pending = Some(PendingAiMove { epoch, task });
        Ok(())
    }

    /// Abort the in-flight task, if any, and start a new epoch
    pub fn cancel(&mut self) -> u64 {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
            debug!("[AI] Cancelled task from epoch {}", pending.epoch);
        }
        self.epoch += 1;
        self.epoch
    }

    /// Non-blocking check of the in-flight task
    pub fn poll(&mut self) -> AiPoll {
        let Some(pending) = self.pending.as_mut() else {
            return AiPoll::Idle;
        };
        if !pending.task.is_finished() {
            return AiPoll::Thinking;
        }

        let result = match future::block_on(future::poll_once(&mut pending.task)) {
            Some(result) => result,
            None => {
                warn!("[AI] Task reported finished but result not available");
                return AiPoll::Thinking;
            }
        };
        self.pending = None;
        self.settle(result)
    }

    /// Wait for the in-flight task to finish
    pub async fn wait(&mut self) -> AiPoll {
        let Some(pending) = self.pending.take() else {
            return AiPoll::Idle;
        };
        let result = pending.task.await;
        self.settle(result)
    }

    fn settle(&self, result: Result<Option<AiMove>, JoinError>) -> AiPoll {
        match result {
            Ok(Some(ai_move)) if ai_move.epoch == self.epoch => AiPoll::Ready(ai_move),
            Ok(Some(ai_move)) => {
                warn!(
                    "[AI] Discarding stale move {} from epoch {} (current epoch {})",
                    ai_move.mv, ai_move.epoch, self.epoch
                );
                AiPoll::NoMove
            }
            Ok(None) => AiPoll::NoMove,
            Err(e) if e.is_cancelled() => AiPoll::Idle,
            Err(e) => {
                error!("[AI] Task failed: {}", e);
                AiPoll::NoMove
            }
        }
    }
}

impl Drop for AiScheduler {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
        }
    }
}

/// The computation running inside the task
fn compute_ai_move(request: AiRequest, epoch: u64) -> Option<AiMove> {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(request.seed);
    let mut position = request.position;

    let Some(result) = choose_move(&mut position, request.ai_color, request.difficulty, &mut rng)
    else {
        warn!("[AI] {} has no move to play", request.ai_color);
        return None;
    };
    let elapsed = start.elapsed();

    info!("[AI] ========== AI COMPUTATION COMPLETE ==========");
    info!("[AI] Best Move: {} via {:?}", result.mv, result.tier);
    info!(
        "[AI] Evaluation: Score={:?} | Nodes={} | Time={:.3}s",
        result.score,
        result.nodes,
        elapsed.as_secs_f32()
    );

    Some(AiMove {
        epoch,
        color: request.ai_color,
        mv: result.mv,
        tier: result.tier,
        score: result.score,
        nodes: result.nodes,
        thinking_time: elapsed,
    })
}
