//! Round ladder
//!
//! Single-player play is a campaign of [`MAX_ROUND`] games against the
//! computer. Beating it advances one round, any other result replays the
//! current round, and clearing the last round starts the ladder over.

/// Rounds in a full ladder
pub const MAX_ROUND: u8 = 12;

/// What settling a finished game did to the ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// Won; the ladder moved on to `round`
    Advanced { round: u8 },
    /// Lost or drawn; `round` is played again
    Retry { round: u8 },
    /// Won the final round; the ladder is back at round 1
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundLadder {
    round: u8,
}

impl Default for RoundLadder {
    fn default() -> Self {
        RoundLadder { round: 1 }
    }
}

impl RoundLadder {
    /// Ladder positioned at `round`; `None` outside `1..=MAX_ROUND`
    pub fn at(round: u8) -> Option<Self> {
        (1..=MAX_ROUND)
            .contains(&round)
            .then_some(RoundLadder { round })
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn is_final(&self) -> bool {
        self.round == MAX_ROUND
    }

    /// Move along the ladder after a finished game
    pub fn settle(&mut self, won: bool) -> RoundResult {
        match (won, self.is_final()) {
            (false, _) => RoundResult::Retry { round: self.round },
            (true, false) => {
                self.round += 1;
                RoundResult::Advanced { round: self.round }
            }
            (true, true) => {
                self.restart();
                RoundResult::Completed
            }
        }
    }

    pub fn restart(&mut self) {
        self.round = 1;
    }
}
