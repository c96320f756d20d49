//! Per-participant scoring and timing state.

use mathclash_protocol::PlayerView;

/// One participant in a room, human or bot.
///
/// Bots differ from humans only in data (the `is_bot` flag and who
/// drives their answers), so a single struct with an explicit flag
/// covers both.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub score: u32,
    pub answered_count: u32,
    pub total_response_time_ms: u64,
    pub is_bot: bool,
    pub is_ready: bool,
}

impl Player {
    /// Creates a player with zeroed counters.
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_bot: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score: 0,
            answered_count: 0,
            total_response_time_ms: 0,
            is_bot,
            is_ready: false,
        }
    }

    /// Records one answered question and its response time.
    pub fn record_answer(&mut self, response_time_ms: u64) {
        self.answered_count += 1;
        self.total_response_time_ms += response_time_ms;
    }

    /// Adds points to the cumulative score.
    pub fn award_points(&mut self, points: u32) {
        self.score += points;
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.is_ready = ready;
    }

    /// Mean response time in milliseconds; 0.0 before the first answer.
    pub fn average_response_time_ms(&self) -> f64 {
        if self.answered_count == 0 {
            return 0.0;
        }
        self.total_response_time_ms as f64 / self.answered_count as f64
    }
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        PlayerView {
            id: player.id.clone(),
            name: player.name.clone(),
            score: player.score,
            answered_count: player.answered_count,
            average_response_time: player.average_response_time_ms(),
            is_bot: player.is_bot,
            is_ready: player.is_ready,
        }
    }
}
