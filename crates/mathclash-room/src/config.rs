//! Room rules and reference limits.

/// Tunable limits for a coordinator instance.
///
/// The defaults are the reference rules: rooms of up to 5 players
/// (bot included), 5 questions per match, 10 points per correct answer.
/// Tests override individual fields with struct-update syntax.
#[derive(Debug, Clone)]
pub struct RoomRules {
    /// Maximum players in a room, counting the bot.
    pub max_players: usize,

    /// Minimum players required before the host may start, counting the bot.
    pub min_players_to_start: usize,

    /// Questions generated per match.
    pub question_count: usize,

    /// Points awarded for a correct answer.
    pub points_per_correct: u32,

    /// Largest accepted answer value; submissions outside
    /// `0..=max_answer` are rejected before any state changes.
    pub max_answer: i64,

    /// Probability that the simulated bot answers correctly.
    pub bot_accuracy: f64,

    /// Lower bound (inclusive) of the bot's simulated response time.
    pub bot_response_min_ms: u64,

    /// Upper bound (exclusive) of the bot's simulated response time.
    pub bot_response_max_ms: u64,

    /// Length of generated room codes.
    pub code_length: usize,
}

impl Default for RoomRules {
    fn default() -> Self {
        Self {
            max_players: 5,
            min_players_to_start: 2,
            question_count: 5,
            points_per_correct: 10,
            max_answer: 999,
            bot_accuracy: 0.8,
            bot_response_min_ms: 2000,
            bot_response_max_ms: 5000,
            code_length: 6,
        }
    }
}
