//! Room lifecycle status and the read-only views handed to callers.
//!
//! Field names follow the JSON contract of the polling clients
//! (`answeredCount`, `averageResponseTime`, `isBot`, ...), so every view
//! carries `#[serde(rename_all = "camelCase")]`.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// The lifecycle state of a room.
///
/// Transitions are strictly one-way:
///
/// ```text
/// WAITING → PLAYING → FINISHED
/// ```
///
/// - **Waiting**: room exists, accepting joins, match not started.
/// - **Playing**: question sequence generated, answers being collected.
/// - **Finished**: all rounds played. Terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Waiting,
    Playing,
    Finished,
}

impl RoomStatus {
    /// Returns `true` if the room is accepting new players.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    /// Returns `true` if no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// The next state in the strict ordering, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Waiting => Some(Self::Playing),
            Self::Playing => Some(Self::Finished),
            Self::Finished => None,
        }
    }

    /// Returns `true` if transitioning to `target` is valid.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "WAITING"),
            Self::Playing => write!(f, "PLAYING"),
            Self::Finished => write!(f, "FINISHED"),
        }
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A player's public state inside a snapshot or a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    /// Opaque player id, assigned by the caller at create/join time.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Cumulative score.
    pub score: u32,
    /// How many questions this player has answered so far.
    pub answered_count: u32,
    /// Mean response time in milliseconds; 0.0 before the first answer.
    pub average_response_time: f64,
    pub is_bot: bool,
    pub is_ready: bool,
}

/// The active question as shown to players.
///
/// Deliberately excludes the correct answer; the id is the question's
/// 1-based position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: u32,
    pub prompt: String,
}

/// A point-in-time picture of one room.
///
/// Snapshots are detached copies: holding one does not block or observe
/// later mutations. `current_question` is populated only while a question
/// is active (so never once the room is finished).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    /// Six uppercase alphanumeric characters.
    pub code: String,
    /// Players in join order.
    pub players: Vec<PlayerView>,
    /// 0-based cursor into the question sequence.
    pub current_question_index: usize,
    /// Length of the generated sequence; 0 until the match starts.
    pub total_questions: usize,
    pub status: RoomStatus,
    pub host_player_id: String,
    /// Epoch milliseconds.
    pub created_at: u64,
    pub started_at: Option<u64>,
    pub finished_at: Option<u64>,
    pub current_question: Option<QuestionView>,
    pub is_finished: bool,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The polling clients parse these JSON shapes directly, so the serde
    //! attributes are part of the contract and get pinned here.

    use super::*;

    fn sample_player() -> PlayerView {
        PlayerView {
            id: "p1".into(),
            name: "Alice".into(),
            score: 20,
            answered_count: 2,
            average_response_time: 1500.0,
            is_bot: false,
            is_ready: false,
        }
    }

    fn sample_snapshot() -> RoomSnapshot {
        RoomSnapshot {
            code: "A1B2C3".into(),
            players: vec![sample_player()],
            current_question_index: 1,
            total_questions: 5,
            status: RoomStatus::Playing,
            host_player_id: "p1".into(),
            created_at: 1_700_000_000_000,
            started_at: Some(1_700_000_001_000),
            finished_at: None,
            current_question: Some(QuestionView {
                id: 2,
                prompt: "7 + 12".into(),
            }),
            is_finished: false,
        }
    }

    // =====================================================================
    // RoomStatus
    // =====================================================================

    #[test]
    fn test_status_next_follows_strict_order() {
        assert_eq!(RoomStatus::Waiting.next(), Some(RoomStatus::Playing));
        assert_eq!(RoomStatus::Playing.next(), Some(RoomStatus::Finished));
        assert_eq!(RoomStatus::Finished.next(), None);
    }

    #[test]
    fn test_status_can_transition_to() {
        assert!(RoomStatus::Waiting.can_transition_to(RoomStatus::Playing));
        assert!(!RoomStatus::Waiting.can_transition_to(RoomStatus::Finished));
        assert!(!RoomStatus::Playing.can_transition_to(RoomStatus::Waiting));
        assert!(!RoomStatus::Finished.can_transition_to(RoomStatus::Waiting));
    }

    #[test]
    fn test_status_is_joinable_only_when_waiting() {
        assert!(RoomStatus::Waiting.is_joinable());
        assert!(!RoomStatus::Playing.is_joinable());
        assert!(!RoomStatus::Finished.is_joinable());
    }

    #[test]
    fn test_status_is_terminal() {
        assert!(!RoomStatus::Waiting.is_terminal());
        assert!(!RoomStatus::Playing.is_terminal());
        assert!(RoomStatus::Finished.is_terminal());
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        let json = serde_json::to_string(&RoomStatus::Waiting).unwrap();
        assert_eq!(json, "\"WAITING\"");
        let json = serde_json::to_string(&RoomStatus::Finished).unwrap();
        assert_eq!(json, "\"FINISHED\"");
    }

    #[test]
    fn test_status_display_matches_wire_form() {
        assert_eq!(RoomStatus::Playing.to_string(), "PLAYING");
    }

    // =====================================================================
    // PlayerView
    // =====================================================================

    #[test]
    fn test_player_view_uses_camel_case_keys() {
        let json: serde_json::Value =
            serde_json::to_value(sample_player()).unwrap();

        assert_eq!(json["answeredCount"], 2);
        assert_eq!(json["averageResponseTime"], 1500.0);
        assert_eq!(json["isBot"], false);
        assert_eq!(json["isReady"], false);
        // snake_case keys must not leak into the payload
        assert!(json.get("answered_count").is_none());
        assert!(json.get("is_bot").is_none());
    }

    #[test]
    fn test_player_view_round_trip() {
        let player = sample_player();
        let bytes = serde_json::to_vec(&player).unwrap();
        let decoded: PlayerView = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(player, decoded);
    }

    // =====================================================================
    // QuestionView
    // =====================================================================

    #[test]
    fn test_question_view_never_contains_answer() {
        let view = QuestionView {
            id: 1,
            prompt: "3 * 4".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["prompt"], "3 * 4");
        assert!(json.get("answer").is_none());
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    // =====================================================================
    // RoomSnapshot
    // =====================================================================

    #[test]
    fn test_snapshot_json_shape() {
        let json: serde_json::Value =
            serde_json::to_value(sample_snapshot()).unwrap();

        assert_eq!(json["code"], "A1B2C3");
        assert_eq!(json["currentQuestionIndex"], 1);
        assert_eq!(json["totalQuestions"], 5);
        assert_eq!(json["status"], "PLAYING");
        assert_eq!(json["hostPlayerId"], "p1");
        assert_eq!(json["isFinished"], false);
        assert_eq!(json["currentQuestion"]["id"], 2);
        assert!(json["finishedAt"].is_null());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = sample_snapshot();
        let bytes = serde_json::to_vec(&snapshot).unwrap();
        let decoded: RoomSnapshot = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn test_snapshot_without_current_question() {
        let mut snapshot = sample_snapshot();
        snapshot.status = RoomStatus::Finished;
        snapshot.current_question = None;
        snapshot.is_finished = true;

        let json: serde_json::Value =
            serde_json::to_value(&snapshot).unwrap();
        assert!(json["currentQuestion"].is_null());
        assert_eq!(json["isFinished"], true);
    }
}
