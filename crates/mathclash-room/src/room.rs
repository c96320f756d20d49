//! The room aggregate: players, questions, cursor, lifecycle status.
//!
//! A `Room` is plain data plus invariant-preserving helpers. It never
//! locks anything itself; the coordinator serializes access per room
//! and is the only writer.

use mathclash_protocol::{QuestionView, RoomSnapshot, RoomStatus};

use crate::clock::now_millis;
use crate::player::Player;
use crate::question::Question;

/// One trivia match instance, identified by a short uppercase code.
#[derive(Debug)]
pub struct Room {
    /// Fixed-length uppercase alphanumeric code.
    pub code: String,
    /// Players in join order. Contains exactly one bot from creation on.
    pub players: Vec<Player>,
    /// Question sequence, fixed once the match starts; empty while waiting.
    pub questions: Vec<Question>,
    /// 0-based cursor into `questions`. Only ever increases.
    pub current_question_index: usize,
    pub status: RoomStatus,
    pub host_player_id: String,
    pub created_at: u64,
    pub started_at: Option<u64>,
    pub finished_at: Option<u64>,
}

impl Room {
    /// Creates an empty waiting room. The coordinator adds the host and
    /// the bot immediately after.
    pub fn new(code: impl Into<String>, host_player_id: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            players: Vec::new(),
            questions: Vec::new(),
            current_question_index: 0,
            status: RoomStatus::Waiting,
            host_player_id: host_player_id.into(),
            created_at: now_millis(),
            started_at: None,
            finished_at: None,
        }
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Removes the player if present. Returns whether anything changed.
    pub fn remove_player(&mut self, player_id: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != player_id);
        self.players.len() != before
    }

    pub fn find_player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn find_player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn bot_mut(&mut self) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.is_bot)
    }

    pub fn has_human_players(&self) -> bool {
        self.players.iter().any(|p| !p.is_bot)
    }

    pub fn is_host(&self, player_id: &str) -> bool {
        self.host_player_id == player_id
    }

    /// The question under the cursor, if the match has one in flight.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    /// Moves the cursor to the next question. The cursor may land one
    /// past the end; that is the finished position.
    pub fn advance_question(&mut self) {
        self.current_question_index += 1;
    }

    /// Whether the host may start: enough players and still waiting.
    pub fn can_start(&self, min_players: usize) -> bool {
        self.players.len() >= min_players && self.status == RoomStatus::Waiting
    }

    /// A room is finished once its status says so, or once the cursor has
    /// consumed a non-empty question sequence. An idle waiting room (no
    /// questions yet) is not finished.
    pub fn is_finished(&self) -> bool {
        self.status == RoomStatus::Finished
            || (!self.questions.is_empty()
                && self.current_question_index >= self.questions.len())
    }

    /// Builds a detached, answer-free view of the room.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            code: self.code.clone(),
            players: self.players.iter().map(Into::into).collect(),
            current_question_index: self.current_question_index,
            total_questions: self.questions.len(),
            status: self.status,
            host_player_id: self.host_player_id.clone(),
            created_at: self.created_at,
            started_at: self.started_at,
            finished_at: self.finished_at,
            current_question: self.current_question().map(|q| QuestionView {
                id: q.number,
                prompt: q.prompt.clone(),
            }),
            is_finished: self.is_finished(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::generate_questions;

    fn playing_room() -> Room {
        let mut room = Room::new("AAAAAA", "host");
        room.add_player(Player::new("host", "Alice", false));
        room.add_player(Player::new("bot-AAAAAA", "ChatBot", true));
        room.questions = generate_questions(5);
        room.status = RoomStatus::Playing;
        room
    }

    #[test]
    fn test_new_room_is_waiting_and_empty() {
        let room = Room::new("AAAAAA", "host");
        assert_eq!(room.status, RoomStatus::Waiting);
        assert!(room.players.is_empty());
        assert!(room.questions.is_empty());
        assert_eq!(room.current_question_index, 0);
        assert!(room.created_at > 0);
        assert!(room.started_at.is_none());
    }

    #[test]
    fn test_waiting_room_is_not_finished() {
        // Cursor 0 over an empty sequence must not read as finished.
        let room = Room::new("AAAAAA", "host");
        assert!(!room.is_finished());
    }

    #[test]
    fn test_finished_when_cursor_consumes_sequence() {
        let mut room = playing_room();
        for _ in 0..5 {
            assert!(!room.is_finished());
            room.advance_question();
        }
        assert!(room.is_finished());
        assert!(room.current_question().is_none());
    }

    #[test]
    fn test_finished_by_status_alone() {
        let mut room = playing_room();
        room.status = RoomStatus::Finished;
        assert!(room.is_finished());
    }

    #[test]
    fn test_current_question_follows_cursor() {
        let mut room = playing_room();
        assert_eq!(room.current_question().unwrap().number, 1);
        room.advance_question();
        assert_eq!(room.current_question().unwrap().number, 2);
    }

    #[test]
    fn test_can_start_needs_min_players_and_waiting() {
        let mut room = Room::new("AAAAAA", "host");
        room.add_player(Player::new("host", "Alice", false));
        assert!(!room.can_start(2));

        room.add_player(Player::new("bot-AAAAAA", "ChatBot", true));
        assert!(room.can_start(2));

        room.status = RoomStatus::Playing;
        assert!(!room.can_start(2));
    }

    #[test]
    fn test_remove_player_reports_change() {
        let mut room = playing_room();
        assert!(room.remove_player("host"));
        assert!(!room.remove_player("host"));
        assert!(!room.has_human_players());
    }

    #[test]
    fn test_is_host() {
        let room = playing_room();
        assert!(room.is_host("host"));
        assert!(!room.is_host("bot-AAAAAA"));
    }

    #[test]
    fn test_snapshot_hides_answers() {
        let room = playing_room();
        let snapshot = room.snapshot();

        assert_eq!(snapshot.code, "AAAAAA");
        assert_eq!(snapshot.total_questions, 5);
        assert_eq!(snapshot.players.len(), 2);
        let question = snapshot.current_question.unwrap();
        assert_eq!(question.id, 1);
        assert_eq!(question.prompt, room.questions[0].prompt);
    }

    #[test]
    fn test_snapshot_of_finished_room_has_no_question() {
        let mut room = playing_room();
        room.current_question_index = 5;
        room.status = RoomStatus::Finished;
        room.finished_at = Some(now_millis());

        let snapshot = room.snapshot();
        assert!(snapshot.current_question.is_none());
        assert!(snapshot.is_finished);
        assert_eq!(snapshot.status, RoomStatus::Finished);
    }
}
