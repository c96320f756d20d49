//! The room coordinator: the single entry point for every room mutation
//! and query.
//!
//! Rooms live in a keyed map of `Arc<Mutex<Room>>`. Lock order is always
//! map-then-room, and no path acquires the map lock while holding a room
//! lock, so the two levels cannot deadlock. Per-room operations clone the
//! room's `Arc` under a brief map read lock, then run their whole
//! check-mutate-advance sequence under that room's mutex; submissions for
//! the same room serialize, unrelated rooms do not contend.
//!
//! Structural changes (creation, eviction) take the map write lock. Code
//! generation and the single-active-room scan happen inside that critical
//! section, so two concurrent creators cannot both win.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rand::Rng;

use mathclash_protocol::{PlayerView, RoomSnapshot, RoomStatus};

use crate::clock::now_millis;
use crate::code::random_code;
use crate::config::RoomRules;
use crate::error::RoomError;
use crate::player::Player;
use crate::question::generate_questions;
use crate::room::Room;

/// Display name of the simulated opponent added to every room.
const BOT_NAME: &str = "ChatBot";

/// Coordinates room creation, joins, match flow, and eviction.
///
/// Construct one at process start and hand references to callers; all
/// methods take `&self` and are safe to call from concurrent threads.
/// A room mutated concurrently with its own eviction is mutated as a
/// detached aggregate and disappears with it; callers observing
/// [`RoomError::RoomNotFound`] afterwards are seeing the eviction.
pub struct RoomCoordinator {
    rules: RoomRules,
    rooms: RwLock<HashMap<String, Arc<Mutex<Room>>>>,
}

impl RoomCoordinator {
    /// Creates a coordinator with the reference rules.
    pub fn new() -> Self {
        Self::with_rules(RoomRules::default())
    }

    pub fn with_rules(rules: RoomRules) -> Self {
        Self {
            rules,
            rooms: RwLock::new(HashMap::new()),
        }
    }

    pub fn rules(&self) -> &RoomRules {
        &self.rules
    }

    /// Creates a room in the waiting state, seeded with the host and the
    /// bot (`"bot-" + code`).
    ///
    /// Only one non-finished room may exist at a time; the error names
    /// the code of the room to join instead. The scan, the code draw,
    /// and the insertion share one map write lock, so concurrent
    /// creations admit exactly one winner and codes stay unique.
    pub fn create_room(
        &self,
        host_id: &str,
        host_name: &str,
    ) -> Result<RoomSnapshot, RoomError> {
        require_identifier(host_id, "player id")?;
        require_identifier(host_name, "player name")?;

        let mut rooms = self.rooms.write();

        for (code, handle) in rooms.iter() {
            if handle.lock().status != RoomStatus::Finished {
                return Err(RoomError::ActiveRoomExists(code.clone()));
            }
        }

        let code = loop {
            let candidate = random_code(self.rules.code_length);
            if !rooms.contains_key(&candidate) {
                break candidate;
            }
        };

        let mut room = Room::new(code.clone(), host_id);
        room.add_player(Player::new(host_id, host_name, false));
        room.add_player(Player::new(format!("bot-{code}"), BOT_NAME, true));

        let snapshot = room.snapshot();
        rooms.insert(code.clone(), Arc::new(Mutex::new(room)));

        tracing::info!(%code, host = %host_id, "room created");
        Ok(snapshot)
    }

    /// Adds a human player to a waiting room.
    ///
    /// Fails if the room has started, is at capacity, or already
    /// contains `player_id`.
    pub fn join_room(
        &self,
        code: &str,
        player_id: &str,
        name: &str,
    ) -> Result<RoomSnapshot, RoomError> {
        let code = normalize_code(code)?;
        require_identifier(player_id, "player id")?;
        require_identifier(name, "player name")?;

        let handle = self.room_handle(&code)?;
        let mut room = handle.lock();

        if !room.status.is_joinable() {
            return Err(RoomError::AlreadyPlaying(code));
        }
        if room.players.len() >= self.rules.max_players {
            return Err(RoomError::RoomFull(code));
        }
        if room.find_player(player_id).is_some() {
            return Err(RoomError::AlreadyInRoom(player_id.to_string(), code));
        }

        room.add_player(Player::new(player_id, name, false));
        tracing::info!(
            %code,
            %player_id,
            players = room.players.len(),
            "player joined"
        );
        Ok(room.snapshot())
    }

    /// Starts the match: generates the question sequence and moves the
    /// room to `PLAYING`. Host only.
    pub fn start_game(
        &self,
        code: &str,
        requester_id: &str,
    ) -> Result<RoomSnapshot, RoomError> {
        let code = normalize_code(code)?;
        require_identifier(requester_id, "player id")?;

        let handle = self.room_handle(&code)?;
        let mut room = handle.lock();

        if !room.is_host(requester_id) {
            return Err(RoomError::NotHost(code));
        }
        if !room.can_start(self.rules.min_players_to_start) {
            return Err(RoomError::CannotStart(code));
        }

        room.questions = generate_questions(self.rules.question_count);
        room.status = RoomStatus::Playing;
        room.started_at = Some(now_millis());

        tracing::info!(
            %code,
            players = room.players.len(),
            questions = room.questions.len(),
            "game started"
        );
        Ok(room.snapshot())
    }

    /// Records one human answer and, when every human has answered the
    /// current round, closes the round: the bot answers once, the cursor
    /// advances, and the room finishes if the sequence is consumed.
    ///
    /// Round advancement compares each human's answered count against
    /// the cursor rather than any per-round flag, so out-of-order and
    /// concurrent submissions close each round exactly once.
    pub fn submit_answer(
        &self,
        code: &str,
        player_id: &str,
        answer: i64,
        response_time_ms: u64,
    ) -> Result<RoomSnapshot, RoomError> {
        let code = normalize_code(code)?;
        require_identifier(player_id, "player id")?;

        let handle = self.room_handle(&code)?;
        let mut room = handle.lock();

        let Some(question) = room.current_question() else {
            return Err(RoomError::NoActiveQuestion(code));
        };
        if answer < 0 || answer > self.rules.max_answer {
            return Err(RoomError::AnswerOutOfRange(answer));
        }
        let correct = question.is_correct(answer);

        let points = self.rules.points_per_correct;
        let Some(player) = room.find_player_mut(player_id) else {
            return Err(RoomError::PlayerNotFound(player_id.to_string(), code));
        };
        player.record_answer(response_time_ms);
        if correct {
            player.award_points(points);
        }
        tracing::debug!(%code, %player_id, correct, "answer recorded");

        // All humans are past the current round once each has answered
        // more questions than the cursor value.
        let cursor = room.current_question_index;
        let all_humans_answered = room
            .players
            .iter()
            .filter(|p| !p.is_bot)
            .all(|p| p.answered_count as usize > cursor);

        if all_humans_answered {
            self.simulate_bot_answer(&mut room);
            room.advance_question();

            if room.is_finished() {
                room.status = RoomStatus::Finished;
                room.finished_at = Some(now_millis());
                tracing::info!(%code, "game finished");
            } else {
                tracing::debug!(
                    %code,
                    round = room.current_question_index,
                    "round advanced"
                );
            }
        }

        Ok(room.snapshot())
    }

    /// Answers once on behalf of the room's bot: correct with the
    /// configured probability, response time uniform within the
    /// configured bounds. No-op without an active question or a bot.
    fn simulate_bot_answer(&self, room: &mut Room) {
        let Some(question) = room.current_question() else {
            return;
        };
        let mut rng = rand::rng();
        let correct_answer = question.answer;
        let answers_correctly = rng.random::<f64>() < self.rules.bot_accuracy;
        let response_time_ms =
            rng.random_range(self.rules.bot_response_min_ms..self.rules.bot_response_max_ms);

        let points = self.rules.points_per_correct;
        let Some(bot) = room.bot_mut() else {
            return;
        };
        bot.record_answer(response_time_ms);
        if answers_correctly {
            bot.award_points(points);
        }
        tracing::debug!(
            code = %room.code,
            correct = answers_correctly,
            response_time_ms,
            answer = correct_answer,
            "bot answered"
        );
    }

    /// The room's leaderboard: score descending, then average response
    /// time ascending, capped at the room capacity.
    pub fn get_ranking(&self, code: &str) -> Result<Vec<PlayerView>, RoomError> {
        let code = normalize_code(code)?;
        let handle = self.room_handle(&code)?;
        let room = handle.lock();

        let mut ranking: Vec<PlayerView> =
            room.players.iter().map(Into::into).collect();
        ranking.sort_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| {
                a.average_response_time.total_cmp(&b.average_response_time)
            })
        });
        ranking.truncate(self.rules.max_players);
        Ok(ranking)
    }

    /// Pure read of one room.
    pub fn get_room(&self, code: &str) -> Result<RoomSnapshot, RoomError> {
        let code = normalize_code(code)?;
        let handle = self.room_handle(&code)?;
        let snapshot = handle.lock().snapshot();
        Ok(snapshot)
    }

    /// Removes the player from the room if both exist; otherwise does
    /// nothing. A room whose last human leaves is evicted outright,
    /// since bot-only rooms are not worth retaining.
    pub fn leave_room(&self, code: &str, player_id: &str) -> Result<(), RoomError> {
        let code = normalize_code(code)?;

        let mut rooms = self.rooms.write();
        let Some(handle) = rooms.get(&code) else {
            return Ok(());
        };

        let evict = {
            let mut room = handle.lock();
            if room.remove_player(player_id) {
                tracing::info!(
                    %code,
                    %player_id,
                    players = room.players.len(),
                    "player left"
                );
            }
            !room.has_human_players()
        };

        if evict {
            rooms.remove(&code);
            tracing::info!(%code, "room evicted, no human players remain");
        }
        Ok(())
    }

    /// Every tracked room, in no particular order. Diagnostic.
    pub fn all_rooms(&self) -> Vec<RoomSnapshot> {
        let handles: Vec<Arc<Mutex<Room>>> =
            self.rooms.read().values().cloned().collect();
        handles.iter().map(|h| h.lock().snapshot()).collect()
    }

    /// Number of tracked rooms, finished ones included.
    pub fn room_count(&self) -> usize {
        self.rooms.read().len()
    }

    fn room_handle(&self, code: &str) -> Result<Arc<Mutex<Room>>, RoomError> {
        self.rooms
            .read()
            .get(code)
            .cloned()
            .ok_or_else(|| RoomError::RoomNotFound(code.to_string()))
    }
}

impl Default for RoomCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercases the code; rejects blank input before any lookup.
fn normalize_code(code: &str) -> Result<String, RoomError> {
    if code.trim().is_empty() {
        return Err(RoomError::BlankIdentifier("room code"));
    }
    Ok(code.to_uppercase())
}

fn require_identifier(value: &str, label: &'static str) -> Result<(), RoomError> {
    if value.trim().is_empty() {
        return Err(RoomError::BlankIdentifier(label));
    }
    Ok(())
}

// =========================================================================
// Tests
// =========================================================================
