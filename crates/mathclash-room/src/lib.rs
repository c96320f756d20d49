//! Room coordination for Mathclash multiplayer matches.
//!
//! The crate implements the in-memory match core: short-code rooms, a
//! simulated bot opponent, arithmetic question sequences, concurrent
//! answer submission, and per-room leaderboards.
//!
//! # Key types
//!
//! - [`RoomCoordinator`] — creates rooms, admits players, runs rounds
//! - [`Room`] — one match aggregate (players, questions, cursor)
//! - [`Player`] — per-participant scoring state, human or bot
//! - [`RoomRules`] — capacity, scoring, and bot tuning
//! - [`RoomError`] — the not-found / conflict / validation taxonomy
//!
//! State is process-local by design: rooms are short-lived casual
//! matches, and a restart forgetting them is acceptable. Callers poll
//! snapshots; there is no push channel.

mod clock;
mod code;
mod config;
mod coordinator;
mod error;
mod player;
mod question;
mod room;

pub use config::RoomRules;
pub use coordinator::RoomCoordinator;
pub use error::{ErrorKind, RoomError};
pub use player::Player;
pub use question::{Question, generate_questions};
pub use room::Room;
