//! Boundary types for Mathclash rooms.
//!
//! This crate defines everything a request layer is allowed to see and
//! serialize:
//!
//! - [`RoomStatus`] — the room lifecycle state machine
//! - [`RoomSnapshot`] — a point-in-time, read-only picture of a room
//! - [`PlayerView`] — a player's public scoring state
//! - [`QuestionView`] — the active question, with the answer withheld
//!
//! The coordinator crate produces these; nothing in here can mutate a
//! room. Keeping the views in their own crate means the request layer
//! never links against the types that carry correct answers.

mod types;

pub use types::{PlayerView, QuestionView, RoomSnapshot, RoomStatus};
