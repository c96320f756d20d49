//! Error types for room operations.

/// The three failure classes a transport layer needs to distinguish.
///
/// A request layer maps these to its own status codes (404 / 409 / 400)
/// without matching every [`RoomError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced room or player does not exist.
    NotFound,
    /// The operation violates the room's current state or capacity.
    Conflict,
    /// The input itself is malformed.
    Validation,
}

/// Errors that can occur during room operations.
///
/// Every variant carries the identifiers needed to phrase the failure
/// back to the caller. No variant implies partial mutation: operations
/// validate all preconditions before their first write.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// The room does not exist.
    #[error("room {0} not found")]
    RoomNotFound(String),

    /// The player is not in the room's roster.
    #[error("player {0} not found in room {1}")]
    PlayerNotFound(String, String),

    /// A non-finished room already exists; only one may be active.
    /// Carries the code of the room to join instead.
    #[error("an active room already exists, join room {0}")]
    ActiveRoomExists(String),

    /// The room has left the waiting state and no longer accepts joins.
    #[error("room {0} is already playing")]
    AlreadyPlaying(String),

    /// The room is full, no more player slots available.
    #[error("room {0} is full")]
    RoomFull(String),

    /// The player is already in this room.
    #[error("player {0} is already in room {1}")]
    AlreadyInRoom(String, String),

    /// Someone other than the host tried to start the match.
    #[error("only the host can start room {0}")]
    NotHost(String),

    /// The room is not in a startable state.
    #[error("room {0} cannot be started yet")]
    CannotStart(String),

    /// No question is active (match not started, or already over).
    #[error("room {0} has no active question")]
    NoActiveQuestion(String),

    /// The submitted answer is outside the accepted range.
    #[error("answer {0} is outside the accepted range")]
    AnswerOutOfRange(i64),

    /// A required identifier was blank.
    #[error("{0} must not be blank")]
    BlankIdentifier(&'static str),
}

impl RoomError {
    /// Collapses the variant into its transport-facing failure class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RoomNotFound(_) | Self::PlayerNotFound(_, _) => ErrorKind::NotFound,
            Self::ActiveRoomExists(_)
            | Self::AlreadyPlaying(_)
            | Self::RoomFull(_)
            | Self::AlreadyInRoom(_, _)
            | Self::NotHost(_)
            | Self::CannotStart(_)
            | Self::NoActiveQuestion(_) => ErrorKind::Conflict,
            Self::AnswerOutOfRange(_) | Self::BlankIdentifier(_) => ErrorKind::Validation,
        }
    }
}
