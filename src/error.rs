use std::fmt;

/// Why a schedule entry could not become a [`GameRecord`](crate::model::record::GameRecord).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The `index`-th body element is not a game entry at all (e.g. no integer `game.id`).
    Malformed { index: usize, reason: String },
    /// `game.status.long` absent or null.
    MissingStatus { game_id: i64 },
    /// `game.status.long` present but blank.
    EmptyStatus { game_id: i64 },
    /// `game.timestamp` absent or null.
    MissingTimestamp { game_id: i64 },
    /// `game.timestamp` not an integer, or outside the range chrono can represent.
    InvalidTimestamp { game_id: i64, value: String },
}

impl ValidationError {
    /// The offending game, when the entry got far enough to name one.
    pub fn game_id(&self) -> Option<i64> {
        match self {
            ValidationError::Malformed { .. } => None,
            ValidationError::MissingStatus { game_id }
            | ValidationError::EmptyStatus { game_id }
            | ValidationError::MissingTimestamp { game_id }
            | ValidationError::InvalidTimestamp { game_id, .. } => Some(*game_id),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Malformed { index, reason } => write!(f, "entry {index}: malformed: {reason}"),
            ValidationError::MissingStatus { game_id } => write!(f, "game {game_id}: missing status"),
            ValidationError::EmptyStatus { game_id } => write!(f, "game {game_id}: empty status"),
            ValidationError::MissingTimestamp { game_id } => write!(f, "game {game_id}: missing timestamp"),
            ValidationError::InvalidTimestamp { game_id, value } => {
                write!(f, "game {game_id}: invalid timestamp {value}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum ScheduleError {
    /// Transport-level failure reaching the schedule API.
    Request(String, String),
    /// The API answered with a non-2xx status.
    Status(u16, String),
    /// The response body could not be read.
    Body(String, String),
    /// The body was not JSON.
    Parsing(serde_json::Error),
    /// The body was JSON but neither a list of entries nor a single entry object.
    UnexpectedBody(&'static str),
    /// A timezone name that chrono-tz does not know.
    UnknownTimezone(String),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::Request(e, url) => write!(f, "Request failed for {url}: {e}"),
            ScheduleError::Status(code, url) => write!(f, "Non-success status {code} for {url}"),
            ScheduleError::Body(e, url) => write!(f, "Failed to read response body for {url}: {e}"),
            ScheduleError::Parsing(e) => write!(f, "Failed to deserialize schedule: {e}"),
            ScheduleError::UnexpectedBody(kind) => write!(f, "Expected a list or object of games, got {kind}"),
            ScheduleError::UnknownTimezone(name) => write!(f, "Unknown timezone: {name}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<serde_json::Error> for ScheduleError {
    fn from(e: serde_json::Error) -> Self {
        ScheduleError::Parsing(e)
    }
}
