use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::game::Game;
use crate::model::odds::Odds;

/// One element of the schedule API response, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub predictions: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub odds: Option<Odds>,
    pub game: Game,
}

/// A body element that either became an entry or was rejected on its own.
pub type ParsedEntry = Result<ScheduleEntry, ValidationError>;

impl ScheduleEntry {
    /// Decode the `index`-th element of a response body.
    pub fn from_value(index: usize, value: serde_json::Value) -> ParsedEntry {
        serde_json::from_value(value).map_err(|e| ValidationError::Malformed { index, reason: e.to_string() })
    }
}
