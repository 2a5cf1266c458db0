use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::entry::{ParsedEntry, ScheduleEntry};
use crate::model::game::Game;
use crate::model::odds::Odds;

/// A validated game: non-empty status text and a real instant.
///
/// Everything else from the upstream entry rides along in `game`, `odds` and
/// `predictions` and is never inspected by classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: i64,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub predictions: Option<serde_json::Value>,
    pub odds: Option<Odds>,
    pub game: Game,
}

impl GameRecord {
    pub fn has_prediction(&self) -> bool {
        self.predictions.as_ref().is_some_and(|p| !p.is_null())
    }
}

impl TryFrom<ScheduleEntry> for GameRecord {
    type Error = ValidationError;

    fn try_from(entry: ScheduleEntry) -> Result<Self, Self::Error> {
        let game_id = entry.game.id;

        let status = entry
            .game
            .status
            .as_ref()
            .and_then(|s| s.long.as_deref())
            .ok_or(ValidationError::MissingStatus { game_id })?;
        if status.trim().is_empty() {
            return Err(ValidationError::EmptyStatus { game_id });
        }
        let status = status.to_string();

        let raw_ts = entry
            .game
            .timestamp
            .as_ref()
            .ok_or(ValidationError::MissingTimestamp { game_id })?;
        let timestamp = raw_ts
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| ValidationError::InvalidTimestamp { game_id, value: raw_ts.to_string() })?;

        Ok(GameRecord {
            id: game_id,
            status,
            timestamp,
            predictions: entry.predictions,
            odds: entry.odds,
            game: entry.game,
        })
    }
}

/// Validate every parsed entry, keeping the good ones in input order and reporting the rest.
pub fn validate_entries(entries: Vec<ParsedEntry>) -> (Vec<GameRecord>, Vec<ValidationError>) {
    let mut records = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();
    for entry in entries {
        match entry.and_then(GameRecord::try_from) {
            Ok(record) => records.push(record),
            Err(e) => rejected.push(e),
        }
    }
    (records, rejected)
}
