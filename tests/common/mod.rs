#![allow(dead_code)]

use chrono::DateTime;
use hoops_schedule_lambda::model::game::{Game, Status};
use hoops_schedule_lambda::model::record::GameRecord;

/// Minimal valid record: only the fields classification looks at are meaningful.
pub fn record(id: i64, status: &str, ts: i64) -> GameRecord {
    GameRecord {
        id,
        status: status.to_string(),
        timestamp: DateTime::from_timestamp(ts, 0).expect("valid timestamp"),
        predictions: None,
        odds: None,
        game: Game {
            id,
            date: None,
            time: None,
            timestamp: Some(serde_json::json!(ts)),
            timezone: None,
            stage: None,
            week: None,
            venue: None,
            status: Some(Status { timer: None, long: Some(status.to_string()), short: None }),
            league: None,
            country: None,
            teams: None,
            scores: None,
        },
    }
}

pub fn ids(records: &[GameRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

pub fn load_sample() -> String {
    std::fs::read_to_string("tests/sample_schedule.json").expect("failed to read sample_schedule.json")
}
