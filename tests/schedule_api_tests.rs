mod common;

use chrono::NaiveDate;
use common::load_sample;
use hoops_schedule_lambda::date_resolver::CalendarDate;
use hoops_schedule_lambda::error::{ScheduleError, ValidationError};
use hoops_schedule_lambda::model::entry::ScheduleEntry;
use hoops_schedule_lambda::model::record::{validate_entries, GameRecord};
use hoops_schedule_lambda::schedule_api::ScheduleApi;

fn sample_entries() -> Vec<ScheduleEntry> {
    ScheduleApi::parse_body(&load_sample())
        .expect("parse sample")
        .into_iter()
        .map(|e| e.expect("sample entries decode"))
        .collect()
}

#[test]
fn builds_dated_schedule_url() {
    let api = ScheduleApi::new("http://localhost:8081/");
    let date = CalendarDate(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    assert_eq!(api.url_for(date), "http://localhost:8081/jumper/schedule?date=2025-01-05");
}

#[test]
fn parses_sample_schedule() {
    let entries = sample_entries();
    assert_eq!(entries.len(), 6);

    let first = &entries[0];
    assert_eq!(first.game.id, 401001);
    let odds = first.odds.as_ref().expect("odds present");
    assert_eq!(odds.moneyline_home.as_deref(), Some("-150"));
    assert_eq!(odds.spread_away_odds.as_deref(), Some("-110"));
    let teams = first.game.teams.as_ref().expect("teams present");
    assert_eq!(teams.home.name.as_deref(), Some("Los Angeles Lakers"));
    let scores = first.game.scores.as_ref().expect("scores present");
    assert_eq!(scores.home.total, Some(110));
    assert_eq!(scores.away.over_time, None);
    let league = first.game.league.as_ref().expect("league present");
    assert_eq!(league.name.as_deref(), Some("NBA"));
    assert_eq!(league.season.as_deref(), Some("2024-2025"));
    assert!(first.predictions.is_none());
    assert!(entries[1].predictions.is_some());
}

#[test]
fn single_object_body_is_one_game() {
    let body = r#"{
        "predictions": null,
        "odds": null,
        "game": { "id": 7, "timestamp": 1736985600, "status": { "timer": null, "long": "Not Started", "short": "NS" } }
    }"#;
    let entries = ScheduleApi::parse_body(body).expect("parse single object");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].as_ref().expect("valid entry").game.id, 7);
}

#[test]
fn empty_array_is_no_games() {
    let entries = ScheduleApi::parse_body("[]").expect("parse empty");
    assert!(entries.is_empty());
}

#[test]
fn garbage_body_is_parse_error() {
    let err = ScheduleApi::parse_body("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, ScheduleError::Parsing(_)), "error was: {}", err);
}

#[test]
fn scalar_body_is_unexpected() {
    let err = ScheduleApi::parse_body("\"no games\"").unwrap_err();
    assert!(matches!(err, ScheduleError::UnexpectedBody("a string")), "error was: {}", err);
}

#[test]
fn validation_drops_malformed_entries() {
    let entries = ScheduleApi::parse_body(&load_sample()).expect("parse sample");
    let (records, rejected) = validate_entries(entries);

    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![401001, 401002, 401003, 401004]);
    assert_eq!(
        rejected,
        vec![
            ValidationError::MissingTimestamp { game_id: 401005 },
            ValidationError::EmptyStatus { game_id: 401006 },
        ]
    );
    assert_eq!(rejected[0].to_string(), "game 401005: missing timestamp");
}

#[test]
fn non_integer_timestamp_rejects_only_that_game() {
    let body = r#"[
        { "game": { "id": 1, "timestamp": 1736985600, "status": { "timer": "5:00", "long": "Live", "short": "Q1" } } },
        { "game": { "id": 2, "timestamp": "soon", "status": { "timer": null, "long": "Not Started", "short": "NS" } } }
    ]"#;
    let entries = ScheduleApi::parse_body(body).expect("body with one bad timestamp still parses");
    assert_eq!(entries.len(), 2);

    let (records, rejected) = validate_entries(entries);
    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(rejected, vec![ValidationError::InvalidTimestamp { game_id: 2, value: "\"soon\"".to_string() }]);
}

#[test]
fn team_without_name_still_passes_through() {
    let body = r#"[
        { "game": { "id": 1, "timestamp": 1736985600, "status": { "long": "Live" } } },
        { "game": {
            "id": 2,
            "timestamp": 1736989200,
            "status": { "long": "Not Started" },
            "teams": { "home": { "id": 145, "logo": null }, "away": { "id": 141, "name": "Golden State Warriors" } },
            "league": { "id": "twelve", "name": 12 }
        } }
    ]"#;
    let entries = ScheduleApi::parse_body(body).expect("body with loose sub-objects parses");
    let (records, rejected) = validate_entries(entries);

    assert!(rejected.is_empty(), "rejected was: {:?}", rejected);
    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    let teams = records[1].game.teams.as_ref().expect("teams kept");
    assert_eq!(teams.home.name, None);
    assert_eq!(teams.away.name.as_deref(), Some("Golden State Warriors"));
    let league = records[1].game.league.as_ref().expect("league kept");
    assert_eq!(league.id, None);
    assert_eq!(league.name, None);
}

#[test]
fn entry_without_game_id_is_malformed_alone() {
    let body = r#"[
        { "game": { "timestamp": 1736985600, "status": { "long": "Live" } } },
        { "game": { "id": 3, "timestamp": 1736985600, "status": { "long": "Game Finished" } } },
        42
    ]"#;
    let entries = ScheduleApi::parse_body(body).expect("parse");
    let (records, rejected) = validate_entries(entries);

    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);
    assert_eq!(rejected.len(), 2);
    assert!(matches!(&rejected[0], ValidationError::Malformed { index: 0, .. }), "rejected was: {:?}", rejected);
    assert!(matches!(&rejected[1], ValidationError::Malformed { index: 2, .. }), "rejected was: {:?}", rejected);
    assert_eq!(rejected[0].game_id(), None);
    assert!(rejected[0].to_string().starts_with("entry 0: malformed"), "error was: {}", rejected[0]);
}

#[test]
fn record_takes_status_and_timestamp_from_game() {
    let entries = sample_entries();
    let record = GameRecord::try_from(entries[1].clone()).expect("valid entry");
    assert_eq!(record.status, "Quarter 3");
    assert_eq!(record.timestamp.timestamp(), 1736985600);
    assert!(record.has_prediction());
    assert!(record.odds.is_some());
}

#[test]
fn missing_status_object_is_rejected() {
    let body = r#"[{ "game": { "id": 9, "timestamp": 1736985600 } }]"#;
    let entry = ScheduleApi::parse_body(body).expect("parse").remove(0).expect("valid entry");
    let err = GameRecord::try_from(entry).unwrap_err();
    assert_eq!(err, ValidationError::MissingStatus { game_id: 9 });
    assert_eq!(err.game_id(), Some(9));
}

#[test]
fn out_of_range_timestamp_is_rejected() {
    let body = r#"[{ "game": { "id": 10, "timestamp": 9223372036854775807, "status": { "timer": null, "long": "Live", "short": "Q1" } } }]"#;
    let entry = ScheduleApi::parse_body(body).expect("parse").remove(0).expect("valid entry");
    let err = GameRecord::try_from(entry).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidTimestamp { game_id: 10, value: i64::MAX.to_string() }
    );
}
