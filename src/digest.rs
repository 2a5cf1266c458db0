use chrono_tz::Tz;

use crate::classifier::{ScheduleSnapshot, StatusBucket};
use crate::date_resolver::CalendarDate;
use crate::model::record::GameRecord;

/// Plain-text rundown of a snapshot, one section per bucket in priority order.
/// Empty buckets still get a header so the counts are always visible.
pub fn format_digest(date: CalendarDate, snapshot: &ScheduleSnapshot, timezone: Tz) -> String {
    let mut out = format!(":basketball: Games for {}\n", date.date().format("%A, %B %-d, %Y"));

    if snapshot.is_empty() {
        out.push_str("No games scheduled.");
        return out;
    }

    for bucket in StatusBucket::ALL {
        let games = snapshot.bucket(bucket);
        out.push_str(&format!("\n**{}** ({})", bucket.title(), games.len()));
        for game in games {
            out.push('\n');
            out.push_str(&format_game_line(game, timezone));
        }
        out.push('\n');
    }

    out.trim_end().to_string()
}

/// One line per game: matchup, tip-off in `timezone`, status, league, score and lines when known.
pub fn format_game_line(game: &GameRecord, timezone: Tz) -> String {
    let (home, away) = match &game.game.teams {
        Some(t) => (
            t.home.name.as_deref().unwrap_or("Home"),
            t.away.name.as_deref().unwrap_or("Away"),
        ),
        None => ("Home", "Away"),
    };
    let tip = game.timestamp.with_timezone(&timezone).format("%-I:%M %p %Z");

    let mut line = format!("- {away} @ {home} | {tip} | {}", game.status);

    if let Some(league) = &game.game.league
        && let Some(name) = league.name.as_deref()
    {
        match league.season.as_deref() {
            Some(season) => line.push_str(&format!(" | {name} ({season})")),
            None => line.push_str(&format!(" | {name}")),
        }
    }

    if let Some(scores) = &game.game.scores
        && let (Some(a), Some(h)) = (scores.away.total, scores.home.total)
    {
        line.push_str(&format!(" | {away} {a} - {h} {home}"));
    }

    if let Some(odds) = &game.odds {
        let dash = "-";
        let spread_home = odds.spread_home.as_deref().unwrap_or(dash);
        let spread_home_odds = odds.spread_home_odds.as_deref().unwrap_or(dash);
        let spread_away = odds.spread_away.as_deref().unwrap_or(dash);
        let spread_away_odds = odds.spread_away_odds.as_deref().unwrap_or(dash);
        let ml_home = odds.moneyline_home.as_deref().unwrap_or(dash);
        let ml_away = odds.moneyline_away.as_deref().unwrap_or(dash);
        line.push_str(&format!(
            " | Spread H {spread_home} ({spread_home_odds}) A {spread_away} ({spread_away_odds}) | ML H {ml_home} A {ml_away}"
        ));
    }

    if game.has_prediction() {
        line.push_str(" | :crystal_ball: prediction available");
    }

    line
}
