use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::classifier::{classify, ScheduleSnapshot};
use crate::date_resolver::{parse_timezone, CalendarDate, DaySelection};
use crate::digest::format_digest;
use crate::discord::Discord;
use crate::model::entry::ParsedEntry;
use crate::model::record::validate_entries;
use crate::schedule_api::ScheduleApi;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Test,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub mode: Mode,
    pub schedule_base_url: String,
    #[serde(default)]
    pub day: DaySelection,
    /// IANA zone name; defaults to America/Los_Angeles.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub discord_hook_url: Option<String>,
    #[serde(default)]
    pub test_discord_hook_url: Option<String>,
}

impl Request {
    /// Webhook for the selected mode, if one was configured.
    pub fn destination(&self) -> Option<&str> {
        let url = match self.mode {
            Mode::Test => self.test_discord_hook_url.as_deref(),
            Mode::Production => self.discord_hook_url.as_deref(),
        };
        url.filter(|u| !u.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub live: usize,
    pub upcoming: usize,
    pub completed: usize,
}

impl From<&ScheduleSnapshot> for BucketCounts {
    fn from(snapshot: &ScheduleSnapshot) -> Self {
        Self {
            live: snapshot.live().len(),
            upcoming: snapshot.upcoming().len(),
            completed: snapshot.completed().len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub date: CalendarDate,
    pub day: DaySelection,
    pub counts: BucketCounts,
    /// Entries dropped during validation, one message each.
    pub rejected: Vec<String>,
    pub snapshot: ScheduleSnapshot,
    pub message: String,
    pub posted: bool,
}

/// Turn a fetched day into a response: validate, classify, render. No I/O.
pub fn build_response(day: DaySelection, date: CalendarDate, timezone: Tz, entries: Vec<ParsedEntry>) -> Response {
    let (records, rejected) = validate_entries(entries);
    for e in &rejected {
        warn!(game_id = ?e.game_id(), error = %e, "Dropping malformed schedule entry");
    }

    let snapshot = classify(records);
    let counts = BucketCounts::from(&snapshot);
    let message = format_digest(date, &snapshot, timezone);
    info!(live = counts.live, upcoming = counts.upcoming, completed = counts.completed, "Classified schedule");

    Response {
        date,
        day,
        counts,
        rejected: rejected.iter().map(ToString::to_string).collect(),
        snapshot,
        message,
        posted: false,
    }
}

/// Resolve the date, fetch it, and build the response. `now` is injected for testing.
pub async fn run(request: Request, now: DateTime<Utc>) -> Result<Response, Error> {
    let timezone = parse_timezone(request.timezone.as_deref())?;
    let date = request.day.resolve(now, timezone);
    info!(date = %date, day = ?request.day, timezone = %timezone, "Resolved schedule date");

    // ureq is blocking; the closure needs owned inputs
    let api = ScheduleApi::new(request.schedule_base_url.clone());
    let entries = tokio::task::spawn_blocking(move || api.fetch_day(date)).await??;

    let mut response = build_response(request.day, date, timezone, entries);

    match request.destination() {
        Some(url) => {
            let discord = Discord::new(url.to_string());
            let content = response.message.clone();
            match tokio::task::spawn_blocking(move || discord.post_digest(&content)).await {
                Ok(Ok(())) => response.posted = true,
                Ok(Err(e)) => error!(error = %e, "Failed to post digest to Discord"),
                Err(e) => error!(error = %e, "Discord post task join error"),
            }
        }
        None => info!(mode = ?request.mode, "No Discord webhook configured for mode; skipping post"),
    }

    Ok(response)
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    run(event.payload, Utc::now()).await
}
