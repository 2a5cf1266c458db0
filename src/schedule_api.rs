use tracing::{error, info, info_span, instrument};

use crate::date_resolver::CalendarDate;
use crate::error::ScheduleError;
use crate::model::entry::{ParsedEntry, ScheduleEntry};

/// Client for the basketball schedule endpoint (`/jumper/schedule?date=YYYY-MM-DD`).
#[derive(Debug, Clone)]
pub struct ScheduleApi {
    base_url: String,
}

impl ScheduleApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn url_for(&self, date: CalendarDate) -> String {
        format!("{}/jumper/schedule?date={}", self.base_url, date)
    }

    /// Fetch every game scheduled on `date`. Blocking; call from `spawn_blocking`.
    #[instrument(level = "info", skip(self, date), fields(date = %date))]
    pub fn fetch_day(&self, date: CalendarDate) -> Result<Vec<ParsedEntry>, ScheduleError> {
        let url = self.url_for(date);
        let response = {
            let _span = info_span!("schedule_fetch", url = %url).entered();
            ureq::get(&url).call()
        };
        let response = match response {
            Ok(r) => r,
            // ureq 3 reports 4xx/5xx as StatusCode errors by default
            Err(ureq::Error::StatusCode(code)) => {
                error!(status = code, url = %url, "Schedule API returned non-success status");
                return Err(ScheduleError::Status(code, url));
            }
            Err(e) => {
                error!(error = %e, url = %url, "Schedule request failed");
                return Err(ScheduleError::Request(e.to_string(), url));
            }
        };

        let code = response.status().as_u16();
        if !(200..300).contains(&code) {
            error!(status = code, url = %url, "Schedule API returned non-success status");
            return Err(ScheduleError::Status(code, url));
        }

        let body = response.into_body().read_to_string().map_err(|e| {
            error!(error = %e, "Failed to read schedule response body");
            ScheduleError::Body(e.to_string(), url.clone())
        })?;

        let entries = Self::parse_body(&body)?;
        info!(games = entries.len(), "Fetched schedule");
        Ok(entries)
    }

    /// Parse a raw response body (no network). A bare object counts as a one-game list.
    ///
    /// Only a body that is not JSON, or not a list/object, fails as a whole;
    /// each element is decoded on its own so one bad game can't sink the rest.
    #[instrument(level = "debug", skip(body), fields(bytes = body.len()))]
    pub fn parse_body(body: &str) -> Result<Vec<ParsedEntry>, ScheduleError> {
        let parsed: serde_json::Value = serde_json::from_str(body).map_err(|e| {
            error!(error = %e, "Failed to deserialize schedule body");
            ScheduleError::Parsing(e)
        })?;
        let items = match parsed {
            serde_json::Value::Array(items) => items,
            obj @ serde_json::Value::Object(_) => vec![obj],
            other => {
                let kind = match other {
                    serde_json::Value::Null => "null",
                    serde_json::Value::Bool(_) => "a boolean",
                    serde_json::Value::Number(_) => "a number",
                    _ => "a string",
                };
                error!(kind, "Schedule body is not a list or object");
                return Err(ScheduleError::UnexpectedBody(kind));
            }
        };
        Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| ScheduleEntry::from_value(index, item))
            .collect())
    }
}
