use serde::{Deserialize, Serialize};

/// Upstream game object. Only `id` is required; everything else is passed
/// through, and sub-objects that don't match their expected shape are dropped
/// rather than failing the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    #[serde(default, deserialize_with = "super::lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub time: Option<String>,
    /// Unix seconds. Kept raw so a bad value can be reported per game.
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub stage: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub week: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub status: Option<Status>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub league: Option<League>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub country: Option<Country>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub teams: Option<Matchup<Team>>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub scores: Option<Matchup<TeamScores>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, deserialize_with = "super::lenient")]
    pub timer: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub long: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub short: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup<T> {
    pub home: T,
    pub away: T,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "super::lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub logo: Option<String>,
}

/// Per-period points. Periods not yet played come through as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamScores {
    #[serde(default, deserialize_with = "super::lenient")]
    pub quarter_1: Option<u32>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub quarter_2: Option<u32>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub quarter_3: Option<u32>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub quarter_4: Option<u32>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub over_time: Option<u32>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub total: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct League {
    #[serde(default, deserialize_with = "super::lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "super::lenient")]
    pub type_field: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub season: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default, deserialize_with = "super::lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub flag: Option<String>,
}
