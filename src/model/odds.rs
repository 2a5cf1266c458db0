use serde::{Deserialize, Serialize};

/// Betting lines as the schedule API reports them. Values are display strings
/// (e.g. "-110", "+3.5") and are never parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Odds {
    #[serde(default, deserialize_with = "super::lenient")]
    pub moneyline_home: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub spread_home: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub spread_home_odds: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub moneyline_away: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub spread_away: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub spread_away_odds: Option<String>,
}
