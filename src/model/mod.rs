use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub mod entry;
pub mod game;
pub mod odds;
pub mod record;

/// Deserialize an optional pass-through field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
