use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Snapshot of the server's game, as returned by `/start` and `/submit`.
///
/// Nothing here is validated: absent fields fall back to their defaults so a
/// partial object still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_started: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub curr_selection_menu: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: BTreeMap<String, PlayerInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    #[serde(default, deserialize_with = "text_or_number")]
    pub shields: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub hand_size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hand: String,
}

impl PlayerInfo {
    pub fn cards(&self) -> Vec<&str> {
        self.hand.split_whitespace().collect()
    }
}

impl GameState {
    /// Parses a response body. A literal `null` body means the server sent no state.
    pub fn from_body(body: &str) -> serde_json::Result<Option<GameState>> {
        serde_json::from_str::<Option<GameState>>(body)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// The server sends counts as strings; older builds sent numbers.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected a string or a number, got {}",
            other
        ))),
    }
}
