//! Schema of the remote frame-data document.
//!
//! Every leaf is `Option<Value>`: present or absent, with whatever JSON type
//! the source chose. Normalization to integers/decimals/text happens once,
//! when [`Payload`] is built, so nothing downstream touches raw JSON.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::character::{CharacterStats, NewCharacter};
use crate::error::{CoreError, Result};
use crate::fighter_move::NewMove;
use crate::frame::normalize_text_field;

#[derive(Debug, Default, Deserialize)]
struct RawPayload {
    #[serde(default)]
    fighters: Option<Map<String, Value>>,
}

/// One entry of the `fighters` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFighter {
    pub name: Option<Value>,
    pub stats: Option<RawStats>,
    pub moves: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStats {
    pub weight: Option<Value>,
    pub run_speed: Option<Value>,
    pub walk_speed: Option<Value>,
    pub air_speed: Option<Value>,
    pub fall_speed: Option<Value>,
    pub fast_fall_speed: Option<Value>,
    pub sh_air_time: Option<Value>,
    pub sh_ff_air_time: Option<Value>,
    pub fh_air_time: Option<Value>,
    pub fh_ff_air_time: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMove {
    pub name: Option<Value>,
    #[serde(rename = "type")]
    pub input_type: Option<Value>,
    pub startup: Option<Value>,
    #[serde(rename = "totalFrames")]
    pub total_frames: Option<Value>,
    #[serde(rename = "landingLag")]
    pub landing_lag: Option<Value>,
    #[serde(rename = "shieldAdvantage")]
    pub shield_advantage: Option<Value>,
    #[serde(rename = "baseDamage")]
    pub base_damage: Option<Value>,
}

/// A fighter with its character row and moves, ready to load.
#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    /// Internal identifier from the source document.
    pub key: String,
    pub character: NewCharacter,
    pub moves: Vec<NewMove>,
}

impl Fighter {
    /// Build a fighter from its source entry.
    ///
    /// The display name falls back to `key`. Move entries that are not JSON
    /// objects are skipped with a warning.
    #[must_use]
    pub fn from_raw(key: &str, raw: &RawFighter) -> Self {
        let name = normalize_text_field(raw.name.as_ref()).unwrap_or_else(|| key.to_owned());
        let stats = raw.stats.as_ref().map(CharacterStats::from_raw).unwrap_or_default();

        let moves = raw
            .moves
            .iter()
            .flatten()
            .enumerate()
            .filter_map(|(index, entry)| match RawMove::deserialize(entry) {
                Ok(raw_move) => Some(NewMove::from_raw(&raw_move, entry)),
                Err(e) => {
                    tracing::warn!(fighter = key, index, error = %e, "skipping malformed move entry");
                    None
                },
            })
            .collect();

        Self { key: key.to_owned(), character: NewCharacter::new(name, stats), moves }
    }
}

/// Parsed and normalized frame-data document, fighters in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fighters: Vec<Fighter>,
}

impl Payload {
    /// Parse a document from text.
    ///
    /// # Errors
    /// Returns an error if the text is not JSON or does not have the
    /// `{"fighters": {..}}` shape.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Build from an already-parsed JSON document.
    ///
    /// # Errors
    /// Returns an error if the root is not an object, `fighters` is not an
    /// object, or a fighter entry is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(CoreError::InvalidPayload(format!(
                "expected a JSON object at the root, got {}",
                json_kind(&value)
            )));
        }
        let raw = RawPayload::deserialize(value)?;
        let fighters = raw
            .fighters
            .unwrap_or_default()
            .into_iter()
            .map(|(key, entry)| -> Result<Fighter> {
                let raw_fighter = RawFighter::deserialize(&entry).map_err(|e| {
                    CoreError::InvalidPayload(format!("fighter '{key}' is malformed: {e}"))
                })?;
                Ok(Fighter::from_raw(&key, &raw_fighter))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { fighters })
    }

    #[must_use]
    pub fn new(fighters: Vec<Fighter>) -> Self {
        Self { fighters }
    }

    #[must_use]
    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.fighters.iter().map(|f| f.moves.len()).sum()
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
