use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::character::CharacterId;
use crate::frame::{normalize_decimal_field, normalize_frame_field, normalize_text_field};
use crate::payload::RawMove;

/// The four frame counts of a move; each may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveFrames {
    pub startup: Option<i64>,
    pub total_frames: Option<i64>,
    pub landing_lag: Option<i64>,
    pub shield_advantage: Option<i64>,
}

/// Move as it is handed to storage.
///
/// `note` carries the untouched source record as JSON so every normalized
/// value can be traced back to what the source actually said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMove {
    pub name: Option<String>,
    pub input_type: Option<String>,
    pub frames: MoveFrames,
    pub base_damage: Option<f64>,
    pub note: String,
}

impl NewMove {
    /// Normalize a typed source record, keeping `original` as the note.
    #[must_use]
    pub fn from_raw(raw: &RawMove, original: &Value) -> Self {
        Self {
            name: normalize_text_field(raw.name.as_ref()),
            input_type: normalize_text_field(raw.input_type.as_ref()),
            frames: MoveFrames {
                startup: normalize_frame_field(raw.startup.as_ref()),
                total_frames: normalize_frame_field(raw.total_frames.as_ref()),
                landing_lag: normalize_frame_field(raw.landing_lag.as_ref()),
                shield_advantage: normalize_frame_field(raw.shield_advantage.as_ref()),
            },
            base_damage: normalize_decimal_field(raw.base_damage.as_ref()),
            note: original.to_string(),
        }
    }
}

/// Move row read back from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub id: i64,
    pub char_id: CharacterId,
    pub name: Option<String>,
    pub input_type: Option<String>,
    pub frames: MoveFrames,
    pub base_damage: Option<f64>,
    pub note: Option<String>,
}
