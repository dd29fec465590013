use serde::{Deserialize, Serialize};

use crate::frame::{normalize_decimal_field, normalize_frame_field};
use crate::payload::RawStats;

/// Row identifier of a stored character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub i64);

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locomotion and airtime stats for one character, already normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub weight: Option<f64>,
    pub run_speed: Option<f64>,
    pub walk_speed: Option<f64>,
    pub air_speed: Option<f64>,
    pub fall_speed: Option<f64>,
    pub fast_fall_speed: Option<f64>,
    pub sh_air_time: Option<i64>,
    pub sh_ff_air_time: Option<i64>,
    pub fh_air_time: Option<i64>,
    pub fh_ff_air_time: Option<i64>,
}

impl CharacterStats {
    #[must_use]
    pub fn from_raw(raw: &RawStats) -> Self {
        Self {
            weight: normalize_decimal_field(raw.weight.as_ref()),
            run_speed: normalize_decimal_field(raw.run_speed.as_ref()),
            walk_speed: normalize_decimal_field(raw.walk_speed.as_ref()),
            air_speed: normalize_decimal_field(raw.air_speed.as_ref()),
            fall_speed: normalize_decimal_field(raw.fall_speed.as_ref()),
            fast_fall_speed: normalize_decimal_field(raw.fast_fall_speed.as_ref()),
            sh_air_time: normalize_frame_field(raw.sh_air_time.as_ref()),
            sh_ff_air_time: normalize_frame_field(raw.sh_ff_air_time.as_ref()),
            fh_air_time: normalize_frame_field(raw.fh_air_time.as_ref()),
            fh_ff_air_time: normalize_frame_field(raw.fh_ff_air_time.as_ref()),
        }
    }
}

/// Character as it is handed to storage; identity is the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub stats: CharacterStats,
}

impl NewCharacter {
    #[must_use]
    pub fn new(name: impl Into<String>, stats: CharacterStats) -> Self {
        Self { name: name.into(), stats }
    }
}

/// Character row read back from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub stats: CharacterStats,
}
