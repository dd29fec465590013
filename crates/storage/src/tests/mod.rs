//! Test utilities and module declarations for storage tests.

use crate::Storage;
use framedata_core::{CharacterStats, MoveFrames, NewCharacter, NewMove};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::open(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_character(name: &str, weight: f64) -> NewCharacter {
    NewCharacter::new(
        name,
        CharacterStats {
            weight: Some(weight),
            run_speed: Some(1.76),
            walk_speed: Some(1.155),
            air_speed: Some(1.208),
            fall_speed: Some(1.5),
            fast_fall_speed: Some(2.4),
            sh_air_time: Some(30),
            sh_ff_air_time: Some(22),
            fh_air_time: Some(42),
            fh_ff_air_time: Some(31),
        },
    )
}

pub fn create_test_move(name: &str, startup: Option<i64>) -> NewMove {
    NewMove {
        name: Some(name.to_owned()),
        input_type: Some("normal".to_owned()),
        frames: MoveFrames {
            startup,
            total_frames: Some(20),
            landing_lag: None,
            shield_advantage: Some(-12),
        },
        base_damage: Some(2.2),
        note: format!(r#"{{"name":"{name}"}}"#),
    }
}
