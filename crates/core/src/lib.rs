//! Core types and normalizers for framedata
//!
//! This crate contains the payload schema, the domain records written to
//! storage, and the lenient value normalizers shared across all other crates.

mod character;
pub mod constants;
pub mod env_config;
mod error;
mod fighter_move;
mod frame;
mod payload;

pub use character::*;
pub use error::*;
pub use fighter_move::*;
pub use frame::*;
pub use payload::*;
