// src/lib.rs

pub mod config;
pub mod error;
pub mod group;
pub mod integer_math;
pub mod presentation;

pub use error::{MonsterError, Result};
pub use group::{Computed, MonsterElement, MonsterGroup};
