// src/config/mod.rs

pub mod monster_config;

// Re-export main types for convenience
pub use monster_config::{DemoConfig, MonsterConfig, ReportConfig};
