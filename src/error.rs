// src/error.rs

use num::BigUint;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonsterError {
    /// The product of the prime powers does not reproduce the stored order.
    #[error("Order invariant violated: factorization yields {computed}, claimed order is {claimed}")]
    InvariantViolated { claimed: BigUint, computed: BigUint },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown command: {0} (expected one of: group, utilities, example, report, json, all)")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, MonsterError>;
