// src/group/computed.rs

use std::fmt::{self, Display};

/// Result of a query this crate may or may not be able to answer.
///
/// `NotComputed` means the value exists mathematically but is not derived here.
/// It is neither zero nor an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Computed<T> {
    Known(T),
    NotComputed,
}

impl<T> Computed<T> {
    pub fn is_known(&self) -> bool {
        matches!(self, Computed::Known(_))
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Computed::Known(value) => Some(value),
            Computed::NotComputed => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Computed::Known(value) => Some(value),
            Computed::NotComputed => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Computed<U> {
        match self {
            Computed::Known(value) => Computed::Known(f(value)),
            Computed::NotComputed => Computed::NotComputed,
        }
    }
}

impl<T: Display> Display for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Computed::Known(value) => write!(f, "{}", value),
            Computed::NotComputed => write!(f, "unknown"),
        }
    }
}
