//! Error types for datekit operations.

use thiserror::Error;

use crate::unit::CalendarUnit;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateKitError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid weekday: {0} (must be 1-7)")]
    InvalidWeekday(u8),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Calendar cannot compute {operation} for unit {unit}")]
    Calendar {
        operation: &'static str,
        unit: CalendarUnit,
    },

    #[error("Incomplete date components: {0}")]
    IncompleteComponents(String),
}

impl DateKitError {
    pub(crate) fn calendar(operation: &'static str, unit: CalendarUnit) -> Self {
        Self::Calendar { operation, unit }
    }
}

pub type Result<T> = std::result::Result<T, DateKitError>;
