//! Error types for timetable-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    #[error("Invalid day: {0} (expected 0-6, Monday = 0)")]
    InvalidDay(i64),

    #[error("Invalid day name: {0}")]
    InvalidDayName(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Event name must not be empty")]
    EmptyName,

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, TimetableError>;
