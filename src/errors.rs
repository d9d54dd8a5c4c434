//! Unified application error type.
//! All modules (store, registry, db, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Registry file error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Audit log
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid student id: {0}")]
    InvalidStudentId(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Value cannot be stored in a CSV cell: {0:?}")]
    InvalidField(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Section not registered: {0}")]
    SectionNotFound(String),

    #[error("Invalid section: {0}")]
    InvalidSection(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// A malformed row found while loading a section file.
///
/// Loading never fails because of these: the offending row or cell is
/// skipped and the warning is handed back next to the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number in the CSV file.
    pub line: u64,
    pub message: String,
}

impl ParseWarning {
    pub fn new(line: u64, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}
