//! Error types for parseropt
//!
//! Lookups and conversions never fail. Only the edges that touch the
//! outside world (reading the process command line, loading config,
//! writing demo output) produce errors.

use thiserror::Error;

/// Main error type for parseropt
#[derive(Error, Debug)]
pub enum ParseroptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ParseroptError>;
