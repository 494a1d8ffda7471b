//! Error types for interactions operations.
//!
//! This module provides the main error type [`InteractionsError`] which wraps
//! the error conditions that can occur while laying out and exporting a grid.

use std::io;

use thiserror::Error;

/// The main error type for interactions operations.
#[derive(Debug, Error)]
pub enum InteractionsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid column count {0}: columns must be at least 1")]
    InvalidColumns(i64),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for InteractionsError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
