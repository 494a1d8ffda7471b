//! Error adapter for converting InteractionsError to miette diagnostics.
//!
//! The library reports errors through a plain [`thiserror`] enum. This module
//! wraps it so the CLI can render each failure with a stable diagnostic code
//! and, where one exists, a hint for fixing the invocation.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use interactions::InteractionsError;

/// Adapter that renders an [`InteractionsError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a InteractionsError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            InteractionsError::Io(_) => "interactions::io",
            InteractionsError::Config(_) => "interactions::config",
            InteractionsError::InvalidColumns(_) => "interactions::columns",
            InteractionsError::Layout(_) => "interactions::layout",
            InteractionsError::Export(_) => "interactions::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            InteractionsError::InvalidColumns(_) => "pass --columns 1 or more",
            InteractionsError::Layout(_) => "use more columns or a smaller panel size",
            InteractionsError::Config(_) => "check the configuration file passed with --config",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
