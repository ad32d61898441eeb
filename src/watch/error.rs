// Watch lookup errors

use std::fmt;

/// Message returned when the `model` query parameter is absent
const MISSING_MODEL_MESSAGE: &str = "Please provide a watch model in the query string";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchError {
    /// The `model` key is not present in the query string
    MissingParameter,
}

impl WatchError {
    /// HTTP status this error is reported with
    pub const fn status(self) -> u16 {
        match self {
            Self::MissingParameter => 400,
        }
    }
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter => f.write_str(MISSING_MODEL_MESSAGE),
        }
    }
}

impl std::error::Error for WatchError {}
