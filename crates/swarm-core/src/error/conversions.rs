//! From trait implementations for SwarmError conversions

use super::types::SwarmError;

impl From<std::io::Error> for SwarmError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for SwarmError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}
