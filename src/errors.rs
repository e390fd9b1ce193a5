//! # Error Types Module
//!
//! The aggregation engine itself never fails. Errors only arise at the edge,
//! when a meal plan document is read and decoded.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a meal plan
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Failed to read meal plan {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid meal plan JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_path() {
        let err = PlanError::Io {
            path: PathBuf::from("/tmp/missing-plan.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/missing-plan.json"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: PlanError = json_err.into();
        assert!(matches!(err, PlanError::Json(_)));
        assert!(err.to_string().starts_with("Invalid meal plan JSON"));
    }
}
