//! Tri-state validator outcome.

use serde::Serialize;
use std::fmt;

/// Outcome of running one validator against one bundle.
///
/// `Failure` asserts a confirmed violation in the input. `Error` asserts the
/// check itself could not finish; a validator that cannot decide must return
/// `Error`, never `Failure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidatorResult {
    Success,
    Failure { message: String },
    Error { cause: String },
}

impl ValidatorResult {
    pub fn success() -> Self {
        ValidatorResult::Success
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ValidatorResult::Failure {
            message: message.into(),
        }
    }

    pub fn error(cause: impl Into<String>) -> Self {
        ValidatorResult::Error {
            cause: cause.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ValidatorResult::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ValidatorResult::Error { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ValidatorResult::Failure { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            ValidatorResult::Success => "success",
            ValidatorResult::Failure { .. } => "failure",
            ValidatorResult::Error { .. } => "error",
        }
    }

    /// Failure message or error cause; empty for success.
    pub fn message(&self) -> &str {
        match self {
            ValidatorResult::Success => "",
            ValidatorResult::Failure { message } => message,
            ValidatorResult::Error { cause } => cause,
        }
    }
}

impl fmt::Display for ValidatorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorResult::Success => write!(f, "success"),
            ValidatorResult::Failure { message } => write!(f, "failure: {}", message),
            ValidatorResult::Error { cause } => write!(f, "error: {}", cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_exclusive() {
        let ok = ValidatorResult::success();
        assert!(ok.is_success() && !ok.is_error() && !ok.is_failure());

        let failed = ValidatorResult::failure("bad label");
        assert!(!failed.is_success() && !failed.is_error() && failed.is_failure());
        assert_eq!(failed.message(), "bad label");

        let broken = ValidatorResult::error("regex did not compile");
        assert!(!broken.is_success() && broken.is_error() && !broken.is_failure());
        assert_eq!(broken.status(), "error");
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let value = serde_json::to_value(ValidatorResult::failure("missing icon")).unwrap();
        assert_eq!(value["status"], "failure");
        assert_eq!(value["message"], "missing icon");

        let value = serde_json::to_value(ValidatorResult::success()).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "success" }));
    }
}
