use crate::error::Rejection;
use serde::{Deserialize, Serialize};

pub const REASON_OK: &str = "ok";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    pub value: String,
    pub is_valid: bool,
    pub reason: String,
}

impl Normalized {
    pub fn ok(value: String) -> Self {
        Self {
            value,
            is_valid: true,
            reason: REASON_OK.to_string(),
        }
    }

    pub fn rejected(rejection: Rejection) -> Self {
        Self {
            value: String::new(),
            is_valid: false,
            reason: rejection.to_string(),
        }
    }

    pub fn as_tuple(&self) -> (&str, bool, &str) {
        (&self.value, self.is_valid, &self.reason)
    }

    pub fn into_result(self) -> Result<String, String> {
        if self.is_valid {
            Ok(self.value)
        } else {
            Err(self.reason)
        }
    }
}

impl From<Result<String, Rejection>> for Normalized {
    fn from(outcome: Result<String, Rejection>) -> Self {
        match outcome {
            Ok(value) => Normalized::ok(value),
            Err(rejection) => Normalized::rejected(rejection),
        }
    }
}
