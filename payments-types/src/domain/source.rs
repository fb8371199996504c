//! Payment source (funding channel) types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of gateway source used to fund a charge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    /// SCB internet banking redirect.
    InternetBankingScb,
    Unsupported(String),
}

impl SourceType {
    pub fn as_str(&self) -> &str {
        match self {
            SourceType::InternetBankingScb => "internet_banking_scb",
            SourceType::Unsupported(raw) => raw,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, SourceType::Unsupported(_))
    }
}

impl From<String> for SourceType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "internet_banking_scb" => SourceType::InternetBankingScb,
            _ => SourceType::Unsupported(raw),
        }
    }
}

impl From<&str> for SourceType {
    fn from(raw: &str) -> Self {
        SourceType::from(raw.to_string())
    }
}

impl From<SourceType> for String {
    fn from(source_type: SourceType) -> Self {
        match source_type {
            SourceType::InternetBankingScb => "internet_banking_scb".to_string(),
            SourceType::Unsupported(raw) => raw,
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
