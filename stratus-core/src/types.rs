// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated inputs.
//!
//! Following the "Newtype" pattern in Rust to ensure valid state by construction.
//! All types validate their invariants at creation time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum length AWS accepts for a permission statement id.
const MAX_STATEMENT_ID_LEN: usize = 100;

/// Validated SNS topic ARN: `arn:<partition>:sns:<region>:<account>:<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicArn(String);

impl TopicArn {
    /// Create a new TopicArn with validation.
    pub fn new(arn: impl Into<String>) -> Result<Self, ValidationError> {
        let arn = arn.into();
        let invalid = |reason: &str| ValidationError::InvalidFieldValue {
            field: "topic",
            value: arn.clone(),
            reason: reason.to_string(),
        };

        let segments: Vec<&str> = arn.split(':').collect();
        if segments.len() != 6 || segments[0] != "arn" {
            return Err(invalid(
                "Topic must be an ARN of the form arn:aws:sns:<region>:<account>:<name>",
            ));
        }
        if segments[2] != "sns" {
            return Err(invalid("Topic ARN must belong to the sns service"));
        }
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid("Topic ARN segments cannot be empty"));
        }

        Ok(Self(arn))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Region, account and topic name segments.
    pub fn trailing_segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(':').skip(3)
    }
}

impl fmt::Display for TopicArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated Lambda function name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FunctionName(String);

impl FunctionName {
    /// Create a new FunctionName with validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::InvalidFieldValue {
                field: "lambda.name",
                value: name,
                reason: "Function name cannot be empty".to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for FunctionName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FunctionName> for String {
    fn from(name: FunctionName) -> Self {
        name.0
    }
}

/// Validated AWS region name, e.g. `us-east-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

impl Region {
    /// Create a new Region with validation.
    pub fn new(region: impl Into<String>) -> Result<Self, ValidationError> {
        let region = region.into();

        if region.is_empty() || region.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidFieldValue {
                field: "lambda.region",
                value: region,
                reason: "Region must be non-empty and contain no whitespace".to_string(),
            });
        }

        Ok(Self(region))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Region {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}

/// Version or alias selector. `None` targets the latest unqualified version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionQualifier(Option<String>);

impl VersionQualifier {
    /// Build from optional user input; blank input means latest.
    pub fn new(qualifier: Option<impl Into<String>>) -> Self {
        Self(qualifier.map(Into::into).filter(|q| !q.trim().is_empty()))
    }

    /// Qualifier to send to the service, omitted for latest.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_latest(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for VersionQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(q) => write!(f, "{}", q),
            None => write!(f, "latest"),
        }
    }
}

/// Unique label of one permission-policy entry on a function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatementId(String);

impl StatementId {
    /// Derive an id from the topic's region, account and name plus a
    /// millisecond timestamp, e.g. `us-east-1-123456789012-my-topic-1700000000000`.
    ///
    /// Characters AWS rejects are replaced by `_`. The topic part is truncated
    /// so the id fits in 100 characters; the timestamp suffix is always kept.
    pub fn generate(topic: &TopicArn, timestamp_ms: i64) -> Self {
        let suffix = format!("-{}", timestamp_ms);
        let prefix: String = topic
            .trailing_segments()
            .collect::<Vec<_>>()
            .join("-")
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .take(MAX_STATEMENT_ID_LEN - suffix.len())
            .collect();

        Self(prefix + &suffix)
    }

    /// Derive an id using the current wall clock.
    pub fn now(topic: &TopicArn) -> Self {
        Self::generate(topic, chrono::Utc::now().timestamp_millis())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
