// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for Stratus.
//!
//! This module defines explicit enum error types as per coding guidelines.
//! No `Box<dyn Error>`, no `anyhow::Result` - all errors are strongly typed.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for Stratus operations.
#[derive(Debug, Error)]
pub enum StratusError {
    // =========================================================================
    // Input Errors - Detected Locally Before Any Remote Call
    // =========================================================================
    #[error("{message}. {hint}")]
    InvalidInput {
        message: &'static str,
        hint: &'static str,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("{} does not exist in the source folder", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("{file} does not contain {field}")]
    MissingConfigField { file: String, field: String },

    // =========================================================================
    // Remote Errors - Passed Through Unchanged
    // =========================================================================
    #[error("Failed to {step}: {source}")]
    Step {
        step: Step,
        #[source]
        source: RemoteError,
    },

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl StratusError {
    /// The remote error behind a failed step, if this error came from one.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Step { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The step that failed, if this error came from a remote call.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Step { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Remote steps of the add-sns-event-source sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    InspectFunction,
    GrantPermission,
    CreateSubscription,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::InspectFunction => "inspect function",
            Step::GrantPermission => "grant invoke permission",
            Step::CreateSubscription => "create subscription",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors raised when constructing newtypes from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors reported by the compute or messaging service.
/// Never retried, never recovered from locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    #[error("Resource conflict: {message}")]
    Conflict { message: String },

    #[error("Request throttled: {message}")]
    Throttled { message: String },

    #[error("Access denied: {message}")]
    AccessDenied { message: String },

    #[error("Service error ({}): {message}", .code.as_deref().unwrap_or("unknown"))]
    Service {
        code: Option<String>,
        message: String,
    },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Malformed response: missing {field}")]
    MalformedResponse { field: &'static str },
}

/// Result type alias using StratusError.
pub type StratusResult<T> = Result<T, StratusError>;
