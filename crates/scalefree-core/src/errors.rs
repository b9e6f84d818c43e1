//! Structured error types shared across scalefree crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine readable error codes carried in [`ErrorInfo::code`].
pub mod codes {
    /// A generator or store configuration violates its contract.
    pub const INVALID_CONFIGURATION: &str = "invalid-configuration";
    /// An operation referenced a vertex absent from the graph.
    pub const UNKNOWN_VERTEX: &str = "unknown-vertex";
    /// An operation referenced an edge absent from the graph.
    pub const UNKNOWN_EDGE: &str = "unknown-edge";
    /// A vertex identity was added twice.
    pub const DUPLICATE_VERTEX: &str = "duplicate-vertex";
    /// An edge identity was added twice.
    pub const DUPLICATE_EDGE: &str = "duplicate-edge";
    /// A parallel edge was rejected by a store that disallows them.
    pub const PARALLEL_EDGE: &str = "parallel-edge";
    /// A rejection-sampling loop exhausted its retry budget.
    pub const DEGENERATE_PROBABILITY: &str = "degenerate-probability";
    /// A uniform index was requested from an empty range.
    pub const EMPTY_RANGE: &str = "empty-range";
    /// A configuration document could not be read.
    pub const CONFIG_READ: &str = "config-read";
    /// A configuration document could not be parsed.
    pub const CONFIG_PARSE: &str = "config-parse";
}

/// Structured payload attached to every [`GenError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for graph storage and generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GenError {
    /// Constructor-time configuration contract violations.
    #[error("configuration error: {0}")]
    Config(ErrorInfo),
    /// Graph store structural errors.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Randomness and rejection-sampling errors.
    #[error("sampling error: {0}")]
    Sampling(ErrorInfo),
    /// Configuration document errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl GenError {
    /// Builds an [`codes::INVALID_CONFIGURATION`] error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        GenError::Config(ErrorInfo::new(codes::INVALID_CONFIGURATION, message))
    }

    /// Builds a graph-family error with the provided code.
    pub fn graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        GenError::Graph(ErrorInfo::new(code, message))
    }

    /// Builds a [`codes::DEGENERATE_PROBABILITY`] error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        GenError::Sampling(ErrorInfo::new(codes::DEGENERATE_PROBABILITY, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GenError::Config(info)
            | GenError::Graph(info)
            | GenError::Sampling(info)
            | GenError::Serde(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry to the payload regardless of family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        let value = value.to_string();
        match self {
            GenError::Config(info) => GenError::Config(info.with_context(key, value)),
            GenError::Graph(info) => GenError::Graph(info.with_context(key, value)),
            GenError::Sampling(info) => GenError::Sampling(info.with_context(key, value)),
            GenError::Serde(info) => GenError::Serde(info.with_context(key, value)),
        }
    }

    /// Sets a remediation hint regardless of family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            GenError::Config(info) => GenError::Config(info.with_hint(hint)),
            GenError::Graph(info) => GenError::Graph(info.with_hint(hint)),
            GenError::Sampling(info) => GenError::Sampling(info.with_hint(hint)),
            GenError::Serde(info) => GenError::Serde(info.with_hint(hint)),
        }
    }
}
