//! Error types for `critnlp`
//!
//! Resolution and navigation are total and never fail. The errors here
//! cover the edges around them: loading a content file, validating it,
//! writing rendered output, and parsing scripted session events.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `critnlp` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Content error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (malformed session event, invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `critnlp` operations.
///
/// Aggregates the domain errors and maps each to an exit code.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Content loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output rendering or writing error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Scripted session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SiteError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Render(RenderError::Io { .. }) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Session(_) => ExitCode::USAGE_ERROR,
            Self::Render(_) | Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Content Errors
// ============================================================================

/// Content table loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the content file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Content validation failed
    #[error("validation failed for {path}")]
    ValidationError {
        /// Path (or `<builtin>`) of the content that failed
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced content file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Content file exceeds the configured size limit
    #[error("content file too large: {size} bytes (limit: {limit})")]
    TooLarge {
        /// Actual file size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// Strict validation turned warnings into a failure
    #[error("{count} issue(s) failed strict validation")]
    ValidationFailed {
        /// Number of issues counted as failures.
        count: usize,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found in a content table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "nav[2].children[0].id")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - the content table cannot be used
    Error,
    /// Warning - suspicious but usable
    Warning,
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors while writing rendered pages.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing an output file failed
    #[error("cannot write {path}: {source}")]
    Io {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Output path exists and is not a directory
    #[error("output path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Two routes map to the same output file
    #[error("'{second}' would overwrite {file}, already written for '{first}'")]
    RouteCollision {
        /// Output file both routes map to
        file: String,
        /// Route that claimed the file first
        first: String,
        /// Route that collided with it
        second: String,
    },
}

// ============================================================================
// Session Errors
// ============================================================================

/// Errors in scripted navigation sessions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Event string could not be parsed
    #[error("invalid session event '{input}': {reason}")]
    InvalidEvent {
        /// The raw event text
        input: String,
        /// Why it was rejected
        reason: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `critnlp` operations.
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_exit_code_mapping() {
        let cases: Vec<(SiteError, i32)> = vec![
            (
                ConfigError::MissingFile {
                    path: PathBuf::from("/x"),
                }
                .into(),
                ExitCode::CONFIG_ERROR,
            ),
            (
                RenderError::Io {
                    path: PathBuf::from("out/index.html"),
                    source: std::io::Error::other("disk full"),
                }
                .into(),
                ExitCode::IO_ERROR,
            ),
            (
                RenderError::NotADirectory(PathBuf::from("out")).into(),
                ExitCode::ERROR,
            ),
            (
                RenderError::RouteCollision {
                    file: "index.html".into(),
                    first: "home".into(),
                    second: "index".into(),
                }
                .into(),
                ExitCode::ERROR,
            ),
            (
                SessionError::InvalidEvent {
                    input: "x".into(),
                    reason: "y".into(),
                }
                .into(),
                ExitCode::USAGE_ERROR,
            ),
            (
                std::io::Error::new(std::io::ErrorKind::NotFound, "x").into(),
                ExitCode::IO_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "Wrong exit code for {err}");
        }
    }

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue {
            path: "nav[1].default".to_string(),
            message: "unknown page".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(issue.to_string(), "error: unknown page at nav[1].default");
    }

    #[test]
    fn test_parse_error_display_with_line() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("site.yaml"),
            line: Some(12),
            message: "unexpected token".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("site.yaml (line 12)"), "{text}");
        assert!(text.contains("unexpected token"));
    }

    #[test]
    fn test_parse_error_display_without_line() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("site.yaml"),
            line: None,
            message: "empty".to_string(),
        };
        assert_eq!(err.to_string(), "parse error in site.yaml: empty");
    }
}
