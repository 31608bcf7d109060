//! Content loader
//!
//! Loading pipeline for a content file:
//! 1. Size check against [`ContentLimits`]
//! 2. YAML parsing into [`SiteContent`]
//! 3. Validation
//!
//! Without a file the built-in table is used, and is validated the same way.

use std::path::Path;

use crate::content::builtin;
use crate::content::schema::SiteContent;
use crate::content::validation::{ValidationResult, Validator};
use crate::error::{ConfigError, ValidationIssue};

/// Label used in diagnostics for the built-in table.
pub const BUILTIN_SOURCE: &str = "<builtin>";

/// Diagnostic label for a content source.
#[must_use]
pub fn source_label(path: Option<&Path>) -> String {
    path.map_or_else(|| BUILTIN_SOURCE.to_string(), |p| p.display().to_string())
}

/// Limits on content size.
#[derive(Debug, Clone)]
pub struct ContentLimits {
    /// Maximum content file size in bytes.
    pub max_content_size: usize,

    /// Maximum number of leaf pages.
    pub max_pages: usize,
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            max_content_size: env_or("CRITNLP_MAX_CONTENT_SIZE", 1024 * 1024),
            max_pages: env_or("CRITNLP_MAX_PAGES", 256),
        }
    }
}

/// Reads a numeric limit from the environment, falling back to `default`.
fn env_or(var: &str, default: usize) -> usize {
    limit_or(std::env::var(var).ok().as_deref(), default)
}

/// Parses a limit value; missing or non-numeric values yield `default`.
fn limit_or(value: Option<&str>, default: usize) -> usize {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Loaded content plus the warnings validation produced.
#[derive(Debug)]
pub struct LoadResult {
    /// The validated content table.
    pub content: SiteContent,

    /// Non-fatal validation issues.
    pub warnings: Vec<ValidationIssue>,
}

/// Content loader.
#[derive(Debug, Default)]
pub struct ContentLoader {
    limits: ContentLimits,
}

impl ContentLoader {
    /// Creates a loader with the given limits.
    #[must_use]
    pub const fn new(limits: ContentLimits) -> Self {
        Self { limits }
    }

    /// Returns the limits this loader enforces.
    #[must_use]
    pub const fn limits(&self) -> &ContentLimits {
        &self.limits
    }

    /// Loads content from `path`, or the built-in table when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, too large, not valid
    /// YAML, or fails validation.
    pub fn load(&self, path: Option<&Path>) -> Result<LoadResult, ConfigError> {
        let content = self.read(path)?;
        self.finish(content, &source_label(path))
    }

    /// Reads and parses content without validating it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, too large, or not
    /// valid YAML.
    pub fn read(&self, path: Option<&Path>) -> Result<SiteContent, ConfigError> {
        let Some(path) = path else {
            return Ok(builtin::site_content());
        };

        let io_error = |e: std::io::Error| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::MissingFile {
                path: path.to_path_buf(),
            },
            _ => ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: e.to_string(),
            },
        };

        // Size is checked before the file is read into memory.
        let size = std::fs::metadata(path).map_err(io_error)?.len();
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        self.check_size(size)?;

        let text = std::fs::read_to_string(path).map_err(io_error)?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "read content file");

        self.parse(&text, path)
    }

    /// Parses and validates content from a YAML string.
    ///
    /// # Errors
    ///
    /// See [`ContentLoader::load`].
    pub fn load_from_str(&self, yaml: &str) -> Result<LoadResult, ConfigError> {
        let content = self.parse(yaml, Path::new("<string>"))?;
        self.finish(content, "<string>")
    }

    /// Validates content without loading it.
    #[must_use]
    pub fn validate(&self, content: &SiteContent) -> ValidationResult {
        Validator::new().validate(content, &self.limits)
    }

    fn check_size(&self, size: usize) -> Result<(), ConfigError> {
        if size > self.limits.max_content_size {
            return Err(ConfigError::TooLarge {
                size,
                limit: self.limits.max_content_size,
            });
        }
        Ok(())
    }

    fn parse(&self, yaml: &str, path: &Path) -> Result<SiteContent, ConfigError> {
        // Files were already checked by size on disk; this covers strings.
        self.check_size(yaml.len())?;

        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })
    }

    fn finish(&self, content: SiteContent, source: &str) -> Result<LoadResult, ConfigError> {
        let result = self.validate(&content);

        for warning in &result.warnings {
            tracing::warn!(source, "{warning}");
        }

        if result.has_errors() {
            return Err(ConfigError::ValidationError {
                path: source.to_string(),
                errors: result.errors,
            });
        }

        tracing::debug!(
            source,
            pages = content.pages.len(),
            nav = content.nav.len(),
            "content loaded"
        );

        Ok(LoadResult {
            content,
            warnings: result.warnings,
        })
    }
}
