//! `validate` and `export` command handlers.

use std::path::Path;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::content::ContentLoader;
use crate::content::loader::source_label;
use crate::error::{ConfigError, Severity, SiteError};

/// Validates the content table and reports every issue found.
///
/// # Errors
///
/// Returns `ConfigError::ValidationFailed` when errors are found (or, with
/// `--strict`, any warnings), and the loader's error if the content cannot
/// be read or parsed.
pub fn validate(source: Option<&Path>, args: &ValidateArgs) -> Result<(), SiteError> {
    let loader = ContentLoader::default();
    let label = source_label(source);
    let content = loader.read(source)?;
    let result = loader.validate(&content);

    match args.format {
        OutputFormat::Human => {
            for issue in result.issues() {
                println!("{issue}");
            }
            if result.is_valid() {
                println!(
                    "{label}: valid ({} page(s), {} warning(s))",
                    content.pages.len(),
                    result.warnings.len()
                );
            } else {
                println!(
                    "{label}: {} error(s), {} warning(s)",
                    result.errors.len(),
                    result.warnings.len()
                );
            }
        }
        OutputFormat::Json => {
            let issues: Vec<_> = result
                .issues()
                .map(|issue| {
                    serde_json::json!({
                        "severity": match issue.severity {
                            Severity::Error => "error",
                            Severity::Warning => "warning",
                        },
                        "path": issue.path,
                        "message": issue.message,
                    })
                })
                .collect();
            let report = serde_json::json!({
                "source": label,
                "valid": result.is_valid(),
                "pages": content.pages.len(),
                "issues": issues,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    let failures = if args.strict {
        result.errors.len() + result.warnings.len()
    } else {
        result.errors.len()
    };

    if failures > 0 {
        return Err(ConfigError::ValidationFailed { count: failures }.into());
    }

    Ok(())
}

/// Prints the content table as YAML.
///
/// Without `--content` this is the built-in table, a starting point for a
/// custom content file.
///
/// # Errors
///
/// Returns the loader's error for an unreadable file, or `SiteError::Yaml`
/// if serialization fails.
pub fn export(source: Option<&Path>) -> Result<(), SiteError> {
    let content = ContentLoader::default().read(source)?;
    print!("{}", serde_yaml::to_string(&content)?);
    Ok(())
}
