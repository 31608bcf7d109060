//! `version` command.

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::SiteError;

/// Prints version and build information.
///
/// # Errors
///
/// Returns `SiteError::Json` if JSON serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), SiteError> {
    let version = env!("CARGO_PKG_VERSION");

    match args.format {
        OutputFormat::Human => {
            println!("critnlp {version}");
            println!("{}", env!("CARGO_PKG_DESCRIPTION"));
        }
        OutputFormat::Json => {
            let info = serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": version,
                "description": env!("CARGO_PKG_DESCRIPTION"),
                "rust_version": env!("CARGO_PKG_RUST_VERSION"),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
