//! Command handlers.
//!
//! Each subcommand is a synchronous function taking its parsed arguments
//! and returning `Result<(), SiteError>`. Content is loaded once here and
//! passed down.

pub mod completions;
pub mod content;
pub mod resolve;
pub mod session;
pub mod site;
pub mod version;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::content::{ContentLoader, SiteContent};
use crate::error::SiteError;

/// Dispatches a parsed CLI invocation to its handler.
///
/// # Errors
///
/// Returns the handler's error; see [`SiteError::exit_code`] for the
/// resulting process exit status.
pub fn dispatch(cli: Cli) -> Result<(), SiteError> {
    let source = cli.content.as_deref();

    match cli.command {
        Commands::Render(args) => site::render(&load(source)?, &args),
        Commands::Build(args) => site::build(&load(source)?, &args),
        Commands::Resolve(args) => resolve::run(&load(source)?, &args),
        Commands::Session(args) => session::run(&load(source)?, &args),
        Commands::Validate(args) => content::validate(source, &args),
        Commands::Export => content::export(source),
        Commands::Completions(args) => {
            completions::run(&args, &mut std::io::stdout());
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}

/// Loads and validates the content table for a command.
fn load(source: Option<&Path>) -> Result<SiteContent, SiteError> {
    Ok(ContentLoader::default().load(source)?.content)
}
