//! `critnlp`: render and inspect the Critical NLP Group site

use clap::Parser;

use critnlp::cli::args::Cli;
use critnlp::cli::commands;
use critnlp::error::{ConfigError, ExitCode, SiteError};
use critnlp::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            if let SiteError::Config(ConfigError::ValidationError { errors, .. }) = &e {
                for issue in errors {
                    eprintln!("  {issue}");
                }
            }
            std::process::exit(e.exit_code());
        }
    }
}
