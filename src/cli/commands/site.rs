//! `render` and `build` command handlers.

use crate::cli::args::{BuildArgs, OutputFormat, RenderArgs};
use crate::content::SiteContent;
use crate::error::{RenderError, SiteError};
use crate::nav::menu::{MenuEvent, MenuState};
use crate::render::{Renderer, SiteBuilder};
use crate::resolver::{Resolver, Rule};

/// Renders one page to stdout or a file.
///
/// Unknown page ids still render (as the home page); a warning with the
/// closest known id is logged.
///
/// # Errors
///
/// Returns `SiteError::Render` if the output file cannot be written.
pub fn render(content: &SiteContent, args: &RenderArgs) -> Result<(), SiteError> {
    let resolver = Resolver::new(content);

    let resolved = resolver.resolve(&args.page);
    if resolved.rule == Rule::Fallback {
        match resolver.suggest(&args.page) {
            Some(close) => tracing::warn!(
                page = %args.page,
                "unknown page id, rendering home (did you mean '{close}'?)"
            ),
            None => tracing::warn!(page = %args.page, "unknown page id, rendering home"),
        }
    }

    let mut menu = MenuState::new();
    if let Some(open) = &args.open
        && !menu.handle(&content.nav, open, MenuEvent::Toggle).is_open()
    {
        tracing::warn!(menu = %open, "not a top-level menu group, ignoring --open");
    }
    if args.mobile {
        menu.toggle_mobile();
    }

    let html = Renderer::new(&resolver, args.links).render(&args.page, &menu);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html).map_err(|source| RenderError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), page = %resolved.record.id(), "page written");
        }
        None => print!("{html}"),
    }

    Ok(())
}

/// Writes the whole site as a static file tree.
///
/// # Errors
///
/// Returns `SiteError::Render` if the output directory cannot be written.
pub fn build(content: &SiteContent, args: &BuildArgs) -> Result<(), SiteError> {
    let resolver = Resolver::new(content);
    let builder = SiteBuilder::new(Renderer::new(&resolver, args.links));
    let report = builder.build(&args.output)?;

    match args.format {
        OutputFormat::Human => {
            println!(
                "Built {} file(s) into {}",
                report.routes.len(),
                report.output.display()
            );
            for route in &report.routes {
                let via = match &route.rule {
                    Rule::Home => "home".to_string(),
                    Rule::Page => "page".to_string(),
                    Rule::Group { default } => format!("group -> {default}"),
                    Rule::Fallback => "fallback -> home".to_string(),
                };
                println!("  {:<24}{:<28}{via}", route.id, route.file);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
