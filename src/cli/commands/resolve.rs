//! `resolve` command handler.

use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::content::SiteContent;
use crate::error::SiteError;
use crate::resolver::{Resolver, Rule};

/// Prints which record a page id resolves to and why.
///
/// # Errors
///
/// Returns `SiteError::Json` if JSON serialization fails.
pub fn run(content: &SiteContent, args: &ResolveArgs) -> Result<(), SiteError> {
    let resolver = Resolver::new(content);
    let resolved = resolver.resolve(&args.page);
    let suggestion = (resolved.rule == Rule::Fallback)
        .then(|| resolver.suggest(&args.page))
        .flatten();

    match args.format {
        OutputFormat::Human => {
            println!("{} -> {}", display_id(&resolved.requested), resolved.record.id());
            println!("  title: {}", resolved.record.title());
            match &resolved.rule {
                Rule::Home => println!("  rule:  home"),
                Rule::Page => println!("  rule:  page"),
                Rule::Group { default } => println!("  rule:  group default ({default})"),
                Rule::Fallback => println!("  rule:  fallback (unknown id)"),
            }
            if let Some(close) = suggestion {
                println!("  hint:  did you mean '{close}'?");
            }
        }
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "requested": resolved.requested,
                "id": resolved.record.id(),
                "title": resolved.record.title(),
                "suggestion": suggestion,
            });
            if let (Some(map), serde_json::Value::Object(rule)) =
                (value.as_object_mut(), serde_json::to_value(&resolved.rule)?)
            {
                map.extend(rule);
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

fn display_id(id: &str) -> &str {
    if id.is_empty() { "\"\"" } else { id }
}
