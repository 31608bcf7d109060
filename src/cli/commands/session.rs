//! `session` command handler.
//!
//! Replays scripted events against a fragment-backed session and prints
//! the session state after each one.

use std::fmt::Write as _;

use crate::cli::args::{OutputFormat, SessionArgs};
use crate::content::SiteContent;
use crate::error::SiteError;
use crate::nav::fragment::HistoryLocation;
use crate::nav::script::parse_events;
use crate::nav::session::{Session, Snapshot};

/// Replays `args.events` and prints a snapshot per step.
///
/// All events are parsed before any is applied, so a typo late in the
/// script aborts the run without partial output.
///
/// # Errors
///
/// Returns `SiteError::Session` for a malformed event, or
/// `SiteError::Json` if JSON serialization fails.
pub fn run(content: &SiteContent, args: &SessionArgs) -> Result<(), SiteError> {
    let events = parse_events(&args.events)?;
    let mut session = Session::new(HistoryLocation::new(args.start.as_str()));

    let mut steps = Vec::with_capacity(events.len() + 1);
    steps.push(("start".to_string(), session.snapshot()));

    for event in &events {
        event.apply(&mut session, &content.nav);
        tracing::debug!(%event, page = %session.active_page_id(), "applied event");
        steps.push((event.to_string(), session.snapshot()));
    }

    match args.format {
        OutputFormat::Human => {
            for (event, snapshot) in &steps {
                println!("{event:<24}{}", describe(snapshot));
            }
        }
        OutputFormat::Json => {
            let json: Vec<_> = steps
                .iter()
                .map(|(event, snapshot)| serde_json::json!({ "event": event, "state": snapshot }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

fn describe(snapshot: &Snapshot) -> String {
    let mut line = format!(
        "page={} fragment=#{} scroll={}",
        snapshot.active_page_id, snapshot.fragment, snapshot.scroll
    );
    if let Some(open) = &snapshot.open_dropdown {
        let _ = write!(line, " open={open}");
    }
    if snapshot.mobile_menu_open {
        line.push_str(" mobile");
    }
    line
}
