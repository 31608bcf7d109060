//! Properties of page resolution and the fragment boundary that must hold
//! for any input, not only the ids in the table.

use critnlp::content::builtin;
use critnlp::nav::fragment::{HistoryLocation, Location, fragment_for_page, page_id_from_fragment};
use critnlp::nav::session::Session;
use critnlp::resolver::{Resolver, Rule};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn any_id() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_-]{0,24}",
        ".{0,24}",
        Just("home".to_string()),
        Just("programs".to_string()),
        Just("topics".to_string()),
        Just("topic-bias".to_string()),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn resolution_is_total(id in any_id()) {
        let content = builtin::site_content();
        let resolver = Resolver::new(&content);
        let resolved = resolver.resolve(&id);

        prop_assert!(!resolved.record.title().is_empty());
        prop_assert_eq!(&resolved.requested, &id);
        prop_assert_eq!(resolved.rule == Rule::Fallback, !resolver.known_ids().contains(&id.as_str()));
    }

    #[test]
    fn fallback_is_always_home(id in any_id()) {
        let content = builtin::site_content();
        let resolver = Resolver::new(&content);
        let resolved = resolver.resolve(&id);
        if resolved.rule == Rule::Fallback {
            prop_assert!(resolved.record.is_home());
        }
    }

    #[test]
    fn navigate_then_reload_restores_page(id in "[a-zA-Z0-9_-]{1,24}") {
        let mut session = Session::in_memory();
        session.navigate(&id);
        prop_assert_eq!(session.active_page_id(), id.as_str());

        // A fresh session started from the written fragment sees the same page.
        let fragment = session.location().fragment().to_string();
        let reloaded = Session::new(HistoryLocation::new(fragment));
        prop_assert_eq!(reloaded.active_page_id(), session.active_page_id());
    }

    #[test]
    fn fragment_encoding_inverts(id in "[a-zA-Z0-9_-]{1,24}") {
        prop_assert_eq!(page_id_from_fragment(fragment_for_page(&id)), id.as_str());
        let hashed = format!("#{id}");
        prop_assert_eq!(page_id_from_fragment(&hashed), id.as_str());
    }

    #[test]
    fn resolution_is_deterministic(id in any_id()) {
        let content = builtin::site_content();
        let resolver = Resolver::new(&content);
        prop_assert_eq!(resolver.resolve(&id), resolver.resolve(&id));
    }
}

#[test]
fn table_ids_are_fixed_points() {
    let content = builtin::site_content();
    let resolver = Resolver::new(&content);
    for page in content.page_records() {
        assert_eq!(resolver.record(page.id).id(), page.id);
    }
}

#[test]
fn group_labels_follow_nav_defaults() {
    let content = builtin::site_content();
    let resolver = Resolver::new(&content);
    assert_eq!(resolver.record("programs").id(), "program-reading");
    assert_eq!(resolver.record("topics").id(), "topic-data");
    assert!(resolver.record("home").is_home());
    assert!(resolver.record("xyz-nonexistent").is_home());
}
