//! End-to-end navigation flows over the built-in site: session, fragment,
//! menu highlight and rendered output together.

use critnlp::content::builtin;
use critnlp::nav::{DropdownState, MenuEvent, Session, SessionEvent, highlight};
use critnlp::render::{LinkStyle, Renderer};
use critnlp::resolver::Resolver;

#[test]
fn clearing_the_fragment_returns_home() {
    let mut session = Session::in_memory();
    session.navigate("motivation");
    assert_eq!(session.snapshot().fragment, "motivation");

    session.external_fragment("");
    assert_eq!(session.active_page_id(), "home");
}

#[test]
fn dropdown_child_highlights_its_group() {
    let content = builtin::site_content();
    let mut session = Session::in_memory();
    session.navigate("topic-reasoning");

    let lit = highlight(&content.nav, session.active_page_id());
    assert_eq!(lit.top, Some("topics"));
    assert_eq!(lit.entry, Some("topic-reasoning"));

    let resolver = Resolver::new(&content);
    let html = Renderer::new(&resolver, LinkStyle::Fragment).render_session(&session);
    assert!(html.contains("nav-group active\" data-menu=\"topics\""));
    assert!(html.contains("aria-current=\"page\""));
}

#[test]
fn hover_opens_and_navigation_closes() {
    let content = builtin::site_content();
    let mut session = Session::in_memory();

    assert_eq!(
        session.menu_event(&content.nav, "programs", MenuEvent::PointerEnter),
        DropdownState::Open
    );
    session.toggle_mobile_menu();
    session.scroll_to(300);

    session.navigate("program-qa");
    let snapshot = session.snapshot();
    assert_eq!(snapshot.active_page_id, "program-qa");
    assert_eq!(snapshot.open_dropdown, None);
    assert!(!snapshot.mobile_menu_open);
    assert_eq!(snapshot.scroll, 0);
}

#[test]
fn leaves_never_open() {
    let content = builtin::site_content();
    let mut session = Session::in_memory();
    assert_eq!(
        session.menu_event(&content.nav, "motivation", MenuEvent::Toggle),
        DropdownState::Closed
    );
    assert_eq!(session.menu().open_dropdown(), None);
}

#[test]
fn scripted_card_click_then_back() {
    let content = builtin::site_content();
    let mut session = Session::in_memory();

    for raw in ["goto:whoWeAre", "enter:topics", "goto:topics", "back"] {
        let event: SessionEvent = raw.parse().unwrap();
        event.apply(&mut session, &content.nav);
    }

    assert_eq!(session.active_page_id(), "whoWeAre");
    assert_eq!(session.menu().open_dropdown(), None);
}

#[test]
fn group_label_stays_as_active_id() {
    let content = builtin::site_content();
    let resolver = Resolver::new(&content);
    let mut session = Session::in_memory();
    session.navigate("topics");

    // The session keeps the label; the resolver picks the page to show.
    assert_eq!(session.active_page_id(), "topics");
    assert_eq!(resolver.record(session.active_page_id()).id(), "topic-data");
    assert_eq!(highlight(&content.nav, "topics").top, Some("topics"));
}
