//! Navigation session.
//!
//! Owns the navigation state of one running session, backed by a URL
//! fragment [`Location`]. In-app navigation writes the fragment; external
//! fragment changes (back/forward, edited URL) are delivered through
//! [`Session::on_fragment_change`] and re-derive the active page.

use serde::Serialize;

use crate::content::schema::NavItem;
use crate::nav::fragment::{HistoryLocation, Location, fragment_for_page, page_id_from_fragment};
use crate::nav::menu::{DropdownState, MenuEvent, MenuState};
use crate::nav::state::{NavigationState, ScrollPosition};

/// A running navigation session.
#[derive(Debug, Clone)]
pub struct Session<L: Location = HistoryLocation> {
    state: NavigationState,
    location: L,
    menu: MenuState,
    scroll: ScrollPosition,
}

impl<L: Location> Session<L> {
    /// Starts a session, recovering the active page from the fragment.
    #[must_use]
    pub fn new(location: L) -> Self {
        let state = NavigationState::new(page_id_from_fragment(location.fragment()));
        Self {
            state,
            location,
            menu: MenuState::new(),
            scroll: ScrollPosition::TOP,
        }
    }

    /// The active page id.
    #[must_use]
    pub fn active_page_id(&self) -> &str {
        self.state.active_page_id()
    }

    /// The navigation state.
    #[must_use]
    pub const fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Navigates to `id`.
    ///
    /// Sets the active page unconditionally, writes the fragment, closes
    /// all menus and scrolls to the top.
    ///
    /// The state keeps `id` verbatim, but one leading `#` is the fragment
    /// delimiter: `navigate("#x")` is active as `#x` until the fragment is
    /// read back (reload, back/forward), which yields `x`.
    pub fn navigate(&mut self, id: &str) {
        tracing::debug!(from = self.state.active_page_id(), to = id, "navigate");
        self.state.set(id);
        self.location.set_fragment(fragment_for_page(id));
        self.settle();
    }

    /// Chooses a dropdown entry: the owning dropdown closes on selection,
    /// then the entry's page is navigated to.
    pub fn select(&mut self, nav: &[NavItem], entry_id: &str) {
        if let Some(group) = nav
            .iter()
            .find(|item| item.children.iter().any(|c| c.id == entry_id))
        {
            self.menu.handle(nav, &group.id, MenuEvent::Select);
        }
        self.navigate(entry_id);
    }

    /// Handles an external fragment-change notification.
    pub fn on_fragment_change(&mut self) {
        let id = page_id_from_fragment(self.location.fragment()).to_string();
        tracing::debug!(
            from = self.state.active_page_id(),
            to = %id,
            "fragment changed"
        );
        self.state.set(id);
        self.settle();
    }

    /// Feeds a pointer/tap event to a top-level menu item.
    pub fn menu_event(&mut self, nav: &[NavItem], item_id: &str, event: MenuEvent) -> DropdownState {
        self.menu.handle(nav, item_id, event)
    }

    /// Closes any open dropdown.
    pub fn dismiss_menu(&mut self) {
        self.menu.dismiss();
    }

    /// Flips the mobile menu panel.
    pub fn toggle_mobile_menu(&mut self) {
        self.menu.toggle_mobile();
    }

    /// Transient menu state.
    #[must_use]
    pub const fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Records a user scroll.
    pub const fn scroll_to(&mut self, offset: u32) {
        self.scroll = ScrollPosition(offset);
    }

    /// Current scroll position.
    #[must_use]
    pub const fn scroll(&self) -> ScrollPosition {
        self.scroll
    }

    /// The backing location.
    #[must_use]
    pub const fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access to the backing location, for simulating external
    /// changes. Call [`Session::on_fragment_change`] afterwards.
    pub const fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// Serializable view of the session.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active_page_id: self.state.active_page_id().to_string(),
            fragment: self.location.fragment().to_string(),
            scroll: self.scroll.0,
            open_dropdown: self.menu.open_dropdown().map(ToString::to_string),
            mobile_menu_open: self.menu.is_mobile_open(),
        }
    }

    fn settle(&mut self) {
        self.menu.reset();
        self.scroll = ScrollPosition::TOP;
    }
}

impl Session<HistoryLocation> {
    /// Starts a session on an empty in-memory history.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(HistoryLocation::default())
    }

    /// Browser back button. Returns `false` when there is nothing to go
    /// back to.
    pub fn back(&mut self) -> bool {
        let moved = self.location.back();
        if moved {
            self.on_fragment_change();
        }
        moved
    }

    /// Browser forward button. Returns `false` when there is nothing to go
    /// forward to.
    pub fn forward(&mut self) -> bool {
        let moved = self.location.forward();
        if moved {
            self.on_fragment_change();
        }
        moved
    }

    /// The fragment was changed outside the app.
    pub fn external_fragment(&mut self, fragment: &str) {
        self.location.external_change(fragment);
        self.on_fragment_change();
    }
}

impl Default for Session<HistoryLocation> {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Point-in-time view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Active page id.
    pub active_page_id: String,
    /// Location fragment.
    pub fragment: String,
    /// Scroll offset.
    pub scroll: u32,
    /// Open dropdown, if any.
    pub open_dropdown: Option<String>,
    /// Mobile panel visibility.
    pub mobile_menu_open: bool,
}
