//! Menu tree evaluation.
//!
//! Two independent concerns:
//! - which menu entries render as active for the current page, derived
//!   purely from the nav tree and the active page id;
//! - transient dropdown and mobile-panel visibility, which lives only until
//!   the next navigation.

use serde::Serialize;

use crate::content::schema::NavItem;

// ============================================================================
// Active Highlight
// ============================================================================

/// Returns `true` if `item` should render as active for `active_page_id`.
///
/// An item is active if its own id matches or any child id matches.
#[must_use]
pub fn is_item_active(item: &NavItem, active_page_id: &str) -> bool {
    item.id == active_page_id || item.children.iter().any(|c| c.id == active_page_id)
}

/// Active menu entries for a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Highlight<'a> {
    /// Active top-level item id.
    pub top: Option<&'a str>,
    /// Active dropdown entry id, when the page is a dropdown child.
    pub entry: Option<&'a str>,
}

/// Computes the active top-level item and dropdown entry.
///
/// The first matching top-level item wins.
#[must_use]
pub fn highlight<'a>(nav: &'a [NavItem], active_page_id: &str) -> Highlight<'a> {
    for item in nav {
        if item.id == active_page_id {
            return Highlight {
                top: Some(&item.id),
                entry: None,
            };
        }
        if let Some(child) = item.children.iter().find(|c| c.id == active_page_id) {
            return Highlight {
                top: Some(&item.id),
                entry: Some(&child.id),
            };
        }
    }
    Highlight::default()
}

// ============================================================================
// Dropdown State Machine
// ============================================================================

/// Visibility of one dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropdownState {
    /// Hidden. Initial state.
    #[default]
    Closed,
    /// Shown.
    Open,
}

/// Input to a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Pointer entered the item.
    PointerEnter,
    /// Pointer left the item.
    PointerLeave,
    /// Explicit tap/click on the item (touch devices).
    Toggle,
    /// An entry of the dropdown was chosen.
    Select,
    /// Click outside the menu, or Escape.
    Dismiss,
}

impl DropdownState {
    /// Transition function.
    #[must_use]
    pub const fn on(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::PointerEnter | MenuEvent::Toggle)
            | (Self::Open, MenuEvent::PointerEnter) => Self::Open,
            (
                Self::Open,
                MenuEvent::PointerLeave | MenuEvent::Select | MenuEvent::Dismiss | MenuEvent::Toggle,
            )
            | (Self::Closed, MenuEvent::PointerLeave | MenuEvent::Select | MenuEvent::Dismiss) => {
                Self::Closed
            }
        }
    }

    /// Returns `true` when shown.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

// ============================================================================
// Menu State
// ============================================================================

/// Transient menu visibility for a session.
///
/// At most one dropdown is open at a time; opening one closes the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuState {
    open: Option<String>,
    mobile_open: bool,
}

impl MenuState {
    /// Creates a state with everything closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds `event` to the dropdown of the top-level item `item_id`.
    ///
    /// Items without children (and unknown ids) have no dropdown and ignore
    /// events. Returns the item's resulting state.
    pub fn handle(&mut self, nav: &[NavItem], item_id: &str, event: MenuEvent) -> DropdownState {
        let Some(item) = nav.iter().find(|i| i.id == item_id && i.is_group()) else {
            return DropdownState::Closed;
        };

        let next = self.dropdown(&item.id).on(event);
        match next {
            DropdownState::Open => self.open = Some(item.id.clone()),
            DropdownState::Closed => {
                if self.open.as_deref() == Some(item.id.as_str()) {
                    self.open = None;
                }
            }
        }
        tracing::trace!(item = item_id, ?event, ?next, "dropdown transition");
        next
    }

    /// State of the dropdown for `item_id`.
    #[must_use]
    pub fn dropdown(&self, item_id: &str) -> DropdownState {
        if self.open.as_deref() == Some(item_id) {
            DropdownState::Open
        } else {
            DropdownState::Closed
        }
    }

    /// Id of the open dropdown, if any.
    #[must_use]
    pub fn open_dropdown(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// Closes any open dropdown (outer dismissal).
    pub fn dismiss(&mut self) {
        self.open = None;
    }

    /// Flips the mobile menu panel.
    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Returns `true` when the mobile panel is shown.
    #[must_use]
    pub const fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// Closes everything. Called on every navigation.
    pub fn reset(&mut self) {
        self.open = None;
        self.mobile_open = false;
    }
}
