//! Navigation state: the currently active page id.

use serde::Serialize;

use crate::content::schema::HOME_ID;

/// The single mutable value of a session: which page id is active.
///
/// The id is stored verbatim. It need not exist in the content table;
/// group labels and unknown ids are valid values that the resolver
/// translates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    active_page_id: String,
}

impl NavigationState {
    /// Creates a state with the given active id.
    #[must_use]
    pub fn new(active_page_id: impl Into<String>) -> Self {
        Self {
            active_page_id: active_page_id.into(),
        }
    }

    /// The active page id.
    #[must_use]
    pub fn active_page_id(&self) -> &str {
        &self.active_page_id
    }

    /// Replaces the active page id. No validation.
    pub fn set(&mut self, id: impl Into<String>) {
        self.active_page_id = id.into();
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(HOME_ID)
    }
}

/// Vertical scroll offset of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrollPosition(pub u32);

impl ScrollPosition {
    /// The top of the document.
    pub const TOP: Self = Self(0);

    /// Returns `true` at the top of the document.
    #[must_use]
    pub const fn is_top(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_home() {
        assert_eq!(NavigationState::default().active_page_id(), "home");
    }

    #[test]
    fn set_stores_verbatim() {
        let mut state = NavigationState::default();
        state.set("  Not A Page  ");
        assert_eq!(state.active_page_id(), "  Not A Page  ");
    }

    #[test]
    fn scroll_top() {
        assert!(ScrollPosition::TOP.is_top());
        assert!(!ScrollPosition(120).is_top());
    }
}
