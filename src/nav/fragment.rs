//! URL fragment boundary.
//!
//! Empty fragment ⇔ `"home"`; any other fragment ⇔ the page id verbatim.
//! The [`Location`] trait is the seam between a session and whatever owns
//! the real fragment.

use crate::content::schema::HOME_ID;

/// Page id encoded by a fragment. A single leading `#` is ignored.
#[must_use]
pub fn page_id_from_fragment(fragment: &str) -> &str {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    if id.is_empty() { HOME_ID } else { id }
}

/// Fragment that encodes a page id.
#[must_use]
pub fn fragment_for_page(page_id: &str) -> &str {
    if page_id == HOME_ID { "" } else { page_id }
}

/// Something that holds a URL fragment.
pub trait Location {
    /// Current fragment, without the leading `#`.
    fn fragment(&self) -> &str;

    /// Replaces the fragment as a result of in-app navigation.
    fn set_fragment(&mut self, fragment: &str);
}

/// In-memory location with a browser-style history stack.
///
/// `set_fragment` pushes an entry and drops any forward entries; `back` and
/// `forward` move the cursor the way browser buttons do. After either, the
/// owner of the session must deliver a fragment-change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLocation {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryLocation {
    /// Creates a history whose first entry is `fragment` (one leading `#`
    /// is dropped).
    #[must_use]
    pub fn new(fragment: impl Into<String>) -> Self {
        let mut fragment = fragment.into();
        if fragment.starts_with('#') {
            fragment.remove(0);
        }
        Self {
            entries: vec![fragment],
            cursor: 0,
        }
    }

    /// Moves one entry back. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves one entry forward. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Replaces the fragment from outside the app (typed URL, link from
    /// another site). Pushes like in-app navigation does.
    pub fn external_change(&mut self, fragment: &str) {
        self.push(fragment);
    }

    /// Number of entries in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history has at least its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, fragment: &str) {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        // Same-fragment assignments do not create history entries.
        if self.entries[self.cursor] == fragment {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor = self.entries.len() - 1;
    }
}

impl Default for HistoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl Location for HistoryLocation {
    fn fragment(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.push(fragment);
    }
}
