//! Link targets for page ids.

use clap::ValueEnum;
use serde::Serialize;

use crate::content::schema::HOME_ID;
use crate::nav::fragment::fragment_for_page;
use crate::render::escape::file_stem;

/// How rendered pages link to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    /// `#id` links for a single fragment-routed document.
    #[default]
    Fragment,
    /// `id.html` links for a static file tree.
    Files,
}

impl LinkStyle {
    /// Link target for `page_id`.
    #[must_use]
    pub fn href(self, page_id: &str) -> String {
        match self {
            Self::Fragment => format!("#{}", fragment_for_page(page_id)),
            Self::Files => format!("{}.html", Self::file_stem_for(page_id)),
        }
    }

    /// File stem a page id is written to in a static tree.
    #[must_use]
    pub fn file_stem_for(page_id: &str) -> String {
        if page_id == HOME_ID {
            "index".to_string()
        } else {
            file_stem(page_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links() {
        assert_eq!(LinkStyle::Fragment.href("home"), "#");
        assert_eq!(LinkStyle::Fragment.href("topic-bias"), "#topic-bias");
    }

    #[test]
    fn file_links() {
        assert_eq!(LinkStyle::Files.href("home"), "index.html");
        assert_eq!(LinkStyle::Files.href("whoWeAre"), "whoWeAre.html");
    }

    #[test]
    fn home_writes_to_index() {
        assert_eq!(LinkStyle::file_stem_for("home"), "index");
        assert_eq!(LinkStyle::file_stem_for("motivation"), "motivation");
    }
}
