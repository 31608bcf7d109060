//! Page resolution.
//!
//! Maps any page identifier to a displayable record. The fallback chain is
//! `home` → table hit → group default → home, so [`Resolver::resolve`] is a
//! total function: every string resolves, nothing panics, nothing is empty.

use std::collections::HashMap;

use serde::Serialize;

use crate::content::schema::{HOME_ID, HomeRecord, PageRecord, SiteContent};

/// The record a page id resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// The synthesized home page.
    Home(&'a HomeRecord),
    /// A leaf page from the table.
    Page(PageRecord<'a>),
}

impl Record<'_> {
    /// Id of the displayed record (`"home"` for the home page).
    #[must_use]
    pub const fn id(&self) -> &str {
        match self {
            Self::Home(_) => HOME_ID,
            Self::Page(page) => page.id,
        }
    }

    /// Hero title of the displayed record.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Home(home) => &home.title,
            Self::Page(page) => page.title(),
        }
    }

    /// Returns `true` for the home record.
    #[must_use]
    pub const fn is_home(&self) -> bool {
        matches!(self, Self::Home(_))
    }
}

/// Which resolution rule produced a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// The id was `"home"`.
    Home,
    /// The id is a key of the page table.
    Page,
    /// The id is a nav group and resolved to its default child.
    Group {
        /// The default child that was shown.
        default: String,
    },
    /// The id is unknown; the home page is shown instead.
    Fallback,
}

/// Outcome of resolving one page id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// The id that was asked for.
    pub requested: String,
    /// The record to display.
    pub record: Record<'a>,
    /// The rule that fired.
    pub rule: Rule,
}

/// Resolves page ids against a content table.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    content: &'a SiteContent,
    group_defaults: HashMap<&'a str, &'a str>,
}

impl<'a> Resolver<'a> {
    /// Builds a resolver over `content`.
    ///
    /// Group defaults come from the nav tree: each top-level item with
    /// children maps to its designated (or first) child.
    #[must_use]
    pub fn new(content: &'a SiteContent) -> Self {
        let group_defaults = content
            .groups()
            .filter_map(|group| Some((group.id.as_str(), group.default_child()?)))
            .collect();

        Self {
            content,
            group_defaults,
        }
    }

    /// The content table this resolver reads.
    #[must_use]
    pub const fn content(&self) -> &'a SiteContent {
        self.content
    }

    /// Returns the designated default child for a group label.
    #[must_use]
    pub fn group_default(&self, group: &str) -> Option<&'a str> {
        self.group_defaults.get(group).copied()
    }

    /// Resolves `page_id` to a record. Never fails.
    #[must_use]
    pub fn resolve(&self, page_id: &str) -> Resolved<'a> {
        let (record, rule) = self.lookup(page_id);

        if rule == Rule::Fallback {
            tracing::debug!(page_id, "unknown page id, showing home");
        }

        Resolved {
            requested: page_id.to_string(),
            record,
            rule,
        }
    }

    /// Resolves `page_id` and returns only the record.
    #[must_use]
    pub fn record(&self, page_id: &str) -> Record<'a> {
        self.lookup(page_id).0
    }

    fn lookup(&self, page_id: &str) -> (Record<'a>, Rule) {
        let home = Record::Home(&self.content.home);

        if page_id == HOME_ID {
            return (home, Rule::Home);
        }

        if let Some(page) = self.content.page(page_id) {
            return (Record::Page(page), Rule::Page);
        }

        if let Some(default) = self.group_default(page_id) {
            // A default that is missing from the table degrades to home
            // rather than chaining into another group.
            return self.content.page(default).map_or((home, Rule::Fallback), |page| {
                (
                    Record::Page(page),
                    Rule::Group {
                        default: default.to_string(),
                    },
                )
            });
        }

        (home, Rule::Fallback)
    }

    /// Every id that resolves without falling back: home, pages, groups.
    #[must_use]
    pub fn known_ids(&self) -> Vec<&'a str> {
        let mut ids = vec![HOME_ID];
        ids.extend(self.content.pages.keys().map(String::as_str));
        ids.extend(self.content.groups().map(|g| g.id.as_str()));
        ids
    }

    /// Suggests a known id for a mistyped one.
    ///
    /// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Option<&'a str> {
        self.known_ids()
            .into_iter()
            .map(|id| (id, strsim::damerau_levenshtein(input, id)))
            .filter(|(_, dist)| *dist <= 3)
            .min_by_key(|(_, dist)| *dist)
            .map(|(id, _)| id)
    }
}
