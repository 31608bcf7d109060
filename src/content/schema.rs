//! Content table types.
//!
//! Plain data: nothing in here knows how a page is rendered. The same types
//! back the built-in table and YAML content files.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of the home page. Never looked up in the page table.
pub const HOME_ID: &str = "home";

// ============================================================================
// Site Content
// ============================================================================

/// The complete content table for a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteContent {
    /// Site chrome: brand, footer.
    pub site: SiteInfo,

    /// The synthesized home record.
    pub home: HomeRecord,

    /// Leaf pages keyed by id, in declaration order.
    #[serde(default)]
    pub pages: IndexMap<String, PageBody>,

    /// Navigation menu tree.
    #[serde(default)]
    pub nav: Vec<NavItem>,
}

impl SiteContent {
    /// Looks up a leaf page by id.
    #[must_use]
    pub fn page(&self, id: &str) -> Option<PageRecord<'_>> {
        self.pages
            .get_key_value(id)
            .map(|(id, body)| PageRecord { id, body })
    }

    /// Iterates over all leaf pages in declaration order.
    pub fn page_records(&self) -> impl Iterator<Item = PageRecord<'_>> {
        self.pages.iter().map(|(id, body)| PageRecord { id, body })
    }

    /// Top-level nav items that carry a dropdown.
    pub fn groups(&self) -> impl Iterator<Item = &NavItem> {
        self.nav.iter().filter(|item| item.is_group())
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Stored content of a leaf page. The id is the table key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBody {
    /// Hero title.
    pub title: String,

    /// Optional hero subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Body paragraphs, in order.
    #[serde(default)]
    pub body: Vec<String>,
}

/// A page record borrowed from the table, paired with its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRecord<'a> {
    /// Page identifier.
    pub id: &'a str,
    /// Page content.
    pub body: &'a PageBody,
}

impl PageRecord<'_> {
    /// Hero title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.body.title
    }

    /// Optional hero subtitle.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.body.subtitle.as_deref()
    }

    /// Body paragraphs.
    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        &self.body.body
    }
}

// ============================================================================
// Home
// ============================================================================

/// The home page: hero plus a grid of summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRecord {
    /// Hero title.
    pub title: String,

    /// Hero subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Summary cards, in display order.
    #[serde(default)]
    pub cards: Vec<HomeCard>,
}

/// One summary card on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeCard {
    /// Card identifier (anchor id in the rendered page).
    pub id: String,

    /// Card heading.
    pub title: String,

    /// Card text.
    pub summary: String,

    /// Page id the "Learn more" link navigates to.
    pub target: String,
}

// ============================================================================
// Navigation Tree
// ============================================================================

/// One entry of the navigation menu.
///
/// Top-level entries with children are *groups*: their own id has no page
/// record and resolves to a designated child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Menu label.
    pub label: String,

    /// Page id (or group label) this entry stands for.
    pub id: String,

    /// Dropdown entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,

    /// Child id a group resolves to. Defaults to the first child.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl NavItem {
    /// Creates a leaf entry.
    #[must_use]
    pub fn leaf(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
            children: Vec::new(),
            default: None,
        }
    }

    /// Returns `true` if this entry has a dropdown.
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// The child id this group falls back to, if it is a group.
    #[must_use]
    pub fn default_child(&self) -> Option<&str> {
        self.default
            .as_deref()
            .or_else(|| self.children.first().map(|child| child.id.as_str()))
    }
}

// ============================================================================
// Site Chrome
// ============================================================================

/// Brand and footer content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Brand shown in the navbar.
    pub brand: String,

    /// Brand shown in the footer.
    pub footer_brand: String,

    /// Footer tagline.
    #[serde(default)]
    pub tagline: String,

    /// Footer "Connect" links.
    #[serde(default)]
    pub links: Vec<FooterLink>,

    /// Footer "Location" lines.
    #[serde(default)]
    pub location: Vec<String>,

    /// Footer credit line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
}

/// An external footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Link text.
    pub label: String,
    /// Link target.
    pub href: String,
}
