//! Content table validation.
//!
//! Resolution is total, so a broken table never crashes the site; it
//! silently falls back to the home page instead. Validation exists to catch
//! those silent fallbacks before they ship. All issues are collected rather
//! than stopping at the first one.

use std::collections::{HashMap, HashSet};

use crate::content::loader::ContentLimits;
use crate::content::schema::{HOME_ID, NavItem, SiteContent};
use crate::error::{Severity, ValidationIssue};
use crate::render::LinkStyle;
use crate::render::site::{NOT_FOUND_FILE, NOT_FOUND_STEM};

/// Result of content validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (content is unusable).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over errors then warnings.
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

/// Content validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a content table and returns the collected issues.
    pub fn validate(&mut self, content: &SiteContent, limits: &ContentLimits) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_home(content);
        self.validate_pages(content, limits);
        self.validate_nav(content);
        self.validate_cards(content);
        self.validate_file_stems(content);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn validate_home(&mut self, content: &SiteContent) {
        if content.home.title.trim().is_empty() {
            self.error("home.title", "home title is empty");
        }
        if content.site.brand.trim().is_empty() {
            self.warning("site.brand", "brand is empty");
        }
    }

    fn validate_pages(&mut self, content: &SiteContent, limits: &ContentLimits) {
        if content.pages.len() > limits.max_pages {
            self.error(
                "pages",
                &format!(
                    "{} pages exceeds limit of {}",
                    content.pages.len(),
                    limits.max_pages
                ),
            );
        }

        let group_ids: HashSet<&str> = content.groups().map(|g| g.id.as_str()).collect();

        for page in content.page_records() {
            let path = format!("pages.{}", page.id);
            if page.id.trim().is_empty() {
                self.error(&path, "page id is empty");
            }
            if page.id == HOME_ID {
                self.error(&path, "page id 'home' is reserved and would never be shown");
            }
            if page.id.starts_with('#') {
                self.error(&path, "page id starts with '#' and cannot be linked by fragment");
            }
            if group_ids.contains(page.id) {
                self.warning(
                    &path,
                    "page id shadows a nav group; the group default will never be used",
                );
            }
            if page.title().trim().is_empty() {
                self.error(&format!("{path}.title"), "page title is empty");
            }
            if page.paragraphs().is_empty() {
                self.warning(&format!("{path}.body"), "page has no body paragraphs");
            }
        }
    }

    fn validate_nav(&mut self, content: &SiteContent) {
        let mut seen: HashSet<&str> = HashSet::new();

        for (i, item) in content.nav.iter().enumerate() {
            let path = format!("nav[{i}]");
            if !seen.insert(item.id.as_str()) {
                self.error(&format!("{path}.id"), &format!("duplicate nav id '{}'", item.id));
            }

            if item.is_group() {
                self.validate_group(content, item, &path, &mut seen);
            } else if item.id != HOME_ID && content.page(&item.id).is_none() {
                self.error(
                    &format!("{path}.id"),
                    &format!("nav entry '{}' has no page", item.id),
                );
            }
        }
    }

    fn validate_group<'a>(
        &mut self,
        content: &SiteContent,
        item: &'a NavItem,
        path: &str,
        seen: &mut HashSet<&'a str>,
    ) {
        for (j, child) in item.children.iter().enumerate() {
            let child_path = format!("{path}.children[{j}]");
            if !seen.insert(child.id.as_str()) {
                self.error(
                    &format!("{child_path}.id"),
                    &format!("duplicate nav id '{}'", child.id),
                );
            }
            if child.is_group() {
                self.error(&child_path, "menus support one level of nesting");
            }
            if content.page(&child.id).is_none() {
                self.error(
                    &format!("{child_path}.id"),
                    &format!("dropdown entry '{}' has no page", child.id),
                );
            }
        }

        if let Some(default) = &item.default
            && !item.children.iter().any(|child| &child.id == default)
        {
            self.error(
                &format!("{path}.default"),
                &format!("default '{default}' is not a child of '{}'", item.id),
            );
        }
    }

    fn validate_cards(&mut self, content: &SiteContent) {
        let mut seen: HashSet<&str> = HashSet::new();

        for (i, card) in content.home.cards.iter().enumerate() {
            let path = format!("home.cards[{i}]");
            if !seen.insert(card.id.as_str()) {
                self.error(&format!("{path}.id"), &format!("duplicate card id '{}'", card.id));
            }

            let reachable = card.target == HOME_ID
                || content.page(&card.target).is_some()
                || content.groups().any(|g| g.id == card.target);
            if !reachable {
                self.error(
                    &format!("{path}.target"),
                    &format!("card target '{}' falls back to home", card.target),
                );
            }
        }
    }

    /// Every page and group is built into its own `<stem>.html`; two ids
    /// sharing a stem, or claiming `index`/`404`, would lose a page.
    fn validate_file_stems(&mut self, content: &SiteContent) {
        let mut claimed: HashMap<String, String> = HashMap::from([
            (LinkStyle::file_stem_for(HOME_ID), "the home page".to_string()),
            (NOT_FOUND_STEM.to_string(), "the not-found page".to_string()),
        ]);
        let mut seen: HashSet<&str> = HashSet::from([HOME_ID]);

        let pages = content
            .pages
            .keys()
            .map(|id| (id.as_str(), format!("pages.{id}")));
        let groups = content
            .nav
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_group())
            .map(|(i, item)| (item.id.as_str(), format!("nav[{i}].id")));

        for (id, path) in pages.chain(groups) {
            if !seen.insert(id) {
                continue;
            }
            let stem = LinkStyle::file_stem_for(id);
            if let Some(owner) = claimed.get(&stem) {
                let file = if stem == NOT_FOUND_STEM {
                    NOT_FOUND_FILE.to_string()
                } else {
                    format!("{stem}.html")
                };
                self.error(
                    &path,
                    &format!("'{id}' is built to {file}, which is already used by {owner}"),
                );
            } else {
                claimed.insert(stem, format!("'{id}'"));
            }
        }
    }

    fn error(&mut self, path: &str, message: &str) {
        self.errors.push(issue(path, message, Severity::Error));
    }

    fn warning(&mut self, path: &str, message: &str) {
        self.warnings.push(issue(path, message, Severity::Warning));
    }
}

fn issue(path: &str, message: &str, severity: Severity) -> ValidationIssue {
    ValidationIssue {
        path: path.to_string(),
        message: message.to_string(),
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;
    use crate::content::schema::{HomeCard, PageBody};

    fn validate(content: &SiteContent) -> ValidationResult {
        Validator::new().validate(content, &ContentLimits::default())
    }

    fn has_error_at(result: &ValidationResult, path: &str) -> bool {
        result.errors.iter().any(|e| e.path == path)
    }

    #[test]
    fn dangling_dropdown_entry() {
        let mut content = builtin::site_content();
        content.pages.shift_remove("topic-bias");
        let result = validate(&content);
        assert!(has_error_at(&result, "nav[2].children[1].id"), "{:?}", result.errors);
    }

    #[test]
    fn dangling_leaf_entry() {
        let mut content = builtin::site_content();
        content.nav.push(NavItem::leaf("Events", "events"));
        let result = validate(&content);
        assert!(has_error_at(&result, "nav[5].id"));
    }

    #[test]
    fn default_must_be_a_child() {
        let mut content = builtin::site_content();
        content.nav[1].default = Some("topic-data".into());
        let result = validate(&content);
        assert!(has_error_at(&result, "nav[1].default"));
    }

    #[test]
    fn duplicate_nav_ids() {
        let mut content = builtin::site_content();
        content.nav.push(NavItem::leaf("Again", "motivation"));
        let result = validate(&content);
        assert!(result.errors.iter().any(|e| e.message.contains("duplicate")));
    }

    #[test]
    fn nested_groups_rejected() {
        let mut content = builtin::site_content();
        content.nav[1].children[0]
            .children
            .push(NavItem::leaf("Deep", "program-qa"));
        let result = validate(&content);
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.message.contains("one level of nesting"))
        );
    }

    #[test]
    fn reserved_home_page_id() {
        let mut content = builtin::site_content();
        content.pages.insert(
            "home".into(),
            PageBody {
                title: "Shadow".into(),
                subtitle: None,
                body: vec!["x".into()],
            },
        );
        let result = validate(&content);
        assert!(has_error_at(&result, "pages.home"));
    }

    #[test]
    fn page_shadowing_group_is_warning() {
        let mut content = builtin::site_content();
        content.pages.insert(
            "topics".into(),
            PageBody {
                title: "All Topics".into(),
                subtitle: None,
                body: vec!["x".into()],
            },
        );
        let result = validate(&content);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "pages.topics"));
    }

    #[test]
    fn unreachable_card_target() {
        let mut content = builtin::site_content();
        content.home.cards.push(HomeCard {
            id: "events".into(),
            title: "Events".into(),
            summary: "Soon".into(),
            target: "events".into(),
        });
        let result = validate(&content);
        assert!(has_error_at(&result, "home.cards[4].target"));
    }

    #[test]
    fn page_limit_enforced() {
        let content = builtin::site_content();
        let limits = ContentLimits {
            max_pages: 2,
            ..ContentLimits::default()
        };
        let result = Validator::new().validate(&content, &limits);
        assert!(has_error_at(&result, "pages"));
    }

    fn with_page(id: &str) -> SiteContent {
        let mut content = builtin::site_content();
        content.pages.insert(
            id.into(),
            PageBody {
                title: "Extra".into(),
                subtitle: None,
                body: vec!["x".into()],
            },
        );
        content
    }

    #[test]
    fn hash_prefixed_page_id_rejected() {
        let result = validate(&with_page("#anchor"));
        assert!(has_error_at(&result, "pages.#anchor"));
    }

    #[test]
    fn index_page_id_rejected() {
        let result = validate(&with_page("index"));
        assert!(has_error_at(&result, "pages.index"));
        assert!(result.errors.iter().any(|e| e.message.contains("the home page")));
    }

    #[test]
    fn not_found_page_id_rejected() {
        let result = validate(&with_page("404"));
        assert!(has_error_at(&result, "pages.404"));
        assert!(result.errors.iter().any(|e| e.message.contains("404.html")));
    }

    #[test]
    fn ids_with_same_file_stem_rejected() {
        let mut content = with_page("a b");
        content.pages.insert(
            "a_b".into(),
            PageBody {
                title: "Other".into(),
                subtitle: None,
                body: vec!["x".into()],
            },
        );
        let result = validate(&content);
        assert!(has_error_at(&result, "pages.a_b"));
        assert!(!has_error_at(&result, "pages.a b"));
    }

    #[test]
    fn group_stem_collision_rejected() {
        let mut content = with_page("topic s");
        content.nav[2].id = "topic_s".into();
        let result = validate(&content);
        assert!(has_error_at(&result, "nav[2].id"));
    }

    #[test]
    fn empty_body_is_warning() {
        let mut content = builtin::site_content();
        content.pages["topic-data"].body.clear();
        let result = validate(&content);
        assert!(result.is_valid());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.path == "pages.topic-data.body")
        );
    }
}
