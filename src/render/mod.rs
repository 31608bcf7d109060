//! HTML rendering.
//!
//! Stateless: a document is a function of the content table, the active
//! page id and the transient menu state. Emits semantic markup with class
//! hooks and no styling.

pub mod escape;
pub mod layout;
pub mod links;
pub mod page;
pub mod site;

pub use links::LinkStyle;
pub use site::{BuildReport, SiteBuilder};

use crate::nav::fragment::Location;
use crate::nav::menu::MenuState;
use crate::nav::session::Session;
use crate::resolver::{Record, Resolver};
use crate::render::escape::escape;

/// Renders full HTML documents.
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    resolver: &'a Resolver<'a>,
    links: LinkStyle,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer.
    #[must_use]
    pub const fn new(resolver: &'a Resolver<'a>, links: LinkStyle) -> Self {
        Self { resolver, links }
    }

    /// Link style in use.
    #[must_use]
    pub const fn links(&self) -> LinkStyle {
        self.links
    }

    /// Renders the document for `active_page_id`.
    #[must_use]
    pub fn render(&self, active_page_id: &str, menu: &MenuState) -> String {
        let content = self.resolver.content();
        let record = self.resolver.record(active_page_id);

        let mut out = Vec::new();
        out.push("<!DOCTYPE html>".to_string());
        out.push("<html lang=\"en\">".to_string());
        out.push("<head>".to_string());
        out.push("<meta charset=\"utf-8\">".to_string());
        out.push(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
        );
        out.push(format!("<title>{}</title>", escape(&document_title(&record, &content.home.title))));
        out.push("</head>".to_string());
        out.push(format!("<body data-page=\"{}\">", escape(record.id())));

        layout::render_navbar(
            &mut out,
            &content.site,
            &content.nav,
            active_page_id,
            menu,
            self.links,
        );
        page::render_main(&mut out, &record, self.links);
        layout::render_footer(&mut out, &content.site);

        out.push("</body>".to_string());
        out.push("</html>".to_string());
        out.push(String::new());

        out.join("\n")
    }

    /// Renders the current view of a session.
    #[must_use]
    pub fn render_session<L: Location>(&self, session: &Session<L>) -> String {
        self.render(session.active_page_id(), session.menu())
    }
}

fn document_title(record: &Record<'_>, site_title: &str) -> String {
    match record {
        Record::Home(_) => site_title.to_string(),
        Record::Page(page) => format!("{} | {site_title}", page.title()),
    }
}
