//! Main-area rendering: hero banner, paragraph list, home card grid.
//!
//! Each function appends lines to a `Vec<String>` that the document
//! assembler joins.

use crate::content::schema::{HomeRecord, PageRecord};
use crate::render::escape::escape;
use crate::render::links::LinkStyle;
use crate::resolver::Record;

/// Colour theme of a hero banner, picked from the page id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroTheme {
    /// Home and general pages.
    Default,
    /// `program*` pages.
    Program,
    /// `topic*` pages.
    Topic,
}

impl HeroTheme {
    /// Theme for a page id.
    #[must_use]
    pub fn for_page(page_id: &str) -> Self {
        if page_id.starts_with("topic") {
            Self::Topic
        } else if page_id.starts_with("program") {
            Self::Program
        } else {
            Self::Default
        }
    }

    /// CSS class hook.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "hero hero--default",
            Self::Program => "hero hero--program",
            Self::Topic => "hero hero--topic",
        }
    }
}

/// Renders the main area for a resolved record.
pub fn render_main(out: &mut Vec<String>, record: &Record<'_>, links: LinkStyle) {
    out.push("<main>".to_string());
    match record {
        Record::Home(home) => render_home(out, home, links),
        Record::Page(page) => render_page(out, page),
    }
    out.push("</main>".to_string());
}

fn render_hero(out: &mut Vec<String>, theme: HeroTheme, title: &str, subtitle: Option<&str>) {
    out.push(format!("<section class=\"{}\">", theme.class()));
    out.push(format!("<h1>{}</h1>", escape(title)));
    if let Some(subtitle) = subtitle {
        out.push(format!("<p class=\"subtitle\">{}</p>", escape(subtitle)));
    }
    out.push("</section>".to_string());
}

fn render_home(out: &mut Vec<String>, home: &HomeRecord, links: LinkStyle) {
    render_hero(out, HeroTheme::Default, &home.title, home.subtitle.as_deref());

    if home.cards.is_empty() {
        return;
    }

    out.push("<section class=\"cards\">".to_string());
    for card in &home.cards {
        out.push(format!("<article class=\"card\" id=\"{}\">", escape(&card.id)));
        out.push(format!("<h2>{}</h2>", escape(&card.title)));
        out.push(format!("<p>{}</p>", escape(&card.summary)));
        out.push(format!(
            "<a class=\"learn-more\" href=\"{}\">Learn more</a>",
            escape(&links.href(&card.target))
        ));
        out.push("</article>".to_string());
    }
    out.push("</section>".to_string());
}

fn render_page(out: &mut Vec<String>, page: &PageRecord<'_>) {
    render_hero(out, HeroTheme::for_page(page.id), page.title(), page.subtitle());

    out.push("<section class=\"content\">".to_string());
    for paragraph in page.paragraphs() {
        out.push(format!("<p>{}</p>", escape(paragraph)));
    }
    out.push("</section>".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;
    use crate::resolver::Resolver;

    fn main_for(id: &str) -> String {
        let content = builtin::site_content();
        let resolver = Resolver::new(&content);
        let mut out = Vec::new();
        render_main(&mut out, &resolver.record(id), LinkStyle::Fragment);
        out.join("\n")
    }

    #[test]
    fn theme_by_prefix() {
        assert_eq!(HeroTheme::for_page("topic-bias"), HeroTheme::Topic);
        assert_eq!(HeroTheme::for_page("program-qa"), HeroTheme::Program);
        assert_eq!(HeroTheme::for_page("motivation"), HeroTheme::Default);
    }

    #[test]
    fn home_renders_four_cards() {
        let html = main_for("home");
        assert_eq!(html.matches("<article class=\"card\"").count(), 4);
        assert!(html.contains("href=\"#whoWeAre\""));
        assert!(html.contains("href=\"#motivation\""));
        assert!(html.contains("href=\"#programs\""));
        assert!(html.contains("<p class=\"subtitle\">"));
    }

    #[test]
    fn page_renders_every_paragraph() {
        let html = main_for("topic-reasoning");
        assert!(html.contains("hero--topic"));
        assert_eq!(html.matches("<p>").count(), 2);
        assert!(html.contains("Reasoning &amp; Logic"));
        assert!(html.contains("&#39;common sense&#39;"));
    }

    #[test]
    fn group_renders_its_default_page() {
        let html = main_for("programs");
        assert!(html.contains("<h1>Reading Group</h1>"));
        assert!(html.contains("hero--program"));
    }

    #[test]
    fn generic_page_has_no_subtitle() {
        let html = main_for("motivation");
        assert!(!html.contains("subtitle"));
    }
}
