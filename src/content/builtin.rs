//! Built-in content table for the Critical NLP Group site.
//!
//! Plain literal records. [`site_content`] turns them into an owned
//! [`SiteContent`] that the resolver and renderer consume.

use indexmap::IndexMap;

use crate::content::schema::{
    FooterLink, HomeCard, HomeRecord, NavItem, PageBody, SiteContent, SiteInfo,
};

struct Page {
    id: &'static str,
    title: &'static str,
    body: &'static [&'static str],
}

struct Card {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    target: &'static str,
}

struct Entry {
    label: &'static str,
    id: &'static str,
    children: &'static [(&'static str, &'static str)],
    default: Option<&'static str>,
}

const WHO_WE_ARE: &str = "We are part of the ThirdSpace research group at the University of \
Toronto's Department of Computer Science. We are a collective of graduate students and \
researchers interested in examining the social, ethical, and political implications of NLP.";

const OBJECTIVE: &str = "We seek to shift NLP beyond the dominant heuristic practice by \
grounding it in rigorous theoretical and interdisciplinary discourse. Our aim is to foster \
dialogue shaped by diverse fields, encouraging critical reflection, shared learning, and the \
development of more socially grounded perspectives on NLP";

const HOME_TITLE: &str = "Critical NLP Group";
const HOME_SUBTITLE: &str =
    "Where Natural Language Processing Meets Critical and Sociotheoretical Inquiry";

const CARDS: &[Card] = &[
    Card {
        id: "who-we-are",
        title: "Who We Are",
        summary: WHO_WE_ARE,
        target: "whoWeAre",
    },
    Card {
        id: "objective",
        title: "Our Objective",
        summary: OBJECTIVE,
        target: "motivation",
    },
    Card {
        id: "programs",
        title: "Programs",
        summary: "We will soon host a range of focused activities, including bi-weekly reading \
groups on seminal texts and Q&A sessions with experts from diverse disciplines. These programs \
aim to bridge the gap between conventional NLP practices and more theory-grounded approaches.",
        target: "programs",
    },
    Card {
        id: "topics",
        title: "Topics",
        summary: "We convene to examine themes that sit at the intersection of multiple \
disciplines, including LLM reasoning, fairness in machine learning, cultural bias and \
sensitivity, data-annotation practices, misinformation, and related concerns.",
        target: "topics",
    },
];

const PAGES: &[Page] = &[
    Page {
        id: "motivation",
        title: "Our Motivation",
        body: &[OBJECTIVE],
    },
    Page {
        id: "whoWeAre",
        title: "Who We Are",
        body: &[WHO_WE_ARE],
    },
    Page {
        id: "program-reading",
        title: "Reading Group",
        body: &["Our Reading Group meets on Thursday at T PM every two weeks..."],
    },
    Page {
        id: "program-qa",
        title: "Q/A Sessions",
        body: &["The Q/A series invites experts and practitioners from diverse domains...."],
    },
    Page {
        id: "topic-reasoning",
        title: "Reasoning & Logic",
        body: &[
            "Can machines truly reason, or do they merely mimic statistical patterns? This topic \
track explores the limitations of current LLMs in logical inference and causal reasoning.",
            "We are particularly interested in the failures of 'common sense' reasoning in \
critical scenarios...",
        ],
    },
    Page {
        id: "topic-bias",
        title: "Culture & Bias",
        body: &["To be filled soon.."],
    },
    Page {
        id: "topic-data",
        title: "Data Annotation",
        body: &["To be filled soon.."],
    },
];

const NAV: &[Entry] = &[
    Entry {
        label: "Home",
        id: "home",
        children: &[],
        default: None,
    },
    Entry {
        label: "Programs",
        id: "programs",
        children: &[
            ("Reading Group", "program-reading"),
            ("Q/A Sessions", "program-qa"),
        ],
        default: None,
    },
    Entry {
        label: "Topics",
        id: "topics",
        children: &[
            ("Reasoning", "topic-reasoning"),
            ("Culture & Bias", "topic-bias"),
            ("Data Annotation", "topic-data"),
        ],
        default: Some("topic-data"),
    },
    Entry {
        label: "Motivation",
        id: "motivation",
        children: &[],
        default: None,
    },
    Entry {
        label: "Who We Are",
        id: "whoWeAre",
        children: &[],
        default: None,
    },
];

const FOOTER_LINKS: &[(&str, &str)] = &[
    ("GitHub", "#"),
    ("Twitter / X", "#"),
    ("Email Us", "#"),
];

const LOCATION: &[&str] = &[
    "Third Space Research Lab",
    "Department of Computer Science",
    "University of Toronto",
];

/// Builds the owned built-in content table.
#[must_use]
pub fn site_content() -> SiteContent {
    let pages: IndexMap<String, PageBody> = PAGES
        .iter()
        .map(|page| {
            (
                page.id.to_string(),
                PageBody {
                    title: page.title.to_string(),
                    subtitle: None,
                    body: page.body.iter().map(ToString::to_string).collect(),
                },
            )
        })
        .collect();

    let nav = NAV
        .iter()
        .map(|entry| NavItem {
            label: entry.label.to_string(),
            id: entry.id.to_string(),
            children: entry
                .children
                .iter()
                .map(|(label, id)| NavItem::leaf(*label, *id))
                .collect(),
            default: entry.default.map(ToString::to_string),
        })
        .collect();

    let home = HomeRecord {
        title: HOME_TITLE.to_string(),
        subtitle: Some(HOME_SUBTITLE.to_string()),
        cards: CARDS
            .iter()
            .map(|card| HomeCard {
                id: card.id.to_string(),
                title: card.title.to_string(),
                summary: card.summary.to_string(),
                target: card.target.to_string(),
            })
            .collect(),
    };

    let site = SiteInfo {
        brand: "Critical Computing".to_string(),
        footer_brand: "Critical NLP".to_string(),
        tagline: "NLP + Other Disciplines.".to_string(),
        links: FOOTER_LINKS
            .iter()
            .map(|(label, href)| FooterLink {
                label: (*label).to_string(),
                href: (*href).to_string(),
            })
            .collect(),
        location: LOCATION.iter().map(ToString::to_string).collect(),
        credit: Some("Created using Gemini + lot of manual tinkering".to_string()),
    };

    SiteContent {
        site,
        home,
        pages,
        nav,
    }
}
