//! Page chrome: navbar (desktop dropdowns and mobile panel) and footer.

use crate::content::schema::{HOME_ID, NavItem, SiteInfo};
use crate::nav::menu::{MenuState, is_item_active};
use crate::render::escape::escape;
use crate::render::links::LinkStyle;

/// Renders the navigation bar.
///
/// `active_page_id` drives the active highlight; `menu` decides which
/// dropdown and whether the mobile panel are shown.
pub fn render_navbar(
    out: &mut Vec<String>,
    site: &SiteInfo,
    nav: &[NavItem],
    active_page_id: &str,
    menu: &MenuState,
    links: LinkStyle,
) {
    out.push("<nav class=\"navbar\">".to_string());
    out.push(format!(
        "<a class=\"navbar-brand\" href=\"{}\">{}</a>",
        escape(&links.href(HOME_ID)),
        escape(&site.brand)
    ));

    out.push("<ul class=\"navbar-menu\">".to_string());
    for item in nav {
        render_desktop_item(out, item, active_page_id, menu, links);
    }
    out.push("</ul>".to_string());

    out.push(format!(
        "<button type=\"button\" class=\"mobile-toggle\" aria-expanded=\"{}\">Menu</button>",
        menu.is_mobile_open()
    ));
    render_mobile_panel(out, nav, active_page_id, menu.is_mobile_open(), links);

    out.push("</nav>".to_string());
}

fn item_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

fn link(href: &str, label: &str, current: bool) -> String {
    let aria = if current { " aria-current=\"page\"" } else { "" };
    format!(
        "<a href=\"{}\"{aria}>{}</a>",
        escape(href),
        escape(label)
    )
}

fn render_desktop_item(
    out: &mut Vec<String>,
    item: &NavItem,
    active_page_id: &str,
    menu: &MenuState,
    links: LinkStyle,
) {
    let active = is_item_active(item, active_page_id);

    if !item.is_group() {
        out.push(format!("<li class=\"{}\">", item_class("nav-item", active)));
        out.push(link(&links.href(&item.id), &item.label, item.id == active_page_id));
        out.push("</li>".to_string());
        return;
    }

    let open = menu.dropdown(&item.id).is_open();
    let mut class = item_class("nav-item nav-group", active);
    if open {
        class.push_str(" open");
    }

    out.push(format!(
        "<li class=\"{class}\" data-menu=\"{}\">",
        escape(&item.id)
    ));
    out.push(format!(
        "<button type=\"button\" aria-haspopup=\"true\" aria-expanded=\"{open}\">{}</button>",
        escape(&item.label)
    ));
    out.push(format!(
        "<ul class=\"dropdown\"{}>",
        if open { "" } else { " hidden" }
    ));
    for child in &item.children {
        let current = child.id == active_page_id;
        out.push(format!("<li class=\"{}\">", item_class("dropdown-item", current)));
        out.push(link(&links.href(&child.id), &child.label, current));
        out.push("</li>".to_string());
    }
    out.push("</ul>".to_string());
    out.push("</li>".to_string());
}

fn render_mobile_panel(
    out: &mut Vec<String>,
    nav: &[NavItem],
    active_page_id: &str,
    open: bool,
    links: LinkStyle,
) {
    out.push(format!(
        "<div class=\"mobile-menu\"{}>",
        if open { "" } else { " hidden" }
    ));
    for item in nav {
        if item.is_group() {
            out.push(format!(
                "<div class=\"mobile-group\">{}</div>",
                escape(&item.label)
            ));
            for child in &item.children {
                out.push(link(
                    &links.href(&child.id),
                    &child.label,
                    child.id == active_page_id,
                ));
            }
        } else {
            out.push(link(
                &links.href(&item.id),
                &item.label,
                item.id == active_page_id,
            ));
        }
    }
    out.push("</div>".to_string());
}

/// Renders the footer.
pub fn render_footer(out: &mut Vec<String>, site: &SiteInfo) {
    out.push("<footer class=\"footer\">".to_string());

    out.push("<div class=\"footer-brand\">".to_string());
    out.push(format!("<strong>{}</strong>", escape(&site.footer_brand)));
    if !site.tagline.is_empty() {
        out.push(format!("<p>{}</p>", escape(&site.tagline)));
    }
    out.push("</div>".to_string());

    if !site.links.is_empty() {
        out.push("<div class=\"footer-links\">".to_string());
        out.push("<h3>Connect</h3>".to_string());
        out.push("<ul>".to_string());
        for footer_link in &site.links {
            out.push(format!(
                "<li><a href=\"{}\">{}</a></li>",
                escape(&footer_link.href),
                escape(&footer_link.label)
            ));
        }
        out.push("</ul>".to_string());
        out.push("</div>".to_string());
    }

    if !site.location.is_empty() {
        let lines: Vec<String> = site.location.iter().map(String::as_str).map(escape).collect();
        out.push("<div class=\"footer-location\">".to_string());
        out.push("<h3>Location</h3>".to_string());
        out.push(format!("<p>{}</p>", lines.join("<br>")));
        out.push("</div>".to_string());
    }

    if let Some(ref credit) = site.credit {
        out.push(format!("<p class=\"credit\">{}</p>", escape(credit)));
    }

    out.push("</footer>".to_string());
}
