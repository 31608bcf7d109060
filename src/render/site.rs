//! Static site tree builder.
//!
//! Writes `index.html`, one file per page, group label and card target,
//! and a `404.html` that shows the home fallback. Two routes never share a
//! file: a collision fails the build instead of overwriting.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::content::schema::HOME_ID;
use crate::error::RenderError;
use crate::nav::menu::MenuState;
use crate::render::{LinkStyle, Renderer};
use crate::resolver::Rule;

/// File stem of the not-found page.
pub const NOT_FOUND_STEM: &str = "404";

/// File name of the not-found page.
pub const NOT_FOUND_FILE: &str = "404.html";

/// One written route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Page id the file was rendered for.
    pub id: String,
    /// Written file, relative to the output directory.
    pub file: String,
    /// Resolution rule that produced the content.
    #[serde(flatten)]
    pub rule: Rule,
}

/// Summary of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Output directory.
    pub output: PathBuf,
    /// Written routes, in write order.
    pub routes: Vec<Route>,
}

/// Writes a static tree of rendered pages.
#[derive(Debug, Clone)]
pub struct SiteBuilder<'a> {
    renderer: Renderer<'a>,
}

impl<'a> SiteBuilder<'a> {
    /// Creates a builder around `renderer`.
    #[must_use]
    pub const fn new(renderer: Renderer<'a>) -> Self {
        Self { renderer }
    }

    /// Ids that get their own file: home, pages, groups, card targets.
    #[must_use]
    pub fn route_ids(&self) -> Vec<String> {
        let content = self.renderer.resolver.content();
        let mut seen = HashSet::new();
        let candidates = std::iter::once(HOME_ID)
            .chain(content.pages.keys().map(String::as_str))
            .chain(content.groups().map(|g| g.id.as_str()))
            .chain(content.home.cards.iter().map(|c| c.target.as_str()));

        candidates
            .filter(|id| seen.insert(*id))
            .map(ToString::to_string)
            .collect()
    }

    /// Assigns each route its output file.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::RouteCollision` if two ids share a file stem or
    /// an id would overwrite `404.html`.
    pub fn route_files(&self) -> Result<Vec<(String, String)>, RenderError> {
        let mut claimed: HashMap<String, String> = HashMap::new();
        claimed.insert(NOT_FOUND_STEM.to_string(), NOT_FOUND_FILE.to_string());

        let mut files = Vec::new();
        for id in self.route_ids() {
            let stem = LinkStyle::file_stem_for(&id);
            if let Some(first) = claimed.get(&stem) {
                return Err(RenderError::RouteCollision {
                    file: format!("{stem}.html"),
                    first: first.clone(),
                    second: id,
                });
            }
            claimed.insert(stem.clone(), id.clone());
            files.push((id, format!("{stem}.html")));
        }
        Ok(files)
    }

    /// Renders every route into `output`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if `output` is not a directory, two routes
    /// share an output file, or a file cannot be written.
    pub fn build(&self, output: &Path) -> Result<BuildReport, RenderError> {
        if output.exists() && !output.is_dir() {
            return Err(RenderError::NotADirectory(output.to_path_buf()));
        }
        let routes = self.route_files()?;
        fs::create_dir_all(output).map_err(|source| RenderError::Io {
            path: output.to_path_buf(),
            source,
        })?;

        let menu = MenuState::new();
        let mut report = BuildReport {
            output: output.to_path_buf(),
            routes: Vec::new(),
        };

        for (id, file) in routes {
            let html = self.renderer.render(&id, &menu);
            write(output, &file, &html)?;

            let rule = self.renderer.resolver.resolve(&id).rule;
            tracing::debug!(id = %id, file = %file, ?rule, "wrote page");
            report.routes.push(Route { id, file, rule });
        }

        // Unknown ids degrade to home; the not-found page shows the same.
        let html = self.renderer.render(NOT_FOUND_FILE, &menu);
        write(output, NOT_FOUND_FILE, &html)?;
        report.routes.push(Route {
            id: NOT_FOUND_FILE.to_string(),
            file: NOT_FOUND_FILE.to_string(),
            rule: Rule::Fallback,
        });

        tracing::info!(
            output = %output.display(),
            files = report.routes.len(),
            "site built"
        );
        Ok(report)
    }
}

fn write(dir: &Path, file: &str, html: &str) -> Result<(), RenderError> {
    let path = dir.join(file);
    fs::write(&path, html).map_err(|source| RenderError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;
    use crate::content::schema::{PageBody, SiteContent};
    use crate::resolver::Resolver;

    #[test]
    fn route_ids_cover_pages_groups_and_home() {
        let content = builtin::site_content();
        let resolver = Resolver::new(&content);
        let builder = SiteBuilder::new(Renderer::new(&resolver, LinkStyle::Files));
        let ids = builder.route_ids();
        assert_eq!(ids[0], "home");
        assert!(ids.contains(&"programs".to_string()));
        assert!(ids.contains(&"topics".to_string()));
        assert!(ids.contains(&"whoWeAre".to_string()));
        // Card targets duplicate pages and groups; each written once.
        assert_eq!(ids.len(), 1 + content.pages.len() + 2);
    }

    #[test]
    fn build_writes_every_route() {
        let content = builtin::site_content();
        let resolver = Resolver::new(&content);
        let builder = SiteBuilder::new(Renderer::new(&resolver, LinkStyle::Files));
        let dir = tempfile::tempdir().unwrap();

        let report = builder.build(dir.path()).unwrap();
        for route in &report.routes {
            assert!(dir.path().join(&route.file).is_file(), "{}", route.file);
        }
        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("404.html").is_file());

        let programs = fs::read_to_string(dir.path().join("programs.html")).unwrap();
        assert!(programs.contains("<h1>Reading Group</h1>"));
    }

    #[test]
    fn build_into_file_fails() {
        let content = builtin::site_content();
        let resolver = Resolver::new(&content);
        let builder = SiteBuilder::new(Renderer::new(&resolver, LinkStyle::Files));
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = builder.build(file.path()).unwrap_err();
        assert!(matches!(err, RenderError::NotADirectory(_)));
    }

    fn with_page(id: &str, title: &str) -> SiteContent {
        let mut content = builtin::site_content();
        content.pages.insert(
            id.into(),
            PageBody {
                title: title.into(),
                subtitle: None,
                body: vec!["x".into()],
            },
        );
        content
    }

    fn build_err(content: &SiteContent) -> (RenderError, tempfile::TempDir) {
        let resolver = Resolver::new(content);
        let builder = SiteBuilder::new(Renderer::new(&resolver, LinkStyle::Files));
        let dir = tempfile::tempdir().unwrap();
        let err = builder.build(dir.path()).unwrap_err();
        (err, dir)
    }

    #[test]
    fn index_page_collides_with_home() {
        let (err, dir) = build_err(&with_page("index", "Index Page"));
        match err {
            RenderError::RouteCollision { file, first, second } => {
                assert_eq!(file, "index.html");
                assert_eq!(first, "home");
                assert_eq!(second, "index");
            }
            other => panic!("expected RouteCollision, got {other}"),
        }
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn page_named_404_collides_with_not_found() {
        let (err, _dir) = build_err(&with_page("404", "Four Oh Four"));
        assert!(
            matches!(&err, RenderError::RouteCollision { file, first, .. }
                if file == "404.html" && first == "404.html"),
            "{err}"
        );
    }

    #[test]
    fn sanitised_ids_collide() {
        let mut content = with_page("a b", "Spaced");
        content.pages.insert(
            "a_b".into(),
            PageBody {
                title: "Underscored".into(),
                subtitle: None,
                body: vec!["x".into()],
            },
        );
        let (err, _dir) = build_err(&content);
        assert!(
            matches!(&err, RenderError::RouteCollision { file, second, .. }
                if file == "a_b.html" && second == "a_b"),
            "{err}"
        );
    }
}
