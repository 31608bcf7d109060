//! Site engine for the Critical NLP Group.
//!
//! The site is a content table of pages, a navigation tree over it, and a
//! resolver that maps any page id to something displayable. Around that
//! core sit a fragment-backed navigation session, menu evaluation, and an
//! HTML renderer that can emit a single page or a whole static tree.
//!
//! ```
//! use critnlp::content::builtin;
//! use critnlp::resolver::Resolver;
//!
//! let content = builtin::site_content();
//! let resolver = Resolver::new(&content);
//! assert_eq!(resolver.record("programs").id(), "program-reading");
//! assert!(resolver.record("no-such-page").is_home());
//! ```

pub mod cli;
pub mod content;
pub mod error;
pub mod nav;
pub mod observability;
pub mod render;
pub mod resolver;
