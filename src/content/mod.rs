//! Content table: schema, built-in data, YAML loading and validation.

pub mod builtin;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ContentLimits, ContentLoader, LoadResult};
pub use schema::{HOME_ID, HomeCard, HomeRecord, NavItem, PageBody, PageRecord, SiteContent};
