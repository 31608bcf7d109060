//! Navigation: session state, URL fragment boundary, menu evaluation.
//!
//! The session uses the fragment-backed variant: every navigation is
//! mirrored into the location fragment, so deep links and the browser's
//! back/forward buttons work.

pub mod fragment;
pub mod menu;
pub mod script;
pub mod session;
pub mod state;

pub use fragment::{HistoryLocation, Location};
pub use menu::{DropdownState, Highlight, MenuEvent, MenuState, highlight, is_item_active};
pub use script::SessionEvent;
pub use session::{Session, Snapshot};
pub use state::{NavigationState, ScrollPosition};
