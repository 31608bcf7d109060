//! Scripted session events.
//!
//! A compact text form for replaying user interaction against a
//! [`Session`]: `goto:ID`, `select:ID`, `hash:FRAG`, `back`, `forward`,
//! `enter:ID`, `leave:ID`, `toggle:ID`, `dismiss`, `mobile`, `scroll:N`.

use std::fmt;
use std::str::FromStr;

use crate::content::schema::NavItem;
use crate::error::SessionError;
use crate::nav::menu::MenuEvent;
use crate::nav::session::Session;

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Menu click / card link: in-app navigation.
    Goto(String),
    /// Click on a dropdown entry.
    Select(String),
    /// Fragment edited outside the app.
    Hash(String),
    /// Browser back button.
    Back,
    /// Browser forward button.
    Forward,
    /// Pointer entered a top-level item.
    Enter(String),
    /// Pointer left a top-level item.
    Leave(String),
    /// Tap on a top-level item.
    Toggle(String),
    /// Click outside the menu.
    Dismiss,
    /// Mobile menu button.
    Mobile,
    /// User scrolled to an offset.
    Scroll(u32),
}

impl FromStr for SessionEvent {
    type Err = SessionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SessionError::InvalidEvent {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (verb, arg) = match input.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (input, None),
        };

        match (verb, arg) {
            ("goto", Some(id)) => Ok(Self::Goto(id.to_string())),
            ("select", Some(id)) if !id.is_empty() => Ok(Self::Select(id.to_string())),
            ("hash", Some(fragment)) => Ok(Self::Hash(fragment.to_string())),
            ("enter", Some(id)) if !id.is_empty() => Ok(Self::Enter(id.to_string())),
            ("leave", Some(id)) if !id.is_empty() => Ok(Self::Leave(id.to_string())),
            ("toggle", Some(id)) if !id.is_empty() => Ok(Self::Toggle(id.to_string())),
            ("scroll", Some(n)) => n
                .parse()
                .map(Self::Scroll)
                .map_err(|_| invalid("scroll offset must be a non-negative integer")),
            ("back", None) => Ok(Self::Back),
            ("forward", None) => Ok(Self::Forward),
            ("dismiss", None) => Ok(Self::Dismiss),
            ("mobile", None) => Ok(Self::Mobile),
            ("enter" | "leave" | "toggle" | "select", _) => Err(invalid("expected a menu item id")),
            ("goto" | "hash" | "scroll", None) => Err(invalid("missing argument")),
            ("back" | "forward" | "dismiss" | "mobile", Some(_)) => {
                Err(invalid("takes no argument"))
            }
            _ => Err(invalid("unknown event")),
        }
    }
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Goto(id) => write!(f, "goto:{id}"),
            Self::Select(id) => write!(f, "select:{id}"),
            Self::Hash(fragment) => write!(f, "hash:{fragment}"),
            Self::Back => f.write_str("back"),
            Self::Forward => f.write_str("forward"),
            Self::Enter(id) => write!(f, "enter:{id}"),
            Self::Leave(id) => write!(f, "leave:{id}"),
            Self::Toggle(id) => write!(f, "toggle:{id}"),
            Self::Dismiss => f.write_str("dismiss"),
            Self::Mobile => f.write_str("mobile"),
            Self::Scroll(n) => write!(f, "scroll:{n}"),
        }
    }
}

impl SessionEvent {
    /// Applies this event to `session`.
    pub fn apply(&self, session: &mut Session, nav: &[NavItem]) {
        match self {
            Self::Goto(id) => session.navigate(id),
            Self::Select(id) => session.select(nav, id),
            Self::Hash(fragment) => session.external_fragment(fragment),
            Self::Back => {
                if !session.back() {
                    tracing::debug!("back: already at oldest entry");
                }
            }
            Self::Forward => {
                if !session.forward() {
                    tracing::debug!("forward: already at newest entry");
                }
            }
            Self::Enter(id) => {
                session.menu_event(nav, id, MenuEvent::PointerEnter);
            }
            Self::Leave(id) => {
                session.menu_event(nav, id, MenuEvent::PointerLeave);
            }
            Self::Toggle(id) => {
                session.menu_event(nav, id, MenuEvent::Toggle);
            }
            Self::Dismiss => session.dismiss_menu(),
            Self::Mobile => session.toggle_mobile_menu(),
            Self::Scroll(n) => session.scroll_to(*n),
        }
    }
}

/// Parses a list of event strings, failing on the first bad one.
///
/// # Errors
///
/// Returns `SessionError::InvalidEvent` for the first unparsable event.
pub fn parse_events<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<SessionEvent>, SessionError> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}
