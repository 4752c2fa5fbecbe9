//! ui::buffer
//!
//! In-memory [`Ui`] that records everything a command displays.
//!
//! # Example
//!
//! ```
//! use cfwork::actor::Warnings;
//! use cfwork::ui::{BufferUi, Message, Ui};
//!
//! let ui = BufferUi::new();
//! ui.display_text(&Message::CheckingRoute);
//! ui.display_warnings(&Warnings::from(vec!["w1", "w2"]));
//! ui.display_ok();
//!
//! assert!(ui.out_says_in_order(&["Checking for route...", "OK"]));
//! assert!(ui.err_says_in_order(&["w1", "w2"]));
//! ```

use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::messages::Message;
use super::Ui;
use crate::actor::Warnings;

/// One recorded display call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Text on stdout (plain or flavored).
    Text(Message),
    /// A single warning line on stderr.
    Warning(String),
    /// A typed diagnostic message on stderr.
    Notice(Message),
    /// The success marker.
    Ok,
    /// Error text on stderr.
    Error(String),
    /// The failure banner.
    Failed,
    /// Debug line.
    Debug(String),
}

/// Recording [`Ui`] for tests.
#[derive(Debug, Default)]
pub struct BufferUi {
    events: Mutex<Vec<UiEvent>>,
}

impl BufferUi {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    fn events_mut(&self) -> MutexGuard<'_, Vec<UiEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, event: UiEvent) {
        self.events_mut().push(event);
    }

    /// All recorded events in display order.
    pub fn events(&self) -> Vec<UiEvent> {
        self.events_mut().clone()
    }

    /// Everything written to stdout, one line per event.
    pub fn out(&self) -> String {
        self.events_mut()
            .iter()
            .filter_map(|e| match e {
                UiEvent::Text(m) => Some(m.to_string()),
                UiEvent::Ok => Some("OK".to_string()),
                UiEvent::Failed => Some("FAILED".to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Everything written to stderr, one line per event.
    pub fn err(&self) -> String {
        self.events_mut()
            .iter()
            .filter_map(|e| match e {
                UiEvent::Warning(w) => Some(w.clone()),
                UiEvent::Notice(m) => Some(m.to_string()),
                UiEvent::Error(e) => Some(e.clone()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of times the success marker was displayed.
    pub fn ok_count(&self) -> usize {
        self.events_mut()
            .iter()
            .filter(|e| matches!(e, UiEvent::Ok))
            .count()
    }

    /// Number of stdout lines containing `needle`.
    pub fn out_count(&self, needle: &str) -> usize {
        self.out().lines().filter(|l| l.contains(needle)).count()
    }

    /// Check that stdout contains `needles` in this order.
    pub fn out_says_in_order(&self, needles: &[&str]) -> bool {
        says_in_order(&self.out(), needles)
    }

    /// Check that stderr contains `needles` in this order.
    pub fn err_says_in_order(&self, needles: &[&str]) -> bool {
        says_in_order(&self.err(), needles)
    }
}

/// Check that `haystack` contains every needle, each after the previous one.
pub fn says_in_order(haystack: &str, needles: &[&str]) -> bool {
    let mut rest = haystack;
    for needle in needles {
        match rest.find(needle) {
            Some(at) => rest = &rest[at + needle.len()..],
            None => return false,
        }
    }
    true
}

impl Ui for BufferUi {
    fn display_text(&self, message: &Message) {
        self.push(UiEvent::Text(message.clone()));
    }

    fn display_text_with_flavor(&self, message: &Message) {
        self.push(UiEvent::Text(message.clone()));
    }

    fn display_warning(&self, message: &Message) {
        self.push(UiEvent::Notice(message.clone()));
    }

    fn display_warnings(&self, warnings: &Warnings) {
        let mut events = self.events_mut();
        for warning in warnings.iter() {
            events.push(UiEvent::Warning(warning.to_string()));
        }
    }

    fn display_ok(&self) {
        self.push(UiEvent::Ok);
    }

    fn display_error(&self, err: &dyn Display) {
        self.push(UiEvent::Error(err.to_string()));
    }

    fn display_failed(&self) {
        self.push(UiEvent::Failed);
    }

    fn debug(&self, message: &str) {
        self.push(UiEvent::Debug(message.to_string()));
    }
}
