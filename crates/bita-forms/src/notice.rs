//! User-facing notices.
//!
//! The pipeline reports the outcome of every submission that reached the
//! channel as a [`Notice`]. How and for how long a notice is shown is up to
//! the presentation layer behind the [`Notifier`].

use std::sync::{Arc, Mutex};

use serde::Serialize;

/// The kind of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// The submission was accepted.
    Success,
    /// The submission failed.
    Error,
}

impl NoticeLevel {
    /// Returns the CSS tag class for this level.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// The kind of notice.
    pub level: NoticeLevel,
    /// The message text.
    pub text: String,
}

impl Notice {
    /// Creates a success notice.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    /// Creates an error notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Receives notices from a form pipeline.
pub trait Notifier: Send + Sync {
    /// Presents a notice to the user.
    fn notify(&self, notice: Notice);
}

/// Storage for one-time notices.
///
/// Notices are added by the pipeline and drained when the presentation layer
/// reads them. Clones share the same storage, so one board can be handed to a
/// form and kept by the renderer.
///
/// # Examples
///
/// ```
/// use bita_forms::notice::{Notice, NoticeBoard, Notifier};
///
/// let board = NoticeBoard::new();
/// board.notify(Notice::success("ההזמנה נשלחה בהצלחה!"));
///
/// assert_eq!(board.take().len(), 1);
/// assert!(board.take().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns all stored notices.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().expect("NoticeBoard lock poisoned"))
    }

    /// Returns the stored notices without consuming them.
    pub fn peek(&self) -> Vec<Notice> {
        self.notices.lock().expect("NoticeBoard lock poisoned").clone()
    }

    /// Returns the number of stored notices.
    pub fn len(&self) -> usize {
        self.notices.lock().expect("NoticeBoard lock poisoned").len()
    }

    /// Returns `true` if no notices are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counts stored notices of one level.
    pub fn count(&self, level: NoticeLevel) -> usize {
        self.notices
            .lock()
            .expect("NoticeBoard lock poisoned")
            .iter()
            .filter(|n| n.level == level)
            .count()
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("NoticeBoard lock poisoned")
            .push(notice);
    }
}
