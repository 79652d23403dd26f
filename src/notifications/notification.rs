// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum
//! used throughout the notification system.

use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Unique identifier for a notification.
///
/// Identifiers are handed out from a process-wide monotonic counter. The
/// dispatcher draws a fresh one when a notification joins its active set, so
/// ids there increase in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Operation completed successfully.
    Success,
    /// Operation failed; usually a backend call the user triggered.
    Error,
    /// Something needs attention but nothing failed. Also used by `confirm`.
    Warning,
    /// Neutral information. Also used by `alert`.
    Info,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: String,
    description: Option<String>,
    created_at: Instant,
    /// Set once the notification is visible and its kind auto-dismisses.
    dismiss_at: Option<Instant>,
}

impl Notification {
    /// Creates a new notification with the given kind and title.
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            description: None,
            created_at: Instant::now(),
            dismiss_at: None,
        }
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Kind::Error, title)
    }

    /// Creates a warning notification.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title)
    }

    /// Creates an info notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Kind::Info, title)
    }

    /// Attaches a description shown under the title.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn dismiss_at(&self) -> Option<Instant> {
        self.dismiss_at
    }

    /// Returns true when kind, title and description match, ignoring identity
    /// and timestamps.
    #[must_use]
    pub fn same_content(&self, other: &Notification) -> bool {
        self.kind == other.kind
            && self.title == other.title
            && self.description == other.description
    }

    /// Gives the notification its identity in an active set.
    pub(crate) fn stamp(&mut self, id: NotificationId, now: Instant) {
        self.id = id;
        self.created_at = now;
        self.dismiss_at = None;
    }

    /// Starts the auto-dismiss countdown from `now`.
    pub(crate) fn arm(&mut self, now: Instant, duration: Duration) -> Instant {
        let deadline = now + duration;
        self.dismiss_at = Some(deadline);
        deadline
    }
}
