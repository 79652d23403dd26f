// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification lifecycle tracking.

use chrono::{DateTime, Utc};

use crate::notifications::{DismissReason, Kind, NotificationId};

/// What happened to a notification or to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    /// A dispatch operation added a notification to the active set.
    Dispatched {
        id: NotificationId,
        kind: Kind,
        /// True when the visible slots were full and it went to the queue.
        queued: bool,
    },
    /// A queued notification became visible.
    Promoted { id: NotificationId },
    /// A notification left the active set.
    Dismissed {
        id: NotificationId,
        kind: Kind,
        reason: DismissReason,
    },
    /// A confirm continuation ran.
    ConfirmFired { id: NotificationId },
    /// A confirm continuation was cancelled through its handle.
    ConfirmCancelled { id: NotificationId },
    /// The dispatcher was torn down.
    Unmounted {
        cleared: usize,
        cancelled_tasks: usize,
    },
}

/// A diagnostic event with its wall-clock timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Warnings and errors are the events worth surfacing in a report.
    #[must_use]
    pub fn is_problem(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticEventKind::Dispatched {
                kind: Kind::Warning | Kind::Error,
                ..
            }
        )
    }
}
