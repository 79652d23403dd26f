// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing lifecycle events.
//!
//! Dispatchers hold a [`DiagnosticsHandle`] and report into a bounded
//! channel; the host drains it into a circular buffer with
//! [`DiagnosticsCollector::process_pending`] at its own pace. Warning and
//! error dispatches travel on a separate unbounded channel so they are never
//! lost to backpressure.

use tokio::sync::mpsc::{
    self, error::TrySendError, Receiver, Sender, UnboundedReceiver, UnboundedSender,
};

use super::{CircularBuffer, DiagnosticEvent, DiagnosticEventKind};
use crate::config::{DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, DIAGNOSTICS_CHANNEL_CAPACITY};
use crate::notifications::DismissReason;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
    problem_tx: UnboundedSender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records an event.
    ///
    /// This method is non-blocking. Routine events are dropped when the
    /// internal channel is full; warning and error dispatches are always
    /// forwarded. Everything is dropped once the collector is gone.
    pub fn record(&self, kind: DiagnosticEventKind) {
        let event = DiagnosticEvent::new(kind);
        if event.is_problem() {
            let _ = self.problem_tx.send(event);
            return;
        }
        match self.event_tx.try_send(event) {
            Ok(()) | Err(TrySendError::Closed(_)) => {}
            Err(TrySendError::Full(_)) => {
                tracing::trace!("diagnostics channel full, event dropped");
            }
        }
    }
}

/// Counts over the buffered events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticsSummary {
    pub dispatched: usize,
    pub queued: usize,
    pub dismissed_manually: usize,
    pub expired: usize,
    pub confirms_fired: usize,
    pub confirms_cancelled: usize,
}

/// Receives events from handles and keeps the most recent ones.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    problem_rx: UnboundedReceiver<DiagnosticEvent>,
    problem_tx: UnboundedSender<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = mpsc::channel(DIAGNOSTICS_CHANNEL_CAPACITY);
        let (problem_tx, problem_rx) = mpsc::unbounded_channel();
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            problem_rx,
            problem_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
            problem_tx: self.problem_tx.clone(),
        }
    }

    /// Moves every event waiting in the channels into the buffer, oldest
    /// first.
    ///
    /// Returns how many events were received.
    pub fn process_pending(&mut self) -> usize {
        let mut pending = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            pending.push(event);
        }
        while let Ok(event) = self.problem_rx.try_recv() {
            pending.push(event);
        }
        // Stable sort keeps send order for events with equal timestamps.
        pending.sort_by_key(|event| event.timestamp);

        let received = pending.len();
        for event in pending {
            self.buffer.push(event);
        }
        received
    }

    /// Buffered events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of buffered events that were overwritten by newer ones.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.buffer.evicted()
    }

    #[must_use]
    pub fn summary(&self) -> DiagnosticsSummary {
        self.buffer
            .iter()
            .fold(DiagnosticsSummary::default(), |mut summary, event| {
                match &event.kind {
                    DiagnosticEventKind::Dispatched { queued, .. } => {
                        summary.dispatched += 1;
                        if *queued {
                            summary.queued += 1;
                        }
                    }
                    DiagnosticEventKind::Dismissed { reason, .. } => match reason {
                        DismissReason::Manual => summary.dismissed_manually += 1,
                        DismissReason::Expired => summary.expired += 1,
                        DismissReason::Teardown => {}
                    },
                    DiagnosticEventKind::ConfirmFired { .. } => summary.confirms_fired += 1,
                    DiagnosticEventKind::ConfirmCancelled { .. } => {
                        summary.confirms_cancelled += 1;
                    }
                    DiagnosticEventKind::Promoted { .. } | DiagnosticEventKind::Unmounted { .. } => {}
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Kind, NotificationId};

    fn dispatched(kind: Kind, queued: bool) -> DiagnosticEventKind {
        DiagnosticEventKind::Dispatched {
            id: NotificationId::new(),
            kind,
            queued,
        }
    }

    #[test]
    fn handle_events_reach_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.record(dispatched(Kind::Info, false));
        handle.record(dispatched(Kind::Error, false));
        assert!(collector.is_empty());

        assert_eq!(collector.process_pending(), 2);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn buffer_keeps_only_most_recent_events() {
        let mut collector = DiagnosticsCollector::new(2);
        let handle = collector.handle();
        for _ in 0..5 {
            handle.record(dispatched(Kind::Success, false));
        }
        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn full_channel_drops_without_blocking() {
        let collector = DiagnosticsCollector::new(10);
        let handle = collector.handle();
        for _ in 0..(DIAGNOSTICS_CHANNEL_CAPACITY + 10) {
            handle.record(dispatched(Kind::Info, false));
        }
        drop(collector);
        handle.record(dispatched(Kind::Info, false));
    }

    #[test]
    fn problem_events_survive_a_full_channel() {
        let mut collector = DiagnosticsCollector::new(DIAGNOSTICS_CHANNEL_CAPACITY * 2);
        let handle = collector.handle();
        for _ in 0..DIAGNOSTICS_CHANNEL_CAPACITY {
            handle.record(dispatched(Kind::Info, false));
        }
        handle.record(dispatched(Kind::Success, false));
        handle.record(dispatched(Kind::Warning, false));
        handle.record(dispatched(Kind::Error, true));

        assert_eq!(collector.process_pending(), DIAGNOSTICS_CHANNEL_CAPACITY + 2);
        let problems: Vec<_> = collector.events().filter(|e| e.is_problem()).collect();
        assert_eq!(problems.len(), 2);
        assert!(collector
            .events()
            .zip(collector.events().skip(1))
            .all(|(a, b)| a.timestamp <= b.timestamp));
    }

    #[test]
    fn evictions_are_reported() {
        let mut collector = DiagnosticsCollector::new(3);
        let handle = collector.handle();
        for _ in 0..5 {
            handle.record(dispatched(Kind::Info, false));
        }
        collector.process_pending();
        assert_eq!(collector.len(), 3);
        assert_eq!(collector.evicted(), 2);
    }

    #[test]
    fn summary_counts_by_category() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let id = NotificationId::new();

        handle.record(dispatched(Kind::Success, false));
        handle.record(dispatched(Kind::Warning, true));
        handle.record(DiagnosticEventKind::Dismissed {
            id,
            kind: Kind::Success,
            reason: DismissReason::Expired,
        });
        handle.record(DiagnosticEventKind::Dismissed {
            id,
            kind: Kind::Warning,
            reason: DismissReason::Manual,
        });
        handle.record(DiagnosticEventKind::ConfirmFired { id });
        collector.process_pending();

        assert_eq!(
            collector.summary(),
            DiagnosticsSummary {
                dispatched: 2,
                queued: 1,
                dismissed_manually: 1,
                expired: 1,
                confirms_fired: 1,
                confirms_cancelled: 0,
            }
        );
    }
}
