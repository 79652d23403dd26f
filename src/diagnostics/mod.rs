// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification lifecycle activity.
//!
//! This module captures what the dispatcher did (dispatches, promotions,
//! dismissals, confirm continuations, teardown) and stores it in a
//! memory-bounded circular buffer for inspection.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped lifecycle event
//! - [`DiagnosticsHandle`]: Non-blocking sender held by dispatchers
//! - [`DiagnosticsCollector`]: Owner of the buffer, drained by the host

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, DiagnosticsSummary};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
