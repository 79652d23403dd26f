// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module replaces blocking browser-style dialogs with transient
//! notifications. Call sites report the outcome of an action (save
//! succeeded, backend call failed, ...) and move on; the dispatcher keeps
//! the active set, removes entries when their display time is over and lets
//! a rendering surface observe the result.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct and `Kind`
//! - [`manager`] - `Manager` holding the ordered active set and overflow queue
//! - [`scheduler`] - Cancellable auto-dismiss timers and confirm continuations
//! - [`dispatcher`] - `Dispatcher`, the API call sites use
//!
//! # Usage
//!
//! ```
//! use svj_notify::notifications::{Dispatcher, Kind};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let dispatcher = Dispatcher::builder(runtime.handle().clone()).mount();
//!
//! dispatcher.success("Uloženo", Some("Dokument byl nahrán."));
//! dispatcher.alert("Schůze výboru se přesouvá.");
//!
//! let kinds: Vec<Kind> = dispatcher.active().iter().map(|n| n.kind()).collect();
//! assert_eq!(kinds, [Kind::Success, Kind::Info]);
//!
//! dispatcher.unmount();
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s for success/info, 5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - `confirm` never blocks and cannot be vetoed by the user

pub mod dispatcher;
pub mod manager;
pub mod notification;
pub mod scheduler;

pub use dispatcher::{
    DismissReason, Dispatcher, DispatcherBuilder, Message, PendingConfirm, Titles, ALERT_TITLE,
    CONFIRM_TITLE,
};
pub use manager::{Dismissal, Manager, Placement};
pub use notification::{Kind, Notification, NotificationId};
