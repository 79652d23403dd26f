// SPDX-License-Identifier: MPL-2.0
//! `svj_notify` is the notification layer of the association management
//! front end, built with the Iced GUI framework.
//!
//! Call sites report outcomes through a [`notifications::Dispatcher`]
//! instead of blocking dialogs. The dispatcher owns the active notification
//! set, expires entries on cancellable timers and exposes alert/confirm
//! shims for code migrating away from `alert()` and `confirm()`.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod ui;
