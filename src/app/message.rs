// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo shell.

use crate::notifications;
use std::path::PathBuf;

/// Call sites the demo exposes as buttons, one per dispatch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Success,
    Error,
    Warning,
    Info,
    Alert,
    Confirm,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Success,
        Action::Error,
        Action::Warning,
        Action::Info,
        Action::Alert,
        Action::Confirm,
    ];

    /// Fluent key of the button label.
    pub fn label_key(self) -> &'static str {
        match self {
            Action::Success => "demo-button-success",
            Action::Error => "demo-button-error",
            Action::Warning => "demo-button-warning",
            Action::Info => "demo-button-info",
            Action::Alert => "demo-button-alert",
            Action::Confirm => "demo-button-confirm",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Trigger(Action),
    DismissAll,
    Notification(notifications::Message),
    /// The dispatcher's active set changed; carries its revision.
    ActiveSetChanged(u64),
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale identifier, e.g. `en-US`.
    pub lang: Option<String>,
    /// Settings file to use instead of the default location.
    pub config_path: Option<PathBuf>,
}
