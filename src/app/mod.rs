// SPDX-License-Identifier: MPL-2.0
//! Demo shell wiring association-style call sites to the notification
//! dispatcher.
//!
//! Each button stands in for a page action (saving the notice board,
//! uploading a document, deleting one behind a confirm) and reports its
//! outcome through the [`Dispatcher`]. Toasts are layered over the page with
//! a `Stack`; a subscription to the dispatcher's revision channel keeps the
//! overlay in sync with timers that fire on the dispatcher's runtime.

mod message;
mod subscription;

pub use message::{Action, Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::notifications::{Dispatcher, Notification, Titles};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toast::Toast;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Reason shown in the simulated upload failure.
const DEMO_ERROR_REASON: &str = "HTTP 503";

/// Root application state.
pub struct App {
    i18n: I18n,
    dispatcher: Dispatcher,
    diagnostics: DiagnosticsCollector,
    /// Snapshot of the visible prefix, refreshed after every update.
    visible: Vec<Notification>,
    confirmed: Arc<AtomicU32>,
    /// Runtime driving dispatcher timers; `None` only after drop started.
    runtime: Option<Runtime>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("dispatcher", &self.dispatcher)
            .field("visible", &self.visible.len())
            .field("confirmed", &self.confirmed.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Builds the runtime that owns the dispatcher's scheduled tasks.
pub fn build_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("notification-timers")
        .enable_time()
        .build()
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let runtime = build_runtime().map_err(|err| {
        tracing::error!(%err, "failed to start notification runtime");
        iced::Error::ExecutorCreationFailed(err)
    })?;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming them once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags, runtime)));
    let boot = move || {
        let (flags, runtime) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (App::new(flags, runtime), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match flags.config_path.as_deref() {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default settings");
        Config::default()
    })
}

impl App {
    /// Loads settings and translations, then mounts the dispatcher on `runtime`.
    pub fn new(flags: Flags, runtime: Runtime) -> Self {
        let config = load_config(&flags);
        let i18n = I18n::new(flags.lang, &config);
        let diagnostics = DiagnosticsCollector::default();

        let dispatcher = Dispatcher::builder(runtime.handle().clone())
            .settings(config.dispatch_settings())
            .titles(Titles::localized(&i18n))
            .diagnostics(diagnostics.handle())
            .mount();

        tracing::info!(locale = %i18n.current_locale(), "demo shell started");

        Self {
            i18n,
            dispatcher,
            diagnostics,
            visible: Vec::new(),
            confirmed: Arc::new(AtomicU32::new(0)),
            runtime: Some(runtime),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Dispatcher shared with the call sites.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Number of confirm continuations that have run.
    pub fn confirmed(&self) -> u32 {
        self.confirmed.load(Ordering::Relaxed)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Trigger(action) => {
                self.trigger(action);
                Task::none()
            }
            Message::DismissAll => {
                self.dispatcher.dismiss_all();
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.dispatcher.handle_message(&notification_message);
                Task::none()
            }
            Message::ActiveSetChanged(revision) => {
                tracing::trace!(revision, "active set changed");
                self.diagnostics.process_pending();
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.dispatcher.unmount();
                self.diagnostics.process_pending();
                let summary = self.diagnostics.summary();
                let problems = self
                    .diagnostics
                    .events()
                    .filter(|event| event.is_problem())
                    .count();
                tracing::info!(
                    dispatched = summary.dispatched,
                    expired = summary.expired,
                    confirms_fired = summary.confirms_fired,
                    problems,
                    evicted = self.diagnostics.evicted(),
                    "demo shell closing"
                );
                window::close(id)
            }
        };
        self.visible = self.dispatcher.visible();
        task
    }

    fn trigger(&self, action: Action) {
        let i18n = &self.i18n;
        match action {
            Action::Success => {
                self.dispatcher.success(
                    i18n.tr("demo-success-title"),
                    Some(i18n.tr("demo-success-description").as_str()),
                );
            }
            Action::Error => {
                let description = i18n.tr_with_args(
                    "demo-error-description",
                    &[("reason", DEMO_ERROR_REASON)],
                );
                self.dispatcher
                    .error(i18n.tr("demo-error-title"), Some(description.as_str()));
            }
            Action::Warning => {
                self.dispatcher.warning(
                    i18n.tr("demo-warning-title"),
                    Some(i18n.tr("demo-warning-description").as_str()),
                );
            }
            Action::Info => {
                self.dispatcher.info(
                    i18n.tr("demo-info-title"),
                    Some(i18n.tr("demo-info-description").as_str()),
                );
            }
            Action::Alert => {
                self.dispatcher.alert(&i18n.tr("demo-alert-message"));
            }
            Action::Confirm => {
                let dispatcher = self.dispatcher.clone();
                let confirmed = Arc::clone(&self.confirmed);
                let done_title = i18n.tr("demo-confirmed-title");
                // The deletion proceeds whether or not the toast is dismissed.
                self.dispatcher
                    .confirm_then(&i18n.tr("demo-confirm-message"), move || {
                        confirmed.fetch_add(1, Ordering::Relaxed);
                        dispatcher.success(done_title, None);
                    });
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let buttons = Action::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, action| {
                row.push(
                    button(Text::new(self.i18n.tr(action.label_key())).size(typography::BODY))
                        .on_press(Message::Trigger(*action)),
                )
            },
        );

        let dismiss_all = button(
            Text::new(self.i18n.tr("demo-button-dismiss-all")).size(typography::BODY),
        )
        .style(button::secondary)
        .on_press_maybe(
            self.dispatcher
                .has_notifications()
                .then_some(Message::DismissAll),
        );

        let active = self.dispatcher.active().len().to_string();
        let queued = self.dispatcher.queued_count().to_string();
        let confirmed = self.confirmed().to_string();
        let status = Text::new(self.i18n.tr_with_args(
            "demo-status",
            &[
                ("active", active.as_str()),
                ("queued", queued.as_str()),
                ("confirmed", confirmed.as_str()),
            ],
        ))
        .size(typography::BODY);

        let page = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(self.i18n.tr("demo-heading")).size(typography::TITLE_MD))
            .push(buttons)
            .push(dismiss_all)
            .push(status);

        let page = Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG);

        let overlay = Toast::view_overlay(&self.visible, &self.i18n).map(Message::Notification);

        Stack::new().push(page).push(overlay).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_active_set_subscription(self.dispatcher.subscribe()),
        ])
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.dispatcher.unmount();
        // The app may be dropped from inside iced's executor, where a
        // blocking shutdown would panic.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Kind, CONFIRM_TITLE};

    fn app() -> App {
        let flags = Flags {
            lang: Some("cs".into()),
            config_path: Some(std::path::PathBuf::from("/nonexistent/settings.toml")),
        };
        App::new(flags, build_runtime().expect("runtime"))
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let app = app();
        assert_eq!(app.dispatcher().settings().max_visible, config::DEFAULT_MAX_VISIBLE);
    }

    #[test]
    fn title_comes_from_translations() {
        let app = app();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn each_action_dispatches_one_notification() {
        let mut app = app();
        for action in Action::ALL {
            let _ = app.update(Message::Trigger(action));
        }

        let kinds: Vec<Kind> = app.dispatcher().active().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            [
                Kind::Success,
                Kind::Error,
                Kind::Warning,
                Kind::Info,
                Kind::Info,
                Kind::Warning,
            ]
        );
        assert_eq!(app.visible.len(), config::DEFAULT_MAX_VISIBLE);
    }

    #[test]
    fn confirm_uses_localized_title() {
        let mut app = app();
        let _ = app.update(Message::Trigger(Action::Confirm));

        assert_eq!(app.visible[0].title(), CONFIRM_TITLE);
        assert_eq!(app.dispatcher().pending_tasks(), 2);
        assert_eq!(app.confirmed(), 0);
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut app = app();
        let _ = app.update(Message::Trigger(Action::Error));
        let id = app.visible[0].id();

        let _ = app.update(Message::Notification(
            crate::notifications::Message::Dismiss(id),
        ));
        assert!(app.visible.is_empty());
        assert!(!app.dispatcher().has_notifications());
    }

    #[test]
    fn revision_change_refreshes_overlay() {
        let mut app = app();
        let mut revisions = app.dispatcher().subscribe();

        // Stands in for a dispatch made by a confirm continuation on the
        // timer runtime, outside `update`.
        let id = app.dispatcher().success("Dokument smazán", None);
        assert!(app.visible.is_empty());
        assert!(revisions.has_changed().expect("dispatcher alive"));

        let revision = *revisions.borrow_and_update();
        let _ = app.update(Message::ActiveSetChanged(revision));
        assert_eq!(app.visible.iter().map(Notification::id).collect::<Vec<_>>(), [id]);
    }

    #[test]
    fn dismiss_all_clears_overlay() {
        let mut app = app();
        let _ = app.update(Message::Trigger(Action::Success));
        let _ = app.update(Message::Trigger(Action::Info));
        let _ = app.update(Message::DismissAll);

        assert!(app.visible.is_empty());
    }
}
