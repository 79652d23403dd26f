// SPDX-License-Identifier: MPL-2.0
//! The notification dispatcher.
//!
//! A [`Dispatcher`] is a cheap, cloneable handle to one active notification
//! set. Call sites report outcomes through the semantic operations
//! (`success`, `error`, `warning`, `info`) or through the dialog
//! replacements `alert` and `confirm`, none of which block or fail.
//!
//! The dispatcher is mounted explicitly with [`Dispatcher::builder`] on a
//! tokio runtime handle and torn down with [`Dispatcher::unmount`] (or by
//! dropping the last handle), which cancels every timer and pending
//! confirm continuation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::Instant;

use super::manager::{Manager, Placement};
use super::notification::{Kind, Notification, NotificationId};
use super::scheduler::{Scheduler, TaskKey};
use crate::config::DispatchSettings;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::i18n::fluent::I18n;

/// Title of notifications raised through [`Dispatcher::alert`].
pub const ALERT_TITLE: &str = "Oznámení";
/// Title of notifications raised through [`Dispatcher::confirm`].
pub const CONFIRM_TITLE: &str = "Potvrzení";

/// Fixed titles used by `alert` and `confirm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Titles {
    pub alert: String,
    pub confirm: String,
}

impl Default for Titles {
    fn default() -> Self {
        Self {
            alert: ALERT_TITLE.to_string(),
            confirm: CONFIRM_TITLE.to_string(),
        }
    }
}

impl Titles {
    /// Titles in the current locale of `i18n`.
    #[must_use]
    pub fn localized(i18n: &I18n) -> Self {
        Self {
            alert: i18n.tr("notification-alert-title"),
            confirm: i18n.tr("notification-confirm-title"),
        }
    }
}

/// Why a notification left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// Dismissed by the user or by code.
    Manual,
    /// Its auto-dismiss timer elapsed.
    Expired,
    /// The dispatcher was unmounted.
    Teardown,
}

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

struct State {
    manager: Manager,
    scheduler: Scheduler,
    mounted: bool,
}

struct Inner {
    state: Mutex<State>,
    settings: DispatchSettings,
    titles: Titles,
    revision: watch::Sender<u64>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl std::fmt::Debug for Inner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inner")
            .field("settings", &self.settings)
            .field("titles", &self.titles)
            .finish_non_exhaustive()
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, State> {
        // Every operation leaves the state consistent before it can panic.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, kind: DiagnosticEventKind) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.record(kind);
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision = revision.wrapping_add(1));
    }

    /// Starts the auto-dismiss timer of a notification that just became visible.
    fn arm(self: &Arc<Self>, state: &mut State, id: NotificationId) {
        let Some(notification) = state.manager.get_mut(id) else {
            return;
        };
        let Some(duration) = self.settings.auto_dismiss(notification.kind()) else {
            return;
        };
        let deadline = notification.arm(Instant::now(), duration);
        let weak = Arc::downgrade(self);
        state
            .scheduler
            .schedule(TaskKey::AutoDismiss(id), deadline, async move {
                if let Some(inner) = weak.upgrade() {
                    inner.remove(id, DismissReason::Expired);
                }
            });
    }

    fn push(self: &Arc<Self>, mut notification: Notification) -> NotificationId {
        let kind = notification.kind();

        let (id, placement) = {
            let mut state = self.lock();
            // Ids are drawn under the lock so id order matches display order.
            let id = NotificationId::new();
            notification.stamp(id, Instant::now());
            if !state.mounted {
                tracing::warn!(%id, %kind, title = notification.title(), "dispatch after unmount ignored");
                return id;
            }
            let placement = state.manager.push(notification);
            if placement == Placement::Visible {
                self.arm(&mut state, id);
            }
            (id, placement)
        };

        let queued = placement == Placement::Queued;
        tracing::debug!(%id, %kind, queued, "notification dispatched");
        self.record(DiagnosticEventKind::Dispatched { id, kind, queued });
        self.bump();
        id
    }

    fn remove(self: &Arc<Self>, id: NotificationId, reason: DismissReason) -> bool {
        let dismissal = {
            let mut state = self.lock();
            let timer = TaskKey::AutoDismiss(id);
            if reason == DismissReason::Expired {
                if !state.scheduler.complete(timer) {
                    return false;
                }
            } else {
                state.scheduler.cancel(timer);
            }

            let Some(dismissal) = state.manager.dismiss(id) else {
                return false;
            };
            for promoted in &dismissal.promoted {
                self.arm(&mut state, *promoted);
            }
            dismissal
        };

        let kind = dismissal.notification.kind();
        tracing::debug!(%id, %kind, ?reason, "notification dismissed");
        self.record(DiagnosticEventKind::Dismissed { id, kind, reason });
        for promoted in dismissal.promoted {
            self.record(DiagnosticEventKind::Promoted { id: promoted });
        }
        self.bump();
        true
    }
}

/// Builder returned by [`Dispatcher::builder`].
pub struct DispatcherBuilder {
    runtime: Handle,
    settings: DispatchSettings,
    titles: Titles,
    diagnostics: Option<DiagnosticsHandle>,
}

impl DispatcherBuilder {
    /// Uses resolved settings instead of the defaults.
    #[must_use]
    pub fn settings(mut self, settings: DispatchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Overrides the "Oznámení" and "Potvrzení" titles, e.g. with
    /// [`Titles::localized`].
    #[must_use]
    pub fn titles(mut self, titles: Titles) -> Self {
        self.titles = titles;
        self
    }

    /// Reports lifecycle events to a diagnostics collector.
    #[must_use]
    pub fn diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Creates the dispatcher, ready to accept notifications.
    #[must_use]
    pub fn mount(self) -> Dispatcher {
        let (revision, _) = watch::channel(0);
        tracing::debug!(
            max_visible = self.settings.max_visible,
            confirm_delay = ?self.settings.confirm_delay,
            "notification dispatcher mounted"
        );
        Dispatcher {
            inner: Arc::new(Inner {
                state: Mutex::new(State {
                    manager: Manager::new(self.settings.max_visible),
                    scheduler: Scheduler::new(self.runtime),
                    mounted: true,
                }),
                settings: self.settings,
                titles: self.titles,
                revision,
                diagnostics: self.diagnostics,
            }),
        }
    }
}

/// Handle to a confirm continuation scheduled by [`Dispatcher::confirm_then`].
///
/// Dropping the handle does not cancel the continuation.
#[derive(Debug)]
pub struct PendingConfirm {
    id: NotificationId,
    key: Option<TaskKey>,
    inner: Weak<Inner>,
}

impl PendingConfirm {
    /// The warning notification shown for this confirm.
    #[must_use]
    pub fn notification_id(&self) -> NotificationId {
        self.id
    }

    /// Returns true while the continuation has neither run nor been cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        let (Some(key), Some(inner)) = (self.key, self.inner.upgrade()) else {
            return false;
        };
        let pending = inner.lock().scheduler.is_pending(key);
        pending
    }

    /// Prevents the continuation from running.
    ///
    /// Returns `false` if it already ran, was already cancelled, or the
    /// dispatcher is gone. The notification itself stays on screen.
    pub fn cancel(&self) -> bool {
        let (Some(key), Some(inner)) = (self.key, self.inner.upgrade()) else {
            return false;
        };
        let cancelled = inner.lock().scheduler.cancel(key);
        if cancelled {
            tracing::debug!(id = %self.id, "confirm continuation cancelled");
            inner.record(DiagnosticEventKind::ConfirmCancelled { id: self.id });
        }
        cancelled
    }
}

/// Owns the active notification set and its lifecycle.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    inner: Arc<Inner>,
}

impl Dispatcher {
    /// Starts configuring a dispatcher whose timers run on `runtime`.
    #[must_use]
    pub fn builder(runtime: Handle) -> DispatcherBuilder {
        DispatcherBuilder {
            runtime,
            settings: DispatchSettings::default(),
            titles: Titles::default(),
            diagnostics: None,
        }
    }

    /// Adds a prepared notification to the active set.
    ///
    /// The notification gets a fresh id and creation time when it joins the
    /// set; use the returned id, not the one it was built with.
    pub fn notify(&self, notification: Notification) -> NotificationId {
        self.inner.push(notification)
    }

    fn dispatch(&self, kind: Kind, title: String, description: Option<&str>) -> NotificationId {
        let mut notification = Notification::new(kind, title);
        if let Some(description) = description {
            notification = notification.with_description(description);
        }
        self.notify(notification)
    }

    pub fn success(&self, title: impl Into<String>, description: Option<&str>) -> NotificationId {
        self.dispatch(Kind::Success, title.into(), description)
    }

    pub fn error(&self, title: impl Into<String>, description: Option<&str>) -> NotificationId {
        self.dispatch(Kind::Error, title.into(), description)
    }

    pub fn warning(&self, title: impl Into<String>, description: Option<&str>) -> NotificationId {
        self.dispatch(Kind::Warning, title.into(), description)
    }

    pub fn info(&self, title: impl Into<String>, description: Option<&str>) -> NotificationId {
        self.dispatch(Kind::Info, title.into(), description)
    }

    /// Non-blocking replacement for a browser `alert()`: an info notification
    /// titled "Oznámení" carrying `message`.
    pub fn alert(&self, message: &str) -> NotificationId {
        self.info(self.inner.titles.alert.clone(), Some(message))
    }

    /// Shows a warning titled "Potvrzení" carrying `message`. Nothing is scheduled.
    pub fn confirm(&self, message: &str) -> NotificationId {
        self.warning(self.inner.titles.confirm.clone(), Some(message))
    }

    /// Shows the confirm warning and runs `on_confirm` once the confirm delay
    /// has passed.
    ///
    /// The continuation always runs: the user cannot veto it, and dismissing
    /// the notification does not stop it. Only [`PendingConfirm::cancel`] or
    /// tearing the dispatcher down does.
    pub fn confirm_then<F>(&self, message: &str, on_confirm: F) -> PendingConfirm
    where
        F: FnOnce() + Send + 'static,
    {
        let id = self.confirm(message);
        let mut state = self.inner.lock();
        if !state.mounted {
            return PendingConfirm {
                id,
                key: None,
                inner: Weak::new(),
            };
        }

        let key = state.scheduler.next_confirm_key();
        let deadline = Instant::now() + self.inner.settings.confirm_delay;
        let weak = Arc::downgrade(&self.inner);
        state.scheduler.schedule(key, deadline, async move {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.lock().scheduler.complete(key) {
                return;
            }
            tracing::debug!(%id, "running confirm continuation");
            inner.record(DiagnosticEventKind::ConfirmFired { id });
            on_confirm();
        });

        PendingConfirm {
            id,
            key: Some(key),
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Removes a notification and cancels its timer.
    ///
    /// Returns `false` if it was already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.inner.remove(id, DismissReason::Manual)
    }

    /// Dismisses every active notification. Confirm continuations keep running.
    pub fn dismiss_all(&self) -> usize {
        let drained = {
            let mut state = self.inner.lock();
            let drained = state.manager.clear();
            for notification in &drained {
                state
                    .scheduler
                    .cancel(TaskKey::AutoDismiss(notification.id()));
            }
            drained
        };

        for notification in &drained {
            self.inner.record(DiagnosticEventKind::Dismissed {
                id: notification.id(),
                kind: notification.kind(),
                reason: DismissReason::Manual,
            });
        }
        if !drained.is_empty() {
            tracing::debug!(count = drained.len(), "all notifications dismissed");
            self.inner.bump();
        }
        drained.len()
    }

    /// Handles a message from the toast overlay.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Tears the dispatcher down: cancels every scheduled task, including
    /// pending confirm continuations, and clears the active set.
    ///
    /// Later dispatches are ignored. Calling it twice is harmless.
    pub fn unmount(&self) {
        let (drained, cancelled_tasks) = {
            let mut state = self.inner.lock();
            if !state.mounted {
                return;
            }
            state.mounted = false;
            let cancelled = state.scheduler.cancel_all();
            (state.manager.clear(), cancelled)
        };

        tracing::info!(
            cleared = drained.len(),
            cancelled_tasks,
            "notification dispatcher unmounted"
        );
        for notification in &drained {
            self.inner.record(DiagnosticEventKind::Dismissed {
                id: notification.id(),
                kind: notification.kind(),
                reason: DismissReason::Teardown,
            });
        }
        self.inner.record(DiagnosticEventKind::Unmounted {
            cleared: drained.len(),
            cancelled_tasks,
        });
        self.inner.bump();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.lock().mounted
    }

    /// Snapshot of the active set: visible notifications first, then the
    /// queue, in dispatch order.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        self.inner.lock().manager.iter().cloned().collect()
    }

    /// Snapshot of the notifications currently on screen.
    #[must_use]
    pub fn visible(&self) -> Vec<Notification> {
        self.inner.lock().manager.visible().cloned().collect()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.inner.lock().manager.get(id).cloned()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.inner.lock().manager.queued_count()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.inner.lock().manager.is_empty()
    }

    /// Number of timers and confirm continuations not yet fired.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.inner.lock().scheduler.pending()
    }

    #[must_use]
    pub fn settings(&self) -> &DispatchSettings {
        &self.inner.settings
    }

    #[must_use]
    pub fn titles(&self) -> &Titles {
        &self.inner.titles
    }

    /// Subscribes to changes of the active set.
    ///
    /// The value is a revision counter bumped on every mutation; rendering
    /// surfaces re-read [`Dispatcher::visible`] when it changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn mount() -> Dispatcher {
        Dispatcher::builder(Handle::current()).mount()
    }

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn each_kind_adds_exactly_one_notification() {
        let dispatcher = mount();
        for kind in Kind::ALL {
            let before = dispatcher.active().len();
            let title = format!("{kind} title");
            let id = match kind {
                Kind::Success => dispatcher.success(title, Some("popis")),
                Kind::Error => dispatcher.error(title, Some("popis")),
                Kind::Warning => dispatcher.warning(title, Some("popis")),
                Kind::Info => dispatcher.info(title, Some("popis")),
            };
            let active = dispatcher.active();
            assert_eq!(active.len(), before + 1);

            let added = dispatcher.get(id).expect("dispatched notification is active");
            assert_eq!(added.kind(), kind);
            assert_eq!(added.title(), format!("{kind} title"));
            assert_eq!(added.description(), Some("popis"));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn description_can_be_omitted() {
        let dispatcher = mount();
        let id = dispatcher.success("Uloženo", None);
        assert_eq!(dispatcher.get(id).and_then(|n| n.description().map(String::from)), None);
    }

    #[tokio::test(start_paused = true)]
    async fn alert_is_info_with_fixed_title() {
        let dispatcher = mount();
        let alert = dispatcher.alert("hello");
        let info = dispatcher.info("Oznámení", Some("hello"));

        let alert = dispatcher.get(alert).expect("alert active");
        let info = dispatcher.get(info).expect("info active");
        assert!(alert.same_content(&info));
        assert_eq!(alert.kind(), Kind::Info);
    }

    #[tokio::test(start_paused = true)]
    async fn confirm_without_continuation_schedules_nothing_extra() {
        let dispatcher = mount();
        let id = dispatcher.confirm("Smazat dokument?");

        let notification = dispatcher.get(id).expect("confirm active");
        assert_eq!(notification.kind(), Kind::Warning);
        assert_eq!(notification.title(), CONFIRM_TITLE);
        assert_eq!(notification.description(), Some("Smazat dokument?"));
        // Only the warning's own auto-dismiss timer.
        assert_eq!(dispatcher.pending_tasks(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn confirm_continuation_runs_after_exact_delay() {
        let dispatcher = mount();
        let (tx, rx) = tokio::sync::oneshot::channel();
        let start = Instant::now();

        let pending = dispatcher.confirm_then("Odeslat?", move || {
            let _ = tx.send(Instant::now());
        });
        assert!(dispatcher.get(pending.notification_id()).is_some());
        assert!(pending.is_pending());

        let fired_at = rx.await.expect("continuation should run");
        assert_eq!(fired_at - start, Duration::from_millis(2_000));
        assert!(!pending.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn confirm_continuation_runs_even_after_dismissal() {
        let dispatcher = mount();
        let (count, on_confirm) = counter();

        let pending = dispatcher.confirm_then("Pokračovat?", on_confirm);
        assert!(dispatcher.dismiss(pending.notification_id()));

        tokio::time::sleep(Duration::from_millis(2_001)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_confirm_never_runs() {
        let dispatcher = mount();
        let (count, on_confirm) = counter();

        let pending = dispatcher.confirm_then("Pokračovat?", on_confirm);
        assert!(pending.cancel());
        assert!(!pending.cancel());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn continuation_may_dispatch_again() {
        let dispatcher = mount();
        let (tx, rx) = tokio::sync::oneshot::channel();
        let inner = dispatcher.clone();

        dispatcher.confirm_then("Uložit změny?", move || {
            let _ = tx.send(inner.success("Změny uloženy", None));
        });

        let id = rx.await.expect("continuation should run");
        assert_eq!(dispatcher.get(id).map(|n| n.kind()), Some(Kind::Success));
    }

    #[tokio::test(start_paused = true)]
    async fn success_auto_dismisses_after_its_duration() {
        let dispatcher = mount();
        let id = dispatcher.success("Uloženo", None);
        let dismiss_at = dispatcher.get(id).and_then(|n| n.dismiss_at());
        assert!(dismiss_at.is_some());

        tokio::time::sleep(Duration::from_millis(2_999)).await;
        assert!(dispatcher.get(id).is_some());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(dispatcher.get(id).is_none());
        assert_eq!(dispatcher.pending_tasks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn errors_stay_until_dismissed() {
        let dispatcher = mount();
        let id = dispatcher.error("Chyba serveru", Some("503"));
        assert!(dispatcher.get(id).and_then(|n| n.dismiss_at()).is_none());

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(dispatcher.get(id).is_some());
        assert!(dispatcher.dismiss(id));
    }

    #[tokio::test(start_paused = true)]
    async fn dismissing_twice_is_a_no_op() {
        let dispatcher = mount();
        let mut revisions = dispatcher.subscribe();
        let id = dispatcher.info("Info", None);
        let _ = revisions.borrow_and_update();

        assert!(dispatcher.dismiss(id));
        assert!(revisions.has_changed().expect("sender alive"));
        let _ = revisions.borrow_and_update();

        assert!(!dispatcher.dismiss(id));
        assert!(!revisions.has_changed().expect("sender alive"));
    }

    #[tokio::test(start_paused = true)]
    async fn expired_notification_cannot_be_dismissed_again() {
        let dispatcher = mount();
        let id = dispatcher.info("Info", None);
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(!dispatcher.dismiss(id));
    }

    #[tokio::test(start_paused = true)]
    async fn active_set_keeps_dispatch_order() {
        let dispatcher = mount();
        let ids = vec![
            dispatcher.error("1", None),
            dispatcher.info("2", None),
            dispatcher.warning("3", None),
            dispatcher.success("4", None),
            dispatcher.alert("5"),
        ];
        let active: Vec<_> = dispatcher.active().iter().map(Notification::id).collect();
        assert_eq!(active, ids);
    }

    #[tokio::test(start_paused = true)]
    async fn prepared_notifications_get_ids_in_display_order() {
        let dispatcher = mount();
        let a = Notification::info("a");
        let b = Notification::info("b").with_description("prepared later");
        assert!(a.id() < b.id());

        let b_id = dispatcher.notify(b);
        let a_id = dispatcher.notify(a);
        assert!(b_id < a_id);

        let active = dispatcher.active();
        let titles: Vec<_> = active.iter().map(Notification::title).collect();
        assert_eq!(titles, ["b", "a"]);
        let ids: Vec<_> = active.iter().map(Notification::id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ids, [b_id, a_id]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn manual_dismiss_at_deadline_removes_exactly_once() {
        use crate::diagnostics::DiagnosticsCollector;

        let mut collector = DiagnosticsCollector::default();
        let dispatcher = Dispatcher::builder(Handle::current())
            .settings(DispatchSettings {
                info_timeout: Some(Duration::from_millis(20)),
                ..DispatchSettings::default()
            })
            .diagnostics(collector.handle())
            .mount();

        let mut ids = Vec::new();
        for _ in 0..20 {
            let id = dispatcher.info("Oznámení", None);
            let deadline = dispatcher
                .get(id)
                .and_then(|n| n.dismiss_at())
                .expect("info is armed");
            tokio::time::sleep_until(deadline).await;
            dispatcher.dismiss(id);
            ids.push(id);
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!dispatcher.has_notifications());
        assert_eq!(dispatcher.pending_tasks(), 0);

        collector.process_pending();
        for id in ids {
            let dismissals = collector
                .events()
                .filter(|event| {
                    matches!(
                        event.kind,
                        DiagnosticEventKind::Dismissed { id: dismissed, .. } if dismissed == id
                    )
                })
                .count();
            assert_eq!(dismissals, 1, "{id} dismissed {dismissals} times");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn overflow_is_queued_and_promoted_with_fresh_timer() {
        let settings = DispatchSettings {
            max_visible: 1,
            ..DispatchSettings::default()
        };
        let dispatcher = Dispatcher::builder(Handle::current())
            .settings(settings)
            .mount();

        let first = dispatcher.error("first", None);
        let second = dispatcher.success("second", None);
        assert_eq!(dispatcher.queued_count(), 1);
        assert!(dispatcher.get(second).and_then(|n| n.dismiss_at()).is_none());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(dispatcher.get(second).is_some(), "queued timer must not run");

        assert!(dispatcher.dismiss(first));
        assert_eq!(dispatcher.visible().len(), 1);
        assert!(dispatcher.get(second).and_then(|n| n.dismiss_at()).is_some());

        tokio::time::sleep(Duration::from_millis(3_001)).await;
        assert!(dispatcher.get(second).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_pending_work() {
        let dispatcher = mount();
        let (count, on_confirm) = counter();

        dispatcher.success("Uloženo", None);
        let pending = dispatcher.confirm_then("Smazat?", on_confirm);
        assert_eq!(dispatcher.pending_tasks(), 3);

        dispatcher.unmount();
        assert!(!dispatcher.is_mounted());
        assert!(dispatcher.active().is_empty());
        assert_eq!(dispatcher.pending_tasks(), 0);
        assert!(!pending.is_pending());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        dispatcher.info("ignored", None);
        assert!(dispatcher.active().is_empty());
        dispatcher.unmount();
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_last_handle_cancels_continuations() {
        let (count, on_confirm) = counter();
        {
            let dispatcher = mount();
            dispatcher.confirm_then("Smazat?", on_confirm);
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_all_keeps_confirm_continuations() {
        let dispatcher = mount();
        let (count, on_confirm) = counter();
        dispatcher.info("a", None);
        dispatcher.confirm_then("b", on_confirm);

        assert_eq!(dispatcher.dismiss_all(), 2);
        assert!(!dispatcher.has_notifications());
        assert_eq!(dispatcher.pending_tasks(), 1);

        tokio::time::sleep(Duration::from_millis(2_001)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn handle_message_dismisses() {
        let dispatcher = mount();
        let id = dispatcher.warning("w", None);
        dispatcher.handle_message(&Message::Dismiss(id));
        assert!(dispatcher.get(id).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn custom_titles_are_used() {
        let dispatcher = Dispatcher::builder(Handle::current())
            .titles(Titles {
                alert: "Notice".into(),
                confirm: "Confirmation".into(),
            })
            .mount();
        let alert = dispatcher.alert("x");
        let confirm = dispatcher.confirm("y");
        assert_eq!(dispatcher.get(alert).map(|n| n.title().to_string()).as_deref(), Some("Notice"));
        assert_eq!(
            dispatcher.get(confirm).map(|n| n.title().to_string()).as_deref(),
            Some("Confirmation")
        );
    }
}
