// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo shell.

use super::Message;
use iced::futures::SinkExt;
use iced::{event, stream, Subscription};
use tokio::sync::watch;

/// Identifies the active-set subscription so iced keeps one stream alive
/// across `subscription()` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ActiveSetId;

/// Carries the revision receiver into `Subscription::run_with`; only the
/// `ActiveSetId` participates in hashing, so the identity is unchanged.
struct ActiveSetData(ActiveSetId, watch::Receiver<u64>);

impl std::hash::Hash for ActiveSetData {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Routes window close requests so the dispatcher can be unmounted first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Forwards every change of the dispatcher's active set to the update loop.
///
/// Timers fire on the dispatcher's own runtime; the revision channel is how
/// the overlay learns about expirations and continuation dispatches.
pub fn create_active_set_subscription(
    revisions: watch::Receiver<u64>,
) -> Subscription<Message> {
    Subscription::run_with(ActiveSetData(ActiveSetId, revisions), |data| {
        let revisions = data.1.clone();
        stream::channel(16, move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
            let mut revisions = revisions;
            while revisions.changed().await.is_ok() {
                let revision = *revisions.borrow_and_update();
                if output
                    .send(Message::ActiveSetChanged(revision))
                    .await
                    .is_err()
                {
                    break;
                }
            }
        })
    })
}
