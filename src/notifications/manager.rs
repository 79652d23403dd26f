// SPDX-License-Identifier: MPL-2.0
//! Active notification set.
//!
//! The `Manager` owns the ordered set of live notifications. At most
//! `max_visible` of them are shown; the rest wait in a queue and are promoted
//! as visible ones are dismissed. Visible notifications followed by queued
//! ones are always in insertion order. Timers are not handled here; see
//! [`super::scheduler`].

use super::notification::{Notification, NotificationId};
use crate::config::DEFAULT_MAX_VISIBLE;
use std::collections::VecDeque;

/// Where a pushed notification ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Visible,
    Queued,
}

/// Result of a successful dismissal.
#[derive(Debug, Clone)]
pub struct Dismissal {
    /// The notification that was removed.
    pub notification: Notification,
    /// Queued notifications that became visible as a consequence.
    pub promoted: Vec<NotificationId>,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible notifications (oldest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    max_visible: usize,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE)
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new(max_visible: usize) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            max_visible: max_visible.max(1),
        }
    }

    /// Appends a notification to the active set.
    ///
    /// If fewer than `max_visible` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, notification: Notification) -> Placement {
        if self.visible.len() < self.max_visible && self.queue.is_empty() {
            self.visible.push_back(notification);
            Placement::Visible
        } else {
            self.queue.push_back(notification);
            Placement::Queued
        }
    }

    /// Removes a notification by its ID.
    ///
    /// Returns `None` if the notification is not (or no longer) active.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Dismissal> {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            let notification = self.visible.remove(pos)?;
            let promoted = self.promote_from_queue();
            return Some(Dismissal {
                notification,
                promoted,
            });
        }

        let pos = self.queue.iter().position(|n| n.id() == id)?;
        let notification = self.queue.remove(pos)?;
        Some(Dismissal {
            notification,
            promoted: Vec::new(),
        })
    }

    /// Looks up an active notification.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.iter().find(|n| n.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.visible
            .iter_mut()
            .chain(self.queue.iter_mut())
            .find(|n| n.id() == id)
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns every active notification, visible first, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().chain(self.queue.iter())
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len() + self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued), returning them in order.
    pub fn clear(&mut self) -> Vec<Notification> {
        let mut drained: Vec<Notification> = self.visible.drain(..).collect();
        drained.extend(self.queue.drain(..));
        drained
    }

    /// Promotes notifications from the queue to visible while there's space.
    fn promote_from_queue(&mut self) -> Vec<NotificationId> {
        let mut promoted = Vec::new();
        while self.visible.len() < self.max_visible {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            promoted.push(notification.id());
            self.visible.push_back(notification);
        }
        promoted
    }
}
