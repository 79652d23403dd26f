// SPDX-License-Identifier: MPL-2.0
//! Cancellable delayed tasks.
//!
//! Every auto-dismiss timer and confirm continuation is a tokio task spawned
//! on the runtime handle supplied at mount. The scheduler keeps the abort
//! handle of each live task under a [`TaskKey`] so single tasks can be
//! cancelled and teardown can cancel everything at once.

use super::notification::NotificationId;
use std::collections::HashMap;
use std::future::Future;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Identifies a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Removes the notification when its display time is over.
    AutoDismiss(NotificationId),
    /// Runs a confirm continuation. Sequence numbers are per scheduler.
    Confirm(u64),
}

pub struct Scheduler {
    runtime: Handle,
    entries: HashMap<TaskKey, AbortHandle>,
    next_confirm: u64,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.entries.len())
            .field("next_confirm", &self.next_confirm)
            .finish()
    }
}

impl Scheduler {
    #[must_use]
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            entries: HashMap::new(),
            next_confirm: 0,
        }
    }

    /// Reserves a fresh key for a confirm continuation.
    pub fn next_confirm_key(&mut self) -> TaskKey {
        let key = TaskKey::Confirm(self.next_confirm);
        self.next_confirm += 1;
        key
    }

    /// Runs `task` once `deadline` is reached.
    ///
    /// A task already scheduled under the same key is aborted first. The task
    /// itself must call [`Scheduler::complete`] when it fires so the entry is
    /// released; a `false` return there means it was cancelled meanwhile.
    pub fn schedule<F>(&mut self, key: TaskKey, deadline: Instant, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(previous) = self.entries.remove(&key) {
            previous.abort();
        }
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task.await;
        });
        self.entries.insert(key, handle.abort_handle());
    }

    /// Aborts a pending task. Returns `false` if nothing was pending under `key`.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        match self.entries.remove(&key) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Releases the entry of a task that has fired.
    ///
    /// Returns `false` if the task was cancelled after its timer elapsed, in
    /// which case it must not perform its work.
    pub fn complete(&mut self, key: TaskKey) -> bool {
        self.entries.remove(&key).is_some()
    }

    /// Aborts every pending task and returns how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        for (_, handle) in self.entries.drain() {
            handle.abort();
        }
        count
    }

    #[must_use]
    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.entries.contains_key(&key)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
