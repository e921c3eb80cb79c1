// SPDX-License-Identifier: MPL-2.0
//! Cancellable expiry timers.
//!
//! Each live toast on a mounted queue owns a [`TimerHandle`]. The timer
//! runs as a tokio task that sleeps for the toast's duration and then
//! posts the toast's id back to the queue over a channel. The queue
//! applies the removal on its own thread when it drains the channel, so
//! the timer never touches the collection directly.
//!
//! Dropping or cancelling the handle aborts the task, which keeps a
//! dismissed toast from leaving a sleeping task behind.

use super::record::ToastId;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Handle to a pending expiry timer. Aborts the timer when dropped.
#[derive(Debug, Default)]
pub struct TimerHandle {
    abort: Option<AbortHandle>,
}

impl TimerHandle {
    /// A handle with no timer behind it.
    pub(crate) fn inert() -> Self {
        Self::default()
    }

    /// Cancels the timer. Calling it again is a no-op.
    pub fn cancel(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
    }

    /// Whether the timer is still pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.abort.as_ref().is_some_and(|abort| !abort.is_finished())
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Schedules expiry timers and collects the ids they deliver.
#[derive(Debug)]
pub(crate) struct ExpiryTimers {
    sender: mpsc::UnboundedSender<ToastId>,
    receiver: mpsc::UnboundedReceiver<ToastId>,
}

impl ExpiryTimers {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Starts a timer that reports `id` after `duration`.
    ///
    /// Requires a tokio runtime on the current thread. Without one the
    /// toast simply does not expire on its own and must be dismissed.
    pub(crate) fn schedule(&self, id: ToastId, duration: Duration) -> TimerHandle {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::warn!(%id, error = %err, "no async runtime, toast will not auto-expire");
                return TimerHandle::inert();
            }
        };

        let sender = self.sender.clone();
        let task = runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            // The receiver lives as long as the queue; a send error only
            // means the queue is gone.
            let _ = sender.send(id);
        });

        TimerHandle {
            abort: Some(task.abort_handle()),
        }
    }

    /// Returns every id delivered so far without waiting.
    pub(crate) fn drain(&mut self) -> Vec<ToastId> {
        let mut expired = Vec::new();
        while let Ok(id) = self.receiver.try_recv() {
            expired.push(id);
        }
        expired
    }

    /// Waits for the next delivered id.
    pub(crate) async fn recv(&mut self) -> Option<ToastId> {
        self.receiver.recv().await
    }
}
