// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Toaster`] owns the bounded, ordered set of live toasts for one
//! stack position. It assigns ids, applies the insertion and eviction
//! policy of its anchor, and keeps one expiry timer per toast while it is
//! mounted.

use super::position::Position;
use super::record::{Toast, ToastContent, ToastId};
use super::timer::ExpiryTimers;
use crate::config::{ToasterConfig, DEFAULT_DURATION_MS, DEFAULT_MAX_TOASTS, MIN_MAX_TOASTS};
use std::collections::VecDeque;
use std::time::Duration;

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user closed a toast.
    Dismiss(ToastId),
    /// The user pressed a toast's action button.
    Action(ToastId),
    /// A toast's expiry timer fired.
    Expired(ToastId),
    /// Drain expiry events delivered since the last tick.
    Tick,
}

/// Bounded queue of live toasts.
#[derive(Debug)]
pub struct Toaster {
    /// Live toasts in stack order. Bottom anchors keep the newest first,
    /// top anchors keep the newest last.
    toasts: VecDeque<Toast>,
    position: Position,
    max_toasts: usize,
    default_duration: Duration,
    /// Timers only run while mounted.
    mounted: bool,
    timers: ExpiryTimers,
}

impl Default for Toaster {
    fn default() -> Self {
        Self {
            toasts: VecDeque::new(),
            position: Position::default(),
            max_toasts: DEFAULT_MAX_TOASTS,
            default_duration: Duration::from_millis(DEFAULT_DURATION_MS),
            mounted: false,
            timers: ExpiryTimers::new(),
        }
    }
}

impl Toaster {
    /// Creates an empty, unmounted toaster with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty toaster from loaded configuration.
    #[must_use]
    pub fn from_config(config: &ToasterConfig) -> Self {
        Self {
            position: config.position,
            max_toasts: config.max_toasts(),
            default_duration: config.default_duration(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_max_toasts(mut self, max_toasts: usize) -> Self {
        self.max_toasts = max_toasts.max(MIN_MAX_TOASTS);
        self
    }

    /// Adds a toast and returns its id.
    ///
    /// Never fails: missing fields are defaulted. If the stack is full the
    /// oldest toast is evicted.
    pub fn add(&mut self, content: impl Into<ToastContent>) -> ToastId {
        let mut toast = Toast::from_content(content.into(), self.default_duration);
        let id = toast.id();

        if self.mounted {
            toast.arm(self.timers.schedule(id, toast.duration()));
        }

        tracing::debug!(%id, variant = %toast.variant(), position = %self.position, "toast added");

        if self.position.prepends() {
            self.toasts.push_front(toast);
        } else {
            self.toasts.push_back(toast);
        }
        self.evict_overflow();

        id
    }

    /// Removes a toast by id and cancels its timer.
    ///
    /// Returns `true` if the toast was live. Removing an unknown or already
    /// removed id is a no-op.
    pub fn remove(&mut self, id: ToastId) -> bool {
        self.take(id).is_some()
    }

    /// Removes a toast the user closed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let removed = self.remove(id);
        if removed {
            tracing::debug!(%id, "toast dismissed");
        }
        removed
    }

    /// Removes a toast whose timer fired.
    pub fn expire(&mut self, id: ToastId) -> bool {
        let removed = self.remove(id);
        if removed {
            tracing::debug!(%id, "toast expired");
        }
        removed
    }

    /// Removes a toast through its action and hands back the callback.
    ///
    /// The caller runs the callback; this lets a shared owner release its
    /// borrow first. Returns `None`, leaving the toast untouched, when the
    /// toast is gone or has no action.
    pub fn take_action(&mut self, id: ToastId) -> Option<Box<dyn FnOnce()>> {
        let index = self.index_of(id)?;
        if !self.toasts[index].has_action() {
            return None;
        }

        let mut toast = self.toasts.remove(index)?;
        toast.disarm();
        tracing::debug!(%id, "toast action invoked");
        toast.take_action().map(super::record::Action::into_callback)
    }

    /// Runs a toast's action and removes the toast.
    ///
    /// Returns `true` if the callback ran. It runs at most once per toast.
    pub fn invoke_action(&mut self, id: ToastId) -> bool {
        match self.take_action(id) {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        if !self.toasts.is_empty() {
            tracing::debug!(count = self.toasts.len(), "toasts cleared");
        }
        self.toasts.clear();
    }

    /// Applies every expiry delivered so far and returns the ids removed.
    ///
    /// Ids of toasts that were already dismissed are skipped. An unmounted
    /// toaster applies nothing.
    pub fn collect_expired(&mut self) -> Vec<ToastId> {
        if !self.mounted {
            return Vec::new();
        }
        self.timers
            .drain()
            .into_iter()
            .filter(|id| self.expire(*id))
            .collect()
    }

    /// Waits for the next toast to expire, removes it and returns its id.
    ///
    /// Stale expiries are skipped. Pending forever while nothing is armed.
    pub async fn next_expired(&mut self) -> Option<ToastId> {
        loop {
            let id = self.timers.recv().await?;
            if self.expire(id) {
                return Some(id);
            }
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Action(id) => {
                self.invoke_action(id);
            }
            Message::Expired(id) => {
                self.expire(id);
            }
            Message::Tick => {
                self.collect_expired();
            }
        }
    }

    /// Changes the anchor of the stack.
    ///
    /// Moving between top and bottom edges reverses the stored order so the
    /// oldest toast stays at the eviction end.
    pub fn set_position(&mut self, position: Position) {
        if position.prepends() != self.position.prepends() {
            self.toasts.make_contiguous().reverse();
        }
        self.position = position;
    }

    /// Changes the capacity. Shrinking evicts the oldest toasts at once.
    pub fn set_max_toasts(&mut self, max_toasts: usize) {
        self.max_toasts = max_toasts.max(MIN_MAX_TOASTS);
        self.evict_overflow();
    }

    /// Starts or stops the expiry timers of every live toast.
    pub(crate) fn set_mounted(&mut self, mounted: bool) {
        if self.mounted == mounted {
            return;
        }
        self.mounted = mounted;

        if !mounted {
            // Expiries delivered but not yet applied belong to the old timers.
            self.timers.drain();
        }

        for toast in &mut self.toasts {
            if mounted {
                let timer = self.timers.schedule(toast.id(), toast.duration());
                toast.arm(timer);
            } else {
                toast.disarm();
            }
        }
    }

    /// Returns the live toasts in stack order.
    pub fn toasts(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Returns the ids of the live toasts in stack order.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.toasts.iter().map(Toast::id).collect()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.index_of(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn max_toasts(&self) -> usize {
        self.max_toasts
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn index_of(&self, id: ToastId) -> Option<usize> {
        self.toasts.iter().position(|toast| toast.id() == id)
    }

    fn take(&mut self, id: ToastId) -> Option<Toast> {
        let index = self.index_of(id)?;
        let mut toast = self.toasts.remove(index)?;
        toast.disarm();
        Some(toast)
    }

    /// Drops the oldest toasts until the stack fits its capacity.
    fn evict_overflow(&mut self) {
        while self.toasts.len() > self.max_toasts {
            let evicted = if self.position.prepends() {
                self.toasts.pop_back()
            } else {
                self.toasts.pop_front()
            };
            if let Some(mut toast) = evicted {
                toast.disarm();
                tracing::debug!(id = %toast.id(), "toast evicted");
            }
        }
    }
}
