// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! A [`ToastContent`] is what callers hand to the queue; the queue turns
//! it into a live [`Toast`] with a fresh [`ToastId`] and resolved defaults.

use super::timer::TimerHandle;
use super::variant::Variant;
use crate::config::DEFAULT_DURATION_MS;
use std::fmt;
use std::time::Duration;

/// Opaque identifier of a toast. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Single affordance attached to a toast: a label and a one-shot callback.
pub struct Action {
    label: String,
    callback: Box<dyn FnOnce()>,
}

impl Action {
    pub fn new(label: impl Into<String>, callback: impl FnOnce() + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Box::new(callback),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn into_callback(self) -> Box<dyn FnOnce()> {
        self.callback
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Everything a caller can say about a toast before it is queued.
///
/// All fields are optional. Missing ones are defaulted when the toast is
/// added, never rejected.
#[derive(Debug, Default)]
pub struct ToastContent {
    pub variant: Option<Variant>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Display time in milliseconds. `None` or `0` selects the default.
    pub duration_ms: Option<u64>,
    pub action: Option<Action>,
}

impl ToastContent {
    /// Creates empty content with the given variant.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant: Some(variant),
            ..Self::default()
        }
    }

    pub fn info() -> Self {
        Self::new(Variant::Info)
    }

    pub fn success() -> Self {
        Self::new(Variant::Success)
    }

    pub fn warning() -> Self {
        Self::new(Variant::Warning)
    }

    pub fn error() -> Self {
        Self::new(Variant::Error)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Attaches an action button. Invoking it runs `callback` once and
    /// removes the toast.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, callback: impl FnOnce() + 'static) -> Self {
        self.action = Some(Action::new(label, callback));
        self
    }
}

/// Plain text becomes the description of an info toast.
impl From<&str> for ToastContent {
    fn from(text: &str) -> Self {
        Self::default().description(text)
    }
}

impl From<String> for ToastContent {
    fn from(text: String) -> Self {
        Self::default().description(text)
    }
}

/// A live toast owned by a [`Toaster`](super::Toaster).
#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    variant: Variant,
    title: Option<String>,
    description: Option<String>,
    duration: Duration,
    action: Option<Action>,
    /// Pending expiry timer, present while the owning queue is mounted.
    timer: Option<TimerHandle>,
}

impl Toast {
    /// Builds a toast from caller content, filling in defaults.
    ///
    /// `default_duration` applies when the content carries no duration or
    /// a zero one; a zero default falls back to [`DEFAULT_DURATION_MS`].
    pub(crate) fn from_content(content: ToastContent, default_duration: Duration) -> Self {
        let fallback = if default_duration.is_zero() {
            Duration::from_millis(DEFAULT_DURATION_MS)
        } else {
            default_duration
        };
        let duration = match content.duration_ms {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => fallback,
        };

        Self {
            id: ToastId::next(),
            variant: content.variant.unwrap_or_default(),
            title: content.title,
            description: content.description,
            duration,
            action: content.action,
            timer: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// How long the toast stays up before expiring on its own.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        self.action.as_ref().map(Action::label)
    }

    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Whether an expiry timer is currently pending for this toast.
    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.timer.as_ref().is_some_and(TimerHandle::is_armed)
    }

    pub(crate) fn arm(&mut self, timer: TimerHandle) {
        self.timer = Some(timer);
    }

    pub(crate) fn disarm(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }

    pub(crate) fn take_action(&mut self) -> Option<Action> {
        self.action.take()
    }
}
