// SPDX-License-Identifier: MPL-2.0
//! Dispatch facade for toasts.

use super::registry::Registry;
use crate::toast::{ToastContent, ToastId, Variant};
use std::rc::Rc;

/// Cheap, cloneable entry point for showing toasts from anywhere on the
/// UI thread.
///
/// Every method degrades to a logged no-op when no toaster is mounted.
#[derive(Debug, Clone)]
pub struct Notifier {
    registry: Rc<Registry>,
}

impl Notifier {
    #[must_use]
    pub fn new(registry: Rc<Registry>) -> Self {
        Self { registry }
    }

    /// Shows a toast on the mounted toaster.
    ///
    /// Accepts full [`ToastContent`] or plain text. Returns the new toast's
    /// id, or `None` if nothing is mounted; `None` means the toast was not
    /// shown, not that something failed.
    pub fn notify(&self, content: impl Into<ToastContent>) -> Option<ToastId> {
        let Some(toaster) = self.registry.current() else {
            tracing::warn!("no toaster mounted, dropping toast");
            return None;
        };
        toaster.try_add(content.into())
    }

    pub fn info(&self, title: impl Into<String>, description: Option<&str>) -> Option<ToastId> {
        self.notify_variant(Variant::Info, title.into(), description)
    }

    pub fn success(&self, title: impl Into<String>, description: Option<&str>) -> Option<ToastId> {
        self.notify_variant(Variant::Success, title.into(), description)
    }

    pub fn warning(&self, title: impl Into<String>, description: Option<&str>) -> Option<ToastId> {
        self.notify_variant(Variant::Warning, title.into(), description)
    }

    pub fn error(&self, title: impl Into<String>, description: Option<&str>) -> Option<ToastId> {
        self.notify_variant(Variant::Error, title.into(), description)
    }

    /// Dismisses a toast on the mounted toaster.
    ///
    /// Returns `true` if the toast was live.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let Some(toaster) = self.registry.current() else {
            return false;
        };
        let Some(mut toaster) = toaster.try_borrow_mut() else {
            return false;
        };
        toaster.dismiss(id)
    }

    /// Removes every toast from the mounted toaster.
    pub fn clear(&self) {
        let Some(toaster) = self.registry.current() else {
            return;
        };
        let Some(mut toaster) = toaster.try_borrow_mut() else {
            return;
        };
        toaster.clear();
    }

    /// Whether a toast sent now would reach a toaster.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.registry.is_mounted()
    }

    fn notify_variant(
        &self,
        variant: Variant,
        title: String,
        description: Option<&str>,
    ) -> Option<ToastId> {
        let mut content = ToastContent::new(variant).title(title);
        if let Some(description) = description {
            content = content.description(description);
        }
        self.notify(content)
    }
}
