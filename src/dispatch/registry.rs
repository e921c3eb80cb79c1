// SPDX-License-Identifier: MPL-2.0
//! Registration of the active toaster.

use crate::toast::{Toaster, ToasterHandle};
use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;

/// Remembers which toaster is currently mounted.
///
/// Holds a weak reference only: the registration lapses on its own when
/// the toaster is dropped. At most one toaster is active at a time.
/// Only [`ToasterHandle::mount`] and [`ToasterHandle::unmount`] write it.
#[derive(Default)]
pub struct Registry {
    active: RefCell<Option<Weak<RefCell<Toaster>>>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mounted toaster, if it is still alive.
    #[must_use]
    pub fn current(&self) -> Option<ToasterHandle> {
        self.active
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .map(ToasterHandle::from_rc)
    }

    /// Whether a live toaster is registered.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.current().is_some()
    }

    pub(crate) fn register(&self, toaster: &ToasterHandle) {
        let weak = toaster.downgrade();
        let mut active = self.active.borrow_mut();

        if let Some(previous) = active.as_ref() {
            if !previous.ptr_eq(&weak) && previous.strong_count() > 0 {
                tracing::warn!("another toaster is already mounted, replacing it");
            }
        }

        tracing::debug!("toaster mounted");
        *active = Some(weak);
    }

    /// Clears the registration if `toaster` is the active one.
    ///
    /// Returns `true` if it was.
    pub(crate) fn deregister(&self, toaster: &ToasterHandle) -> bool {
        let weak = toaster.downgrade();
        let mut active = self.active.borrow_mut();

        match active.as_ref() {
            Some(current) if current.ptr_eq(&weak) => {
                *active = None;
                tracing::debug!("toaster unmounted");
                true
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
