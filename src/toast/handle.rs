// SPDX-License-Identifier: MPL-2.0
//! Shared ownership of a toaster for the UI thread.
//!
//! The application owns the toaster through a [`ToasterHandle`]; the
//! [`Registry`] only keeps a weak reference to the mounted one. Everything
//! here is single-threaded.

use super::queue::{Message, Toaster};
use super::record::{ToastContent, ToastId};
use crate::dispatch::Registry;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

/// Cloneable handle to a toaster shared on the UI thread.
#[derive(Debug, Clone)]
pub struct ToasterHandle {
    inner: Rc<RefCell<Toaster>>,
}

impl ToasterHandle {
    #[must_use]
    pub fn new(toaster: Toaster) -> Self {
        Self {
            inner: Rc::new(RefCell::new(toaster)),
        }
    }

    /// Attaches the toaster: starts its timers and makes it the registry's
    /// active instance, replacing any previous one.
    pub fn mount(&self, registry: &Registry) {
        self.inner.borrow_mut().set_mounted(true);
        registry.register(self);
    }

    /// Detaches the toaster: stops its timers and clears the registration
    /// if this toaster is the active instance.
    pub fn unmount(&self, registry: &Registry) {
        registry.deregister(self);
        self.inner.borrow_mut().set_mounted(false);
    }

    /// Adds a toast unless the toaster is already borrowed.
    ///
    /// A toast requested from inside another toaster operation is dropped
    /// with a warning instead of panicking.
    pub fn try_add(&self, content: ToastContent) -> Option<ToastId> {
        let Some(mut toaster) = self.try_borrow_mut() else {
            tracing::warn!("toaster is busy, dropping toast");
            return None;
        };
        Some(toaster.add(content))
    }

    /// Handles a toast message.
    ///
    /// Action callbacks run after the toaster borrow is released, so they
    /// may dispatch new toasts themselves.
    pub fn handle_message(&self, message: Message) {
        match message {
            Message::Action(id) => {
                let callback = self.inner.borrow_mut().take_action(id);
                if let Some(callback) = callback {
                    callback();
                }
            }
            other => self.inner.borrow_mut().handle_message(other),
        }
    }

    /// Immutably borrows the toaster.
    ///
    /// # Panics
    ///
    /// Panics if the toaster is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Toaster> {
        self.inner.borrow()
    }

    /// Mutably borrows the toaster.
    ///
    /// # Panics
    ///
    /// Panics if the toaster is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, Toaster> {
        self.inner.borrow_mut()
    }

    /// Mutably borrows the toaster unless it is already borrowed.
    #[must_use]
    pub fn try_borrow_mut(&self) -> Option<RefMut<'_, Toaster>> {
        self.inner.try_borrow_mut().ok()
    }

    pub(crate) fn downgrade(&self) -> Weak<RefCell<Toaster>> {
        Rc::downgrade(&self.inner)
    }

    pub(crate) fn from_rc(inner: Rc<RefCell<Toaster>>) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Notifier;
    use std::time::Duration;

    #[test]
    fn mount_registers_and_unmount_clears() {
        let registry = Registry::new();
        let handle = ToasterHandle::new(Toaster::new());

        handle.mount(&registry);
        assert!(registry.is_mounted());
        assert!(handle.borrow().is_mounted());

        handle.unmount(&registry);
        assert!(!registry.is_mounted());
        assert!(!handle.borrow().is_mounted());
    }

    #[test]
    fn action_callback_may_dispatch_new_toast() {
        let registry = Rc::new(Registry::new());
        let handle = ToasterHandle::new(Toaster::new());
        handle.mount(&registry);

        let notifier = Notifier::new(Rc::clone(&registry));
        let follow_up = notifier.clone();
        let id = notifier
            .notify(ToastContent::info().title("Deleted").action("Undo", move || {
                follow_up.success("Restored", None);
            }))
            .expect("toaster is mounted");

        handle.handle_message(Message::Action(id));

        let toaster = handle.borrow();
        assert!(!toaster.contains(id));
        assert_eq!(toaster.len(), 1);
        assert_eq!(
            toaster.toasts().next().and_then(|toast| toast.title()),
            Some("Restored")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_pending_timers() {
        let registry = Registry::new();
        let handle = ToasterHandle::new(Toaster::new());
        handle.mount(&registry);
        let id = handle.borrow_mut().add(ToastContent::info().duration_ms(100));
        assert!(handle.borrow().get(id).is_some_and(|t| t.is_timer_armed()));

        handle.unmount(&registry);
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(handle.borrow_mut().collect_expired().is_empty());
        assert!(handle.borrow().contains(id));
    }

    #[tokio::test(start_paused = true)]
    async fn remount_restarts_timers() {
        let registry = Registry::new();
        let handle = ToasterHandle::new(Toaster::new());
        let id = handle.borrow_mut().add(ToastContent::info().duration_ms(100));

        handle.mount(&registry);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(handle.borrow_mut().collect_expired(), vec![id]);
    }

    #[tokio::test(start_paused = true)]
    async fn delivered_expiry_is_dropped_on_unmount() {
        let registry = Registry::new();
        let handle = ToasterHandle::new(Toaster::new());
        handle.mount(&registry);
        let id = handle.borrow_mut().add(ToastContent::info().duration_ms(100));
        tokio::time::sleep(Duration::from_millis(150)).await;

        handle.unmount(&registry);
        assert!(handle.borrow_mut().collect_expired().is_empty());
        assert!(handle.borrow().contains(id));

        handle.mount(&registry);
        assert!(handle.borrow_mut().collect_expired().is_empty());
        assert!(handle.borrow().contains(id));

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(handle.borrow_mut().collect_expired(), vec![id]);
    }
}
