// SPDX-License-Identifier: MPL-2.0
//! Decoupled access to the mounted toaster.
//!
//! Code that wants to show a toast does not need a reference to the
//! toaster. It holds a [`Notifier`], which asks a shared [`Registry`] for
//! whichever toaster is mounted right now and forwards the request.
//!
//! Toasts are best effort: with nothing mounted the request is logged and
//! dropped, and the caller gets `None` back.
//!
//! ```
//! use iced_toaster::dispatch::{Notifier, Registry};
//! use iced_toaster::toast::{Toaster, ToasterHandle};
//! use std::rc::Rc;
//!
//! let registry = Rc::new(Registry::new());
//! let notifier = Notifier::new(Rc::clone(&registry));
//! assert!(notifier.notify("nobody is listening").is_none());
//!
//! let toaster = ToasterHandle::new(Toaster::new());
//! toaster.mount(&registry);
//! assert!(notifier.success("Saved", None).is_some());
//! ```

mod notifier;
mod registry;

pub use notifier::Notifier;
pub use registry::Registry;
