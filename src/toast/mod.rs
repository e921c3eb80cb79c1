// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Toasts are transient, non-blocking notifications. A [`Toaster`] keeps the
//! live ones for a single stack position, bounded by a capacity: when a new
//! toast does not fit, the oldest one is evicted. Every toast expires on its
//! own after its duration unless the user dismisses it or presses its
//! action first.
//!
//! # Components
//!
//! - `record` - `Toast`, `ToastContent`, `ToastId` and `Action`
//! - `variant` - closed set of toast variants and their presentation
//! - `position` - the six anchors a stack can sit at
//! - `queue` - `Toaster`, insertion/eviction policy and lifecycle
//! - `timer` - cancellable per-toast expiry timers
//! - `handle` - shared `ToasterHandle` with mount/unmount
//!
//! # Usage
//!
//! ```
//! use iced_toaster::toast::{Position, ToastContent, Toaster};
//!
//! let mut toaster = Toaster::new()
//!     .with_position(Position::TopRight)
//!     .with_max_toasts(3);
//!
//! let id = toaster.add(ToastContent::success().title("Image saved"));
//! assert!(toaster.contains(id));
//!
//! toaster.dismiss(id);
//! assert!(toaster.is_empty());
//! ```

mod handle;
mod position;
mod queue;
mod record;
mod timer;
mod variant;

pub use handle::ToasterHandle;
pub use position::{Alignment, Edge, Position};
pub use queue::{Message, Toaster};
pub use record::{Action, Toast, ToastContent, ToastId};
pub use timer::TimerHandle;
pub use variant::Variant;
