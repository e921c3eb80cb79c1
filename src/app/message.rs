// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast::{self, Position, Variant};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded toast interaction (dismiss, action, expiry).
    Toast(toast::Message),
    /// Show a sample toast of the given variant.
    Show(Variant),
    /// Show a toast carrying an "Undo" action.
    ShowWithAction,
    /// Remove every toast.
    Clear,
    /// Move the stack to the next anchor.
    CyclePosition,
    /// Periodic tick draining toast expiries.
    Tick(Instant),
}

/// Command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Anchor override (`--position`).
    pub position: Option<Position>,
    /// Capacity override (`--max-toasts`).
    pub max_toasts: Option<usize>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
