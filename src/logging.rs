// SPDX-License-Identifier: MPL-2.0
//! Console logging setup built on `tracing-subscriber`.
//!
//! The filter comes from `RUST_LOG` when set, otherwise
//! [`DEFAULT_FILTER`] applies.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "iced_toaster=info";

/// Builds the log filter from the environment.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global console subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init() -> bool {
    let use_ansi = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .is_ok()
}
