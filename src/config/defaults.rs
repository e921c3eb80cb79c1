// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toaster configuration.

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default number of toasts visible at once.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Smallest accepted capacity.
pub const MIN_MAX_TOASTS: usize = 1;

/// Largest accepted capacity.
pub const MAX_MAX_TOASTS: usize = 20;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default display time of a toast (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_TOASTS >= 1);
    assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(DEFAULT_MAX_TOASTS <= MAX_MAX_TOASTS);
    assert!(DEFAULT_DURATION_MS > 0);
};
