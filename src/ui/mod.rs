// SPDX-License-Identifier: MPL-2.0
//! Rendering of toasts with Iced.
//!
//! - `toast` - Toast card and anchored overlay widgets
//! - `design_tokens` - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;
