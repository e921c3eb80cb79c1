// SPDX-License-Identifier: MPL-2.0
//! Toast variants and their presentation mapping.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Kind of feedback a toast conveys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Neutral information (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something needs attention but nothing failed (orange).
    Warning,
    /// Operation failed (red).
    Error,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 4] = [
        Variant::Info,
        Variant::Success,
        Variant::Warning,
        Variant::Error,
    ];

    /// Returns the accent color used for the toast border.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Variant::Info => palette::INFO_500,
            Variant::Success => palette::SUCCESS_500,
            Variant::Warning => palette::WARNING_500,
            Variant::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph rendered in front of the toast text.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Variant::Info => "i",
            Variant::Success => "✓",
            Variant::Warning => "!",
            Variant::Error => "✕",
        }
    }

    /// Returns the accessible role announced for this variant.
    ///
    /// Warnings and errors interrupt assistive technology, the others
    /// are announced politely.
    #[must_use]
    pub fn role(self) -> &'static str {
        match self {
            Variant::Info | Variant::Success => "status",
            Variant::Warning | Variant::Error => "alert",
        }
    }

    /// Returns the lowercase name of the variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Info => "info",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Error => "error",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_info() {
        assert_eq!(Variant::default(), Variant::Info);
    }

    #[test]
    fn variant_colors_are_distinct() {
        for (i, a) in Variant::ALL.iter().enumerate() {
            for b in &Variant::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a} and {b} share a color");
            }
        }
    }

    #[test]
    fn warnings_and_errors_use_alert_role() {
        assert_eq!(Variant::Info.role(), "status");
        assert_eq!(Variant::Success.role(), "status");
        assert_eq!(Variant::Warning.role(), "alert");
        assert_eq!(Variant::Error.role(), "alert");
    }
}
