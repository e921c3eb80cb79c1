// SPDX-License-Identifier: MPL-2.0
//! Screen anchors for the toast stack.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Edge of the window a toast stack grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Horizontal placement of the stack along its edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    Center,
    End,
}

/// One of the six anchor points a toast stack can be placed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns the edge the stack is anchored to.
    #[must_use]
    pub fn edge(self) -> Edge {
        match self {
            Position::TopLeft | Position::TopCenter | Position::TopRight => Edge::Top,
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight => Edge::Bottom,
        }
    }

    /// Returns the horizontal placement along the anchor edge.
    #[must_use]
    pub fn alignment(self) -> Alignment {
        match self {
            Position::TopLeft | Position::BottomLeft => Alignment::Start,
            Position::TopCenter | Position::BottomCenter => Alignment::Center,
            Position::TopRight | Position::BottomRight => Alignment::End,
        }
    }

    /// Whether new toasts are prepended to the sequence.
    ///
    /// Bottom-anchored stacks prepend and evict from the tail, top-anchored
    /// stacks append and evict from the head. Either way the oldest toast
    /// is the one that goes.
    #[must_use]
    pub fn prepends(self) -> bool {
        self.edge() == Edge::Bottom
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown toast position: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_is_bottom_right() {
        assert_eq!(Position::default(), Position::BottomRight);
    }

    #[test]
    fn only_bottom_positions_prepend() {
        for position in Position::ALL {
            assert_eq!(
                position.prepends(),
                position.as_str().starts_with("bottom"),
                "{position}"
            );
        }
    }

    #[test]
    fn alignment_follows_name_suffix() {
        assert_eq!(Position::TopLeft.alignment(), Alignment::Start);
        assert_eq!(Position::BottomCenter.alignment(), Alignment::Center);
        assert_eq!(Position::TopRight.alignment(), Alignment::End);
    }

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!("top-center".parse::<Position>(), Ok(Position::TopCenter));
        assert_eq!("Bottom-Left".parse::<Position>(), Ok(Position::BottomLeft));
        assert!("middle".parse::<Position>().is_err());
    }
}
