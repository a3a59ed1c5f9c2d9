//! Display color palette for scheduled courses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One entry of the fixed course color palette.
///
/// The palette is ordered; the first entry is the default suggestion when
/// a course is added. Nothing prevents two courses in the same draft from
/// sharing a color.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Teal,
    Red,
    Indigo,
}

impl Color {
    /// The palette in presentation order.
    pub const PALETTE: [Color; 8] = [
        Color::Blue,
        Color::Green,
        Color::Purple,
        Color::Orange,
        Color::Pink,
        Color::Teal,
        Color::Red,
        Color::Indigo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Teal => "teal",
            Color::Red => "red",
            Color::Indigo => "indigo",
        }
    }

    /// CSS hex value handed to the grid renderer.
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Blue => "#3B82F6",
            Color::Green => "#10B981",
            Color::Purple => "#8B5CF6",
            Color::Orange => "#F59E0B",
            Color::Pink => "#EC4899",
            Color::Teal => "#14B8A6",
            Color::Red => "#EF4444",
            Color::Indigo => "#6366F1",
        }
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts a palette name or its hex value, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Color::PALETTE
            .into_iter()
            .find(|color| {
                color.as_str().eq_ignore_ascii_case(trimmed) || color.hex().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| format!("Invalid color: {s}"))
    }
}
