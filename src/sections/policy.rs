use std::fmt::Debug;

use crate::foundation::core::Color;

/// A finite, ordinal-backed set of section identifiers with a background color each.
///
/// Ordinals are contiguous from zero: `Self::ALL[n].ordinal() == n`. The render host is expected
/// to report exactly `Self::ALL.len()` sections.
pub trait SectionPolicy: Copy + Eq + Debug + 'static {
    /// Every identifier, in ordinal order.
    const ALL: &'static [Self];

    /// Zero-based ordinal of this identifier.
    fn ordinal(self) -> usize;

    /// Background color painted behind the first column of this section.
    fn background_color(self) -> Color;

    /// Identifier for `ordinal`, or `None` when it is outside the declared set.
    fn identifier_for_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }
}

/// The three sections of the sample screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ConcreteSections {
    /// First section, red background.
    One,
    /// Second section, green background.
    Two,
    /// Third section, blue background.
    Three,
}

impl SectionPolicy for ConcreteSections {
    const ALL: &'static [Self] = &[Self::One, Self::Two, Self::Three];

    fn ordinal(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    fn background_color(self) -> Color {
        // No wildcard arm: a new variant must pick its color here.
        match self {
            Self::One => Color::RED,
            Self::Two => Color::GREEN,
            Self::Three => Color::BLUE,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/policy.rs"]
mod tests;
