//! Zero-based month index used for cell placement.

use chrono::Month;

/// Zero-based month index (January = 0).
///
/// Cells are positioned by index while axis labels and tooltips format the
/// one-based calendar number, so the conversion lives here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthIndex(u8);

impl MonthIndex {
    /// Number of rows in the chart.
    pub const COUNT: u8 = 12;

    /// Build from a one-based calendar month (1 = January). Returns `None`
    /// outside 1-12.
    pub fn from_calendar(month: u8) -> Option<Self> {
        if (1..=Self::COUNT).contains(&month) {
            Some(Self(month - 1))
        } else {
            None
        }
    }

    /// The zero-based index, in `0..12`.
    pub fn index(self) -> u8 {
        self.0
    }

    /// The one-based calendar month number.
    pub fn calendar(self) -> u8 {
        self.0 + 1
    }

    /// Full English month name, for axis labels and tooltips.
    pub fn name(self) -> &'static str {
        // Infallible for a constructed index, but stay panic-free.
        Month::try_from(self.calendar())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    /// All twelve indices, January first.
    pub fn all() -> impl Iterator<Item = MonthIndex> {
        (0..Self::COUNT).map(MonthIndex)
    }
}
