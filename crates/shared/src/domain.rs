use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Reads the `(a/d)` prompt answer. Only a leading `d` selects descending.
    pub fn from_selector(raw: &str) -> Self {
        match raw.trim_start().chars().next() {
            Some('d' | 'D') => Self::Descending,
            _ => Self::Ascending,
        }
    }

    /// True when `left` has to end up after `right`. Strict, so equal values never move.
    pub fn violates(self, left: i32, right: i32) -> bool {
        match self {
            Self::Ascending => left > right,
            Self::Descending => left < right,
        }
    }

    pub fn is_ordered(self, values: &[i32]) -> bool {
        values.windows(2).all(|pair| !self.violates(pair[0], pair[1]))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three engines, in declaration order. The order doubles as the comparison tie-break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    #[default]
    Bubble,
    Selection,
    Insertion,
}

impl EngineKind {
    pub const ALL: [EngineKind; 3] = [Self::Bubble, Self::Selection, Self::Insertion];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble sort compares neighbors and swaps if needed",
            Self::Selection => "Selection sort finds the min/max and puts it in place",
            Self::Insertion => "Insertion sort builds a sorted section one by one",
        }
    }

    /// Accepts the menu digits `1`-`3` or an engine name.
    pub fn parse_selector(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "bubble" => Some(Self::Bubble),
            "2" | "selection" => Some(Self::Selection),
            "3" | "insertion" => Some(Self::Insertion),
            _ => None,
        }
    }

    /// Like [`EngineKind::parse_selector`] but falls back to bubble sort. The flag
    /// reports whether the fallback was taken.
    pub fn from_selector_or_default(raw: &str) -> (Self, bool) {
        match Self::parse_selector(raw) {
            Some(kind) => (kind, false),
            None => (Self::default(), true),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
