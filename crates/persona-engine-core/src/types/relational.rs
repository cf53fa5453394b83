//! Nine-category relational classification types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of relational categories.
pub const CATEGORY_COUNT: usize = 9;

/// One of the nine relational categories (`r1`..`r9`).
///
/// Categories are ordered; the index doubles as the deterministic tie-break
/// for the primary classification (lower index wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RelationalCategory(u8);

impl RelationalCategory {
    /// Builds a category from its 1-based number; `None` outside 1..=9.
    pub fn new(number: u8) -> Option<Self> {
        (1..=CATEGORY_COUNT as u8).contains(&number).then_some(Self(number))
    }

    /// The 1-based category number.
    #[inline]
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Zero-based position, usable as an array index.
    #[inline]
    pub fn index(&self) -> usize {
        usize::from(self.0) - 1
    }

    /// All nine categories in order.
    #[inline]
    pub fn all() -> [RelationalCategory; CATEGORY_COUNT] {
        [
            Self(1),
            Self(2),
            Self(3),
            Self(4),
            Self(5),
            Self(6),
            Self(7),
            Self(8),
            Self(9),
        ]
    }
}

impl fmt::Display for RelationalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

impl TryFrom<u8> for RelationalCategory {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("relational category out of range: {}", value))
    }
}

impl From<RelationalCategory> for u8 {
    fn from(category: RelationalCategory) -> Self {
        category.0
    }
}

/// Relational classification result.
///
/// `top1` is always defined; `top2` is the runner-up only when its
/// accumulator is strictly positive. `scores` holds the per-category mean
/// answer values in category order, and `confidence` how clearly `top1`
/// separates from the field, in `[0, 1]` (0 when every accumulator is 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationalResult {
    pub top1: RelationalCategory,
    pub top2: Option<RelationalCategory>,
    pub scores: [f32; CATEGORY_COUNT],
    pub confidence: f32,
}

impl RelationalResult {
    /// Score for a single category.
    #[inline]
    pub fn score(&self, category: RelationalCategory) -> f32 {
        self.scores[category.index()]
    }
}
