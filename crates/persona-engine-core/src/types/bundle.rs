//! The combined trait-score bundle emitted by the scorers.

use serde::{Deserialize, Serialize};

use super::axes::TypeAxesResult;
use super::big5::Big5Scores;
use super::relational::{RelationalResult, CATEGORY_COUNT};

/// Output of the three trait scorers over one normalized response set.
///
/// `relational_shares` is the display normalization of the nine relational
/// accumulators: the scores rescaled to sum to 100, or a uniform split when
/// every accumulator is zero. It carries no extra information over
/// `relational.scores` but is what presentation layers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreBundle {
    pub big5: Big5Scores,
    pub type_axes: TypeAxesResult,
    pub relational: RelationalResult,
    pub relational_shares: [f32; CATEGORY_COUNT],
}
