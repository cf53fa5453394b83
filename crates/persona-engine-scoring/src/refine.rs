//! Confidence flagging and the 3-item refinement follow-up.
//!
//! A type axis whose ratio sits inside the boundary band is an unreliable
//! categorical decision. The advisor flags those axes and, when any exist,
//! offers a short follow-up of three items mapped one-to-one onto E/I, S/N
//! and T/F. J/P has no follow-up item; the shipped product never covered it
//! and the gap is kept as-is, enforced structurally by
//! [`RefinementAnswers`] simply having no J/P slot.

use persona_engine_core::{Axis, TypeAxesResult, TypeCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::BoundaryConfig;
use crate::error::{ScoreError, ScoreResult};

/// Top of the refinement answer scale (1..=5, midpoint 3).
pub const REFINEMENT_SCALE_MAX: u8 = 5;

/// The three follow-up prompts, in answer order.
pub const REFINEMENT_PROMPTS: [(Axis, &str); 3] = [
    (Axis::EI, "After a demanding week, I recover best around other people."),
    (Axis::SN, "When learning something new, I want the concrete steps before the big picture."),
    (Axis::TF, "In a hard disagreement, being fair matters more to me than being kind."),
];

/// Answers to the 3-item refinement flow, each on a 1..=5 scale.
///
/// The low end of each scale votes for one pole, the high end for the
/// other, and the midpoint 3 leaves the original letter unchanged:
/// 1..2 → I / S / T, 4..5 → E / N / F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefinementAnswers {
    pub ei: u8,
    pub sn: u8,
    pub tf: u8,
}

impl RefinementAnswers {
    /// Builds validated answers; every value must lie in 1..=5.
    pub fn new(ei: u8, sn: u8, tf: u8) -> ScoreResult<Self> {
        for (name, value) in [("refine_ei", ei), ("refine_sn", sn), ("refine_tf", tf)] {
            if !(1..=REFINEMENT_SCALE_MAX).contains(&value) {
                return Err(ScoreError::out_of_range(name, value, REFINEMENT_SCALE_MAX));
            }
        }
        Ok(Self { ei, sn, tf })
    }

    /// The letter this answer votes for on the given axis, or `None` at the
    /// neutral midpoint. J/P always returns `None`.
    ///
    /// Orientation is fixed per prompt: the low end votes I / S / T, the
    /// high end E / N / F.
    fn vote(&self, axis: Axis) -> Option<char> {
        let (value, low, high) = match axis {
            Axis::EI => (self.ei, 'I', 'E'),
            Axis::SN => (self.sn, 'S', 'N'),
            Axis::TF => (self.tf, 'T', 'F'),
            Axis::JP => return None,
        };
        match value {
            1 | 2 => Some(low),
            4 | 5 => Some(high),
            _ => None,
        }
    }
}

/// Flags boundary axes and applies the follow-up amendment.
#[derive(Debug, Clone)]
pub struct RefinementAdvisor {
    boundary: BoundaryConfig,
}

impl RefinementAdvisor {
    /// Creates an advisor over a boundary band.
    pub fn new(boundary: &BoundaryConfig) -> Self {
        Self {
            boundary: *boundary,
        }
    }

    /// Axes whose ratio falls inside the boundary band, in axis order.
    pub fn boundary_axes(&self, result: &TypeAxesResult) -> Vec<Axis> {
        Axis::all()
            .into_iter()
            .filter(|axis| self.boundary.contains(result.ratio.get(*axis)))
            .collect()
    }

    /// True when any axis is a boundary case and the follow-up should be
    /// offered.
    pub fn is_low_confidence(&self, result: &TypeAxesResult) -> bool {
        !self.boundary_axes(result).is_empty()
    }

    /// Amends a previously scored type with the follow-up answers.
    ///
    /// Pure and idempotent: the output depends only on the prior code and
    /// the answers, so reapplying the same answers yields the same code.
    /// Midpoint answers leave their axis untouched; J/P is never amended.
    pub fn apply(&self, code: TypeCode, answers: &RefinementAnswers) -> TypeCode {
        let mut amended = code;
        for axis in [Axis::EI, Axis::SN, Axis::TF] {
            if let Some(letter) = answers.vote(axis) {
                amended = amended.with_letter(axis, letter);
            }
        }
        if amended != code {
            debug!(before = %code, after = %amended, "refinement amended type");
        }
        amended
    }
}
