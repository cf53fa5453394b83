//! Big5 (OCEAN) scorer.

use persona_engine_core::{Big5Scores, Big5Trait, ItemDomain};

use crate::normalizer::NormalizedAnswer;

/// Scores the five OCEAN dimensions from normalized answers.
///
/// Each dimension is the mean of the weighted signed values of its tagged
/// items, rescaled with `round(((avg + 1) / 2) * 100)` and clamped to
/// 0..=100. A dimension with no contributing items scores the neutral 50;
/// the pipeline stays total over partial protocols.
pub fn score_big5(answers: &[NormalizedAnswer]) -> Big5Scores {
    let mut sums = [0.0f32; 5];
    let mut counts = [0usize; 5];

    for answer in answers {
        if let ItemDomain::Big5(trait_key) = answer.domain {
            sums[trait_key.index()] += answer.weighted;
            counts[trait_key.index()] += 1;
        }
    }

    let mut scores = [50u8; 5];
    for trait_key in Big5Trait::all() {
        let i = trait_key.index();
        if counts[i] > 0 {
            let avg = sums[i] / counts[i] as f32;
            scores[i] = rescale(avg);
        }
    }

    Big5Scores {
        openness: scores[0],
        conscientiousness: scores[1],
        extraversion: scores[2],
        agreeableness: scores[3],
        neuroticism: scores[4],
    }
}

/// Maps a mean signed value in roughly [-1, 1] onto 0..=100.
///
/// Item weights above 1 could push the mean past the unit interval, so the
/// result is clamped rather than trusted.
#[inline]
fn rescale(avg: f32) -> u8 {
    (((avg + 1.0) / 2.0) * 100.0).round().clamp(0.0, 100.0) as u8
}
