//! Relational scorer: nine-category classification.

use persona_engine_core::{ItemDomain, RelationalCategory, RelationalResult, CATEGORY_COUNT};

use crate::normalizer::NormalizedAnswer;

/// Scores the nine relational categories from normalized answers.
///
/// Each category accumulator is the mean of the reversal-adjusted raw
/// answers of its tagged items (0 when the category has none). `top1` is the
/// argmax with ties broken toward the lowest category index; `top2` is the
/// runner-up only when its accumulator is strictly positive.
/// `confidence = clamp01((max - mean_of_9) / max)`, and 0 when `max` is 0.
pub fn score_relational(answers: &[NormalizedAnswer]) -> RelationalResult {
    let mut sums = [0.0f32; CATEGORY_COUNT];
    let mut counts = [0usize; CATEGORY_COUNT];

    for answer in answers {
        if let ItemDomain::Relational(category) = answer.domain {
            sums[category.index()] += answer.reversed;
            counts[category.index()] += 1;
        }
    }

    let mut scores = [0.0f32; CATEGORY_COUNT];
    for i in 0..CATEGORY_COUNT {
        if counts[i] > 0 {
            scores[i] = sums[i] / counts[i] as f32;
        }
    }

    // Argmax with lowest-index tie-break: strict > while scanning in order.
    let mut top1_index = 0usize;
    for (i, &score) in scores.iter().enumerate() {
        if score > scores[top1_index] {
            top1_index = i;
        }
    }

    let mut top2_index: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        if i == top1_index {
            continue;
        }
        match top2_index {
            Some(current) if score <= scores[current] => {}
            _ => top2_index = Some(i),
        }
    }
    let top2 = top2_index
        .filter(|&i| scores[i] > 0.0)
        .and_then(|i| RelationalCategory::new(i as u8 + 1));

    let max = scores.iter().copied().fold(0.0f32, f32::max);
    let confidence = if max > 0.0 {
        let mean = scores.iter().sum::<f32>() / CATEGORY_COUNT as f32;
        ((max - mean) / max).clamp(0.0, 1.0)
    } else {
        0.0
    };

    RelationalResult {
        top1: RelationalCategory::new(top1_index as u8 + 1).expect("index in range"),
        top2,
        scores,
        confidence,
    }
}

/// Rescales the nine accumulators to display shares summing to 100.
///
/// When every accumulator is zero the split is uniform; the display layer
/// never divides by zero.
pub fn display_shares(scores: &[f32; CATEGORY_COUNT]) -> [f32; CATEGORY_COUNT] {
    let sum: f32 = scores.iter().sum();
    if sum <= 0.0 {
        return [100.0 / CATEGORY_COUNT as f32; CATEGORY_COUNT];
    }
    scores.map(|score| (score / sum) * 100.0)
}
