//! Type-axis scorer: four binary axes combined into a 4-letter code.

use persona_engine_core::{Axis, AxisValues, ItemDomain, TypeAxesResult, TypeCode};

use crate::normalizer::NormalizedAnswer;

/// Scores the four type axes from normalized answers.
///
/// Each axis keeps two pole accumulators summing the reversal- and
/// weight-adjusted raw answer values of the items tagged to that pole.
/// The axis resolves to the first pole only on a strictly greater sum;
/// equal sums resolve to the second pole (I, N, F, P). That tie-break is
/// deliberate and load-bearing: an all-midpoint protocol lands every axis on
/// an exact tie, and downstream tables key on the resulting code.
///
/// Per axis, with `a` the first-pole and `b` the second-pole sum:
/// - `confidence = min(1, |a - b| / max(a + b, 1))`
/// - `ratio = round(a / max(a + b, 1) * 100)` — percent toward the first pole
pub fn score_type_axes(answers: &[NormalizedAnswer]) -> TypeAxesResult {
    // [axis][pole]: 0 = first pole, 1 = second pole.
    let mut sums = [[0.0f32; 2]; 4];

    for answer in answers {
        if let ItemDomain::TypeAxis(pole) = answer.domain {
            let side = usize::from(!pole.is_first());
            sums[pole.axis().index()][side] += answer.reversed * answer.weight;
        }
    }

    let mut letters = ['I', 'N', 'F', 'P'];
    for axis in Axis::all() {
        let [a, b] = sums[axis.index()];
        let (first, second) = axis.poles();
        letters[axis.index()] = if a > b { first } else { second };
    }
    let code = TypeCode::new(letters).expect("pole letters are valid by construction");

    let confidence = AxisValues::from_fn(|axis| {
        let [a, b] = sums[axis.index()];
        ((a - b).abs() / (a + b).max(1.0)).min(1.0)
    });
    let ratio = AxisValues::from_fn(|axis| {
        let [a, b] = sums[axis.index()];
        ((a / (a + b).max(1.0)) * 100.0).round() as u8
    });

    TypeAxesResult {
        code,
        confidence,
        ratio,
    }
}
