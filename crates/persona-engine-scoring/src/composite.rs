//! Composite synthesizer: the nine-axis blended profile.
//!
//! Each output axis anchors on a fixed linear combination of the five Big5
//! dimensions and adds two squashed categorical contributions, one from the
//! type-axis result and one from the relational result. The squash is a
//! logistic curve, so a zero drive contributes a neutral 50 and even a
//! maximal drive saturates at 100; with the default 0.7/0.2/0.1 weights the
//! categorical signals can move an axis at most 30 points around its anchor.

use persona_engine_core::{
    Axis, Big5Scores, CompositeAxis, CompositeProfile, RelationalCategory, RelationalResult,
    TypeAxesResult, TypeCode,
};
use tracing::trace;

use crate::config::CompositeConfig;

/// Blends the three scorer outputs into the nine-axis profile.
#[derive(Debug, Clone)]
pub struct CompositeSynthesizer {
    config: CompositeConfig,
}

impl CompositeSynthesizer {
    /// Creates a synthesizer over the given calibration.
    pub fn new(config: &CompositeConfig) -> Self {
        Self { config: *config }
    }

    /// Computes the composite profile.
    pub fn synthesize(
        &self,
        big5: &Big5Scores,
        type_axes: &TypeAxesResult,
        relational: &RelationalResult,
    ) -> CompositeProfile {
        let base = big5_base(big5);
        let type_drive = type_drive(type_axes.code);
        let relational_drive = relational_drive(relational.top1);

        let mut values = [0u8; 9];
        for axis in CompositeAxis::all() {
            let i = axis.index();
            let blended = self.config.big5_weight * base[i]
                + self.config.type_weight * squash(self.config.alpha * type_drive[i])
                + self.config.relational_weight * squash(self.config.beta * relational_drive[i]);
            values[i] = blended.round().clamp(0.0, 100.0) as u8;
            trace!(axis = %axis, base = base[i], blended, "composite axis");
        }
        CompositeProfile::from_array(values)
    }
}

/// Logistic squash onto 0..100: `sig(0) = 50`, saturating at the ends.
#[inline]
fn squash(x: f32) -> f32 {
    100.0 / (1.0 + (-x).exp())
}

/// The Big5-anchored base values, one per composite axis, on the 0..100
/// scale. Five axes map a dimension straight through; the other four are
/// fixed derivations.
fn big5_base(big5: &Big5Scores) -> [f32; 9] {
    let o = f32::from(big5.openness);
    let c = f32::from(big5.conscientiousness);
    let e = f32::from(big5.extraversion);
    let a = f32::from(big5.agreeableness);
    let n = f32::from(big5.neuroticism);

    let creation = o;
    let will = c;
    let sensitivity = n;
    let harmony = a;
    let expression = e;
    let insight = 0.6 * o + 0.4 * c;
    let resilience = 100.0 - n;
    let balance = 100.0 - (o + e - (c + a)).abs() / 2.0;
    let growth = (creation + will + insight + resilience) / 4.0;

    [
        creation,
        will,
        sensitivity,
        harmony,
        expression,
        insight,
        resilience,
        balance,
        growth,
    ]
}

/// Per-axis drive from the four type letters. Each letter pushes the axes
/// its pole is associated with; untouched axes stay at zero drive (neutral
/// squash contribution).
fn type_drive(code: TypeCode) -> [f32; 9] {
    let mut drive = [0.0f32; 9];
    let mut push = |axis: CompositeAxis, amount: f32| drive[axis.index()] += amount;

    if code.is_first_pole(Axis::EI) {
        push(CompositeAxis::Expression, 1.0);
    } else {
        push(CompositeAxis::Sensitivity, 1.0);
    }
    if code.is_first_pole(Axis::SN) {
        push(CompositeAxis::Balance, 1.0);
    } else {
        push(CompositeAxis::Insight, 1.0);
    }
    if code.is_first_pole(Axis::TF) {
        push(CompositeAxis::Will, 0.6);
        push(CompositeAxis::Creation, 0.4);
    } else {
        push(CompositeAxis::Harmony, 1.0);
    }
    if code.is_first_pole(Axis::JP) {
        push(CompositeAxis::Balance, 0.7);
        push(CompositeAxis::Resilience, 0.3);
    } else {
        push(CompositeAxis::Resilience, 0.7);
    }
    drive
}

/// Per-axis drive from the primary relational category. Each category
/// pushes its two associated axes.
fn relational_drive(top1: RelationalCategory) -> [f32; 9] {
    let mut drive = [0.0f32; 9];
    let mut push = |axis: CompositeAxis| drive[axis.index()] += 1.0;

    match top1.number() {
        1 => {
            push(CompositeAxis::Balance);
            push(CompositeAxis::Will);
        }
        2 => {
            push(CompositeAxis::Harmony);
            push(CompositeAxis::Sensitivity);
        }
        3 => {
            push(CompositeAxis::Expression);
            push(CompositeAxis::Will);
        }
        4 => {
            push(CompositeAxis::Sensitivity);
            push(CompositeAxis::Creation);
        }
        5 => {
            push(CompositeAxis::Insight);
            push(CompositeAxis::Balance);
        }
        6 => {
            push(CompositeAxis::Resilience);
            push(CompositeAxis::Balance);
        }
        7 => {
            push(CompositeAxis::Growth);
            push(CompositeAxis::Expression);
        }
        8 => {
            push(CompositeAxis::Will);
            push(CompositeAxis::Resilience);
        }
        _ => {
            push(CompositeAxis::Harmony);
            push(CompositeAxis::Balance);
        }
    }
    drive
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_engine_core::AxisValues;

    fn type_result(code: &str) -> TypeAxesResult {
        TypeAxesResult {
            code: code.parse().unwrap(),
            confidence: AxisValues::from_fn(|_| 0.5),
            ratio: AxisValues::from_fn(|_| 50),
        }
    }

    fn relational_result(top1: u8) -> RelationalResult {
        RelationalResult {
            top1: RelationalCategory::new(top1).unwrap(),
            top2: None,
            scores: [0.0; 9],
            confidence: 0.5,
        }
    }

    fn synthesizer() -> CompositeSynthesizer {
        CompositeSynthesizer::new(&CompositeConfig::default())
    }

    #[test]
    fn test_neutral_inputs_follow_big5_anchor() {
        let profile = synthesizer().synthesize(
            &Big5Scores::neutral(),
            &type_result("INFP"),
            &relational_result(1),
        );
        // Creation is driven by neither INFP letters nor category 1:
        // 0.7*50 + 0.2*50 + 0.1*50 = 50.
        assert_eq!(profile.creation, 50);
        // Sensitivity picks up the I drive: 0.7*50 + 0.2*sig(5) + 0.1*50,
        // sig(5) ~ 99.33 -> ~59.9.
        assert_eq!(profile.sensitivity, 60);
        // Balance anchors at 100 for neutral Big5 and takes the r1 drive:
        // 0.7*100 + 0.2*50 + 0.1*sig(4) -> ~89.8.
        assert_eq!(profile.balance, 90);
    }

    #[test]
    fn test_all_values_in_range_for_extreme_inputs() {
        let extremes = [
            Big5Scores {
                openness: 100,
                conscientiousness: 100,
                extraversion: 100,
                agreeableness: 100,
                neuroticism: 100,
            },
            Big5Scores {
                openness: 0,
                conscientiousness: 0,
                extraversion: 0,
                agreeableness: 0,
                neuroticism: 0,
            },
            Big5Scores::neutral(),
        ];
        let synthesizer = synthesizer();
        for big5 in extremes {
            for code in ["ESTJ", "INFP", "ENTP", "ISFJ"] {
                for category in 1..=9 {
                    let profile = synthesizer.synthesize(
                        &big5,
                        &type_result(code),
                        &relational_result(category),
                    );
                    for (_, value) in profile.iter() {
                        assert!(value <= 100);
                    }
                }
            }
        }
    }

    #[test]
    fn test_categorical_influence_is_capped() {
        // Same Big5 anchor, opposite categorical signals: the gap on any
        // axis can never exceed the combined categorical weight span.
        let synthesizer = synthesizer();
        let a = synthesizer.synthesize(
            &Big5Scores::neutral(),
            &type_result("ESTJ"),
            &relational_result(8),
        );
        let b = synthesizer.synthesize(
            &Big5Scores::neutral(),
            &type_result("INFP"),
            &relational_result(4),
        );
        for (axis, value) in a.iter() {
            let gap = i16::from(value) - i16::from(b.get(axis));
            assert!(gap.abs() <= 30, "axis {} gap {}", axis, gap);
        }
    }

    #[test]
    fn test_type_letters_move_their_axes() {
        let synthesizer = synthesizer();
        let extravert = synthesizer.synthesize(
            &Big5Scores::neutral(),
            &type_result("ESTP"),
            &relational_result(1),
        );
        let introvert = synthesizer.synthesize(
            &Big5Scores::neutral(),
            &type_result("ISTP"),
            &relational_result(1),
        );
        assert!(extravert.expression > introvert.expression);
        assert!(introvert.sensitivity > extravert.sensitivity);
    }

    #[test]
    fn test_weights_are_read_from_config() {
        let anchored = CompositeSynthesizer::new(&CompositeConfig {
            big5_weight: 1.0,
            type_weight: 0.0,
            relational_weight: 0.0,
            ..Default::default()
        });
        let profile = anchored.synthesize(
            &Big5Scores::neutral(),
            &type_result("ESTJ"),
            &relational_result(3),
        );
        // Pure anchor: direct-mapped axes sit exactly on the Big5 values.
        assert_eq!(profile.creation, 50);
        assert_eq!(profile.expression, 50);
        assert_eq!(profile.balance, 100);
    }

    #[test]
    fn test_squash_shape() {
        assert!((squash(0.0) - 50.0).abs() < 1e-4);
        assert!(squash(5.0) > 99.0);
        assert!(squash(-5.0) < 1.0);
        assert!(squash(100.0) <= 100.0);
    }
}
