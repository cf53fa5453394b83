//! Nine-axis composite profile types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine composite dimensions, in fixed profile order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeAxis {
    Creation,
    Will,
    Sensitivity,
    Harmony,
    Expression,
    Insight,
    Resilience,
    Balance,
    Growth,
}

impl CompositeAxis {
    /// All nine axes in profile order.
    #[inline]
    pub fn all() -> [CompositeAxis; 9] {
        [
            Self::Creation,
            Self::Will,
            Self::Sensitivity,
            Self::Harmony,
            Self::Expression,
            Self::Insight,
            Self::Resilience,
            Self::Balance,
            Self::Growth,
        ]
    }

    /// Position in the profile (0..9).
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Creation => 0,
            Self::Will => 1,
            Self::Sensitivity => 2,
            Self::Harmony => 3,
            Self::Expression => 4,
            Self::Insight => 5,
            Self::Resilience => 6,
            Self::Balance => 7,
            Self::Growth => 8,
        }
    }

    /// Lowercase axis label as used in serialized payloads.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creation => "creation",
            Self::Will => "will",
            Self::Sensitivity => "sensitivity",
            Self::Harmony => "harmony",
            Self::Expression => "expression",
            Self::Insight => "insight",
            Self::Resilience => "resilience",
            Self::Balance => "balance",
            Self::Growth => "growth",
        }
    }
}

impl fmt::Display for CompositeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The derived nine-dimension profile, each value clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositeProfile {
    pub creation: u8,
    pub will: u8,
    pub sensitivity: u8,
    pub harmony: u8,
    pub expression: u8,
    pub insight: u8,
    pub resilience: u8,
    pub balance: u8,
    pub growth: u8,
}

impl CompositeProfile {
    /// Builds a profile from values in [`CompositeAxis::all`] order.
    pub fn from_array(values: [u8; 9]) -> Self {
        Self {
            creation: values[0],
            will: values[1],
            sensitivity: values[2],
            harmony: values[3],
            expression: values[4],
            insight: values[5],
            resilience: values[6],
            balance: values[7],
            growth: values[8],
        }
    }

    /// Value for a single axis.
    #[inline]
    pub fn get(&self, axis: CompositeAxis) -> u8 {
        match axis {
            CompositeAxis::Creation => self.creation,
            CompositeAxis::Will => self.will,
            CompositeAxis::Sensitivity => self.sensitivity,
            CompositeAxis::Harmony => self.harmony,
            CompositeAxis::Expression => self.expression,
            CompositeAxis::Insight => self.insight,
            CompositeAxis::Resilience => self.resilience,
            CompositeAxis::Balance => self.balance,
            CompositeAxis::Growth => self.growth,
        }
    }

    /// Values in [`CompositeAxis::all`] order.
    #[inline]
    pub fn to_array(&self) -> [u8; 9] {
        [
            self.creation,
            self.will,
            self.sensitivity,
            self.harmony,
            self.expression,
            self.insight,
            self.resilience,
            self.balance,
            self.growth,
        ]
    }

    /// Iterates `(axis, value)` pairs in profile order.
    pub fn iter(&self) -> impl Iterator<Item = (CompositeAxis, u8)> + '_ {
        CompositeAxis::all().into_iter().map(|axis| (axis, self.get(axis)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_order_matches_index() {
        for (i, axis) in CompositeAxis::all().into_iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_array_round_trip() {
        let values = [10, 20, 30, 40, 50, 60, 70, 80, 90];
        let profile = CompositeProfile::from_array(values);
        assert_eq!(profile.to_array(), values);
        assert_eq!(profile.get(CompositeAxis::Balance), 80);
    }

    #[test]
    fn test_iter_pairs() {
        let profile = CompositeProfile::from_array([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let pairs: Vec<(CompositeAxis, u8)> = profile.iter().collect();
        assert_eq!(pairs.len(), 9);
        assert_eq!(pairs[0], (CompositeAxis::Creation, 1));
        assert_eq!(pairs[8], (CompositeAxis::Growth, 9));
    }

    #[test]
    fn test_serde_labels() {
        let profile = CompositeProfile::from_array([50; 9]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["sensitivity"], 50);
        assert_eq!(json["growth"], 50);
    }
}
