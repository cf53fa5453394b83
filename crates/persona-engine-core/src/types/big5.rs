//! Five-factor (Big5 / OCEAN) trait types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five personality dimensions of the OCEAN model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Big5Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Big5Trait {
    /// All five traits in canonical O-C-E-A-N order.
    #[inline]
    pub fn all() -> [Big5Trait; 5] {
        [
            Self::Openness,
            Self::Conscientiousness,
            Self::Extraversion,
            Self::Agreeableness,
            Self::Neuroticism,
        ]
    }

    /// Position of this trait in the canonical order (0..5).
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Openness => 0,
            Self::Conscientiousness => 1,
            Self::Extraversion => 2,
            Self::Agreeableness => 3,
            Self::Neuroticism => 4,
        }
    }

    /// Lowercase trait name as used in serialized payloads.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::Extraversion => "extraversion",
            Self::Agreeableness => "agreeableness",
            Self::Neuroticism => "neuroticism",
        }
    }
}

impl fmt::Display for Big5Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Big5 scores on the 0..=100 scale, one per dimension.
///
/// A dimension with no contributing catalog items scores the neutral 50
/// rather than erroring; the scoring pipeline is total over valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Big5Scores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl Big5Scores {
    /// All dimensions at the neutral midpoint.
    pub fn neutral() -> Self {
        Self {
            openness: 50,
            conscientiousness: 50,
            extraversion: 50,
            agreeableness: 50,
            neuroticism: 50,
        }
    }

    /// Score for a single dimension.
    #[inline]
    pub fn get(&self, trait_key: Big5Trait) -> u8 {
        match trait_key {
            Big5Trait::Openness => self.openness,
            Big5Trait::Conscientiousness => self.conscientiousness,
            Big5Trait::Extraversion => self.extraversion,
            Big5Trait::Agreeableness => self.agreeableness,
            Big5Trait::Neuroticism => self.neuroticism,
        }
    }

    /// Scores as an O-C-E-A-N ordered array.
    #[inline]
    pub fn to_array(&self) -> [u8; 5] {
        [
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism,
        ]
    }

    /// Scores as an O-C-E-A-N ordered float vector, for distance math.
    #[inline]
    pub fn to_vector(&self) -> [f32; 5] {
        self.to_array().map(f32::from)
    }
}

impl Default for Big5Scores {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let order: Vec<&str> = Big5Trait::all().iter().map(|t| t.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "openness",
                "conscientiousness",
                "extraversion",
                "agreeableness",
                "neuroticism"
            ]
        );
        for (i, trait_key) in Big5Trait::all().into_iter().enumerate() {
            assert_eq!(trait_key.index(), i);
        }
    }

    #[test]
    fn test_neutral_scores() {
        let scores = Big5Scores::neutral();
        assert_eq!(scores.to_array(), [50; 5]);
        for trait_key in Big5Trait::all() {
            assert_eq!(scores.get(trait_key), 50);
        }
    }

    #[test]
    fn test_vector_conversion() {
        let scores = Big5Scores {
            openness: 80,
            conscientiousness: 20,
            extraversion: 50,
            agreeableness: 65,
            neuroticism: 35,
        };
        assert_eq!(scores.to_vector(), [80.0, 20.0, 50.0, 65.0, 35.0]);
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let json = r#"{"openness":50,"conscientiousness":50,"extraversion":50,
                       "agreeableness":50,"neuroticism":50,"charisma":99}"#;
        assert!(serde_json::from_str::<Big5Scores>(json).is_err());
    }
}
