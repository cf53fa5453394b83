//! Categorical type-axis types: the four binary axes and the 4-letter code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four type axes in fixed output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Extraversion vs Introversion
    EI,
    /// Sensing vs Intuition
    SN,
    /// Thinking vs Feeling
    TF,
    /// Judging vs Perceiving
    JP,
}

impl Axis {
    /// All axes in the order their letters appear in a type code.
    #[inline]
    pub fn all() -> [Axis; 4] {
        [Self::EI, Self::SN, Self::TF, Self::JP]
    }

    /// Position of this axis in the type code (0..4).
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::EI => 0,
            Self::SN => 1,
            Self::TF => 2,
            Self::JP => 3,
        }
    }

    /// The two pole letters of this axis, first pole first.
    #[inline]
    pub fn poles(&self) -> (char, char) {
        match self {
            Self::EI => ('E', 'I'),
            Self::SN => ('S', 'N'),
            Self::TF => ('T', 'F'),
            Self::JP => ('J', 'P'),
        }
    }

    /// Axis name as rendered in payloads ("EI", "SN", "TF", "JP").
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EI => "EI",
            Self::SN => "SN",
            Self::TF => "TF",
            Self::JP => "JP",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pole of a type axis. Catalog items are tagged with the pole whose
/// accumulator their answers feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisPole {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl AxisPole {
    /// The axis this pole belongs to.
    #[inline]
    pub fn axis(&self) -> Axis {
        match self {
            Self::E | Self::I => Axis::EI,
            Self::S | Self::N => Axis::SN,
            Self::T | Self::F => Axis::TF,
            Self::J | Self::P => Axis::JP,
        }
    }

    /// True for the first pole of the pair (E, S, T, J).
    #[inline]
    pub fn is_first(&self) -> bool {
        matches!(self, Self::E | Self::S | Self::T | Self::J)
    }

    /// The single-letter form of this pole.
    #[inline]
    pub fn letter(&self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::S => 'S',
            Self::N => 'N',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }
}

/// Error produced when parsing a 4-letter type code fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type code {input:?}: expected 4 letters from {{E,I}}{{S,N}}{{T,F}}{{J,P}}")]
pub struct TypeCodeParseError {
    /// The rejected input.
    pub input: String,
}

/// A validated 4-letter type code such as `INFP` or `ESTJ`.
///
/// The letters always come from `{E,I}{S,N}{T,F}{J,P}` in that axis order;
/// construction enforces it, so downstream lookups over type codes are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode {
    letters: [char; 4],
}

impl TypeCode {
    /// Builds a code from one letter per axis, validating each position.
    pub fn new(letters: [char; 4]) -> Result<Self, TypeCodeParseError> {
        for (axis, letter) in Axis::all().into_iter().zip(letters) {
            let (first, second) = axis.poles();
            if letter != first && letter != second {
                return Err(TypeCodeParseError {
                    input: letters.iter().collect(),
                });
            }
        }
        Ok(Self { letters })
    }

    /// The letter occupying the given axis position.
    #[inline]
    pub fn letter(&self, axis: Axis) -> char {
        self.letters[axis.index()]
    }

    /// True when the axis resolved to its first pole (E, S, T or J).
    #[inline]
    pub fn is_first_pole(&self, axis: Axis) -> bool {
        self.letter(axis) == axis.poles().0
    }

    /// Returns a copy with one axis letter replaced.
    ///
    /// The replacement must be a letter of that axis; anything else leaves
    /// the code unchanged, keeping amendment total.
    pub fn with_letter(&self, axis: Axis, letter: char) -> Self {
        let (first, second) = axis.poles();
        if letter != first && letter != second {
            return *self;
        }
        let mut letters = self.letters;
        letters[axis.index()] = letter;
        Self { letters }
    }

    /// All 16 possible type codes, in a fixed enumeration order.
    pub fn all() -> Vec<TypeCode> {
        let mut codes = Vec::with_capacity(16);
        for &ei in &['E', 'I'] {
            for &sn in &['S', 'N'] {
                for &tf in &['T', 'F'] {
                    for &jp in &['J', 'P'] {
                        codes.push(Self {
                            letters: [ei, sn, tf, jp],
                        });
                    }
                }
            }
        }
        codes
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.letters {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = TypeCodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper: Vec<char> = s.trim().to_uppercase().chars().collect();
        let letters: [char; 4] = upper.try_into().map_err(|_| TypeCodeParseError {
            input: s.to_string(),
        })?;
        Self::new(letters)
    }
}

impl TryFrom<String> for TypeCode {
    type Error = TypeCodeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}

/// One value per type axis, in fixed EI/SN/TF/JP order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisValues<T> {
    pub ei: T,
    pub sn: T,
    pub tf: T,
    pub jp: T,
}

impl<T: Copy> AxisValues<T> {
    /// Builds the struct by evaluating `f` once per axis.
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            ei: f(Axis::EI),
            sn: f(Axis::SN),
            tf: f(Axis::TF),
            jp: f(Axis::JP),
        }
    }

    /// Value for a single axis.
    #[inline]
    pub fn get(&self, axis: Axis) -> T {
        match axis {
            Axis::EI => self.ei,
            Axis::SN => self.sn,
            Axis::TF => self.tf,
            Axis::JP => self.jp,
        }
    }

    /// Values in canonical axis order.
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [self.ei, self.sn, self.tf, self.jp]
    }
}

/// Full categorical type-axis result.
///
/// - `code`: the winning 4-letter type
/// - `confidence`: per-axis decision confidence in `[0, 1]`
/// - `ratio`: per-axis percentage (0..=100) toward the first pole
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeAxesResult {
    pub code: TypeCode,
    pub confidence: AxisValues<f32>,
    pub ratio: AxisValues<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_poles_and_order() {
        assert_eq!(Axis::EI.poles(), ('E', 'I'));
        assert_eq!(Axis::SN.poles(), ('S', 'N'));
        assert_eq!(Axis::TF.poles(), ('T', 'F'));
        assert_eq!(Axis::JP.poles(), ('J', 'P'));
        assert_eq!(
            Axis::all().map(|a| a.index()),
            [0, 1, 2, 3]
        );
    }

    #[test]
    fn test_pole_axis_membership() {
        assert_eq!(AxisPole::E.axis(), Axis::EI);
        assert_eq!(AxisPole::N.axis(), Axis::SN);
        assert!(AxisPole::T.is_first());
        assert!(!AxisPole::P.is_first());
        assert_eq!(AxisPole::F.letter(), 'F');
    }

    #[test]
    fn test_type_code_parse_and_display() {
        let code: TypeCode = "infp".parse().unwrap();
        assert_eq!(code.to_string(), "INFP");
        assert_eq!(code.letter(Axis::EI), 'I');
        assert!(!code.is_first_pole(Axis::EI));
        assert!(!code.is_first_pole(Axis::TF));
    }

    #[test]
    fn test_type_code_rejects_bad_letters() {
        assert!("XXXX".parse::<TypeCode>().is_err());
        assert!("ENT".parse::<TypeCode>().is_err());
        assert!("ENTJX".parse::<TypeCode>().is_err());
        // Right letters, wrong positions.
        assert!("IENT".parse::<TypeCode>().is_err());
    }

    #[test]
    fn test_with_letter_amends_one_axis() {
        let code: TypeCode = "ISTJ".parse().unwrap();
        let amended = code.with_letter(Axis::EI, 'E');
        assert_eq!(amended.to_string(), "ESTJ");
        // Invalid letter for the axis leaves the code untouched.
        assert_eq!(code.with_letter(Axis::EI, 'N'), code);
    }

    #[test]
    fn test_all_sixteen_codes() {
        let all = TypeCode::all();
        assert_eq!(all.len(), 16);
        let unique: std::collections::HashSet<String> =
            all.iter().map(|c| c.to_string()).collect();
        assert_eq!(unique.len(), 16);
        assert!(unique.contains("ESTJ"));
        assert!(unique.contains("INFP"));
    }

    #[test]
    fn test_axis_values_accessors() {
        let values = AxisValues::from_fn(|axis| axis.index() as u8);
        assert_eq!(values.to_array(), [0, 1, 2, 3]);
        assert_eq!(values.get(Axis::TF), 2);
    }

    #[test]
    fn test_type_code_serde_as_string() {
        let code: TypeCode = "ENTP".parse().unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"ENTP\"");
        let back: TypeCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<TypeCode>("\"QQQQ\"").is_err());
    }
}
