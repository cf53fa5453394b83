//! Narrative taxonomy identifiers: hero, tribe and stone codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hero identifier from the 144-entry hero table (16 types × 9 relational
/// categories), e.g. `architect-of-logic`. The mapper also owns a default
/// code so resolution is total even over malformed table data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroCode(String);

impl HeroCode {
    /// Wraps a hero code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeroCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HeroCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// The twelve tribes plus the `Nomad` fallback used when a type has no
/// table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TribeCode {
    Lumin,
    Varno,
    Aurin,
    Neva,
    Silva,
    Sera,
    Eira,
    Nova,
    Tenbra,
    Verma,
    Dras,
    Soran,
    /// Default tribe for unmapped types.
    Nomad,
}

impl TribeCode {
    /// The twelve real tribes, in the birth-date wheel order (slot 0 first).
    #[inline]
    pub fn wheel() -> [TribeCode; 12] {
        [
            Self::Tenbra,
            Self::Verma,
            Self::Silva,
            Self::Sera,
            Self::Eira,
            Self::Aurin,
            Self::Nova,
            Self::Soran,
            Self::Dras,
            Self::Varno,
            Self::Lumin,
            Self::Neva,
        ]
    }

    /// Lowercase tribe name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lumin => "lumin",
            Self::Varno => "varno",
            Self::Aurin => "aurin",
            Self::Neva => "neva",
            Self::Silva => "silva",
            Self::Sera => "sera",
            Self::Eira => "eira",
            Self::Nova => "nova",
            Self::Tenbra => "tenbra",
            Self::Verma => "verma",
            Self::Dras => "dras",
            Self::Soran => "soran",
            Self::Nomad => "nomad",
        }
    }
}

impl fmt::Display for TribeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The twelve stones, in catalog order. Catalog order is the tie-break for
/// nearest-profile matching, so the variant order here is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoneCode {
    Arche,
    Ignis,
    Neia,
    Verdi,
    Noctus,
    Aurea,
    Mechar,
    Elara,
    Myr,
    Zarc,
    Lumer,
    Xain,
}

impl StoneCode {
    /// All stones in catalog order.
    #[inline]
    pub fn all() -> [StoneCode; 12] {
        [
            Self::Arche,
            Self::Ignis,
            Self::Neia,
            Self::Verdi,
            Self::Noctus,
            Self::Aurea,
            Self::Mechar,
            Self::Elara,
            Self::Myr,
            Self::Zarc,
            Self::Lumer,
            Self::Xain,
        ]
    }

    /// Lowercase stone name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arche => "arche",
            Self::Ignis => "ignis",
            Self::Neia => "neia",
            Self::Verdi => "verdi",
            Self::Noctus => "noctus",
            Self::Aurea => "aurea",
            Self::Mechar => "mechar",
            Self::Elara => "elara",
            Self::Myr => "myr",
            Self::Zarc => "zarc",
            Self::Lumer => "lumer",
            Self::Xain => "xain",
        }
    }
}

impl fmt::Display for StoneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade of a stone match, derived from how confident the categorical
/// results backing it were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoneQuality {
    Brilliance,
    Clarity,
    Durability,
}

/// The full deterministic taxonomy lookup output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomyResult {
    /// Hero from the (type, primary relational category) table.
    pub hero: HeroCode,
    /// Tribe from the 16-entry type table.
    pub tribe: TribeCode,
    /// Nearest stone by Big5 profile distance.
    pub stone: StoneCode,
    /// Grade of the stone match.
    pub stone_quality: StoneQuality,
    /// Tribe derived from the birth date, when one was supplied.
    pub birth_tribe: Option<TribeCode>,
}
