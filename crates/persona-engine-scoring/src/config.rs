//! Engine configuration types.
//!
//! All calibration lives here: the Likert scale bounds, the composite blend
//! weights with their squash steepness, the boundary band used by the
//! refinement advisor, and the healthy band the comparison harness checks.
//! Nothing outside this module hard-codes those numbers; the comparison
//! harness exists precisely to run two of these configurations against each
//! other.

use persona_engine_core::DEFAULT_SCALE_MAX;
use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
///
/// # Example
///
/// ```
/// use persona_engine_scoring::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.scale.scale_max, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EngineConfig {
    /// Version string mixed into the idempotency hash. Two configurations
    /// that should produce distinct stored results must differ here.
    pub engine_version: String,

    /// Likert scale settings.
    pub scale: ScaleConfig,

    /// Composite synthesizer blend weights and squash steepness.
    pub composite: CompositeConfig,

    /// Boundary band for the refinement advisor.
    pub boundary: BoundaryConfig,

    /// Healthy band for the comparison harness.
    pub harness: HarnessConfig,
}

impl EngineConfig {
    /// Configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset that leans harder on the continuous Big5 anchor.
    ///
    /// Useful as the "conservative" side of a harness comparison.
    pub fn anchored_preset() -> Self {
        Self {
            composite: CompositeConfig {
                big5_weight: 0.8,
                type_weight: 0.15,
                relational_weight: 0.05,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Preset that gives the categorical signals more room.
    ///
    /// Useful as the "experimental" side of a harness comparison.
    pub fn categorical_preset() -> Self {
        Self {
            composite: CompositeConfig {
                big5_weight: 0.6,
                type_weight: 0.25,
                relational_weight: 0.15,
                alpha: 3.0,
                beta: 2.5,
            },
            ..Default::default()
        }
    }

    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.engine_version.is_empty() {
            return Err("engine_version must not be empty".to_string());
        }
        self.scale.validate()?;
        self.composite.validate()?;
        self.boundary.validate()?;
        self.harness.validate()?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engine_version: default_engine_version(),
            scale: ScaleConfig::default(),
            composite: CompositeConfig::default(),
            boundary: BoundaryConfig::default(),
            harness: HarnessConfig::default(),
        }
    }
}

/// Default engine version: the crate name and version.
pub fn default_engine_version() -> String {
    concat!("persona-engine/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Likert scale settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScaleConfig {
    /// Highest answer value; answers are `1..=scale_max`.
    pub scale_max: u8,
}

impl ScaleConfig {
    /// The scale midpoint, `(scale_max + 1) / 2`. A midpoint answer
    /// normalizes to a signed value of exactly 0.
    #[inline]
    pub fn midpoint(&self) -> f32 {
        (f32::from(self.scale_max) + 1.0) / 2.0
    }

    /// Validate the scale configuration.
    ///
    /// The scale must be odd so a neutral midpoint answer exists, and at
    /// least 3 so the signed rescale has a nonzero denominator.
    pub fn validate(&self) -> Result<(), String> {
        if self.scale_max < 3 {
            return Err(format!("scale_max must be >= 3, got {}", self.scale_max));
        }
        if self.scale_max % 2 == 0 {
            return Err(format!(
                "scale_max must be odd so the scale has a midpoint, got {}",
                self.scale_max
            ));
        }
        Ok(())
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            scale_max: DEFAULT_SCALE_MAX,
        }
    }
}

/// Composite synthesizer calibration.
///
/// Each composite axis blends a Big5-anchored base with squashed categorical
/// contributions: `w_b * base + w_t * sig(alpha * d_t) + w_r * sig(beta *
/// d_r)`. The squash saturates, so even a maximal categorical drive moves an
/// axis by at most `(w_t + w_r) * 100` points around the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CompositeConfig {
    /// Weight of the Big5 linear base. Range: `[0, 1]`.
    pub big5_weight: f32,

    /// Weight of the squashed type-axis contribution. Range: `[0, 1]`.
    pub type_weight: f32,

    /// Weight of the squashed relational contribution. Range: `[0, 1]`.
    pub relational_weight: f32,

    /// Steepness of the type-axis squash. Range: `(0, 20]`.
    pub alpha: f32,

    /// Steepness of the relational squash. Range: `(0, 20]`.
    pub beta: f32,
}

impl CompositeConfig {
    /// Validate the composite configuration.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("big5_weight", self.big5_weight),
            ("type_weight", self.type_weight),
            ("relational_weight", self.relational_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }
        let sum = self.big5_weight + self.type_weight + self.relational_weight;
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!("blend weights must sum to 1.0, got {}", sum));
        }
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !(value > 0.0 && value <= 20.0) {
                return Err(format!("{} must be in (0, 20], got {}", name, value));
            }
        }
        Ok(())
    }
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            big5_weight: 0.7,
            type_weight: 0.2,
            relational_weight: 0.1,
            alpha: 5.0,
            beta: 4.0,
        }
    }
}

/// Boundary band for type-axis reliability.
///
/// An axis whose ratio falls inside `low..=high` is a boundary case: the
/// categorical decision is unreliable and the refinement follow-up is
/// advised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BoundaryConfig {
    /// Inclusive lower edge of the band.
    pub low: u8,
    /// Inclusive upper edge of the band.
    pub high: u8,
}

impl BoundaryConfig {
    /// True when the ratio lies inside the boundary band.
    #[inline]
    pub fn contains(&self, ratio: u8) -> bool {
        (self.low..=self.high).contains(&ratio)
    }

    /// Validate the boundary configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.low > self.high {
            return Err(format!(
                "boundary low ({}) must be <= high ({})",
                self.low, self.high
            ));
        }
        if self.high > 100 {
            return Err(format!("boundary high must be <= 100, got {}", self.high));
        }
        Ok(())
    }
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self { low: 45, high: 55 }
    }
}

/// Healthy band the comparison harness checks composite means against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct HarnessConfig {
    /// Means below this are flagged as compressed. Range: `[0, 100)`.
    pub healthy_low: f32,
    /// Means above this are flagged as saturated. Range: `(0, 100]`.
    pub healthy_high: f32,
}

impl HarnessConfig {
    /// Validate the harness configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.healthy_low)
            || !(0.0..=100.0).contains(&self.healthy_high)
        {
            return Err(format!(
                "healthy band must lie within [0, 100], got {}..{}",
                self.healthy_low, self.healthy_high
            ));
        }
        if self.healthy_low >= self.healthy_high {
            return Err(format!(
                "healthy_low ({}) must be < healthy_high ({})",
                self.healthy_low, self.healthy_high
            ));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            healthy_low: 20.0,
            healthy_high: 80.0,
        }
    }
}
