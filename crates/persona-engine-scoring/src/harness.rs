//! Offline engine comparison harness.
//!
//! Runs named samples through two engine configurations and reduces the
//! composite profiles into per-dimension descriptive statistics, flagging
//! any dimension whose mean leaves the healthy band with a weight-tuning
//! recommendation. Diagnostic only: flags are warnings, never errors, and
//! the harness holds no state beyond its own append-only record log.

use chrono::{DateTime, Utc};
use persona_engine_core::{CompositeAxis, CompositeProfile, ItemCatalog, RawResponse, ScoreBundle};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{EngineConfig, HarnessConfig};
use crate::error::ScoreResult;
use crate::pipeline::ScoringEngine;

/// A named input protocol for the harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSample {
    pub name: String,
    pub response: RawResponse,
}

impl EngineSample {
    /// Creates a named sample.
    pub fn new(name: impl Into<String>, response: RawResponse) -> Self {
        Self {
            name: name.into(),
            response,
        }
    }
}

/// Which of the two configurations a record or flag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarnessSide {
    Primary,
    Candidate,
}

/// One scored sample under one configuration. Append-only within a harness
/// run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineRunRecord {
    pub sample_name: String,
    pub side: HarnessSide,
    pub bundle: ScoreBundle,
    pub composite: CompositeProfile,
    pub recorded_at: DateTime<Utc>,
}

/// Descriptive statistics for one composite dimension on one side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionStats {
    pub mean: f32,
    pub min: u8,
    pub max: u8,
}

/// A dimension whose mean left the healthy band, with a tuning suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionFlag {
    pub side: HarnessSide,
    pub axis: CompositeAxis,
    pub mean: f32,
    pub recommendation: String,
}

/// Statistics for all nine dimensions under one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SideReport {
    pub side: HarnessSide,
    pub engine_version: String,
    pub stats: Vec<(CompositeAxis, DimensionStats)>,
}

/// The harness output: both side reports plus out-of-band flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonReport {
    pub sample_count: usize,
    pub primary: SideReport,
    pub candidate: SideReport,
    pub flags: Vec<DimensionFlag>,
}

/// Compares two engine configurations over a sample stream.
///
/// # Example
///
/// ```
/// use persona_engine_core::RawResponse;
/// use persona_engine_scoring::config::EngineConfig;
/// use persona_engine_scoring::harness::{ComparisonHarness, EngineSample};
///
/// let mut harness = ComparisonHarness::try_new(
///     EngineConfig::anchored_preset(),
///     EngineConfig::categorical_preset(),
/// )
/// .unwrap();
/// harness.observe(&EngineSample::new("neutral", RawResponse::uniform(4))).unwrap();
/// let report = harness.finish();
/// assert_eq!(report.sample_count, 1);
/// ```
#[derive(Debug)]
pub struct ComparisonHarness {
    primary: ScoringEngine,
    candidate: ScoringEngine,
    band: HarnessConfig,
    records: Vec<EngineRunRecord>,
}

impl ComparisonHarness {
    /// Builds a harness over the built-in catalog. The healthy band comes
    /// from the primary configuration.
    pub fn try_new(primary: EngineConfig, candidate: EngineConfig) -> ScoreResult<Self> {
        Self::try_new_with_catalog(primary, candidate, ItemCatalog::builtin().clone())
    }

    /// Builds a harness over an explicit catalog.
    pub fn try_new_with_catalog(
        primary: EngineConfig,
        candidate: EngineConfig,
        catalog: ItemCatalog,
    ) -> ScoreResult<Self> {
        let band = primary.harness;
        Ok(Self {
            primary: ScoringEngine::try_new(primary, catalog.clone())?,
            candidate: ScoringEngine::try_new(candidate, catalog)?,
            band,
            records: Vec::new(),
        })
    }

    /// Scores one sample under both configurations and appends the records.
    pub fn observe(&mut self, sample: &EngineSample) -> ScoreResult<()> {
        for (side, engine) in [
            (HarnessSide::Primary, &self.primary),
            (HarnessSide::Candidate, &self.candidate),
        ] {
            let outcome = engine.score(&sample.response)?;
            self.records.push(EngineRunRecord {
                sample_name: sample.name.clone(),
                side,
                bundle: outcome.bundle,
                composite: outcome.composite,
                recorded_at: Utc::now(),
            });
        }
        Ok(())
    }

    /// The records accumulated so far.
    pub fn records(&self) -> &[EngineRunRecord] {
        &self.records
    }

    /// Reduces the accumulated records into the comparison report.
    pub fn finish(&self) -> ComparisonReport {
        let sample_count = self.records.len() / 2;
        let primary = self.side_report(HarnessSide::Primary, &self.primary);
        let candidate = self.side_report(HarnessSide::Candidate, &self.candidate);

        let mut flags = Vec::new();
        if sample_count > 0 {
            for report in [&primary, &candidate] {
                for (axis, stats) in &report.stats {
                    if let Some(flag) = self.flag_for(report.side, *axis, stats.mean) {
                        flags.push(flag);
                    }
                }
            }
        }

        ComparisonReport {
            sample_count,
            primary,
            candidate,
            flags,
        }
    }

    /// Observes every sample, then reduces. The pure-reducer entry point.
    pub fn run<'a, I>(&mut self, samples: I) -> ScoreResult<ComparisonReport>
    where
        I: IntoIterator<Item = &'a EngineSample>,
    {
        for sample in samples {
            self.observe(sample)?;
        }
        Ok(self.finish())
    }

    fn side_report(&self, side: HarnessSide, engine: &ScoringEngine) -> SideReport {
        let composites: Vec<&CompositeProfile> = self
            .records
            .iter()
            .filter(|r| r.side == side)
            .map(|r| &r.composite)
            .collect();

        let stats = CompositeAxis::all()
            .into_iter()
            .map(|axis| {
                let values: Vec<u8> = composites.iter().map(|c| c.get(axis)).collect();
                (axis, reduce(&values))
            })
            .collect();

        SideReport {
            side,
            engine_version: engine.config().engine_version.clone(),
            stats,
        }
    }

    fn flag_for(&self, side: HarnessSide, axis: CompositeAxis, mean: f32) -> Option<DimensionFlag> {
        let recommendation = if mean > self.band.healthy_high {
            format!(
                "{} mean {:.2} is above the healthy band ({}..{}); consider reducing big5_weight or the axis drive",
                axis, mean, self.band.healthy_low, self.band.healthy_high
            )
        } else if mean < self.band.healthy_low {
            format!(
                "{} mean {:.2} is below the healthy band ({}..{}); consider increasing big5_weight",
                axis, mean, self.band.healthy_low, self.band.healthy_high
            )
        } else {
            return None;
        };
        warn!(?side, %axis, mean, "composite dimension outside healthy band");
        Some(DimensionFlag {
            side,
            axis,
            mean,
            recommendation,
        })
    }
}

fn reduce(values: &[u8]) -> DimensionStats {
    if values.is_empty() {
        return DimensionStats {
            mean: 0.0,
            min: 0,
            max: 0,
        };
    }
    let sum: u32 = values.iter().map(|&v| u32::from(v)).sum();
    DimensionStats {
        mean: sum as f32 / values.len() as f32,
        min: *values.iter().min().expect("nonempty"),
        max: *values.iter().max().expect("nonempty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<EngineSample> {
        vec![
            EngineSample::new("all-low", RawResponse::uniform(1)),
            EngineSample::new("neutral", RawResponse::uniform(4)),
            EngineSample::new("all-high", RawResponse::uniform(7)),
        ]
    }

    #[test]
    fn test_run_produces_stats_for_both_sides() {
        let mut harness = ComparisonHarness::try_new(
            EngineConfig::default(),
            EngineConfig::categorical_preset(),
        )
        .unwrap();
        let samples = samples();
        let report = harness.run(&samples).unwrap();

        assert_eq!(report.sample_count, 3);
        assert_eq!(report.primary.stats.len(), 9);
        assert_eq!(report.candidate.stats.len(), 9);
        for (_, stats) in &report.primary.stats {
            assert!(stats.min <= stats.max);
            assert!(stats.mean >= f32::from(stats.min));
            assert!(stats.mean <= f32::from(stats.max));
        }
    }

    #[test]
    fn test_records_are_appended_per_side() {
        let mut harness =
            ComparisonHarness::try_new(EngineConfig::default(), EngineConfig::default()).unwrap();
        harness
            .observe(&EngineSample::new("neutral", RawResponse::uniform(4)))
            .unwrap();
        assert_eq!(harness.records().len(), 2);
        assert_eq!(harness.records()[0].side, HarnessSide::Primary);
        assert_eq!(harness.records()[1].side, HarnessSide::Candidate);
        assert_eq!(harness.records()[0].sample_name, "neutral");
    }

    #[test]
    fn test_identical_configs_produce_identical_stats() {
        let mut harness =
            ComparisonHarness::try_new(EngineConfig::default(), EngineConfig::default()).unwrap();
        let samples = samples();
        let report = harness.run(&samples).unwrap();
        assert_eq!(report.primary.stats, report.candidate.stats);
    }

    #[test]
    fn test_out_of_band_dimension_is_flagged_not_fatal() {
        // A narrow band forces flags; the run still succeeds.
        let mut primary = EngineConfig::default();
        primary.harness.healthy_low = 49.0;
        primary.harness.healthy_high = 51.0;
        let mut harness =
            ComparisonHarness::try_new(primary, EngineConfig::default()).unwrap();
        let samples = samples();
        let report = harness.run(&samples).unwrap();
        assert!(!report.flags.is_empty());
        let flag = &report.flags[0];
        assert!(flag.recommendation.contains("healthy band"));
    }

    #[test]
    fn test_empty_run_has_no_flags() {
        let harness =
            ComparisonHarness::try_new(EngineConfig::default(), EngineConfig::default()).unwrap();
        let report = harness.finish();
        assert_eq!(report.sample_count, 0);
        assert!(report.flags.is_empty());
    }
}
