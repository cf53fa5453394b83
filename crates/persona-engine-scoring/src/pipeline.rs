//! The scoring pipeline orchestrator.
//!
//! Wires the stages in their fixed order: normalizer → the three trait
//! scorers → composite synthesizer → taxonomy mapper. The engine itself is
//! pure and holds only immutable configuration, so a single instance can be
//! shared freely across threads.

use chrono::NaiveDate;
use persona_engine_core::{
    Axis, Big5Trait, CompositeAxis, CompositeProfile, ItemCatalog, RawResponse, ScoreBundle,
    TaxonomyResult,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::composite::CompositeSynthesizer;
use crate::config::EngineConfig;
use crate::error::{ScoreError, ScoreResult};
use crate::idempotency::AnswerHash;
use crate::normalizer::{AnswerNormalizer, NormalizedAnswer};
use crate::refine::RefinementAdvisor;
use crate::scorers::{display_shares, score_big5, score_relational, score_type_axes};
use crate::taxonomy::TaxonomyMapper;

/// Everything one scoring run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreOutcome {
    /// Output of the three trait scorers.
    pub bundle: ScoreBundle,
    /// The blended nine-axis profile.
    pub composite: CompositeProfile,
    /// Narrative taxonomy identifiers.
    pub taxonomy: TaxonomyResult,
    /// Content hash of the answers under this engine version.
    pub hash: AnswerHash,
    /// Engine version the run was computed with.
    pub engine_version: String,
}

impl ScoreOutcome {
    /// Re-checks every output range invariant, for defense at the
    /// persistence boundary. A freshly computed outcome always passes; this
    /// exists to vet outcomes rehydrated from storage.
    pub fn validate(&self) -> Result<(), String> {
        for trait_key in Big5Trait::all() {
            let value = self.bundle.big5.get(trait_key);
            if value > 100 {
                return Err(format!("big5 {} out of range: {}", trait_key, value));
            }
        }
        for axis in Axis::all() {
            let confidence = self.bundle.type_axes.confidence.get(axis);
            if !(0.0..=1.0).contains(&confidence) {
                return Err(format!("axis {} confidence out of range: {}", axis, confidence));
            }
            if self.bundle.type_axes.ratio.get(axis) > 100 {
                return Err(format!("axis {} ratio out of range", axis));
            }
        }
        if !(0.0..=1.0).contains(&self.bundle.relational.confidence) {
            return Err(format!(
                "relational confidence out of range: {}",
                self.bundle.relational.confidence
            ));
        }
        let share_sum: f32 = self.bundle.relational_shares.iter().sum();
        if (share_sum - 100.0).abs() > 0.01 {
            return Err(format!("relational shares sum to {}", share_sum));
        }
        for axis in CompositeAxis::all() {
            if self.composite.get(axis) > 100 {
                return Err(format!("composite {} out of range", axis));
            }
        }
        if self.engine_version.is_empty() {
            return Err("empty engine version".to_string());
        }
        Ok(())
    }
}

/// The assembled scoring engine.
///
/// # Example
///
/// ```
/// use persona_engine_core::RawResponse;
/// use persona_engine_scoring::pipeline::ScoringEngine;
///
/// let engine = ScoringEngine::with_defaults();
/// let outcome = engine.score(&RawResponse::uniform(4)).unwrap();
/// assert_eq!(outcome.bundle.big5.openness, 50);
/// ```
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: EngineConfig,
    catalog: ItemCatalog,
    taxonomy: TaxonomyMapper,
    synthesizer: CompositeSynthesizer,
}

impl ScoringEngine {
    /// Creates an engine, panicking on invalid configuration. Use
    /// [`ScoringEngine::try_new`] for fallible construction.
    pub fn new(config: EngineConfig, catalog: ItemCatalog) -> Self {
        Self::try_new(config, catalog).expect("engine configuration validation failed")
    }

    /// Creates an engine, validating the configuration and catalog.
    pub fn try_new(config: EngineConfig, catalog: ItemCatalog) -> ScoreResult<Self> {
        config.validate().map_err(ScoreError::Config)?;
        catalog.validate().map_err(ScoreError::Config)?;
        let synthesizer = CompositeSynthesizer::new(&config.composite);
        Ok(Self {
            config,
            catalog,
            taxonomy: TaxonomyMapper::default(),
            synthesizer,
        })
    }

    /// Default configuration over the built-in catalog and tables.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default(), ItemCatalog::builtin().clone())
    }

    /// Replaces the taxonomy tables, for fixture injection.
    pub fn with_taxonomy(mut self, taxonomy: TaxonomyMapper) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The refinement advisor for this engine's boundary band.
    pub fn refinement_advisor(&self) -> RefinementAdvisor {
        RefinementAdvisor::new(&self.config.boundary)
    }

    /// Content hash of a response under this engine's version string.
    pub fn answer_hash(&self, response: &RawResponse) -> AnswerHash {
        AnswerHash::compute(response, &self.config.engine_version)
    }

    /// Scores a complete protocol. Fatal if any catalog item is missing or
    /// any answer is out of range.
    pub fn score(&self, response: &RawResponse) -> ScoreResult<ScoreOutcome> {
        self.score_with_birth_date(response, None)
    }

    /// Scores a complete protocol, deriving the birth tribe as well.
    pub fn score_with_birth_date(
        &self,
        response: &RawResponse,
        birth_date: Option<NaiveDate>,
    ) -> ScoreResult<ScoreOutcome> {
        let normalizer = AnswerNormalizer::new(&self.catalog, self.config.scale);
        let normalized = normalizer.normalize_complete(response)?;
        let bundle = self.bundle_from(&normalized);
        let composite =
            self.synthesizer
                .synthesize(&bundle.big5, &bundle.type_axes, &bundle.relational);
        let taxonomy = self.taxonomy.map(
            &bundle.big5,
            &bundle.type_axes,
            &bundle.relational,
            birth_date,
        );
        let hash = self.answer_hash(response);
        debug!(%hash, code = %bundle.type_axes.code, "scored protocol");
        Ok(ScoreOutcome {
            bundle,
            composite,
            taxonomy,
            hash,
            engine_version: self.config.engine_version.clone(),
        })
    }

    /// Previews trait scores over a partial protocol. Unanswered items are
    /// skipped; dimensions without answers fall back to their documented
    /// neutral defaults. No taxonomy or hash is produced for previews.
    pub fn preview(&self, response: &RawResponse) -> ScoreResult<ScoreBundle> {
        let normalizer = AnswerNormalizer::new(&self.catalog, self.config.scale);
        let normalized = normalizer.normalize_partial(response)?;
        Ok(self.bundle_from(&normalized))
    }

    /// Scores several protocols in order. Stops at the first invalid one.
    pub fn score_batch(&self, responses: &[RawResponse]) -> ScoreResult<Vec<ScoreOutcome>> {
        responses.iter().map(|r| self.score(r)).collect()
    }

    fn bundle_from(&self, normalized: &[NormalizedAnswer]) -> ScoreBundle {
        let big5 = score_big5(normalized);
        let type_axes = score_type_axes(normalized);
        let relational = score_relational(normalized);
        let relational_shares = display_shares(&relational.scores);
        ScoreBundle {
            big5,
            type_axes,
            relational,
            relational_shares,
        }
    }
}
