//! Scoring and classification engine for the 55-item persona questionnaire.
//!
//! Turns raw Likert responses into five continuous Big5 scores, a 4-letter
//! type code, a nine-category relational classification, a blended
//! nine-axis composite profile, and deterministic narrative taxonomy
//! identifiers, with a content-hash idempotency guard around the whole
//! path and an offline harness for comparing engine calibrations.
//!
//! # Modules
//!
//! - [`config`]: engine configuration and calibration parameters
//! - [`error`]: error types and the [`ScoreResult`] alias
//! - [`normalizer`]: answer validation and rescaling
//! - [`scorers`]: the three independent trait scorers
//! - [`composite`]: the nine-axis blended profile
//! - [`taxonomy`]: total hero/tribe/stone lookups
//! - [`refine`]: boundary flagging and the 3-item follow-up
//! - [`idempotency`]: content hashing and result deduplication
//! - [`harness`]: offline comparison of two engine configurations
//! - [`pipeline`]: the orchestrator wiring the stages together
//!
//! # Example
//!
//! ```
//! use persona_engine_core::RawResponse;
//! use persona_engine_scoring::ScoringEngine;
//!
//! let engine = ScoringEngine::with_defaults();
//! let outcome = engine.score(&RawResponse::uniform(5)).unwrap();
//! assert!(outcome.validate().is_ok());
//! ```

pub mod composite;
pub mod config;
pub mod error;
pub mod harness;
pub mod idempotency;
pub mod normalizer;
pub mod pipeline;
pub mod refine;
pub mod scorers;
pub mod taxonomy;

pub use composite::CompositeSynthesizer;
pub use config::{BoundaryConfig, CompositeConfig, EngineConfig, HarnessConfig, ScaleConfig};
pub use error::{ScoreError, ScoreResult};
pub use harness::{ComparisonHarness, ComparisonReport, EngineRunRecord, EngineSample};
pub use idempotency::{AnswerHash, GuardedScore, IdempotentScorer, InMemoryScoreStore, ScoreStore};
pub use normalizer::{AnswerNormalizer, NormalizedAnswer};
pub use pipeline::{ScoreOutcome, ScoringEngine};
pub use refine::{RefinementAdvisor, RefinementAnswers, REFINEMENT_PROMPTS};
pub use taxonomy::TaxonomyMapper;

// Re-export the core value types alongside the engine (do not duplicate).
pub use persona_engine_core::{
    Big5Scores, CompositeProfile, ItemCatalog, RawResponse, ScoreBundle, TaxonomyResult,
    TypeAxesResult, TypeCode,
};
