//! Content-hash deduplication around the scoring pipeline.
//!
//! The hash canonicalizes the answers (sorted by item id) and appends the
//! engine version, so identical submissions under the same engine version
//! collide and re-submissions cost nothing. The at-most-once guarantee
//! comes from the backing store's conditional insert, not from in-process
//! locking: two racing identical submissions both compute, and the store
//! keeps exactly one winner that both callers then observe.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use persona_engine_core::RawResponse;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use chrono::NaiveDate;

use crate::error::{ScoreError, ScoreResult};
use crate::pipeline::{ScoreOutcome, ScoringEngine};

/// SHA-256 content hash of a canonicalized answer set plus engine version,
/// as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerHash(String);

impl AnswerHash {
    /// Computes the hash for a response under an engine version.
    ///
    /// Canonical form: one `id=value` line per answer in item-id order,
    /// then the engine version. Stable under submission reordering by
    /// construction, and any version change produces a different hash.
    pub fn compute(response: &RawResponse, engine_version: &str) -> Self {
        let mut hasher = Sha256::new();
        for (id, value) in response.iter() {
            hasher.update(id.as_bytes());
            hasher.update(b"=");
            hasher.update(value.to_string().as_bytes());
            hasher.update(b"\n");
        }
        hasher.update(engine_version.as_bytes());
        let digest = hasher.finalize();
        Self(hex_string(&digest))
    }

    /// The hex digest.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnswerHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}

/// A scoring run as returned through the guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardedScore {
    /// The canonical outcome for this hash, freshly computed or reused.
    pub outcome: ScoreOutcome,
    /// True when an earlier run was reused and nothing was recomputed.
    pub reused: bool,
}

/// Keyed result storage with conditional-insert semantics.
///
/// `insert_if_absent` must behave as a single atomic upsert: when two
/// writers race on the same hash, both receive the one stored outcome.
/// Implementations over real databases get this from a uniqueness
/// constraint; the in-memory store gets it from its lock.
pub trait ScoreStore {
    /// Returns the stored outcome for a hash, if any.
    fn fetch(&self, hash: &AnswerHash) -> ScoreResult<Option<ScoreOutcome>>;

    /// Stores the outcome unless the hash is already present, returning the
    /// outcome that ended up stored.
    fn insert_if_absent(
        &self,
        hash: &AnswerHash,
        outcome: &ScoreOutcome,
    ) -> ScoreResult<ScoreOutcome>;
}

/// In-memory [`ScoreStore`] for tests and single-process use.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    entries: Mutex<HashMap<String, ScoreOutcome>>,
}

impl InMemoryScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored outcomes.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("store lock poisoned").len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn fetch(&self, hash: &AnswerHash) -> ScoreResult<Option<ScoreOutcome>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| ScoreError::Store("store lock poisoned".to_string()))?;
        Ok(entries.get(hash.as_str()).cloned())
    }

    fn insert_if_absent(
        &self,
        hash: &AnswerHash,
        outcome: &ScoreOutcome,
    ) -> ScoreResult<ScoreOutcome> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ScoreError::Store("store lock poisoned".to_string()))?;
        Ok(entries
            .entry(hash.as_str().to_string())
            .or_insert_with(|| outcome.clone())
            .clone())
    }
}

/// Wraps the pipeline with content-hash deduplication.
pub struct IdempotentScorer<'a, S: ScoreStore> {
    engine: &'a ScoringEngine,
    store: S,
}

impl<'a, S: ScoreStore> IdempotentScorer<'a, S> {
    /// Couples an engine with a result store.
    pub fn new(engine: &'a ScoringEngine, store: S) -> Self {
        Self { engine, store }
    }

    /// Scores a protocol at most once per (answers, engine version).
    ///
    /// A stored outcome for the hash short-circuits the pipeline entirely;
    /// otherwise the protocol is scored and handed to the store's
    /// conditional insert, whose winner is returned.
    pub fn score(
        &self,
        response: &RawResponse,
        birth_date: Option<NaiveDate>,
    ) -> ScoreResult<GuardedScore> {
        let hash = self.engine.answer_hash(response);
        if let Some(existing) = self.store.fetch(&hash)? {
            debug!(%hash, "reusing stored score");
            return Ok(GuardedScore {
                outcome: existing,
                reused: true,
            });
        }

        let outcome = self.engine.score_with_birth_date(response, birth_date)?;
        let stored = self.store.insert_if_absent(&hash, &outcome)?;
        let reused = stored != outcome;
        Ok(GuardedScore {
            outcome: stored,
            reused,
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable_under_reordering() {
        let forward = RawResponse::from_pairs([("q_001", 3), ("q_002", 5), ("q_010", 7)]);
        let shuffled = RawResponse::from_pairs([("q_010", 7), ("q_001", 3), ("q_002", 5)]);
        assert_eq!(
            AnswerHash::compute(&forward, "v1"),
            AnswerHash::compute(&shuffled, "v1")
        );
    }

    #[test]
    fn test_hash_distinguishes_answers_and_versions() {
        let response = RawResponse::uniform(4);
        let base = AnswerHash::compute(&response, "v1");

        let mut changed = response.clone();
        changed.insert("q_001", 5);
        assert_ne!(AnswerHash::compute(&changed, "v1"), base);

        assert_ne!(AnswerHash::compute(&response, "v2"), base);
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let hash = AnswerHash::compute(&RawResponse::uniform(4), "v1");
        assert_eq!(hash.as_str().len(), 64);
        assert!(hash.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_guard_reuses_stored_outcome() {
        let engine = ScoringEngine::with_defaults();
        let scorer = IdempotentScorer::new(&engine, InMemoryScoreStore::new());
        let response = RawResponse::uniform(5);

        let first = scorer.score(&response, None).unwrap();
        assert!(!first.reused);
        assert_eq!(scorer.store().len(), 1);

        let second = scorer.score(&response, None).unwrap();
        assert!(second.reused);
        assert_eq!(second.outcome, first.outcome);
        assert_eq!(scorer.store().len(), 1);
    }

    #[test]
    fn test_guard_separates_distinct_submissions() {
        let engine = ScoringEngine::with_defaults();
        let scorer = IdempotentScorer::new(&engine, InMemoryScoreStore::new());
        scorer.score(&RawResponse::uniform(2), None).unwrap();
        scorer.score(&RawResponse::uniform(6), None).unwrap();
        assert_eq!(scorer.store().len(), 2);
    }

    #[test]
    fn test_insert_if_absent_keeps_first_writer() {
        let engine = ScoringEngine::with_defaults();
        let store = InMemoryScoreStore::new();
        let response = RawResponse::uniform(4);
        let hash = engine.answer_hash(&response);
        let outcome_a = engine.score(&response).unwrap();
        let mut outcome_b = outcome_a.clone();
        outcome_b.engine_version = "imposter".to_string();

        let winner = store.insert_if_absent(&hash, &outcome_a).unwrap();
        assert_eq!(winner, outcome_a);
        // The losing racer observes the stored winner, not its own value.
        let loser_view = store.insert_if_absent(&hash, &outcome_b).unwrap();
        assert_eq!(loser_view, outcome_a);
    }
}
