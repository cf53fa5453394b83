//! Answer validation and normalization.
//!
//! This is the single validation gate of the pipeline: range and coverage
//! failures surface here, and nothing downstream re-checks or silently
//! repairs malformed input.

use persona_engine_core::{ItemCatalog, ItemDomain, RawResponse};
use tracing::trace;

use crate::config::ScaleConfig;
use crate::error::{ScoreError, ScoreResult};

/// One answer rescaled against its item metadata.
///
/// Beyond the signed/weighted values the Big5 scorer consumes, the
/// categorical scorers read the reversal-adjusted raw value: the type-axis
/// accumulators take it weight-adjusted, the relational accumulators take it
/// plain.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAnswer {
    /// Item id the answer belongs to.
    pub item_id: String,
    /// Domain copied from the item metadata.
    pub domain: ItemDomain,
    /// Item weight copied from the metadata.
    pub weight: f32,
    /// The submitted answer, untouched.
    pub raw: u8,
    /// Raw value with reverse keying applied: `scale_max + 1 - raw` for
    /// reverse-keyed items, `raw` otherwise.
    pub reversed: f32,
    /// Signed value in `[-1, 1]`: `(reversed - midpoint) / (midpoint - 1)`.
    pub signed: f32,
    /// `signed * weight`.
    pub weighted: f32,
}

/// Validates raw responses and rescales them item by item.
///
/// Pure and deterministic; holds only borrowed lookup data.
#[derive(Debug, Clone)]
pub struct AnswerNormalizer<'a> {
    catalog: &'a ItemCatalog,
    scale: ScaleConfig,
}

impl<'a> AnswerNormalizer<'a> {
    /// Creates a normalizer over a catalog and scale.
    pub fn new(catalog: &'a ItemCatalog, scale: ScaleConfig) -> Self {
        Self { catalog, scale }
    }

    /// Normalizes the answered subset of the catalog.
    ///
    /// Missing items are skipped, which permits preview computations over
    /// partial protocols. Unknown item ids and out-of-range values are
    /// always fatal.
    pub fn normalize_partial(&self, response: &RawResponse) -> ScoreResult<Vec<NormalizedAnswer>> {
        self.reject_unknown_items(response)?;

        let mut normalized = Vec::with_capacity(response.len());
        for item in self.catalog.iter() {
            let Some(raw) = response.get(&item.id) else {
                continue;
            };
            if raw < 1 || raw > self.scale.scale_max {
                return Err(ScoreError::out_of_range(&item.id, raw, self.scale.scale_max));
            }

            let reversed = if item.reverse {
                f32::from(self.scale.scale_max) + 1.0 - f32::from(raw)
            } else {
                f32::from(raw)
            };
            let midpoint = self.scale.midpoint();
            let signed = (reversed - midpoint) / (midpoint - 1.0);
            let weighted = signed * item.weight;
            trace!(item = %item.id, raw, signed, weighted, "normalized answer");

            normalized.push(NormalizedAnswer {
                item_id: item.id.clone(),
                domain: item.domain,
                weight: item.weight,
                raw,
                reversed,
                signed,
                weighted,
            });
        }
        Ok(normalized)
    }

    /// Normalizes a final protocol, requiring every catalog item answered.
    pub fn normalize_complete(&self, response: &RawResponse) -> ScoreResult<Vec<NormalizedAnswer>> {
        if let Some(missing) = self.catalog.iter().find(|item| response.get(&item.id).is_none()) {
            return Err(ScoreError::IncompleteInput {
                answered: response.len(),
                expected: self.catalog.len(),
                first_missing: missing.id.clone(),
            });
        }
        self.normalize_partial(response)
    }

    fn reject_unknown_items(&self, response: &RawResponse) -> ScoreResult<()> {
        for (id, _) in response.iter() {
            if self.catalog.get(id).is_none() {
                return Err(ScoreError::UnknownItem {
                    item_id: id.to_string(),
                });
            }
        }
        Ok(())
    }
}
