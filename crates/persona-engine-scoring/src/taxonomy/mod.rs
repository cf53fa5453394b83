//! Deterministic taxonomy lookups: hero, tribe and stone identifiers.
//!
//! Every lookup here is total. A type code or category pair that somehow
//! misses its table resolves to a documented default identifier instead of
//! failing; the product has no acceptable way to present a hard failure at
//! this layer.

pub mod birthdate;
pub mod heroes;
pub mod stones;
pub mod tribes;

pub use birthdate::tribe_from_birth_date;
pub use heroes::HeroTable;
pub use stones::StoneTable;
pub use tribes::TribeTable;

use chrono::NaiveDate;
use persona_engine_core::{
    Big5Scores, RelationalResult, StoneQuality, TaxonomyResult, TypeAxesResult,
};

/// The three lookup tables bundled for injection into the pipeline.
///
/// `Default` yields the built-in tables; tests substitute fixtures.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyMapper {
    pub heroes: HeroTable,
    pub tribes: TribeTable,
    pub stones: StoneTable,
}

impl TaxonomyMapper {
    /// Resolves the full taxonomy for one scored protocol.
    pub fn map(
        &self,
        big5: &Big5Scores,
        type_axes: &TypeAxesResult,
        relational: &RelationalResult,
        birth_date: Option<NaiveDate>,
    ) -> TaxonomyResult {
        let hero = self.heroes.lookup(type_axes.code, relational.top1);
        let tribe = self.tribes.lookup(type_axes.code);
        let stone = self.stones.nearest(&big5.to_vector());
        let stone_quality = stone_quality(type_axes, relational);
        TaxonomyResult {
            hero,
            tribe,
            stone,
            stone_quality,
            birth_tribe: birth_date.map(tribe_from_birth_date),
        }
    }
}

/// Grades the stone match by how decisive the categorical results were:
/// `60 + 20 * mean(axis confidence) + 20 * relational confidence`, graded
/// above 80 as brilliance and above 60 as clarity.
fn stone_quality(type_axes: &TypeAxesResult, relational: &RelationalResult) -> StoneQuality {
    let axis_confidence: f32 =
        type_axes.confidence.to_array().iter().sum::<f32>() / 4.0;
    let score = 60.0 + axis_confidence * 20.0 + relational.confidence * 20.0;
    if score > 80.0 {
        StoneQuality::Brilliance
    } else if score > 60.0 {
        StoneQuality::Clarity
    } else {
        StoneQuality::Durability
    }
}
