//! Canonical value types and the item catalog for the persona scoring engine.
//!
//! This crate holds the data model shared by the scoring engine and its
//! callers: raw questionnaire responses, per-item metadata, the five-factor /
//! type-axis / relational result types, the nine-axis composite profile, and
//! the narrative taxonomy identifiers. It contains no scoring logic.
//!
//! # Modules
//!
//! - [`types`]: closed result and input value types
//! - [`catalog`]: immutable per-item metadata and the built-in 55-item bank
//!
//! Everything here is a plain serializable value object. The lookup data
//! (item catalog, taxonomy tables) is loaded once at startup and treated as
//! immutable afterwards; constructors on the scoring side take these objects
//! explicitly so tests can substitute fixtures.

pub mod catalog;
pub mod types;

pub use catalog::{ItemCatalog, ItemDomain, ItemMeta};
pub use types::answer::{RawResponse, DEFAULT_SCALE_MAX, ITEM_COUNT};
pub use types::axes::{Axis, AxisPole, AxisValues, TypeAxesResult, TypeCode, TypeCodeParseError};
pub use types::big5::{Big5Scores, Big5Trait};
pub use types::bundle::ScoreBundle;
pub use types::composite::{CompositeAxis, CompositeProfile};
pub use types::relational::{RelationalCategory, RelationalResult, CATEGORY_COUNT};
pub use types::taxonomy::{HeroCode, StoneCode, StoneQuality, TaxonomyResult, TribeCode};
