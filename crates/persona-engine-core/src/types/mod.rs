//! Closed value types passed between the scoring stages.
//!
//! The original product moved loosely-typed bags of fields between its
//! pipeline stages; these types close that surface. Unknown fields are
//! rejected at the serde boundary, enum sets are exhaustive, and every
//! numeric field documents its range.

pub mod answer;
pub mod axes;
pub mod big5;
pub mod bundle;
pub mod composite;
pub mod relational;
pub mod taxonomy;
