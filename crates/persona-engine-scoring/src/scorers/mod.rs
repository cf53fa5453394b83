//! The three independent trait scorers.
//!
//! Each scorer consumes the normalizer's output and nothing else; they are
//! pure functions and may run in any order.

pub mod big5;
pub mod relational;
pub mod type_axes;

pub use big5::score_big5;
pub use relational::{display_shares, score_relational};
pub use type_axes::score_type_axes;
