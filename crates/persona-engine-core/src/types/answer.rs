//! Raw questionnaire responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of items in the standard questionnaire.
pub const ITEM_COUNT: usize = 55;

/// Default Likert scale maximum (1..=7).
pub const DEFAULT_SCALE_MAX: u8 = 7;

/// A set of raw Likert answers keyed by item id (`q_001`..`q_055`).
///
/// Values are validated by the normalizer, not on insertion: an out-of-range
/// answer is a fatal scoring error, but this type itself only carries what
/// the caller submitted. The backing map is ordered so iteration is already
/// canonical (sorted by item id), which the idempotency hash relies on.
///
/// # Example
///
/// ```
/// use persona_engine_core::RawResponse;
///
/// let mut response = RawResponse::new();
/// response.insert("q_001", 4);
/// assert_eq!(response.get("q_001"), Some(4));
/// assert_eq!(response.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawResponse {
    answers: BTreeMap<String, u8>,
}

impl RawResponse {
    /// Creates an empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a response from `(item id, value)` pairs. Later duplicates win.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        Self {
            answers: pairs.into_iter().map(|(id, v)| (id.into(), v)).collect(),
        }
    }

    /// Builds the complete 55-item response with every answer set to `value`.
    ///
    /// Mainly useful in tests and calibration samples.
    pub fn uniform(value: u8) -> Self {
        Self::from_pairs((1..=ITEM_COUNT).map(|n| (item_id(n), value)))
    }

    /// Records an answer, replacing any previous value for the item.
    pub fn insert(&mut self, item_id: impl Into<String>, value: u8) {
        self.answers.insert(item_id.into(), value);
    }

    /// Looks up the answer for an item.
    pub fn get(&self, item_id: &str) -> Option<u8> {
        self.answers.get(item_id).copied()
    }

    /// Number of answered items.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// True when no items have been answered.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates answers in item-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.answers.iter().map(|(id, v)| (id.as_str(), *v))
    }
}

/// Renders the canonical item id for a 1-based item number (`q_001`..).
pub fn item_id(number: usize) -> String {
    format!("q_{:03}", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_format() {
        assert_eq!(item_id(1), "q_001");
        assert_eq!(item_id(55), "q_055");
    }

    #[test]
    fn test_uniform_fills_all_items() {
        let response = RawResponse::uniform(4);
        assert_eq!(response.len(), ITEM_COUNT);
        assert_eq!(response.get("q_001"), Some(4));
        assert_eq!(response.get("q_055"), Some(4));
        assert_eq!(response.get("q_056"), None);
    }

    #[test]
    fn test_iteration_is_sorted_by_id() {
        let response = RawResponse::from_pairs([("q_010", 2), ("q_002", 5), ("q_001", 7)]);
        let ids: Vec<&str> = response.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["q_001", "q_002", "q_010"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut response = RawResponse::new();
        response.insert("q_001", 3);
        response.insert("q_001", 6);
        assert_eq!(response.get("q_001"), Some(6));
        assert_eq!(response.len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let response = RawResponse::from_pairs([("q_001", 4), ("q_002", 7)]);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"q_001":4,"q_002":7}"#);
        let back: RawResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
