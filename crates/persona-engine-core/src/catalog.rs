//! Per-item metadata and the built-in questionnaire catalog.
//!
//! The catalog is the static configuration behind the normalizer and the
//! three trait scorers: which trait or pole an item feeds, whether it is
//! reverse-keyed, and how heavily it counts. It is loaded once and treated
//! as immutable; engine constructors take it explicitly so tests can inject
//! fixture catalogs.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::types::axes::AxisPole;
use crate::types::big5::Big5Trait;
use crate::types::relational::RelationalCategory;

/// Which scorer an item feeds, and under what key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemDomain {
    /// Contributes to one Big5 dimension.
    Big5(Big5Trait),
    /// Contributes to one pole accumulator of a type axis.
    TypeAxis(AxisPole),
    /// Contributes to one relational category accumulator.
    Relational(RelationalCategory),
}

/// Static configuration for a single questionnaire item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemMeta {
    /// Item id, `q_001`..`q_055` in the built-in bank.
    pub id: String,
    /// The statement shown to the respondent.
    pub prompt: String,
    /// Scorer and key this item feeds.
    pub domain: ItemDomain,
    /// Reverse-keyed: a high raw answer means a low trait value.
    #[serde(default)]
    pub reverse: bool,
    /// Relative weight of this item within its domain.
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

/// An immutable, validated set of item metadata.
///
/// # Example
///
/// ```
/// use persona_engine_core::ItemCatalog;
///
/// let catalog = ItemCatalog::builtin();
/// assert_eq!(catalog.len(), 55);
/// assert!(catalog.get("q_001").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ItemMeta>", into = "Vec<ItemMeta>")]
pub struct ItemCatalog {
    items: Vec<ItemMeta>,
    by_id: HashMap<String, usize>,
}

impl ItemCatalog {
    /// Builds a catalog from item metadata. On duplicate ids the later item
    /// wins the index slot; [`ItemCatalog::validate`] reports duplicates.
    pub fn new(items: Vec<ItemMeta>) -> Self {
        let by_id = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id.clone(), i))
            .collect();
        Self { items, by_id }
    }

    /// The built-in 55-item bank.
    pub fn builtin() -> &'static ItemCatalog {
        static BUILTIN: OnceLock<ItemCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| ItemCatalog::new(builtin_items()))
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&ItemMeta> {
        self.by_id.get(id).map(|&i| &self.items[i])
    }

    /// Iterates items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemMeta> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validates the catalog, returning a description of the first problem.
    ///
    /// Checks: at least one item, unique non-empty ids, and strictly
    /// positive finite weights.
    pub fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("catalog must contain at least one item".to_string());
        }
        let mut seen = std::collections::HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.id.is_empty() {
                return Err("catalog item with empty id".to_string());
            }
            if !seen.insert(item.id.as_str()) {
                return Err(format!("duplicate item id: {}", item.id));
            }
            if !(item.weight.is_finite() && item.weight > 0.0) {
                return Err(format!(
                    "item {} has invalid weight {}",
                    item.id, item.weight
                ));
            }
        }
        Ok(())
    }
}

impl From<Vec<ItemMeta>> for ItemCatalog {
    fn from(items: Vec<ItemMeta>) -> Self {
        Self::new(items)
    }
}

impl From<ItemCatalog> for Vec<ItemMeta> {
    fn from(catalog: ItemCatalog) -> Self {
        catalog.items
    }
}

fn big5(id: &str, prompt: &str, trait_key: Big5Trait, reverse: bool, weight: f32) -> ItemMeta {
    ItemMeta {
        id: id.to_string(),
        prompt: prompt.to_string(),
        domain: ItemDomain::Big5(trait_key),
        reverse,
        weight,
    }
}

fn axis(id: &str, prompt: &str, pole: AxisPole) -> ItemMeta {
    ItemMeta {
        id: id.to_string(),
        prompt: prompt.to_string(),
        domain: ItemDomain::TypeAxis(pole),
        reverse: false,
        weight: 1.0,
    }
}

fn relational(id: &str, prompt: &str, category: u8) -> ItemMeta {
    ItemMeta {
        id: id.to_string(),
        prompt: prompt.to_string(),
        domain: ItemDomain::Relational(
            RelationalCategory::new(category).expect("category in 1..=9"),
        ),
        reverse: false,
        weight: 1.0,
    }
}

/// The built-in bank: 21 Big5 items, 16 type-axis items (two per pole, so an
/// all-neutral protocol lands on an exact 50/50 split per axis), and 18
/// relational items (two per category).
fn builtin_items() -> Vec<ItemMeta> {
    use AxisPole::*;
    use Big5Trait::*;

    vec![
        // Big5: openness
        big5("q_001", "I enjoy exploring ideas that have no immediate practical use.", Openness, false, 1.0),
        big5("q_002", "I am drawn to art, music, or writing that breaks conventions.", Openness, false, 1.0),
        big5("q_003", "I like imagining how things could be entirely different.", Openness, false, 1.0),
        big5("q_004", "I seek out unfamiliar topics just to learn something new.", Openness, false, 0.8),
        big5("q_005", "I prefer sticking to methods that are already proven.", Openness, true, 1.0),
        // Big5: conscientiousness
        big5("q_006", "I finish tasks well before their deadlines.", Conscientiousness, false, 1.0),
        big5("q_007", "I keep my workspace and my plans in careful order.", Conscientiousness, false, 1.0),
        big5("q_008", "I follow through on commitments even when it is inconvenient.", Conscientiousness, false, 1.0),
        big5("q_009", "I often leave things half-finished.", Conscientiousness, true, 1.0),
        // Big5: extraversion
        big5("q_010", "Meeting new people gives me energy.", Extraversion, false, 1.0),
        big5("q_011", "I start conversations easily at gatherings.", Extraversion, false, 1.0),
        big5("q_012", "I think out loud when working through a problem.", Extraversion, false, 0.8),
        big5("q_013", "I need long stretches of time alone to recharge.", Extraversion, true, 1.0),
        // Big5: agreeableness
        big5("q_014", "I go out of my way to make others feel comfortable.", Agreeableness, false, 1.0),
        big5("q_015", "I weigh how decisions will affect the people involved.", Agreeableness, false, 1.0),
        big5("q_016", "I find it easy to forgive people who wrong me.", Agreeableness, false, 1.0),
        big5("q_017", "I push my own interests through even when others object.", Agreeableness, true, 1.0),
        // Big5: neuroticism
        big5("q_018", "Small setbacks can unsettle me for the rest of the day.", Neuroticism, false, 1.0),
        big5("q_019", "I often worry about things that may never happen.", Neuroticism, false, 1.0),
        big5("q_020", "My mood swings noticeably when I am under pressure.", Neuroticism, false, 1.0),
        big5("q_021", "I stay calm even in stressful situations.", Neuroticism, true, 1.0),
        // Type axis: E/I
        axis("q_022", "I would rather spend an evening out with friends than at home.", E),
        axis("q_023", "Talking with strangers comes naturally to me.", E),
        axis("q_024", "I prefer a few deep relationships over a wide circle.", I),
        axis("q_025", "I do my best thinking in solitude.", I),
        // Type axis: S/N
        axis("q_026", "I trust concrete facts over hunches.", S),
        axis("q_027", "I focus on what is actually in front of me, not what might be.", S),
        axis("q_028", "I notice patterns and possibilities before details.", N),
        axis("q_029", "I enjoy speculating about where things are heading.", N),
        // Type axis: T/F
        axis("q_030", "I base decisions on logic even when feelings run high.", T),
        axis("q_031", "Critical analysis comes more naturally to me than sympathy.", T),
        axis("q_032", "I decide with my heart as much as my head.", F),
        axis("q_033", "Keeping harmony matters more to me than being right.", F),
        // Type axis: J/P
        axis("q_034", "I like having a plan before I start.", J),
        axis("q_035", "Unfinished business nags at me until it is closed.", J),
        axis("q_036", "I keep my options open as long as possible.", P),
        axis("q_037", "I work best in bursts when the deadline is near.", P),
        // Relational categories
        relational("q_038", "I hold myself to exacting standards.", 1),
        relational("q_039", "Mistakes bother me long after others have moved on.", 1),
        relational("q_040", "Helping someone else succeed feels like my own success.", 2),
        relational("q_041", "I often put other people's needs before my own.", 2),
        relational("q_042", "Reaching goals efficiently is what drives me.", 3),
        relational("q_043", "Recognition for my achievements matters to me.", 3),
        relational("q_044", "Expressing my individuality is essential to who I am.", 4),
        relational("q_045", "I would rather be distinctive than ordinary.", 4),
        relational("q_046", "I recharge by diving deep into subjects that fascinate me.", 5),
        relational("q_047", "I prefer observing and analyzing to joining in.", 5),
        relational("q_048", "I plan for worst cases before committing to anything.", 6),
        relational("q_049", "Loyalty and reliability are what I value most in people.", 6),
        relational("q_050", "I chase new experiences whenever the chance appears.", 7),
        relational("q_051", "Restrictions make me restless.", 7),
        relational("q_052", "I naturally take charge when a group stalls.", 8),
        relational("q_053", "I say what I think, even when it is confrontational.", 8),
        relational("q_054", "I keep the peace even at some cost to myself.", 9),
        relational("q_055", "Conflict drains me more than almost anything.", 9),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::answer::ITEM_COUNT;
    use crate::types::axes::Axis;

    #[test]
    fn test_builtin_has_55_unique_items() {
        let catalog = ItemCatalog::builtin();
        assert_eq!(catalog.len(), ITEM_COUNT);
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.get("q_001").unwrap().domain, ItemDomain::Big5(Big5Trait::Openness));
        assert!(catalog.get("q_056").is_none());
    }

    #[test]
    fn test_builtin_axis_poles_are_balanced() {
        // Two items per pole per axis, all weight 1.0, so an all-midpoint
        // protocol produces equal pole sums on every axis.
        let catalog = ItemCatalog::builtin();
        for target in Axis::all() {
            let (mut first, mut second) = (0.0f32, 0.0f32);
            for item in catalog.iter() {
                if let ItemDomain::TypeAxis(pole) = item.domain {
                    if pole.axis() == target {
                        if pole.is_first() {
                            first += item.weight;
                        } else {
                            second += item.weight;
                        }
                    }
                }
            }
            assert_eq!(first, second, "unbalanced axis {}", target);
            assert!(first > 0.0);
        }
    }

    #[test]
    fn test_builtin_covers_every_domain_key() {
        let catalog = ItemCatalog::builtin();
        for trait_key in Big5Trait::all() {
            assert!(
                catalog.iter().any(|i| i.domain == ItemDomain::Big5(trait_key)),
                "no items for {}",
                trait_key
            );
        }
        for category in RelationalCategory::all() {
            assert!(
                catalog
                    .iter()
                    .any(|i| i.domain == ItemDomain::Relational(category)),
                "no items for {}",
                category
            );
        }
    }

    #[test]
    fn test_validate_rejects_duplicates_and_bad_weights() {
        let duplicate = ItemCatalog::new(vec![
            big5("q_001", "a", Big5Trait::Openness, false, 1.0),
            big5("q_001", "b", Big5Trait::Openness, false, 1.0),
        ]);
        assert!(duplicate.validate().unwrap_err().contains("duplicate"));

        let bad_weight = ItemCatalog::new(vec![big5(
            "q_001",
            "a",
            Big5Trait::Openness,
            false,
            0.0,
        )]);
        assert!(bad_weight.validate().unwrap_err().contains("weight"));

        let empty = ItemCatalog::new(Vec::new());
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_meta_serde_defaults() {
        let json = r#"{"id":"q_900","prompt":"x","domain":{"big5":"openness"}}"#;
        let meta: ItemMeta = serde_json::from_str(json).unwrap();
        assert!(!meta.reverse);
        assert_eq!(meta.weight, 1.0);
    }
}
