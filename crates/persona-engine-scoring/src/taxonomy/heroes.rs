//! The 144-entry hero table: 16 type codes × 9 relational categories.

use persona_engine_core::{HeroCode, RelationalCategory, TypeCode};
use tracing::warn;

/// Hero code returned when a pair has no table entry.
pub const DEFAULT_HERO: &str = "inner-explorer";

/// Rows are keyed by type code; columns follow relational category order
/// r1..r9.
const HERO_ROWS: [(&str, [&str; 9]); 16] = [
    ("INTP", [
        "architect-of-logic", "helper-of-knowledge", "pioneer-of-systems",
        "alchemist-of-ideas", "explorer-of-truth", "guardian-of-reason",
        "flame-of-intellect", "strategist-of-reform", "mediator-of-wisdom",
    ]),
    ("INTJ", [
        "wizard-of-planning", "mentor-of-knowledge", "designer-of-goals",
        "alchemist-of-thought", "sage-of-logic", "guardian-of-systems",
        "flame-of-reason", "commander-of-strategy", "coordinator-of-knowledge",
    ]),
    ("ENTP", [
        "innovator-of-logic", "facilitator-of-ideas", "inventor-of-knowledge",
        "designer-of-freedom", "hunter-of-logic", "designer-of-reform",
        "igniter-of-inspiration", "warrior-of-thought", "mediator-of-humor",
    ]),
    ("ENTJ", [
        "emperor-of-strategy", "mentor-of-systems", "commander-of-vision",
        "reformer-of-insight", "observer-of-reason", "commander-in-chief-of-faith",
        "blaze-of-drive", "warrior-of-authority", "mediator-of-order",
    ]),
    ("INFJ", [
        "priest-of-insight", "guide-of-emotion", "leader-of-intuition",
        "prophet-of-the-inner-self", "explorer-of-psychology", "keeper-of-faith",
        "flame-of-intuition", "warrior-of-truth", "mediator-of-harmony",
    ]),
    ("INFP", [
        "sculptor-of-ideals", "healer-of-emotion", "practitioner-of-meaning",
        "poet-of-the-soul", "philosopher-of-ideals", "guardian-of-belief",
        "evangelist-of-dreams", "warrior-of-conviction", "saint-of-harmony",
    ]),
    ("ENFJ", [
        "architect-of-light", "priest-of-empathy", "leader-of-vision",
        "igniter-of-emotion", "explorer-of-intuition", "companion-of-faith",
        "flame-of-hope", "reformer-of-justice", "mediator-of-harmony",
    ]),
    ("ENFP", [
        "disciplinarian-of-creativity", "facilitator-of-emotion", "realizer-of-imagination",
        "spark-of-inspiration", "explorer-of-possibilities", "believer-of-relationships",
        "flame-of-vision", "warrior-of-creation", "prophet-of-harmony",
    ]),
    ("ISTJ", [
        "supervisor-of-order", "partner-of-responsibility", "manager-of-results",
        "alchemist-of-principle", "explorer-of-truth", "manager-of-loyalty",
        "operator-of-passion", "challenger-of-execution", "mediator-of-calm",
    ]),
    ("ISFJ", [
        "architect-of-devotion", "helper-of-sincerity", "practitioner-of-everyday",
        "artist-of-memory", "explorer-of-details", "keeper-of-trust",
        "backer-of-passion", "firmness-of-warmth", "protector-of-harmony",
    ]),
    ("ESTJ", [
        "architect-of-order", "executor-of-responsibility", "commander-of-execution",
        "creator-of-structure", "analyst-of-principles", "guardian-of-discipline",
        "locomotive-of-drive", "strategist-of-steel", "coordinator-of-cooperation",
    ]),
    ("ESFJ", [
        "coordinator-of-community", "guardian-of-empathy", "producer-of-the-stage",
        "archivist-of-sentiments", "analyst-of-relationships", "broker-of-trust",
        "planner-of-festivals", "leader-of-the-shield", "mediator-of-harmony",
    ]),
    ("ISTP", [
        "craftsman-of-function", "helper-of-action", "designer-of-achievement",
        "fieldworker-of-freedom", "researcher-of-reality", "colleague-of-practice",
        "experimenter-of-energy", "vanguard-of-execution", "mediator-of-balance",
    ]),
    ("ISFP", [
        "sculptor-of-emotion", "healer-of-warmth", "practitioner-of-beauty",
        "sensualist-of-freedom", "explorer-of-emotion", "companion-of-sincerity",
        "flame-of-feeling", "vanguard-of-emotion", "mediator-of-warmth",
    ]),
    ("ESTP", [
        "strategist-of-speed", "helper-of-action", "leader-of-the-field",
        "pioneer-of-freedom", "explorer-of-reality", "partner-of-trust",
        "storm-of-energy", "practitioner-of-steel", "mediator-of-reality",
    ]),
    ("ESFP", [
        "coordinator-of-stage", "deliverer-of-happiness", "creator-of-experience",
        "artist-of-freedom", "researcher-of-emotion", "keeper-of-stage",
        "flame-of-passion", "warrior-of-emotion", "dancer-of-harmony",
    ]),
];

/// Total lookup from (type code, primary relational category) to a hero.
#[derive(Debug, Clone)]
pub struct HeroTable {
    rows: Vec<(TypeCode, [HeroCode; 9])>,
    default_code: HeroCode,
}

impl HeroTable {
    /// Builds a table from explicit rows and a fallback code.
    pub fn new(rows: Vec<(TypeCode, [HeroCode; 9])>, default_code: HeroCode) -> Self {
        Self { rows, default_code }
    }

    /// The built-in 144-entry table.
    pub fn builtin() -> Self {
        let rows = HERO_ROWS
            .iter()
            .map(|(code, heroes)| {
                let code: TypeCode = code.parse().expect("builtin type codes are valid");
                (code, heroes.map(HeroCode::from))
            })
            .collect();
        Self::new(rows, HeroCode::from(DEFAULT_HERO))
    }

    /// Resolves the hero for a pair. Never fails: a missing row falls back
    /// to the default code.
    pub fn lookup(&self, code: TypeCode, top1: RelationalCategory) -> HeroCode {
        match self.rows.iter().find(|(row_code, _)| *row_code == code) {
            Some((_, heroes)) => heroes[top1.index()].clone(),
            None => {
                warn!(%code, %top1, "no hero row for type, using default");
                self.default_code.clone()
            }
        }
    }
}

impl Default for HeroTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_resolves() {
        let table = HeroTable::builtin();
        for code in TypeCode::all() {
            for category in RelationalCategory::all() {
                let hero = table.lookup(code, category);
                assert!(!hero.as_str().is_empty());
                assert_ne!(hero.as_str(), DEFAULT_HERO, "pair {}/{}", code, category);
            }
        }
    }

    #[test]
    fn test_known_entries() {
        let table = HeroTable::builtin();
        let intp: TypeCode = "INTP".parse().unwrap();
        assert_eq!(
            table.lookup(intp, RelationalCategory::new(1).unwrap()).as_str(),
            "architect-of-logic"
        );
        let esfp: TypeCode = "ESFP".parse().unwrap();
        assert_eq!(
            table.lookup(esfp, RelationalCategory::new(9).unwrap()).as_str(),
            "dancer-of-harmony"
        );
    }

    #[test]
    fn test_missing_row_falls_back_to_default() {
        let table = HeroTable::new(Vec::new(), HeroCode::from(DEFAULT_HERO));
        let code: TypeCode = "INTJ".parse().unwrap();
        let hero = table.lookup(code, RelationalCategory::new(3).unwrap());
        assert_eq!(hero.as_str(), DEFAULT_HERO);
    }
}
