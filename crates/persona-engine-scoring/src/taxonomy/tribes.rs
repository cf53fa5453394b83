//! The 16-entry type-to-tribe table.

use persona_engine_core::{TribeCode, TypeCode};
use tracing::warn;

const TRIBE_ROWS: [(&str, TribeCode); 16] = [
    ("INTJ", TribeCode::Eira),
    ("INTP", TribeCode::Aurin),
    ("ENTJ", TribeCode::Eira),
    ("ENTP", TribeCode::Aurin),
    ("INFJ", TribeCode::Lumin),
    ("INFP", TribeCode::Neva),
    ("ENFJ", TribeCode::Nova),
    ("ENFP", TribeCode::Tenbra),
    ("ISTJ", TribeCode::Varno),
    ("ISFJ", TribeCode::Verma),
    ("ESTJ", TribeCode::Varno),
    ("ESFJ", TribeCode::Sera),
    ("ISTP", TribeCode::Dras),
    ("ISFP", TribeCode::Silva),
    ("ESTP", TribeCode::Dras),
    ("ESFP", TribeCode::Soran),
];

/// Total lookup from type code to tribe, with the nomad fallback.
#[derive(Debug, Clone)]
pub struct TribeTable {
    rows: Vec<(TypeCode, TribeCode)>,
    default_tribe: TribeCode,
}

impl TribeTable {
    /// Builds a table from explicit rows and a fallback tribe.
    pub fn new(rows: Vec<(TypeCode, TribeCode)>, default_tribe: TribeCode) -> Self {
        Self {
            rows,
            default_tribe,
        }
    }

    /// The built-in 16-entry table with the `nomad` fallback.
    pub fn builtin() -> Self {
        let rows = TRIBE_ROWS
            .iter()
            .map(|(code, tribe)| {
                let code: TypeCode = code.parse().expect("builtin type codes are valid");
                (code, *tribe)
            })
            .collect();
        Self::new(rows, TribeCode::Nomad)
    }

    /// Resolves the tribe for a type. A missing row falls back to the
    /// default tribe.
    pub fn lookup(&self, code: TypeCode) -> TribeCode {
        match self.rows.iter().find(|(row_code, _)| *row_code == code) {
            Some((_, tribe)) => *tribe,
            None => {
                warn!(%code, "no tribe row for type, using default");
                self.default_tribe
            }
        }
    }
}

impl Default for TribeTable {
    fn default() -> Self {
        Self::builtin()
    }
}
