//! Stone matching: nearest of twelve reference Big5 profiles.

use persona_engine_core::StoneCode;

/// Reference profiles in O-C-E-A-N order, on the 0..100 scale. High traits
/// sit at 80, low traits at 20, unspecified traits at the neutral 50. The
/// array order is the stone catalog order and doubles as the tie-break.
const STONE_PROFILES: [(StoneCode, [f32; 5]); 12] = [
    (StoneCode::Arche, [80.0, 50.0, 50.0, 50.0, 20.0]),
    (StoneCode::Ignis, [50.0, 80.0, 80.0, 50.0, 50.0]),
    (StoneCode::Neia, [50.0, 50.0, 50.0, 80.0, 20.0]),
    (StoneCode::Verdi, [80.0, 80.0, 50.0, 50.0, 50.0]),
    (StoneCode::Noctus, [80.0, 50.0, 50.0, 50.0, 80.0]),
    (StoneCode::Aurea, [50.0, 50.0, 50.0, 50.0, 50.0]),
    (StoneCode::Mechar, [50.0, 80.0, 50.0, 50.0, 20.0]),
    (StoneCode::Elara, [80.0, 50.0, 80.0, 50.0, 50.0]),
    (StoneCode::Myr, [50.0, 80.0, 50.0, 80.0, 50.0]),
    (StoneCode::Zarc, [80.0, 50.0, 80.0, 50.0, 80.0]),
    (StoneCode::Lumer, [50.0, 50.0, 20.0, 80.0, 20.0]),
    (StoneCode::Xain, [80.0, 80.0, 50.0, 50.0, 20.0]),
];

/// Nearest-profile stone matcher.
#[derive(Debug, Clone)]
pub struct StoneTable {
    profiles: Vec<(StoneCode, [f32; 5])>,
}

impl StoneTable {
    /// Builds a matcher from explicit profiles. Order is the tie-break.
    pub fn new(profiles: Vec<(StoneCode, [f32; 5])>) -> Self {
        Self { profiles }
    }

    /// The built-in twelve-profile catalog.
    pub fn builtin() -> Self {
        Self::new(STONE_PROFILES.to_vec())
    }

    /// Finds the stone whose reference profile is nearest the given Big5
    /// vector by Euclidean distance. Equal distances keep the earlier
    /// catalog entry.
    pub fn nearest(&self, big5: &[f32; 5]) -> StoneCode {
        let mut best = self.profiles[0].0;
        let mut best_distance = f32::MAX;
        for (stone, profile) in &self.profiles {
            let distance = squared_distance(big5, profile);
            if distance < best_distance {
                best = *stone;
                best_distance = distance;
            }
        }
        best
    }
}

impl Default for StoneTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Squared Euclidean distance; ordering-equivalent to the true distance.
#[inline]
fn squared_distance(a: &[f32; 5], b: &[f32; 5]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}
