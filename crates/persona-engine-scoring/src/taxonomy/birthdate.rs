//! Birth-date tribe: a cyclic 12-slot wheel over calendar days.

use chrono::NaiveDate;
use persona_engine_core::TribeCode;

/// Epoch of the 60-day cycle. 1984-01-01 is day zero of the sexagenary
/// cycle this scheme derives from.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1984, 1, 1).expect("valid epoch date")
}

/// Maps a birth date onto the 12-slot tribe wheel.
///
/// Days since the epoch, reduced modulo 60 and then modulo 12, index the
/// wheel. Dates before the epoch wrap the same cycle (the double-modulo
/// keeps the index non-negative). Pure function of the date, independent of
/// any psychometric result.
pub fn tribe_from_birth_date(date: NaiveDate) -> TribeCode {
    let days = (date - epoch()).num_days();
    let sexagenary = days.rem_euclid(60);
    let slot = (sexagenary % 12) as usize;
    TribeCode::wheel()[slot]
}
