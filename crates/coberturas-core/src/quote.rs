//! Display-only quote identifier and dates
//!
//! A stamp is generated on every render. It is not a stable identity for a
//! quote and nothing stores it.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use serde::Serialize;

/// Prefix shared by all quote identifiers
pub const QUOTE_ID_PREFIX: &str = "COT-";

/// How long a quote stays valid after issue
pub const VALIDITY_DAYS: i64 = 30;

const ID_MIN: u32 = 100_000;
const ID_MAX: u32 = 999_999;

/// Quote identifier with issue and expiry dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteStamp {
    pub id: String,
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
}

impl QuoteStamp {
    /// Fresh stamp for today using the thread-local RNG
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng(), Local::now().date_naive())
    }

    /// Stamp from an explicit RNG and issue date
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Self {
        let number = rng.gen_range(ID_MIN..=ID_MAX);
        Self {
            id: format!("{QUOTE_ID_PREFIX}{number}"),
            issued_on: today,
            valid_until: today + Duration::days(VALIDITY_DAYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_id_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let stamp = QuoteStamp::generate_with(&mut rng, date(2024, 1, 1));
            let digits = stamp.id.strip_prefix(QUOTE_ID_PREFIX).unwrap();
            assert_eq!(digits.len(), 6);
            let n: u32 = digits.parse().unwrap();
            assert!((ID_MIN..=ID_MAX).contains(&n));
        }
    }

    #[test]
    fn test_validity_is_thirty_days() {
        let mut rng = StdRng::seed_from_u64(1);
        let stamp = QuoteStamp::generate_with(&mut rng, date(2024, 2, 10));
        assert_eq!(stamp.issued_on, date(2024, 2, 10));
        assert_eq!(stamp.valid_until, date(2024, 3, 11));
        assert_eq!((stamp.valid_until - stamp.issued_on).num_days(), VALIDITY_DAYS);
    }

    #[test]
    fn test_same_seed_same_id() {
        let a = QuoteStamp::generate_with(&mut StdRng::seed_from_u64(42), date(2024, 5, 5));
        let b = QuoteStamp::generate_with(&mut StdRng::seed_from_u64(42), date(2024, 5, 5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate() {
        let stamp = QuoteStamp::generate();
        assert!(stamp.id.starts_with(QUOTE_ID_PREFIX));
        assert_eq!((stamp.valid_until - stamp.issued_on).num_days(), VALIDITY_DAYS);
    }

    #[test]
    fn test_serializes_iso_dates() {
        let stamp = QuoteStamp::generate_with(&mut StdRng::seed_from_u64(3), date(2024, 12, 20));
        let json = serde_json::to_value(&stamp).unwrap();
        assert_eq!(json["issued_on"], "2024-12-20");
        assert_eq!(json["valid_until"], "2025-01-19");
    }
}
