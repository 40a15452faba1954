// ABOUTME: Seeding procedures and their shared random-value helpers
// ABOUTME: Library home of the populator and the sample-prescription seeder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

//! # Seeding
//!
//! [`populate`] fills every clinic table with randomized fixture data;
//! [`seed_sample_prescriptions`] drops four fixed prescriptions onto the
//! first doctor/patient pair. Both take a [`crate::database::Database`] so
//! tests can run them against `sqlite::memory:`.

pub mod fixtures;
mod populate;
mod prescriptions;

pub use populate::{populate, PopulateSummary};
pub use prescriptions::seed_sample_prescriptions;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use rand::Rng;

/// Uniform choice from a non-empty slice
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Ten-digit phone number
pub(crate) fn random_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    NumberWithFormat("##########").fake_with_rng(rng)
}

/// Date of birth for someone between `min_age` and `max_age` years old
pub(crate) fn date_of_birth<R: Rng + ?Sized>(rng: &mut R, min_age: u32, max_age: u32) -> NaiveDate {
    let days = rng.gen_range(i64::from(min_age) * 365..=i64::from(max_age) * 365);
    Utc::now().date_naive() - Duration::days(days)
}

/// Timestamp between Jan 1 of the current year and now
pub(crate) fn date_time_this_year<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    let now = Utc::now();
    let elapsed =
        i64::from(now.ordinal0()) * 86_400 + i64::from(now.num_seconds_from_midnight());
    now - Duration::seconds(rng.gen_range(0..=elapsed))
}

/// Date between Jan 1 of the current year and today
pub(crate) fn date_this_year<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    date_time_this_year(rng).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_phone_is_ten_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        let phone = random_phone(&mut rng);
        assert_eq!(phone.len(), 10);
        assert!(phone.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn date_of_birth_stays_in_age_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let today = Utc::now().date_naive();
        for _ in 0..100 {
            let dob = date_of_birth(&mut rng, 18, 80);
            let age_days = (today - dob).num_days();
            assert!(age_days >= 18 * 365);
            assert!(age_days <= 80 * 365);
        }
    }

    #[test]
    fn date_time_this_year_is_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();
        for _ in 0..100 {
            let dt = date_time_this_year(&mut rng);
            assert!(dt <= now);
            assert_eq!(dt.year(), now.year());
        }
    }

    #[test]
    fn pick_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = ["a", "b", "c"];
        for _ in 0..20 {
            assert!(items.contains(pick(&mut rng, &items)));
        }
    }
}
