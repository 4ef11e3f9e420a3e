//! Synthetic phone number issuance.
//!
//! Phones are `0912` followed by 7 uniformly random decimal digits. The
//! issuer owns the RNG and the set of numbers already handed out, so
//! uniqueness is scoped to one run and no process-wide state exists. On a
//! collision the issuer simply draws again; once every suffix has been
//! issued it returns an error instead of spinning forever.

use std::collections::{BTreeSet, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::BackfillError;

/// Fixed prefix of every issued phone number.
pub const PHONE_PREFIX: &str = "0912";

/// Number of random digits after the prefix.
pub const SUFFIX_LEN: usize = 7;

/// Total distinct suffixes (10^7).
pub const SUFFIX_SPACE: usize = 10_000_000;

/// A user ID paired with its issued phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRecord {
    pub user_id: String,
    pub phone: String,
}

/// Issuance tracker for one run.
///
/// Constructed at the start of the run, fed the sorted ID set, and dropped
/// once the records are produced. The RNG is injectable so tests can use a
/// seeded [`StdRng`].
pub struct PhoneIssuer<R: Rng> {
    rng: R,
    issued: HashSet<String>,
    capacity: usize,
}

impl PhoneIssuer<StdRng> {
    /// Create an issuer seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for PhoneIssuer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PhoneIssuer<R> {
    /// Create an issuer with an explicit RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
            capacity: SUFFIX_SPACE,
        }
    }

    #[cfg(test)]
    fn with_capacity(rng: R, capacity: usize) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
            capacity,
        }
    }

    /// Number of phone numbers issued so far.
    #[must_use]
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    /// Issue one phone number not seen before in this run.
    ///
    /// Retries on collision. Fails only when every suffix in the space has
    /// already been issued, which at realistic input sizes never happens.
    pub fn issue(&mut self) -> Result<String, BackfillError> {
        if self.issued.len() >= self.capacity {
            return Err(BackfillError::PhoneSpaceExhausted {
                capacity: self.capacity,
            });
        }

        loop {
            let mut phone = String::with_capacity(PHONE_PREFIX.len() + SUFFIX_LEN);
            phone.push_str(PHONE_PREFIX);
            for _ in 0..SUFFIX_LEN {
                phone.push(char::from(b'0' + self.rng.gen_range(0..10u8)));
            }
            if self.issued.insert(phone.clone()) {
                return Ok(phone);
            }
        }
    }

    /// Pair every user ID with a fresh phone number.
    ///
    /// The input set iterates in ascending order, so records come out in
    /// sorted ID order; phone values are random.
    pub fn assign(&mut self, user_ids: &BTreeSet<String>) -> Result<Vec<PhoneRecord>, BackfillError> {
        let mut records = Vec::with_capacity(user_ids.len());
        for user_id in user_ids {
            let phone = self.issue()?;
            records.push(PhoneRecord {
                user_id: user_id.clone(),
                phone,
            });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seeded() -> PhoneIssuer<StdRng> {
        PhoneIssuer::with_rng(StdRng::seed_from_u64(42))
    }

    fn is_well_formed(phone: &str) -> bool {
        phone.len() == 11
            && phone.starts_with(PHONE_PREFIX)
            && phone[PHONE_PREFIX.len()..]
                .bytes()
                .all(|b| b.is_ascii_digit())
    }

    #[test]
    fn issued_phone_is_prefix_plus_seven_digits() {
        let mut issuer = seeded();
        let phone = issuer.issue().unwrap();
        assert!(is_well_formed(&phone), "malformed phone: {phone}");
    }

    #[test]
    fn issued_phones_are_pairwise_distinct() {
        let mut issuer = seeded();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let phone = issuer.issue().unwrap();
            assert!(seen.insert(phone), "duplicate phone issued");
        }
        assert_eq!(issuer.issued_count(), 1000);
    }

    #[test]
    fn exhausted_space_returns_error() {
        let mut issuer = PhoneIssuer::with_capacity(StdRng::seed_from_u64(7), 3);
        for _ in 0..3 {
            issuer.issue().unwrap();
        }
        let err = issuer.issue().unwrap_err();
        match err {
            BackfillError::PhoneSpaceExhausted { capacity } => assert_eq!(capacity, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn assign_preserves_sorted_id_order() {
        let ids: BTreeSet<String> = [
            "ffffffff-0000-1111-2222-333344445555",
            "00000000-0000-1111-2222-333344445555",
            "a1b2c3d4-e5f6-7890-abcd-ef1234567890",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let records = seeded().assign(&ids).unwrap();
        let record_ids: Vec<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(
            record_ids,
            vec![
                "00000000-0000-1111-2222-333344445555",
                "a1b2c3d4-e5f6-7890-abcd-ef1234567890",
                "ffffffff-0000-1111-2222-333344445555",
            ]
        );
    }

    #[test]
    fn assign_empty_set_yields_no_records() {
        let records = seeded().assign(&BTreeSet::new()).unwrap();
        assert!(records.is_empty());
    }

    proptest! {
        #[test]
        fn every_issued_phone_is_well_formed_and_unique(seed: u64, count in 1usize..200) {
            let mut issuer = PhoneIssuer::with_rng(StdRng::seed_from_u64(seed));
            let mut seen = HashSet::new();
            for _ in 0..count {
                let phone = issuer.issue().unwrap();
                prop_assert!(is_well_formed(&phone));
                prop_assert!(seen.insert(phone));
            }
        }
    }
}
