// src/integer_math/factorization.rs

use log::{debug, error};
use num::{BigUint, One};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

use crate::error::{MonsterError, Result};

/// Prime-power decomposition of a positive integer, keyed by prime in ascending order.
///
/// The table is taken as given: primality of the keys is not checked. The only
/// property this type enforces is the one it is used for, namely that the product
/// of `p^e` over all entries equals some claimed integer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimeFactorization(BTreeMap<u64, u32>);

impl PrimeFactorization {
    pub fn new() -> Self {
        PrimeFactorization(BTreeMap::new())
    }

    /// Builds a table from `(prime, exponent)` pairs.
    ///
    /// Repeated primes have their exponents summed and zero exponents are
    /// skipped, so the product is unaffected by how the pairs were listed.
    pub fn from_pairs(pairs: &[(u64, u32)]) -> Self {
        let mut factorization = PrimeFactorization::new();
        for &(prime, exponent) in pairs {
            factorization.add(prime, exponent);
        }
        factorization
    }

    pub fn add(&mut self, prime: u64, exponent: u32) {
        if exponent == 0 {
            return;
        }
        *self.0.entry(prime).or_insert(0) += exponent;
    }

    pub fn exponent(&self, prime: u64) -> Option<u32> {
        self.0.get(&prime).copied()
    }

    pub fn contains(&self, prime: u64) -> bool {
        self.0.contains_key(&prime)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(prime, exponent)` pairs in ascending prime order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.0.iter().map(|(&p, &e)| (p, e))
    }

    pub fn primes(&self) -> Vec<u64> {
        self.0.keys().copied().collect()
    }

    pub fn largest_prime(&self) -> Option<u64> {
        self.0.keys().next_back().copied()
    }

    pub fn max_exponent(&self) -> Option<u32> {
        self.0.values().copied().max()
    }

    /// Every prime whose exponent equals the maximum, ascending.
    pub fn primes_with_max_exponent(&self) -> Vec<u64> {
        match self.max_exponent() {
            Some(max) => self.iter().filter(|&(_, e)| e == max).map(|(p, _)| p).collect(),
            None => Vec::new(),
        }
    }

    /// `p^e` for a prime in the table, computed exactly.
    pub fn prime_power(&self, prime: u64) -> Option<BigUint> {
        self.exponent(prime).map(|e| BigUint::from(prime).pow(e))
    }

    /// Exact product of all prime powers. The empty table yields 1.
    pub fn product(&self) -> BigUint {
        let mut accumulator = BigUint::one();
        for (prime, exponent) in self.iter() {
            let power = BigUint::from(prime).pow(exponent);
            debug!("Multiplying by {}^{} = {}", prime, exponent, power);
            accumulator *= power;
        }
        accumulator
    }

    pub fn verify(&self, claimed: &BigUint) -> bool {
        &self.product() == claimed
    }

    /// Like [`verify`](Self::verify), but reports the mismatch as an error.
    pub fn ensure_product(&self, claimed: &BigUint) -> Result<()> {
        let computed = self.product();
        if &computed == claimed {
            return Ok(());
        }

        error!("Factorization product {} does not match claimed order {}", computed, claimed);
        Err(MonsterError::InvariantViolated {
            claimed: claimed.clone(),
            computed,
        })
    }
}

impl Display for PrimeFactorization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let factors: Vec<String> = self
            .iter()
            .map(|(prime, exponent)| {
                if exponent == 1 {
                    format!("{}", prime)
                } else {
                    format!("{}^{}", prime, exponent)
                }
            })
            .collect();
        write!(f, "{}", factors.join(" × "))
    }
}

/// Returns true iff the product of `p^e` over `table` equals `claimed`.
pub fn verify_order(table: &PrimeFactorization, claimed: &BigUint) -> bool {
    debug!("Verifying claimed order against {} prime powers", table.len());
    table.verify(claimed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_of_small_table() {
        // 360 = 2^3 × 3^2 × 5
        let table = PrimeFactorization::from_pairs(&[(2, 3), (3, 2), (5, 1)]);
        assert_eq!(table.product(), BigUint::from(360u32));
        assert!(verify_order(&table, &BigUint::from(360u32)));
        assert!(!verify_order(&table, &BigUint::from(361u32)));
    }

    #[test]
    fn test_empty_table_is_one() {
        let table = PrimeFactorization::new();
        assert!(table.is_empty());
        assert_eq!(table.product(), BigUint::one());
        assert_eq!(table.largest_prime(), None);
        assert!(table.primes_with_max_exponent().is_empty());
    }

    #[test]
    fn test_product_exceeds_u64() {
        // 2^64 would wrap to zero in a u64 accumulator
        let table = PrimeFactorization::from_pairs(&[(2, 64)]);
        let expected = BigUint::parse_bytes(b"18446744073709551616", 10).unwrap();
        assert_eq!(table.product(), expected);
    }

    #[test]
    fn test_repeated_primes_are_merged() {
        let table = PrimeFactorization::from_pairs(&[(3, 1), (2, 2), (3, 2), (7, 0)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.exponent(3), Some(3));
        assert!(!table.contains(7));
        assert_eq!(table.product(), BigUint::from(108u32));
    }

    #[test]
    fn test_max_exponent_ties() {
        let table = PrimeFactorization::from_pairs(&[(5, 2), (2, 2), (3, 1)]);
        assert_eq!(table.max_exponent(), Some(2));
        assert_eq!(table.primes_with_max_exponent(), vec![2, 5]);
        assert_eq!(table.largest_prime(), Some(5));
    }

    #[test]
    fn test_ensure_product_reports_mismatch() {
        let table = PrimeFactorization::from_pairs(&[(2, 2), (3, 1)]);
        assert!(table.ensure_product(&BigUint::from(12u32)).is_ok());

        match table.ensure_product(&BigUint::from(13u32)) {
            Err(MonsterError::InvariantViolated { claimed, computed }) => {
                assert_eq!(claimed, BigUint::from(13u32));
                assert_eq!(computed, BigUint::from(12u32));
            }
            other => panic!("expected invariant violation, got {:?}", other),
        }
    }

    #[test]
    fn test_display_omits_unit_exponents() {
        let table = PrimeFactorization::from_pairs(&[(13, 3), (2, 46), (71, 1)]);
        assert_eq!(table.to_string(), "2^46 × 13^3 × 71");
    }

    #[test]
    fn test_prime_power() {
        let table = PrimeFactorization::from_pairs(&[(7, 6)]);
        assert_eq!(table.prime_power(7), Some(BigUint::from(117649u32)));
        assert_eq!(table.prime_power(11), None);
    }
}
