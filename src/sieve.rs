//! A growing table of primes with factorization over the primes found so far.

use crate::errors::{AlgsError, Result};
use crate::search::binary;
use core::fmt;

/// Prime lookups backed by a table of known primes.
pub trait Sieve {
    /// The `n`-th prime, counting from 1 (`prime(1) == 2`). Grows the table
    /// as needed.
    fn prime(&mut self, n: usize) -> Result<u64>;

    /// `true` if `p` is already in the table.
    fn is_known_prime(&self, p: u64) -> bool;

    /// 1-based index of `p` if it is a known prime.
    fn prime_index(&self, p: u64) -> Option<usize>;

    /// Prime factors of `n` in ascending order, with multiplicity.
    ///
    /// Only known primes are tried, so the product of the result is at most
    /// `n`, and equals `n` when the table covers its factorization.
    fn prime_factorize(&self, n: u64) -> Vec<u64>;
}

/// Incrementally grown prime table, starting from `[2]`.
///
/// [`Sieve::prime`] extends the table one candidate at a time by trial
/// division; [`SieveOfEratosthenes::sieve_to`] extends it in bulk with a
/// classic sieve pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SieveOfEratosthenes {
    primes: Vec<u64>,
}

impl Default for SieveOfEratosthenes {
    fn default() -> Self {
        Self::new()
    }
}

impl SieveOfEratosthenes {
    pub fn new() -> Self {
        Self { primes: vec![2] }
    }

    /// Primes found so far, ascending.
    pub fn known_primes(&self) -> &[u64] {
        &self.primes
    }

    /// Largest limit [`SieveOfEratosthenes::sieve_to`] accepts; the pass
    /// allocates one byte per candidate.
    pub const MAX_LIMIT: u64 = 1 << 26;

    /// Make sure every prime `<= limit` is known.
    ///
    /// Fails with [`AlgsError::SieveLimitTooLarge`], leaving the table
    /// untouched, when `limit` exceeds [`Self::MAX_LIMIT`].
    pub fn sieve_to(&mut self, limit: u64) -> Result<()> {
        if limit <= self.largest() {
            return Ok(());
        }
        if limit > Self::MAX_LIMIT {
            return Err(AlgsError::SieveLimitTooLarge {
                limit,
                max: Self::MAX_LIMIT,
            });
        }
        let limit = limit as usize;

        let mut composite = vec![false; limit + 1];
        let mut primes = Vec::new();
        for n in 2..=limit {
            if composite[n] {
                continue;
            }
            primes.push(n as u64);
            let mut multiple = n.saturating_mul(n);
            while multiple <= limit {
                composite[multiple] = true;
                multiple += n;
            }
        }
        self.primes = primes;
        Ok(())
    }

    fn largest(&self) -> u64 {
        self.primes[self.primes.len() - 1]
    }

    /// Append the next prime after the current largest.
    fn grow_one(&mut self) {
        let mut candidate = self.largest() + 1;
        while !self.has_no_known_factor(candidate) {
            candidate += 1;
        }
        self.primes.push(candidate);
    }

    /// `true` if no known prime up to `sqrt(candidate)` divides it.
    fn has_no_known_factor(&self, candidate: u64) -> bool {
        self.primes
            .iter()
            .take_while(|&&p| p.saturating_mul(p) <= candidate)
            .all(|&p| candidate % p != 0)
    }
}

impl Sieve for SieveOfEratosthenes {
    fn prime(&mut self, n: usize) -> Result<u64> {
        if n == 0 {
            return Err(AlgsError::ZeroPrimeIndex);
        }
        while self.primes.len() < n {
            self.grow_one();
        }
        Ok(self.primes[n - 1])
    }

    fn is_known_prime(&self, p: u64) -> bool {
        binary::find(&p, &self.primes).is_ok()
    }

    fn prime_index(&self, p: u64) -> Option<usize> {
        binary::find(&p, &self.primes).ok().map(|i| i + 1)
    }

    fn prime_factorize(&self, n: u64) -> Vec<u64> {
        let mut factors = Vec::new();
        if n < 2 {
            return factors;
        }
        let mut rest = n;
        for &p in &self.primes {
            if p > rest {
                break;
            }
            while rest % p == 0 {
                factors.push(p);
                rest /= p;
            }
        }
        factors
    }
}

impl fmt::Display for SieveOfEratosthenes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.primes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_two_only() {
        let sieve = SieveOfEratosthenes::new();
        assert!(sieve.is_known_prime(2));
        assert!(!sieve.is_known_prime(3));
        assert_eq!(sieve.to_string(), "[2]");
    }

    #[test]
    fn prime_grows_the_table() {
        let mut sieve = SieveOfEratosthenes::new();
        assert_eq!(sieve.prime(1), Ok(2));
        let p = sieve.prime(5).unwrap();
        assert_eq!(p, 11);
        assert!(sieve.is_known_prime(p));
        assert_eq!(sieve.known_primes(), &[2, 3, 5, 7, 11]);
        assert_eq!(sieve.prime(0), Err(AlgsError::ZeroPrimeIndex));
    }

    #[test]
    fn prime_index_round_trips() {
        let mut sieve = SieveOfEratosthenes::new();
        let index = 20;
        let p = sieve.prime(index).unwrap();
        assert_eq!(p, 71);
        assert_eq!(sieve.prime_index(p), Some(index));
        assert_eq!(sieve.prime_index(70), None);
    }

    #[test]
    fn factorize_with_known_primes() {
        let mut sieve = SieveOfEratosthenes::new();
        sieve.prime(3).unwrap();
        assert_eq!(sieve.prime_factorize(5), vec![5]);
        assert_eq!(sieve.prime_factorize(360), vec![2, 2, 2, 3, 3, 5]);
        assert!(sieve.prime_factorize(1).is_empty());
        assert!(sieve.prime_factorize(0).is_empty());

        // 7 is not known yet, so 14 only yields its 2
        assert_eq!(sieve.prime_factorize(14), vec![2]);
        sieve.prime(4).unwrap();
        assert_eq!(sieve.prime_factorize(14), vec![2, 7]);
    }

    #[test]
    fn sieve_to_matches_trial_division() {
        let mut bulk = SieveOfEratosthenes::new();
        bulk.sieve_to(1000).unwrap();

        let mut trial = SieveOfEratosthenes::new();
        let count = bulk.known_primes().len();
        trial.prime(count).unwrap();

        assert_eq!(bulk, trial);
        assert_eq!(count, 168);
        assert_eq!(bulk.prime_factorize(997 * 2 * 2), vec![2, 2, 997]);
    }

    #[test]
    fn sieve_to_never_shrinks() {
        let mut sieve = SieveOfEratosthenes::new();
        sieve.prime(10).unwrap();
        sieve.sieve_to(5).unwrap();
        assert_eq!(sieve.known_primes().len(), 10);
    }

    #[test]
    fn sieve_to_rejects_huge_limits() {
        let mut sieve = SieveOfEratosthenes::new();
        sieve.prime(4).unwrap();

        let max = SieveOfEratosthenes::MAX_LIMIT;
        for limit in [max + 1, u64::MAX] {
            assert_eq!(
                sieve.sieve_to(limit),
                Err(AlgsError::SieveLimitTooLarge { limit, max })
            );
        }
        assert_eq!(sieve.known_primes(), &[2, 3, 5, 7]);

        assert_eq!(sieve.sieve_to(7), Ok(()));
    }
}
