//! Primitive root (generator) search modulo a prime

use tracing::debug;

use crate::error::{DhError, Result};
use crate::modpow::mod_pow;
use crate::safe_prime::SafePrime;

/// Checks whether `g` generates the multiplicative group modulo the prime `p`
///
/// With phi = p - 1, trial-divides phi by every i <= sqrt(phi) and rejects
/// `g` if `g^i` or `g^(phi/i)` is 1 mod p for any divisor i. Works for any
/// prime modulus, not only safe primes, but costs O(sqrt(p)) exponentiations.
///
/// # Example
///
/// ```rust
/// use dh_core::is_primitive_root;
///
/// assert!(is_primitive_root(5, 23));
/// assert!(!is_primitive_root(2, 23)); // 2^11 = 1 mod 23
/// ```
pub fn is_primitive_root(g: u64, p: u64) -> bool {
    if p < 3 || g < 2 || g >= p {
        return false;
    }

    let phi = p - 1;
    let mut i = 2u64;
    while i <= phi / i {
        if phi % i == 0 && (mod_pow(g, i, p) == 1 || mod_pow(g, phi / i, p) == 1) {
            return false;
        }
        i += 1;
    }
    true
}

/// Generator check for a safe prime p = 2q + 1
///
/// phi = 2q has only the prime factors 2 and q, so `g` is a generator
/// iff `g^2 != 1` and `g^q != 1` mod p.
pub fn is_safe_prime_generator(g: u64, safe_prime: &SafePrime) -> bool {
    let p = safe_prime.p();
    if g < 2 || g >= p {
        return false;
    }
    mod_pow(g, 2, p) != 1 && mod_pow(g, safe_prime.q(), p) != 1
}

/// Finds the smallest primitive root modulo the prime `p`
///
/// Uses the general trial-division check; see [`find_safe_prime_generator`]
/// for the fast path on safe primes.
pub fn find_primitive_root(p: u64) -> Result<u64> {
    if p < 3 {
        return Err(DhError::InvalidModulus(p));
    }
    search_generator(p, |g| is_primitive_root(g, p))
}

/// Finds the smallest generator modulo a safe prime
///
/// Returns the same value as [`find_primitive_root`] but only needs two
/// exponentiations per candidate.
pub fn find_safe_prime_generator(safe_prime: &SafePrime) -> Result<u64> {
    search_generator(safe_prime.p(), |g| is_safe_prime_generator(g, safe_prime))
}

fn search_generator<F: Fn(u64) -> bool>(p: u64, is_generator: F) -> Result<u64> {
    match (2..p).find(|&g| is_generator(g)) {
        Some(g) => {
            debug!(p, g, "found generator");
            Ok(g)
        }
        None => Err(DhError::SearchExhausted { modulus: p }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primality::is_prime_trial_division;
    use rand::{SeedableRng, rngs::StdRng};

    /// Order of g modulo p by brute force
    fn order(g: u64, p: u64) -> u64 {
        let mut x = g % p;
        let mut k = 1;
        while x != 1 {
            x = x * g % p;
            k += 1;
        }
        k
    }

    #[test]
    fn test_known_primitive_roots() {
        assert!(is_primitive_root(5, 23));
        assert!(is_primitive_root(2, 11));
        assert!(is_primitive_root(3, 7));
        assert!(is_primitive_root(2, 3));
        assert!(!is_primitive_root(4, 23));
        assert!(!is_primitive_root(22, 23)); // order 2
    }

    #[test]
    fn test_out_of_range_candidates() {
        assert!(!is_primitive_root(0, 23));
        assert!(!is_primitive_root(1, 23));
        assert!(!is_primitive_root(23, 23));
        assert!(!is_primitive_root(2, 2));
    }

    #[test]
    fn test_matches_brute_force_order() {
        for p in (3..300u64).filter(|&p| is_prime_trial_division(p)) {
            for g in 2..p {
                assert_eq!(
                    is_primitive_root(g, p),
                    order(g, p) == p - 1,
                    "g = {}, p = {}",
                    g,
                    p
                );
            }
        }
    }

    #[test]
    fn test_find_primitive_root_smallest() {
        let expected = [(3u64, 2u64), (5, 2), (7, 3), (11, 2), (23, 5), (41, 6), (47, 5), (71, 7), (479, 13)];
        for &(p, g) in &expected {
            assert_eq!(find_primitive_root(p), Ok(g), "p = {}", p);
        }
    }

    #[test]
    fn test_find_primitive_root_invalid_modulus() {
        assert_eq!(find_primitive_root(0), Err(DhError::InvalidModulus(0)));
        assert_eq!(find_primitive_root(2), Err(DhError::InvalidModulus(2)));
    }

    #[test]
    fn test_search_exhausted() {
        assert_eq!(
            search_generator(23, |_| false),
            Err(DhError::SearchExhausted { modulus: 23 })
        );
    }

    #[test]
    fn test_safe_prime_generator_agrees_with_general_search() {
        let mut rng = StdRng::seed_from_u64(17);
        for p in [5u64, 7, 11, 23, 47, 59, 83, 107, 167, 179, 227, 263, 359, 383, 479, 503] {
            let safe = SafePrime::from_prime(p, 5, &mut rng).unwrap();
            let g = find_safe_prime_generator(&safe).unwrap();
            assert_eq!(Ok(g), find_primitive_root(p), "p = {}", p);
            assert_ne!(mod_pow(g, 2, p), 1);
            assert_ne!(mod_pow(g, (p - 1) / 2, p), 1);
            for h in 2..p {
                assert_eq!(is_safe_prime_generator(h, &safe), is_primitive_root(h, p));
            }
        }
    }
}
