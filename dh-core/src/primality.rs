//! Miller-Rabin primality test

use rand::Rng;

use crate::error::{DhError, Result};
use crate::modpow::{mod_pow, mul_mod};

/// Default number of Miller-Rabin rounds
pub const DEFAULT_ROUNDS: usize = 5;

/// Rejects a round count of zero, which would accept every odd candidate
pub fn validate_rounds(rounds: usize) -> Result<()> {
    if rounds == 0 {
        return Err(DhError::InvalidInput(
            "rounds must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Miller-Rabin primality test
///
/// Probabilistic test with `rounds` random witnesses drawn from `rng`.
/// A composite passes with probability at most (1/4)^rounds; a prime is
/// never rejected.
///
/// # Example
///
/// ```rust
/// use dh_core::is_prime;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert!(is_prime(23, 5, &mut rng));
/// assert!(!is_prime(561, 5, &mut rng)); // Carmichael number
/// ```
pub fn is_prime<R: Rng + ?Sized>(n: u64, rounds: usize, rng: &mut R) -> bool {
    // [2, n-2] is empty below 5
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_1 = n - 1;
    let s = n_minus_1.trailing_zeros();
    let d = n_minus_1 >> s;

    'witness: for _ in 0..rounds {
        let a = rng.gen_range(2..=n - 2);
        let mut x = mod_pow(a, d, n);

        if x == 1 || x == n_minus_1 {
            continue;
        }

        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Deterministic primality check by trial division up to sqrt(n)
///
/// Only practical for small `n`; used as ground truth and for validating
/// small user-supplied moduli.
pub fn is_prime_trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut i = 3u64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
