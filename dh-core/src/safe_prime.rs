//! Safe-prime generation (p = 2q + 1 with q prime)

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{DhError, Result};
use crate::primality::{is_prime, is_prime_trial_division, validate_rounds};

/// Smallest accepted bit length for q
pub const MIN_BIT_LENGTH: u32 = 2;

/// Largest accepted bit length for q, keeps p = 2q + 1 below 2^63
pub const MAX_BIT_LENGTH: u32 = 62;

/// Default cap on the number of sampled candidates
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

/// Moduli below this bound are validated deterministically.
const TRIAL_DIVISION_LIMIT: u64 = 1 << 32;

/// A safe prime `p` together with its Sophie Germain prime `q = (p - 1) / 2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafePrime {
    p: u64,
    q: u64,
}

impl SafePrime {
    /// Checks a user-supplied modulus
    ///
    /// `p` must be odd, at least 5, and both `p` and `(p - 1) / 2` must be
    /// prime. Small moduli are checked by trial division, larger ones with
    /// `rounds` Miller-Rabin witnesses.
    pub fn from_prime<R: Rng + ?Sized>(p: u64, rounds: usize, rng: &mut R) -> Result<Self> {
        validate_rounds(rounds)?;
        if p < 5 || p % 2 == 0 {
            return Err(DhError::NotSafePrime(p));
        }

        let q = (p - 1) / 2;
        if !check_prime(p, rounds, rng) || !check_prime(q, rounds, rng) {
            return Err(DhError::NotSafePrime(p));
        }

        Ok(Self { p, q })
    }

    /// The safe prime modulus
    pub fn p(&self) -> u64 {
        self.p
    }

    /// The prime `(p - 1) / 2`
    pub fn q(&self) -> u64 {
        self.q
    }

    /// Bit length of the modulus
    pub fn bits(&self) -> u32 {
        u64::BITS - self.p.leading_zeros()
    }
}

fn check_prime<R: Rng + ?Sized>(n: u64, rounds: usize, rng: &mut R) -> bool {
    if n < TRIAL_DIVISION_LIMIT {
        is_prime_trial_division(n)
    } else {
        is_prime(n, rounds, rng)
    }
}

/// Rejects bit lengths whose sampling range is empty or whose p would overflow
pub fn validate_bit_length(bits: u32) -> Result<()> {
    if !(MIN_BIT_LENGTH..=MAX_BIT_LENGTH).contains(&bits) {
        return Err(DhError::InvalidBitLength {
            bits,
            min: MIN_BIT_LENGTH,
            max: MAX_BIT_LENGTH,
        });
    }
    Ok(())
}

/// Generates a safe prime p = 2q + 1 where q has exactly `bits` bits
///
/// Samples q uniformly from `[2^(bits-1), 2^bits - 1]`. Every sample counts
/// as one attempt; after `max_attempts` samples without success the search
/// gives up with [`DhError::AttemptsExhausted`].
///
/// # Example
///
/// ```rust
/// use dh_core::{generate_safe_prime, is_prime};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let safe = generate_safe_prime(16, 5, 100_000, &mut rng)?;
/// assert_eq!(safe.p(), 2 * safe.q() + 1);
/// assert!(is_prime(safe.q(), 20, &mut rng));
/// # Ok::<(), dh_core::DhError>(())
/// ```
pub fn generate_safe_prime<R: Rng + ?Sized>(
    bits: u32,
    rounds: usize,
    max_attempts: u64,
    rng: &mut R,
) -> Result<SafePrime> {
    validate_bit_length(bits)?;
    validate_rounds(rounds)?;
    if max_attempts == 0 {
        return Err(DhError::InvalidInput(
            "max_attempts must be greater than 0".to_string(),
        ));
    }

    let low = 1u64 << (bits - 1);
    let high = (1u64 << bits) - 1;

    for attempt in 1..=max_attempts {
        let q = rng.gen_range(low..=high);

        if !is_prime(q, rounds, rng) {
            trace!(q, attempt, "candidate q is composite");
            continue;
        }

        let p = 2 * q + 1;
        if is_prime(p, rounds, rng) {
            debug!(p, q, attempt, "found safe prime");
            return Ok(SafePrime { p, q });
        }
        trace!(q, p, attempt, "q is prime but 2q + 1 is composite");
    }

    Err(DhError::AttemptsExhausted {
        bits,
        attempts: max_attempts,
    })
}
