//! # Diffie-Hellman Core Library
//!
//! Number theory for a textbook Diffie-Hellman key exchange over 64-bit
//! integers.
//!
//! ## Components
//!
//! - **modpow** - square-and-multiply modular exponentiation
//! - **primality** - Miller-Rabin primality test
//! - **safe_prime** - generation of safe primes p = 2q + 1
//! - **primitive_root** - smallest generator of Z*_p
//! - **exchange** - parameters, key pairs and the shared secret
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so runs can be
//! reproduced with a seeded generator.
//!
//! ## Usage
//!
//! ```rust
//! use dh_core::{DhParams, Exchange, GeneratorConfig};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let params = DhParams::generate(16, &GeneratorConfig::default(), &mut rng)?;
//! let exchange = Exchange::random(params, &mut rng)?;
//! assert_eq!(exchange.secret_alice, exchange.secret_bob);
//! # Ok::<(), dh_core::DhError>(())
//! ```
//!
//! **Not for production use**: no constant-time arithmetic and 64-bit moduli
//! are trivially breakable.

pub mod error;
pub mod exchange;
pub mod modpow;
pub mod primality;
pub mod primitive_root;
pub mod safe_prime;

// Re-exports for easy access
pub use error::{DhError, Result};
pub use exchange::{DhParams, Exchange, GeneratorConfig, KeyPair};
pub use modpow::{mod_pow, mul_mod};
pub use primality::{DEFAULT_ROUNDS, is_prime, is_prime_trial_division, validate_rounds};
pub use primitive_root::{
    find_primitive_root, find_safe_prime_generator, is_primitive_root, is_safe_prime_generator,
};
pub use safe_prime::{
    DEFAULT_MAX_ATTEMPTS, MAX_BIT_LENGTH, MIN_BIT_LENGTH, SafePrime, generate_safe_prime,
    validate_bit_length,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
