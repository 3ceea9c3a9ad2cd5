//! Diffie-Hellman parameters, key pairs and shared secret

use rand::Rng;
use tracing::{info, warn};

use crate::error::{DhError, Result};
use crate::modpow::mod_pow;
use crate::primality::DEFAULT_ROUNDS;
use crate::primitive_root::{find_safe_prime_generator, is_safe_prime_generator};
use crate::safe_prime::{DEFAULT_MAX_ATTEMPTS, SafePrime, generate_safe_prime};

/// Settings for parameter generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Miller-Rabin rounds per primality test
    pub rounds: usize,
    /// Maximum number of sampled q candidates
    pub max_attempts: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Public domain parameters: safe prime modulus and generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhParams {
    safe_prime: SafePrime,
    g: u64,
}

impl DhParams {
    /// Generates a fresh safe prime of `bits` bits (for q) and its smallest generator
    pub fn generate<R: Rng + ?Sized>(
        bits: u32,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let safe_prime = generate_safe_prime(bits, config.rounds, config.max_attempts, rng)?;
        let params = Self::from_safe_prime(safe_prime)?;
        info!(p = params.p(), g = params.g(), "generated DH parameters");
        Ok(params)
    }

    /// Uses the smallest generator modulo an existing safe prime
    pub fn from_safe_prime(safe_prime: SafePrime) -> Result<Self> {
        let g = find_safe_prime_generator(&safe_prime)?;
        Ok(Self { safe_prime, g })
    }

    /// Builds parameters from an explicit generator, which must generate Z*_p
    pub fn new(safe_prime: SafePrime, g: u64) -> Result<Self> {
        if !is_safe_prime_generator(g, &safe_prime) {
            return Err(DhError::InvalidGenerator {
                g,
                p: safe_prime.p(),
            });
        }
        Ok(Self { safe_prime, g })
    }

    pub fn p(&self) -> u64 {
        self.safe_prime.p()
    }

    pub fn q(&self) -> u64 {
        self.safe_prime.q()
    }

    pub fn g(&self) -> u64 {
        self.g
    }

    /// Largest valid private exponent (p - 2)
    pub fn max_private_key(&self) -> u64 {
        self.p() - 2
    }
}

/// One party's private exponent and public key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    pub private: u64,
    pub public: u64,
}

impl KeyPair {
    /// Samples a private exponent uniformly from [1, p-2]
    pub fn generate<R: Rng + ?Sized>(params: &DhParams, rng: &mut R) -> Self {
        let private = rng.gen_range(1..=params.max_private_key());
        Self::derive(params, private)
    }

    /// Uses a fixed private exponent (tests and reproducible demos only)
    pub fn from_private(params: &DhParams, private: u64) -> Result<Self> {
        let max = params.max_private_key();
        if !(1..=max).contains(&private) {
            return Err(DhError::InvalidPrivateKey { key: private, max });
        }
        warn!("using a fixed private key");
        Ok(Self::derive(params, private))
    }

    fn derive(params: &DhParams, private: u64) -> Self {
        Self {
            private,
            public: mod_pow(params.g(), private, params.p()),
        }
    }

    /// Computes `other_public^private mod p`
    pub fn shared_secret(&self, params: &DhParams, other_public: u64) -> Result<u64> {
        let max = params.p() - 1;
        if !(2..=max).contains(&other_public) {
            return Err(DhError::InvalidPublicKey {
                key: other_public,
                max,
            });
        }
        Ok(mod_pow(other_public, self.private, params.p()))
    }
}

/// Transcript of a complete exchange between two parties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub params: DhParams,
    pub alice: KeyPair,
    pub bob: KeyPair,
    /// B^a mod p
    pub secret_alice: u64,
    /// A^b mod p
    pub secret_bob: u64,
}

impl Exchange {
    /// Computes the shared secret from both sides and checks they agree
    pub fn run(params: DhParams, alice: KeyPair, bob: KeyPair) -> Result<Self> {
        let secret_alice = alice.shared_secret(&params, bob.public)?;
        let secret_bob = bob.shared_secret(&params, alice.public)?;

        if secret_alice != secret_bob {
            return Err(DhError::SecretMismatch {
                a: secret_alice,
                b: secret_bob,
            });
        }

        Ok(Self {
            params,
            alice,
            bob,
            secret_alice,
            secret_bob,
        })
    }

    /// Runs an exchange with freshly sampled private exponents for both parties
    pub fn random<R: Rng + ?Sized>(params: DhParams, rng: &mut R) -> Result<Self> {
        let alice = KeyPair::generate(&params, rng);
        let bob = KeyPair::generate(&params, rng);
        Self::run(params, alice, bob)
    }

    pub fn shared_secret(&self) -> u64 {
        self.secret_alice
    }
}
