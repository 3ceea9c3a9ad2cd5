//! Error types for parameter generation and key exchange

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DhError {
    #[error("Invalid bit length {bits} (must be between {min} and {max})")]
    InvalidBitLength { bits: u32, min: u32, max: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid modulus {0}")]
    InvalidModulus(u64),

    #[error("{0} is not a safe prime")]
    NotSafePrime(u64),

    #[error("Private key {key} out of range (must be in [1, {max}])")]
    InvalidPrivateKey { key: u64, max: u64 },

    #[error("Public key {key} out of range (must be in [2, {max}])")]
    InvalidPublicKey { key: u64, max: u64 },

    #[error("{g} is not a generator modulo {p}")]
    InvalidGenerator { g: u64, p: u64 },

    #[error("No safe prime with {bits} bits found after {attempts} attempts")]
    AttemptsExhausted { bits: u32, attempts: u64 },

    #[error("No primitive root found modulo {modulus}")]
    SearchExhausted { modulus: u64 },

    #[error("Shared secrets differ ({a} != {b})")]
    SecretMismatch { a: u64, b: u64 },
}

pub type Result<T> = std::result::Result<T, DhError>;
