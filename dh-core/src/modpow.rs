//! Modular arithmetic on 64-bit residues

/// Computes `(a * b) mod modulus` through a 128-bit intermediate.
#[inline]
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// Modular exponentiation: computes `base^exp mod modulus`
///
/// Square-and-multiply over the bits of `exp`, lowest bit first.
/// The result always lies in `[0, modulus - 1]`.
///
/// # Panics
///
/// Panics if `modulus` is zero.
///
/// # Example
///
/// ```rust
/// use dh_core::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);
/// assert_eq!(mod_pow(5, 6, 23), 8);
/// ```
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "modulus must be non-zero");
    if modulus == 1 {
        return 0;
    }

    let mut result = 1;
    let mut base = base % modulus;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }

    result
}
