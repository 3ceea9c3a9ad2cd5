use dh_core::*;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Curated values below 10^6: primes, Carmichael numbers and semiprimes
const CURATED: &[u64] = &[
    2, 3, 5, 7, 97, 541, 7919, 104_729, 999_983, 4, 9, 15, 561, 1105, 2465, 6601, 10_403, 62_615,
    999_999, 994_009,
];

#[test]
fn primality_matches_trial_division_on_curated_set() {
    let mut rng = StdRng::seed_from_u64(1);
    for &n in CURATED {
        let expected = is_prime_trial_division(n);
        for _ in 0..100 {
            assert_eq!(is_prime(n, DEFAULT_ROUNDS, &mut rng), expected, "n = {}", n);
        }
    }
}

#[test]
fn mod_pow_matches_bignum_reference() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..1000 {
        let base: u64 = rng.gen_range(0..u64::MAX);
        let exp: u64 = rng.gen_range(0..u64::MAX);
        let modulus: u64 = rng.gen_range(2..u64::MAX);
        let expected = BigUint::from(base)
            .modpow(&BigUint::from(exp), &BigUint::from(modulus))
            .to_u64()
            .unwrap();
        assert_eq!(mod_pow(base, exp, modulus), expected);
    }
}

#[test]
fn generated_safe_primes_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(3);
    for bits in [4u32, 10, 16, 30, 40, 62] {
        let safe = generate_safe_prime(bits, DEFAULT_ROUNDS, DEFAULT_MAX_ATTEMPTS, &mut rng)
            .unwrap();
        let p = safe.p();
        assert_eq!(p % 2, 1);
        assert!(is_prime(p, 30, &mut rng));
        assert!(is_prime((p - 1) / 2, 30, &mut rng));
    }
}

#[test]
fn generator_has_full_order() {
    let mut rng = StdRng::seed_from_u64(4);
    for bits in [8u32, 16, 32, 48] {
        let params = DhParams::generate(bits, &GeneratorConfig::default(), &mut rng).unwrap();
        let (p, g) = (params.p(), params.g());
        assert_ne!(mod_pow(g, 2, p), 1);
        assert_ne!(mod_pow(g, (p - 1) / 2, p), 1);
    }
}

#[test]
fn textbook_example_p23_g5() {
    assert!(is_primitive_root(5, 23));
    let a = 6;
    let b = 15;
    let big_a = mod_pow(5, a, 23);
    let big_b = mod_pow(5, b, 23);
    assert_eq!(big_a, 8);
    assert_eq!(big_b, 19);
    assert_eq!(mod_pow(big_b, a, 23), 2);
    assert_eq!(mod_pow(big_a, b, 23), 2);
}

#[test]
fn diffie_hellman_symmetry_law() {
    let mut rng = StdRng::seed_from_u64(5);
    let params = DhParams::generate(31, &GeneratorConfig::default(), &mut rng).unwrap();
    let (p, g) = (params.p(), params.g());
    for _ in 0..100 {
        let a = rng.gen_range(1..=p - 2);
        let b = rng.gen_range(1..=p - 2);
        assert_eq!(
            mod_pow(mod_pow(g, a, p), b, p),
            mod_pow(mod_pow(g, b, p), a, p)
        );
    }
}

#[test]
fn degenerate_bit_lengths() {
    let mut rng = StdRng::seed_from_u64(6);
    for bits in [0u32, 1] {
        assert!(matches!(
            DhParams::generate(bits, &GeneratorConfig::default(), &mut rng),
            Err(DhError::InvalidBitLength { .. })
        ));
    }
    for bits in [2u32, 3] {
        let params = DhParams::generate(bits, &GeneratorConfig::default(), &mut rng).unwrap();
        let exchange = Exchange::random(params, &mut rng).unwrap();
        assert_eq!(exchange.secret_alice, exchange.secret_bob);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let params = DhParams::generate(24, &GeneratorConfig::default(), &mut rng).unwrap();
        Exchange::random(params, &mut rng).unwrap()
    };
    assert_eq!(run(77), run(77));
}
