//! Big Signed Int \
//! This crate provides:
//! - [`BigSignedInt`]: Immutable arbitrary-precision signed integers, kept as a fixed-capacity bit vector with an explicit sign.
//!   Supports comparison, `+ - * / %`, increment/decrement, and conversion from/to native integers, floats, decimal and binary strings.
//!
//! Operations are traced through the [`log`](https://docs.rs/log) facade at `trace` level (operands and result in binary),
//! capacity growth at `debug` level.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod big_num_error;

pub use big_int::BigSignedInt;
pub use big_num_constants::DEFAULT_BITS;
pub use big_num_error::{BigNumError, BigNumResult};

#[cfg(test)]
mod tests {
    use num_bigint::{BigInt, RandomBits};
    use num_traits::{Signed, Zero};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use crate::BigSignedInt;

    const ROUNDS: usize = 40;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn random_pair(prng: &mut ChaCha20Rng, bits: u64) -> (BigInt, BigSignedInt) {
        let reference: BigInt = prng.sample(RandomBits::new(bits));
        let value: BigSignedInt = reference.to_string().parse().unwrap();
        (reference, value)
    }

    #[test]
    fn it_works() {
        init_logger();
        let a: BigSignedInt = "10000000000000".parse().unwrap();
        let b: BigSignedInt = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a = {:b}", a);
    }

    #[test]
    fn test_arithmetic_matches_reference() {
        init_logger();
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..ROUNDS {
            let (a_bits, b_bits) = (prng.gen_range(1..160), prng.gen_range(1..160));
            let (a_ref, a) = random_pair(&mut prng, a_bits);
            let (b_ref, b) = random_pair(&mut prng, b_bits);

            assert_eq!((&a + &b).to_string(), (&a_ref + &b_ref).to_string());
            assert_eq!((&a - &b).to_string(), (&a_ref - &b_ref).to_string());
            assert_eq!((&a * &b).to_string(), (&a_ref * &b_ref).to_string());
            assert_eq!(a.to_binary_string(), format!("{:b}", a_ref));

            if !b_ref.is_zero() {
                let (q, r) = a.divide(&b).unwrap();
                assert_eq!(q.to_string(), (&a_ref / &b_ref).to_string());
                assert_eq!(r.to_string(), (&a_ref % &b_ref).to_string());
            }
        }
    }

    #[test]
    fn test_commutative() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);
        for _ in 0..ROUNDS {
            let (_, a) = random_pair(&mut prng, 128);
            let (_, b) = random_pair(&mut prng, 64);
            assert_eq!(&a + &b, &b + &a);
            assert_eq!(&a * &b, &b * &a);
        }
    }

    #[test]
    fn test_identity_and_inverse() {
        let mut prng = ChaCha20Rng::seed_from_u64(2);
        let zero = BigSignedInt::from(0);
        for _ in 0..ROUNDS {
            let (_, a) = random_pair(&mut prng, 100);
            assert_eq!(&a + &zero, a);
            let sum = &a + &(-&a);
            assert!(sum.is_zero());
            assert!(!sum.is_negative());
        }
    }

    #[test]
    fn test_associative() {
        let mut prng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..ROUNDS {
            let (_, a) = random_pair(&mut prng, 90);
            let (_, b) = random_pair(&mut prng, 70);
            let (_, c) = random_pair(&mut prng, 50);
            assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }
    }

    #[test]
    fn test_round_trip() {
        let mut prng = ChaCha20Rng::seed_from_u64(4);
        for _ in 0..ROUNDS {
            let (_, a) = random_pair(&mut prng, 150);
            assert_eq!(BigSignedInt::from_binary_str(&a.to_binary_string()).unwrap(), a);
            assert_eq!(BigSignedInt::from_decimal_str(&a.to_decimal_string()).unwrap(), a);
        }
    }

    #[test]
    fn test_division_law() {
        let mut prng = ChaCha20Rng::seed_from_u64(5);
        for _ in 0..ROUNDS {
            let b_bits = prng.gen_range(1..80);
            let (_, a) = random_pair(&mut prng, 120);
            let (b_ref, b) = random_pair(&mut prng, b_bits);
            if b_ref.is_zero() {
                assert!(a.divide(&b).is_err());
                continue;
            }
            let (q, r) = a.divide(&b).unwrap();
            assert_eq!(&(&q * &b) + &r, a);
            assert!(r.abs() < b.abs());
            assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }
    }

    #[test]
    fn test_total_order() {
        let mut prng = ChaCha20Rng::seed_from_u64(6);
        for _ in 0..ROUNDS {
            let (a_bits, b_bits) = (prng.gen_range(1..40), prng.gen_range(1..40));
            let (a_ref, a) = random_pair(&mut prng, a_bits);
            let (b_ref, b) = random_pair(&mut prng, b_bits);
            let holds = [a < b, a == b, b < a];
            assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
            assert_eq!(a.cmp(&b), a_ref.cmp(&b_ref));
            assert_eq!(a.abs() <= b.abs(), a_ref.abs() <= b_ref.abs());
        }
    }
}
