mod common;

use num_traits::{One, Zero};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use unipoly::Polynomial;
use common::*;

type P = Polynomial;

#[test]
fn parse_display_roundtrip() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for deg in 0..8 { 
            let a = rand_poly(&mut rng, deg);
            let s = a.to_string();
            assert_eq!(P::parse(&s), Ok(a), "{s}");
        }
    }
}

#[test]
fn additive_inverse() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for deg in 0..8 { 
            let a = rand_poly(&mut rng, deg);
            assert!((&a + -&a).is_zero());
            assert!((&a - &a).is_zero());
        }
    }
}

#[test]
fn mul_identity() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for deg in 0..8 { 
            let a = rand_poly(&mut rng, deg);
            assert_eq!(&a * P::one(), a);
            assert_eq!(P::one() * &a, a);
        }
    }
}

#[test]
fn ring_axioms_int() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..10 { 
            let (i, j, k) = (rng.gen_range(0..5), rng.gen_range(0..5), rng.gen_range(0..5));
            let a = rand_int_poly(&mut rng, i);
            let b = rand_int_poly(&mut rng, j);
            let c = rand_int_poly(&mut rng, k);

            assert_eq!(&a + &b, &b + &a);
            assert_eq!(&a * &b, &b * &a);
            assert_eq!((&a * &b) * &c, &a * (&b * &c));
            assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
            assert_eq!((&a * &b).deg(), i + j);
        }
    }
}

#[test]
fn div_rem_invariant() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..20 { 
            let (n, m) = (rng.gen_range(0..9), rng.gen_range(0..5));
            let a = rand_poly(&mut rng, n);
            let b = rand_poly(&mut rng, m);

            let (q, r) = a.div_rem(&b).unwrap();
            assert!(r.is_zero() || r.deg() < b.deg());

            let tol = 1e-10 * (1.0 + max_abs(&q) * max_abs(&b) + max_abs(&a));
            assert!((&q * &b + &r).approx_eq(&a, tol), "a = {a}, b = {b}");
        }
    }
}

#[test]
fn div_rem_exact_product() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..10 { 
            let a_deg = rng.gen_range(0..4);
            let a = rand_int_poly(&mut rng, a_deg);
            let b = P::new(vec![rng.gen_range(-9..=9) as f64, 1.0]); // monic linear

            let (q, r) = (&a * &b).div_rem(&b).unwrap();
            assert_eq!(q, a);
            assert!(r.is_zero());
        }
    }
}

#[test]
fn gcd_is_monic_divisor() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..10 { 
            let a_deg = rng.gen_range(1..4);
            let a = rand_int_poly(&mut rng, a_deg);
            let b_deg = rng.gen_range(1..4);
            let b = rand_int_poly(&mut rng, b_deg);

            let d = P::gcd(&a, &b).unwrap();
            assert!(d.is_monic());

            let ra = a.rem(&d).unwrap();
            let rb = b.rem(&d).unwrap();
            assert!(ra.approx_eq(&P::zero(), 1e-6), "a = {a}, d = {d}");
            assert!(rb.approx_eq(&P::zero(), 1e-6), "b = {b}, d = {d}");
        }
    }
}

#[test]
fn gcd_common_root() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..10 { 
            let r0 = rng.gen_range(-5..=5) as f64;
            let r1 = r0 + rng.gen_range(1..=4) as f64;
            let r2 = r0 - rng.gen_range(1..=4) as f64;

            // (X - r0)(X - r1) and (X - r0)(X - r2)
            let a = P::new(vec![-r0, 1.0]) * P::new(vec![-r1, 1.0]);
            let b = P::new(vec![-r0, 1.0]) * P::new(vec![-r2, 1.0]);

            let d = P::gcd_with_tol(&a, &b, 1e-9).unwrap();
            assert!(d.approx_eq(&P::new(vec![-r0, 1.0]), 1e-9), "r0 = {r0}, d = {d}");
        }
    }
}

#[test]
fn eval_linear() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..20 { 
            let a_deg = rng.gen_range(0..8);
            let a = rand_poly(&mut rng, a_deg);
            let b_deg = rng.gen_range(0..8);
            let b = rand_poly(&mut rng, b_deg);
            let x = rng.gen_range(-2.0..2.0);

            let lhs = (&a + &b).eval(x);
            let rhs = a.eval(x) + b.eval(x);
            assert!((lhs - rhs).abs() <= 1e-9 * (1.0 + lhs.abs()));
        }
    }
}

#[test]
fn eval_mul() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..20 { 
            let a_deg = rng.gen_range(0..5);
            let a = rand_int_poly(&mut rng, a_deg);
            let b_deg = rng.gen_range(0..5);
            let b = rand_int_poly(&mut rng, b_deg);
            let x = rng.gen_range(-3..=3) as f64;

            assert_eq!((&a * &b).eval(x), a.eval(x) * b.eval(x));
        }
    }
}

#[test]
fn derivative_deg() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for deg in 1..8 { 
            let a = rand_int_poly(&mut rng, deg);
            assert_eq!(a.derivative().deg(), deg - 1);
            assert!(a.derivative_n(deg + 1).is_zero());
        }
    }
}

#[test]
fn derivative_leibniz() { 
    for seed in SEEDS { 
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..10 { 
            let a_deg = rng.gen_range(0..5);
            let a = rand_int_poly(&mut rng, a_deg);
            let b_deg = rng.gen_range(0..5);
            let b = rand_int_poly(&mut rng, b_deg);

            let lhs = (&a * &b).derivative();
            let rhs = a.derivative() * &b + &a * b.derivative();
            assert_eq!(lhs, rhs);
        }
    }
}
