#![allow(dead_code)]

use rand::Rng;
use unipoly::Polynomial;

pub const SEEDS: [u64; 4] = [0, 1, 42, 2024];

// Random real coefficients with |lead| in [1, 5).
pub fn rand_poly<R: Rng>(rng: &mut R, deg: usize) -> Polynomial { 
    let mut coeffs: Vec<f64> = (0..deg).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let lead = rng.gen_range(1.0..5.0);
    coeffs.push(if rng.gen_bool(0.5) { lead } else { -lead });
    Polynomial::new(coeffs)
}

// Random integer coefficients in [-9, 9] with nonzero lead.
pub fn rand_int_poly<R: Rng>(rng: &mut R, deg: usize) -> Polynomial { 
    let mut coeffs: Vec<f64> = (0..deg).map(|_| rng.gen_range(-9..=9) as f64).collect();
    let lead = rng.gen_range(1..=9) as f64;
    coeffs.push(if rng.gen_bool(0.5) { lead } else { -lead });
    Polynomial::new(coeffs)
}

pub fn max_abs(p: &Polynomial) -> f64 { 
    p.iter().fold(0.0, |m, a| f64::max(m, a.abs()))
}
