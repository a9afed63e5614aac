use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use delegate::delegate;
use itertools::Itertools;
use num_traits::{Zero, One, Pow};
use auto_impl_ops::auto_ops;

use crate::{GetSign, Result};
use crate::err::ensure;
use crate::util::format::lc;
use super::mono::fmt_mono;
use super::MAX_PARSE_DEG;

// A polynomial in the variable `X` with real coefficients.
// `coeffs[i]` is the coefficient of X^i.
// Trailing zeros are trimmed on construction;
// the zero polynomial is stored as `[0.0]`.

pub type Polynomial = Poly<'X'>;

#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr))]
pub struct Poly<const X: char> {
    coeffs: Vec<f64>
}

impl<const X: char> Poly<X> {
    pub fn new(coeffs: Vec<f64>) -> Self {
        let mut p = Self { coeffs };
        p.trim();
        p
    }

    pub fn from_const(a: f64) -> Self {
        Self::new(vec![a])
    }

    pub fn mono(n: usize) -> Self {
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = 1.0;
        Self::new(coeffs)
    }

    pub fn try_mono(n: i64) -> Result<Self> {
        ensure!(n >= 0, InvalidArgument, "degree of X^{n} must be non-negative");
        ensure!(n as u64 <= MAX_PARSE_DEG as u64, InvalidArgument, "degree of X^{n} exceeds {MAX_PARSE_DEG}");
        Ok(Self::mono(n as usize))
    }

    pub fn variable() -> Self {
        Self::mono(1)
    }

    pub fn var_symbol() -> char {
        X
    }

    delegate! {
        to self.coeffs {
            pub fn iter(&self) -> std::slice::Iter<'_, f64>;
        }
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<f64> {
        self.coeffs
    }

    pub fn deg(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    pub fn lead_coeff(&self) -> f64 {
        self.coeffs[self.deg()]
    }

    pub fn const_term(&self) -> f64 {
        self.coeffs[0]
    }

    pub fn is_const(&self) -> bool {
        self.coeffs.len() == 1
    }

    pub fn map_coeffs<F>(&self, f: F) -> Self
    where F: Fn(f64) -> f64 {
        Self::new(self.coeffs.iter().map(|&a| f(a)).collect())
    }

    pub fn scale(&self, k: f64) -> Self {
        self.map_coeffs(|a| a * k)
    }

    // Zeroes every coefficient with |a| <= tol.
    pub fn chop(&self, tol: f64) -> Self {
        self.map_coeffs(|a| if a.abs() <= tol { 0.0 } else { a })
    }

    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        let n = usize::max(self.coeffs.len(), other.coeffs.len());
        (0..n).all(|i| (self.coeff(i) - other.coeff(i)).abs() <= tol)
    }

    // Horner's method.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &a| acc * x + a)
    }

    pub fn try_pow(&self, n: i64) -> Result<Self> {
        ensure!(n >= 0, InvalidArgument, "exponent {n} must be non-negative");
        Ok(self.pow(n as usize))
    }

    pub fn to_pretty_string(&self) -> String {
        lc(self.nonzero_terms().rev().map(|(i, a)|
            (fmt_mono(X, i, true), a)
        ))
    }

    pub(crate) fn nonzero_terms(&self) -> impl DoubleEndedIterator<Item = (usize, f64)> + '_ {
        self.coeffs.iter().copied().enumerate().filter(|(_, a)| !a.is_zero())
    }

    fn trim(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last().is_some_and(|a| a.is_zero()) {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(0.0);
        }
    }
}

impl<const X: char> Default for Poly<X> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const X: char> From<Vec<f64>> for Poly<X> {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::new(coeffs)
    }
}

impl<const X: char> From<&[f64]> for Poly<X> {
    fn from(coeffs: &[f64]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

impl<const X: char> From<Poly<X>> for Vec<f64> {
    fn from(p: Poly<X>) -> Self {
        p.coeffs
    }
}

impl<const X: char> FromIterator<f64> for Poly<X> {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// Terms (i, a) = aX^i. Repeated degrees are summed.
impl<const X: char> FromIterator<(usize, f64)> for Poly<X> {
    fn from_iter<T: IntoIterator<Item = (usize, f64)>>(iter: T) -> Self {
        let mut coeffs = vec![0.0];
        for (i, a) in iter {
            if i >= coeffs.len() {
                coeffs.resize(i + 1, 0.0);
            }
            coeffs[i] += a;
        }
        Self::new(coeffs)
    }
}

impl<const X: char> Display for Poly<X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "+ 0*{X}^0")
        }

        let s = self.nonzero_terms().map(|(i, a)|
            format!("{} {}*{X}^{i}", a.sign(), a.abs())
        ).join(" ");

        f.write_str(&s)
    }
}

impl<const X: char> Debug for Poly<X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<const X: char> Zero for Poly<X> {
    fn zero() -> Self {
        Self { coeffs: vec![0.0] }
    }

    fn is_zero(&self) -> bool {
        self.is_const() && self.coeffs[0].is_zero()
    }
}

impl<const X: char> One for Poly<X> {
    fn one() -> Self {
        Self::from_const(1.0)
    }

    fn is_one(&self) -> bool {
        self.is_const() && self.coeffs[0].is_one()
    }
}

impl<const X: char> Neg for Poly<X> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<const X: char> Neg for &Poly<X> {
    type Output = Poly<X>;
    fn neg(self) -> Self::Output {
        self.map_coeffs(|a| -a)
    }
}

#[auto_ops]
impl<const X: char> AddAssign<&Poly<X>> for Poly<X> {
    fn add_assign(&mut self, rhs: &Poly<X>) {
        if self.coeffs.len() < rhs.coeffs.len() {
            self.coeffs.resize(rhs.coeffs.len(), 0.0);
        }
        for (a, b) in self.coeffs.iter_mut().zip(rhs.iter()) {
            *a += b;
        }
        self.trim();
    }
}

#[auto_ops]
impl<const X: char> SubAssign<&Poly<X>> for Poly<X> {
    fn sub_assign(&mut self, rhs: &Poly<X>) {
        if self.coeffs.len() < rhs.coeffs.len() {
            self.coeffs.resize(rhs.coeffs.len(), 0.0);
        }
        for (a, b) in self.coeffs.iter_mut().zip(rhs.iter()) {
            *a -= b;
        }
        self.trim();
    }
}

#[auto_ops]
impl<const X: char> MulAssign<&f64> for Poly<X> {
    fn mul_assign(&mut self, rhs: &f64) {
        for a in self.coeffs.iter_mut() {
            *a *= rhs;
        }
        self.trim();
    }
}

#[auto_ops]
impl<const X: char> MulAssign<&Poly<X>> for Poly<X> {
    fn mul_assign(&mut self, rhs: &Poly<X>) {
        if self.is_zero() || rhs.is_zero() {
            *self = Self::zero()
        } else if rhs.is_one() {
            // do nothing
        } else if rhs.is_const() {
            *self *= &rhs.const_term()
        } else if self.is_const() {
            *self = rhs * self.const_term()
        } else {
            let (n, m) = (self.deg(), rhs.deg());
            let mut coeffs = vec![0.0; n + m + 1];
            for (i, a) in self.coeffs.iter().enumerate() {
                for (j, b) in rhs.coeffs.iter().enumerate() {
                    coeffs[i + j] += a * b;
                }
            }
            *self = Self::new(coeffs)
        }
    }
}

macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl<const X: char> Pow<$t> for &Poly<X> {
            type Output = Poly<X>;
            fn pow(self, n: $t) -> Self::Output {
                let mut res = Poly::one();
                for _ in 0..n {
                    res *= self
                }
                res
            }
        }

        impl<const X: char> Pow<$t> for Poly<X> {
            type Output = Poly<X>;
            fn pow(self, n: $t) -> Self::Output {
                (&self).pow(n)
            }
        }
    };
}

impl_pow_unsigned!(u32);
impl_pow_unsigned!(u64);
impl_pow_unsigned!(usize);

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use crate::TeX;

        impl<const X: char> TeX for Poly<X> {
            fn tex_math_symbol() -> String {
                format!("\\mathbb{{R}}[{X}]")
            }

            fn tex_string(&self) -> String {
                lc(self.nonzero_terms().rev().map(|(i, a)|
                    (fmt_mono(X, i, false), a)
                ))
            }
        }
    }
}
