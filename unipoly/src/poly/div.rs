use log::{debug, trace};
use num_traits::{Zero, One};

use crate::Result;
use crate::err::{err, ensure};
use super::Poly;

impl<const X: char> Poly<X> {
    pub fn is_monic(&self) -> bool {
        !self.is_zero() && self.lead_coeff().is_one()
    }

    pub fn make_monic(&self) -> Result<Self> {
        ensure!(!self.is_zero(), DivisionByZero, "the zero polynomial cannot be made monic");

        let a = self.lead_coeff();
        let mut coeffs = self.iter().map(|b| b / a).collect::<Vec<_>>();
        coeffs[self.deg()] = 1.0;

        Ok(Self::new(coeffs))
    }

    // Long division: returns (q, r) with
    //   self = q * rhs + r,  deg(r) < deg(rhs) or r = 0.
    //
    // At each step the eliminated leading coefficient is set to 0 exactly,
    // so the loop runs deg(self) - deg(rhs) + 1 times regardless of rounding.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        ensure!(!rhs.is_zero(), DivisionByZero, "divisor is the zero polynomial");

        let (n, m) = (self.deg(), rhs.deg());

        if self.is_zero() || n < m {
            return Ok((Self::zero(), self.clone()))
        }

        let b = rhs.lead_coeff();
        let mut q = vec![0.0; n - m + 1];
        let mut r = self.coeffs().to_vec();

        for k in (0 ..= n - m).rev() {
            let c = r[k + m] / b; // (a/b) X^k, a = lead(r).
            q[k] = c;

            if !c.is_zero() {
                for (j, bj) in rhs.iter().enumerate().take(m) {
                    r[k + j] -= c * bj;
                }
            }
            r[k + m] = 0.0;

            trace!("div_rem: q[{k}] = {c}");
        }

        r.truncate(m.max(1));

        Ok((Self::new(q), Self::new(r)))
    }

    pub fn quot(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn rem(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    // The monic gcd, computed by the Euclidean algorithm.
    pub fn gcd(p: &Self, q: &Self) -> Result<Self> {
        Self::gcd_with_tol(p, q, 0.0)
    }

    // Same as `gcd`, but each remainder is chopped by `tol`
    // so that near-zero remainders terminate the sequence.
    pub fn gcd_with_tol(p: &Self, q: &Self, tol: f64) -> Result<Self> {
        if p.is_zero() && q.is_zero() {
            return err!(DivisionByZero, "gcd of two zero polynomials is undefined")
        }

        let mut a = p.chop(tol);
        let mut b = q.chop(tol);

        if a.is_zero() && b.is_zero() {
            return err!(DivisionByZero, "gcd of two polynomials vanishing within {tol} is undefined")
        }

        while !b.is_zero() {
            debug!("gcd: deg {} / deg {}", a.deg(), b.deg());

            let r = a.rem(&b)?.chop(tol);
            a = b;
            b = r;
        }

        a.make_monic()
    }
}
