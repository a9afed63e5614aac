use num_traits::Zero;

use crate::Result;
use crate::err::ensure;
use super::Poly;

impl<const X: char> Poly<X> {
    // d/dX (Σ a_i X^i) = Σ i a_i X^{i-1}.
    pub fn derivative(&self) -> Self {
        if self.is_const() {
            return Self::zero()
        }
        self.iter().enumerate().skip(1).map(|(i, a)| 
            (i as f64) * a
        ).collect()
    }

    pub fn derivative_n(&self, n: usize) -> Self {
        let mut p = self.clone();
        for _ in 0..n {
            if p.is_zero() {
                break
            }
            p = p.derivative();
        }
        p
    }

    pub fn try_derivative_n(&self, n: i64) -> Result<Self> {
        ensure!(n >= 0, InvalidArgument, "order of derivative {n} must be non-negative");
        Ok(self.derivative_n(n as usize))
    }
}
