use crate::error::NttError;
use crate::field::NttField;

/// Algorithm backing a transform. All three produce identical output; they
/// differ only in cost.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NttVariant {
    /// Direct O(n²) evaluation at each power of the root.
    Naive,
    /// Textbook odd/even recursion, allocating per level.
    Recursive,
    /// Iterative in-place radix-2 decimation in time.
    DitInPlace,
}

/// Number-theoretic transform over a field with power-of-two subgroups.
///
/// `forward` maps length-n coefficient vectors to their evaluations at the
/// first n powers of `root`; `inverse` undoes it. The length must be a power
/// of two and `root` a primitive root of unity of exactly that order.
pub struct Ntt<'a, F: NttField> {
    field: &'a F,
    variant: NttVariant,
}

impl<'a, F: NttField> Ntt<'a, F> {
    pub fn new(field: &'a F, variant: NttVariant) -> Self {
        Ntt { field, variant }
    }

    pub fn variant(&self) -> NttVariant {
        self.variant
    }

    /// Evaluate `coeffs` at `root^0, root^1, ..., root^(n-1)`.
    pub fn forward(&self, coeffs: &[u16], root: u16) -> Result<Vec<u16>, NttError> {
        self.check_domain(coeffs.len(), root)?;
        if coeffs.len() <= 1 {
            return Ok(coeffs.to_vec());
        }
        Ok(match self.variant {
            NttVariant::Naive => self.naive(coeffs, root),
            NttVariant::Recursive => self.recursive(coeffs, root),
            NttVariant::DitInPlace => {
                let mut values = coeffs.to_vec();
                self.dit_in_place(&mut values, root);
                values
            }
        })
    }

    /// Recover the coefficients from the evaluations produced by `forward`.
    pub fn inverse(&self, evals: &[u16], root: u16) -> Result<Vec<u16>, NttError> {
        self.check_domain(evals.len(), root)?;
        if evals.len() <= 1 {
            return Ok(evals.to_vec());
        }
        let mut coeffs = self.forward(evals, self.field.inverse(root))?;
        let n = (evals.len() % self.field.field_size()) as u16;
        let n_inv = self.field.inverse(n);
        for c in coeffs.iter_mut() {
            *c = self.field.mult(*c, n_inv);
        }
        Ok(coeffs)
    }

    fn check_domain(&self, n: usize, root: u16) -> Result<(), NttError> {
        if n <= 1 {
            return Ok(());
        }
        if !n.is_power_of_two() {
            return Err(NttError::NonPowerOfTwo(n));
        }
        let order_holds = self.field.pow(root, n as u32) == 1
            && self.field.pow(root, (n / 2) as u32) != 1;
        if !order_holds {
            return Err(NttError::WrongRootOrder { root, order: n });
        }
        Ok(())
    }

    fn naive(&self, coeffs: &[u16], root: u16) -> Vec<u16> {
        let mut out = Vec::with_capacity(coeffs.len());
        let mut x = 1;
        for _ in 0..coeffs.len() {
            out.push(self.field.evaluate_at(coeffs, x));
            x = self.field.mult(x, root);
        }
        out
    }

    fn recursive(&self, coeffs: &[u16], root: u16) -> Vec<u16> {
        let n = coeffs.len();
        if n == 1 {
            return coeffs.to_vec();
        }

        let even: Vec<u16> = coeffs.iter().copied().step_by(2).collect();
        let odd: Vec<u16> = coeffs.iter().copied().skip(1).step_by(2).collect();
        let root_sq = self.field.mult(root, root);
        let even = self.recursive(&even, root_sq);
        let odd = self.recursive(&odd, root_sq);

        let mut out = vec![0; n];
        let mut w = 1;
        for i in 0..n / 2 {
            let t = self.field.mult(w, odd[i]);
            out[i] = self.field.add(even[i], t);
            out[i + n / 2] = self.field.sub(even[i], t);
            w = self.field.mult(w, root);
        }
        out
    }

    fn dit_in_place(&self, values: &mut [u16], root: u16) {
        let n = values.len();
        let logn = n.trailing_zeros() as usize;

        for k in 0..n {
            let rk = bitreverse_usize(k, logn);
            if k < rk {
                values.swap(rk, k);
            }
        }

        let mut m = 1;
        for _ in 0..logn {
            let w_m = self.field.pow(root, (n / (2 * m)) as u32);
            let mut k = 0;
            while k < n {
                let mut w = 1;
                for j in 0..m {
                    let u = values[k + j];
                    let v = self.field.mult(values[k + j + m], w);
                    values[k + j] = self.field.add(u, v);
                    values[k + j + m] = self.field.sub(u, v);
                    w = self.field.mult(w, w_m);
                }
                k += 2 * m;
            }
            m *= 2;
        }
    }
}

#[inline]
fn bitreverse_usize(mut n: usize, l: usize) -> usize {
    let mut r = 0;
    for _ in 0..l {
        r = (r << 1) | (n & 1);
        n >>= 1;
    }
    r
}
