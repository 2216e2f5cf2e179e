use math::Field;

use crate::error::DecodeError;

/// Erasure decoder for one fixed set of evaluation points.
///
/// Construction resolves the Lagrange basis polynomials for the first
/// `threshold` x-coordinates once; [`ErasureDecoder::decode`] is then a dot
/// product per chunk. Reconstructs all coefficients of the unique
/// degree-(threshold−1) polynomial through the points, low-degree-first.
pub struct ErasureDecoder<'a, F: Field> {
    field: &'a F,
    threshold: usize,
    // basis[i] holds the coefficients of L_i, the polynomial that is 1 at
    // xs[i] and 0 at every other selected point.
    basis: Vec<Vec<u16>>,
}

impl<'a, F: Field> ErasureDecoder<'a, F> {
    pub fn new(field: &'a F, xs: &[u16], threshold: usize) -> Result<Self, DecodeError> {
        if xs.len() < threshold {
            return Err(DecodeError::InsufficientPoints {
                required: threshold,
                provided: xs.len(),
            });
        }
        let xs = &xs[..threshold];
        for (i, &x) in xs.iter().enumerate() {
            if xs[..i].contains(&x) {
                return Err(DecodeError::DuplicatePoint(x));
            }
        }

        let mut basis = Vec::with_capacity(threshold);
        for i in 0..threshold {
            let mut numer = vec![0; threshold];
            numer[0] = 1;
            let mut degree = 0;
            let mut denom = 1;
            for (j, &xj) in xs.iter().enumerate() {
                if j == i {
                    continue;
                }
                // numer *= (x - xj)
                let neg_xj = field.sub(0, xj);
                degree += 1;
                for t in (1..=degree).rev() {
                    numer[t] = field.add(numer[t - 1], field.mult(numer[t], neg_xj));
                }
                numer[0] = field.mult(numer[0], neg_xj);
                denom = field.mult(denom, field.sub(xs[i], xj));
            }
            let denom_inv = field.inverse(denom);
            for c in numer.iter_mut() {
                *c = field.mult(*c, denom_inv);
            }
            basis.push(numer);
        }

        Ok(ErasureDecoder {
            field,
            threshold,
            basis,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Recover the polynomial's coefficients from the y-values matching the
    /// x-coordinates this decoder was built with, in the same order.
    pub fn decode(&self, ys: &[u16]) -> Result<Vec<u16>, DecodeError> {
        if ys.len() < self.threshold {
            return Err(DecodeError::InsufficientPoints {
                required: self.threshold,
                provided: ys.len(),
            });
        }
        let mut coeffs = vec![0; self.threshold];
        for (&y, basis) in ys.iter().zip(&self.basis) {
            for (c, &b) in coeffs.iter_mut().zip(basis) {
                *c = self.field.add(*c, self.field.mult(y, b));
            }
        }
        Ok(coeffs)
    }
}
