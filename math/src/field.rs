use crate::error::FieldError;

/// Arithmetic over a finite field whose elements fit a `u16`.
///
/// Elements are canonical integers in `[0, field_size)`. Implementations own
/// their lookup tables; once constructed they are immutable and safe to share
/// across threads. Passing an out-of-range element, inverting zero, or
/// evaluating an empty coefficient vector is a programming error and panics.
pub trait Field: Send + Sync {
    /// Number of elements in the field.
    fn field_size(&self) -> usize;

    fn add(&self, a: u16, b: u16) -> u16;

    fn sub(&self, a: u16, b: u16) -> u16;

    fn mult(&self, a: u16, b: u16) -> u16;

    /// Multiplicative inverse of a nonzero element.
    fn inverse(&self, a: u16) -> u16;

    fn div(&self, a: u16, b: u16) -> u16 {
        self.mult(a, self.inverse(b))
    }

    fn pow(&self, base: u16, exp: u32) -> u16;

    /// Evaluate a polynomial given low-degree-first at `x` by Horner's rule.
    fn evaluate_at(&self, coeffs: &[u16], x: u16) -> u16 {
        assert!(!coeffs.is_empty(), "cannot evaluate an empty polynomial");
        let mut acc = 0;
        for &c in coeffs.iter().rev() {
            acc = self.add(self.mult(acc, x), c);
        }
        acc
    }

    /// Largest admissible number of distinct nonzero evaluation points.
    fn max_share_count(&self) -> usize {
        self.field_size() - 1
    }

    /// Serialize elements to bytes. Inverse of [`Field::decode_elements`].
    fn encode_elements(&self, elements: &[u16]) -> Vec<u8>;

    /// Parse bytes produced by [`Field::encode_elements`].
    fn decode_elements(&self, bytes: &[u8]) -> Result<Vec<u16>, FieldError>;
}

/// A [`Field`] whose multiplicative group contains power-of-two subgroups
/// suitable for radix-2 transforms.
pub trait NttField: Field {
    /// A generator of the order-`order` subgroup, when one exists.
    fn primitive_root_of_unity(&self, order: u32) -> Option<u16>;
}
