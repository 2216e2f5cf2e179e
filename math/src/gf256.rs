use crate::error::FieldError;
use crate::field::Field;

/// The AES reduction polynomial x^8 + x^4 + x^3 + x + 1.
const REDUCTION_POLY: u16 = 0x11B;

/// Multiplicative order of the nonzero elements.
const GROUP_ORDER: u64 = 255;

/// The 256-element field of characteristic 2.
///
/// Bytes map 1:1 to elements, so the byte boundary is the identity. Addition
/// and subtraction are both XOR; multiplication goes through log/exp tables
/// built once in the constructor from the generator 3.
pub struct Gf256 {
    log: [u8; 256],
    // Doubled so that log[a] + log[b] never needs reduction.
    exp: [u8; 512],
}

impl Gf256 {
    pub fn new() -> Self {
        let mut log = [0u8; 256];
        let mut exp = [0u8; 512];

        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;

            // x *= 3, i.e. x ^ xtime(x)
            let mut doubled = x << 1;
            if doubled & 0x100 != 0 {
                doubled ^= REDUCTION_POLY;
            }
            x ^= doubled;
        }
        exp.copy_within(0..255, 255);

        Gf256 { log, exp }
    }
}

impl Default for Gf256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for Gf256 {
    fn field_size(&self) -> usize {
        256
    }

    fn add(&self, a: u16, b: u16) -> u16 {
        debug_assert!(a < 256 && b < 256);
        a ^ b
    }

    fn sub(&self, a: u16, b: u16) -> u16 {
        self.add(a, b)
    }

    fn mult(&self, a: u16, b: u16) -> u16 {
        debug_assert!(a < 256 && b < 256);
        if a == 0 || b == 0 {
            return 0;
        }
        let index = usize::from(self.log[a as usize]) + usize::from(self.log[b as usize]);
        u16::from(self.exp[index])
    }

    fn inverse(&self, a: u16) -> u16 {
        assert!(a != 0, "zero has no multiplicative inverse");
        debug_assert!(a < 256);
        let index = GROUP_ORDER as usize - usize::from(self.log[a as usize]);
        u16::from(self.exp[index])
    }

    fn pow(&self, base: u16, exp: u32) -> u16 {
        debug_assert!(base < 256);
        if base == 0 {
            return u16::from(exp == 0);
        }
        let index = u64::from(self.log[base as usize]) * u64::from(exp) % GROUP_ORDER;
        u16::from(self.exp[index as usize])
    }

    fn encode_elements(&self, elements: &[u16]) -> Vec<u8> {
        elements
            .iter()
            .map(|&e| {
                debug_assert!(e < 256);
                e as u8
            })
            .collect()
    }

    fn decode_elements(&self, bytes: &[u8]) -> Result<Vec<u16>, FieldError> {
        Ok(bytes.iter().map(|&b| u16::from(b)).collect())
    }
}
