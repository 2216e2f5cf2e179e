use phf::phf_map;

use crate::error::FieldError;
use crate::field::{Field, NttField};

/// Generators of the power-of-two subgroups of the multiplicative group,
/// keyed by subgroup order. 3 generates the full group of order 256.
const PRIMITIVE_ROOTS: phf::Map<u32, u16> = phf_map! {
    2u32 => 256,
    4u32 => 241,
    8u32 => 64,
    16u32 => 249,
    32u32 => 136,
    64u32 => 81,
    128u32 => 9,
    256u32 => 3,
};

/// Escape marker for the 9-bit byte encoding.
const ESCAPE: u8 = 0xFF;

/// The prime field of 257 elements.
///
/// Its multiplicative group has order 256, so radix-2 transforms exist for
/// every power-of-two size up to 256. The price is that an element needs nine
/// bits: the byte encoding escapes 255 and 256 behind a 0xFF marker.
pub struct Gf257 {
    // inv[a] for a in 1..257; slot 0 is unused.
    inv: Vec<u16>,
    // exp[a][e] = a^e with e already reduced modulo the group order.
    exp: Vec<Vec<u16>>,
}

impl Gf257 {
    pub const MODULUS: u16 = 257;

    const GROUP_ORDER: u32 = 256;

    pub fn new() -> Self {
        let inv = inverse_table(i64::from(Self::MODULUS)).expect("257 is prime");
        let modulus = u32::from(Self::MODULUS);
        let exp = (0..modulus)
            .map(|a| {
                let mut row = vec![0u16; Self::GROUP_ORDER as usize];
                let mut acc = 1u32;
                for slot in row.iter_mut() {
                    *slot = acc as u16;
                    acc = acc * a % modulus;
                }
                row
            })
            .collect();
        Gf257 { inv, exp }
    }
}

impl Default for Gf257 {
    fn default() -> Self {
        Self::new()
    }
}

/// Inverse table over `modulus` via the extended Euclidean algorithm.
///
/// Fails on the first nonzero element without an inverse, so a composite
/// modulus is rejected instead of yielding silently wrong arithmetic.
fn inverse_table(modulus: i64) -> Result<Vec<u16>, FieldError> {
    let mut table = vec![0u16; modulus as usize];
    for a in 1..modulus {
        let (mut old_r, mut r) = (a, modulus);
        let (mut old_s, mut s) = (1i64, 0i64);
        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_s, s) = (s, old_s - q * s);
        }
        if old_r != 1 {
            return Err(FieldError::NonInvertibleElement {
                element: a as u32,
                modulus: modulus as u32,
            });
        }
        table[a as usize] = old_s.rem_euclid(modulus) as u16;
    }
    Ok(table)
}

impl Field for Gf257 {
    fn field_size(&self) -> usize {
        usize::from(Self::MODULUS)
    }

    fn add(&self, a: u16, b: u16) -> u16 {
        debug_assert!(a < Self::MODULUS && b < Self::MODULUS);
        ((u32::from(a) + u32::from(b)) % u32::from(Self::MODULUS)) as u16
    }

    fn sub(&self, a: u16, b: u16) -> u16 {
        debug_assert!(a < Self::MODULUS && b < Self::MODULUS);
        ((u32::from(a) + u32::from(Self::MODULUS) - u32::from(b)) % u32::from(Self::MODULUS))
            as u16
    }

    fn mult(&self, a: u16, b: u16) -> u16 {
        debug_assert!(a < Self::MODULUS && b < Self::MODULUS);
        (u32::from(a) * u32::from(b) % u32::from(Self::MODULUS)) as u16
    }

    fn inverse(&self, a: u16) -> u16 {
        assert!(a != 0, "zero has no multiplicative inverse");
        debug_assert!(a < Self::MODULUS);
        self.inv[usize::from(a)]
    }

    fn pow(&self, base: u16, exp: u32) -> u16 {
        debug_assert!(base < Self::MODULUS);
        if base == 0 {
            return u16::from(exp == 0);
        }
        // a^256 = 1 for nonzero a, so the exponent reduces modulo 256.
        self.exp[usize::from(base)][(exp % Self::GROUP_ORDER) as usize]
    }

    fn encode_elements(&self, elements: &[u16]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(elements.len());
        for &e in elements {
            debug_assert!(e < Self::MODULUS);
            match e {
                255 => bytes.extend_from_slice(&[ESCAPE, 0x00]),
                256 => bytes.extend_from_slice(&[ESCAPE, 0x01]),
                _ => bytes.push(e as u8),
            }
        }
        bytes
    }

    fn decode_elements(&self, bytes: &[u8]) -> Result<Vec<u16>, FieldError> {
        let mut elements = Vec::with_capacity(bytes.len());
        let mut iter = bytes.iter();
        while let Some(&b) = iter.next() {
            if b != ESCAPE {
                elements.push(u16::from(b));
                continue;
            }
            match iter.next() {
                Some(0x00) => elements.push(255),
                Some(0x01) => elements.push(256),
                Some(&other) => return Err(FieldError::InvalidEscape(other)),
                None => return Err(FieldError::TruncatedEscape),
            }
        }
        Ok(elements)
    }
}

impl NttField for Gf257 {
    fn primitive_root_of_unity(&self, order: u32) -> Option<u16> {
        PRIMITIVE_ROOTS.get(&order).copied()
    }
}
