use serde::{Deserialize, Serialize};

use math::Field;

use crate::error::{SharingError, SharingResult};

/// One unit of dispersal: the evaluations of every chunk polynomial at this
/// share's x-coordinate, plus the original secret length needed to strip
/// padding on reconstruction. The triple round-trips exactly through serde.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    x: u16,
    payload: Vec<u16>,
    original_length: usize,
}

impl Share {
    /// Build a share from its wire parts. Index 0 is reserved for the secret
    /// itself and never a valid coordinate.
    pub fn new(x: u16, payload: Vec<u16>, original_length: usize) -> SharingResult<Self> {
        if x == 0 {
            return Err(SharingError::InvalidShareIndex(x));
        }
        Ok(Share {
            x,
            payload,
            original_length,
        })
    }

    pub(crate) fn from_parts(x: u16, payload: Vec<u16>, original_length: usize) -> Self {
        debug_assert!(x != 0);
        Share {
            x,
            payload,
            original_length,
        }
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn payload(&self) -> &[u16] {
        &self.payload
    }

    pub fn original_length(&self) -> usize {
        self.original_length
    }

    /// Serialize the payload through the field's byte encoding.
    pub fn payload_bytes<F: Field>(&self, field: &F) -> Vec<u8> {
        field.encode_elements(&self.payload)
    }

    /// Rebuild a share from a byte-encoded payload.
    pub fn from_payload_bytes<F: Field>(
        field: &F,
        x: u16,
        bytes: &[u8],
        original_length: usize,
    ) -> SharingResult<Self> {
        let payload = field.decode_elements(bytes)?;
        Share::new(x, payload, original_length)
    }
}

/// Pick the first `required` shares after checking the whole batch: distinct
/// in-range indices, equal payload shapes, and payload elements that belong
/// to the field.
pub(crate) fn select_shares<'s>(
    shares: &'s [Share],
    required: usize,
    chunk_size: usize,
    max_index: usize,
    field_size: usize,
) -> SharingResult<Vec<&'s Share>> {
    if shares.len() < required {
        return Err(SharingError::InsufficientShares {
            required,
            provided: shares.len(),
        });
    }

    let first = &shares[0];
    let mut seen = vec![false; max_index + 1];
    for share in shares {
        let x = share.x();
        if x == 0 || usize::from(x) > max_index {
            return Err(SharingError::InvalidShareIndex(x));
        }
        if std::mem::replace(&mut seen[usize::from(x)], true) {
            return Err(SharingError::DuplicateShareIndex(x));
        }
        if share.payload().len() != first.payload().len()
            || share.original_length() != first.original_length()
        {
            return Err(SharingError::InconsistentShareLengths);
        }
        if let Some(&value) = share.payload().iter().find(|&&v| usize::from(v) >= field_size) {
            return Err(SharingError::InvalidShareElement { value, field_size });
        }
    }
    if first.original_length().div_ceil(chunk_size) != first.payload().len() {
        return Err(SharingError::InconsistentShareLengths);
    }

    Ok(shares.iter().take(required).collect())
}

pub(crate) fn element_to_byte(value: u16) -> SharingResult<u8> {
    u8::try_from(value).map_err(|_| SharingError::NonByteElement(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use math::{Gf256, Gf257};

    #[test]
    fn index_zero_is_rejected() {
        assert_eq!(
            Err(SharingError::InvalidShareIndex(0)),
            Share::new(0, vec![1, 2], 2)
        );
    }

    #[test]
    fn serde_round_trip_preserves_the_triple() {
        let share = Share::new(3, vec![0, 255, 256, 42], 7).unwrap();
        let json = serde_json::to_string(&share).unwrap();
        assert_eq!(share, serde_json::from_str(&json).unwrap());
    }

    #[test]
    fn payload_bytes_round_trip_through_gf257_escapes() {
        let gf = Gf257::new();
        let share = Share::new(2, vec![1, 255, 256, 0], 4).unwrap();
        let bytes = share.payload_bytes(&gf);
        let back = Share::from_payload_bytes(&gf, 2, &bytes, 4).unwrap();
        assert_eq!(share, back);
    }

    #[test]
    fn payload_bytes_round_trip_through_gf256() {
        let gf = Gf256::new();
        let share = Share::new(1, vec![0, 17, 255], 3).unwrap();
        let bytes = share.payload_bytes(&gf);
        assert_eq!(vec![0, 17, 255], bytes);
        assert_eq!(share, Share::from_payload_bytes(&gf, 1, &bytes, 3).unwrap());
    }

    #[test]
    fn select_shares_surfaces_each_defect() {
        let good = |x| Share::new(x, vec![1, 2], 4).unwrap();
        let shares = vec![good(1), good(2), good(3)];

        assert_eq!(
            Err(SharingError::InsufficientShares {
                required: 4,
                provided: 3,
            }),
            select_shares(&shares, 4, 2, 4, 257)
        );

        let duplicated = vec![good(1), good(2), good(1)];
        assert_eq!(
            Err(SharingError::DuplicateShareIndex(1)),
            select_shares(&duplicated, 2, 2, 4, 257)
        );

        let out_of_range = vec![good(1), good(5)];
        assert_eq!(
            Err(SharingError::InvalidShareIndex(5)),
            select_shares(&out_of_range, 2, 2, 4, 257)
        );

        let ragged = vec![good(1), Share::new(2, vec![1], 4).unwrap()];
        assert_eq!(
            Err(SharingError::InconsistentShareLengths),
            select_shares(&ragged, 2, 2, 4, 257)
        );

        let oversized = vec![good(1), Share::new(2, vec![1, 300], 4).unwrap()];
        assert_eq!(
            Err(SharingError::InvalidShareElement {
                value: 300,
                field_size: 257,
            }),
            select_shares(&oversized, 2, 2, 4, 257)
        );

        // Length tag says 4 bytes, but 2 chunks of 2 bytes need 2 elements.
        let short_tagged = vec![
            Share::new(1, vec![1], 4).unwrap(),
            Share::new(2, vec![2], 4).unwrap(),
        ];
        assert_eq!(
            Err(SharingError::InconsistentShareLengths),
            select_shares(&short_tagged, 2, 2, 4, 257)
        );

        let selected = select_shares(&shares, 2, 2, 4, 257).unwrap();
        assert_eq!(vec![1, 2], selected.iter().map(|s| s.x()).collect::<Vec<_>>());
    }
}
