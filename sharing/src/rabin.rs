use math::Field;

use crate::decoder::ErasureDecoder;
use crate::error::SharingResult;
use crate::params::check_scheme_config;
use crate::share::{element_to_byte, select_shares, Share};

/// Rabin information dispersal over a generic field.
///
/// The secret is cut into chunks of `threshold` bytes; each chunk becomes the
/// coefficient vector of a degree-(threshold−1) polynomial evaluated at
/// x = 1..=share_count. Any `threshold` shares recover the secret.
/// Deterministic: sharing the same secret twice yields the same shares.
pub struct RabinIds<'a, F: Field> {
    threshold: usize,
    share_count: usize,
    field: &'a F,
}

impl<'a, F: Field> RabinIds<'a, F> {
    pub fn new(threshold: usize, share_count: usize, field: &'a F) -> SharingResult<Self> {
        check_scheme_config(threshold, share_count, field.max_share_count())?;
        Ok(RabinIds {
            threshold,
            share_count,
            field,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn share_count(&self) -> usize {
        self.share_count
    }

    /// Split `secret` into `share_count` shares.
    pub fn share(&self, secret: &[u8]) -> Vec<Share> {
        let chunk_count = secret.len().div_ceil(self.threshold);
        let mut payloads = vec![Vec::with_capacity(chunk_count); self.share_count];
        let mut coeffs = vec![0u16; self.threshold];

        for chunk in secret.chunks(self.threshold) {
            coeffs.fill(0);
            for (c, &byte) in coeffs.iter_mut().zip(chunk) {
                *c = u16::from(byte);
            }
            for (i, payload) in payloads.iter_mut().enumerate() {
                payload.push(self.field.evaluate_at(&coeffs, (i + 1) as u16));
            }
        }

        payloads
            .into_iter()
            .enumerate()
            .map(|(i, payload)| Share::from_parts((i + 1) as u16, payload, secret.len()))
            .collect()
    }

    /// Recover the secret from at least `threshold` shares, in any order.
    pub fn reconstruct(&self, shares: &[Share]) -> SharingResult<Vec<u8>> {
        let selected = select_shares(
            shares,
            self.threshold,
            self.threshold,
            self.share_count,
            self.field.field_size(),
        )?;

        let xs: Vec<u16> = selected.iter().map(|s| s.x()).collect();
        let decoder = ErasureDecoder::new(self.field, &xs, self.threshold)?;

        let chunk_count = selected[0].payload().len();
        let original_length = selected[0].original_length();
        let mut secret = Vec::with_capacity(chunk_count * self.threshold);
        let mut ys = vec![0u16; self.threshold];
        for chunk in 0..chunk_count {
            for (slot, share) in ys.iter_mut().zip(&selected) {
                *slot = share.payload()[chunk];
            }
            for coeff in decoder.decode(&ys)? {
                secret.push(element_to_byte(coeff)?);
            }
        }
        secret.truncate(original_length);
        Ok(secret)
    }
}
