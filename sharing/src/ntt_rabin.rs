use math::{Ntt, NttField, NttVariant};

use crate::decoder::ErasureDecoder;
use crate::error::{SharingError, SharingResult};
use crate::params::check_scheme_config;
use crate::share::{element_to_byte, select_shares, Share};

/// NTT-accelerated Rabin information dispersal.
///
/// Same external contract as [`crate::RabinIds`], but evaluation points are
/// the `share_count`-th roots of unity: share `i` carries the evaluations at
/// `root^(i-1)`, computed with a forward transform per chunk. With a complete
/// set of shares the inverse transform recovers each chunk in O(n log n);
/// under genuine erasures reconstruction falls back to Lagrange
/// interpolation. `share_count` must be a power of two with an entry in the
/// field's primitive-root table.
pub struct NttRabinIds<'a, F: NttField> {
    threshold: usize,
    share_count: usize,
    field: &'a F,
    ntt: Ntt<'a, F>,
    root: u16,
}

impl<'a, F: NttField> NttRabinIds<'a, F> {
    pub fn new(
        threshold: usize,
        share_count: usize,
        field: &'a F,
        variant: NttVariant,
    ) -> SharingResult<Self> {
        check_scheme_config(threshold, share_count, field.max_share_count())?;
        let root = field
            .primitive_root_of_unity(share_count as u32)
            .ok_or(SharingError::InvalidNttShareCount(share_count))?;
        Ok(NttRabinIds {
            threshold,
            share_count,
            field,
            ntt: Ntt::new(field, variant),
            root,
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
        let mut block = vec![0u16; self.share_count];

        for chunk in secret.chunks(self.threshold) {
            block.fill(0);
            for (slot, &byte) in block.iter_mut().zip(chunk) {
                *slot = u16::from(byte);
            }
            let evals = self
                .ntt
                .forward(&block, self.root)
                .expect("transform size was validated at construction");
            for (payload, eval) in payloads.iter_mut().zip(evals) {
                payload.push(eval);
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

        if let Some(by_slot) = self.complete_set(shares) {
            return self.reconstruct_complete(&by_slot);
        }
        self.reconstruct_with_erasures(&selected)
    }

    /// Arrange shares by evaluation slot when every slot is covered.
    fn complete_set<'s>(&self, shares: &'s [Share]) -> Option<Vec<&'s Share>> {
        if shares.len() < self.share_count {
            return None;
        }
        let mut by_slot: Vec<Option<&Share>> = vec![None; self.share_count];
        for share in shares {
            by_slot[usize::from(share.x()) - 1] = Some(share);
        }
        by_slot.into_iter().collect()
    }

    fn reconstruct_complete(&self, by_slot: &[&Share]) -> SharingResult<Vec<u8>> {
        let chunk_count = by_slot[0].payload().len();
        let original_length = by_slot[0].original_length();
        let mut secret = Vec::with_capacity(chunk_count * self.threshold);
        let mut evals = vec![0u16; self.share_count];

        for chunk in 0..chunk_count {
            for (slot, share) in evals.iter_mut().zip(by_slot) {
                *slot = share.payload()[chunk];
            }
            let block = self
                .ntt
                .inverse(&evals, self.root)
                .expect("transform size was validated at construction");
            if block[self.threshold..].iter().any(|&c| c != 0) {
                return Err(SharingError::InconsistentShares);
            }
            for &coeff in &block[..self.threshold] {
                secret.push(element_to_byte(coeff)?);
            }
        }
        secret.truncate(original_length);
        Ok(secret)
    }

    fn reconstruct_with_erasures(&self, selected: &[&Share]) -> SharingResult<Vec<u8>> {
        let xs: Vec<u16> = selected
            .iter()
            .map(|s| self.field.pow(self.root, u32::from(s.x()) - 1))
            .collect();
        let decoder = ErasureDecoder::new(self.field, &xs, self.threshold)?;

        let chunk_count = selected[0].payload().len();
        let original_length = selected[0].original_length();
        let mut secret = Vec::with_capacity(chunk_count * self.threshold);
        let mut ys = vec![0u16; self.threshold];
        for chunk in 0..chunk_count {
            for (slot, share) in ys.iter_mut().zip(selected) {
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

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;
    use crate::error::SharingError;
    use crate::rabin::RabinIds;
    use math::Gf257;

    const VARIANTS: [NttVariant; 3] = [
        NttVariant::Naive,
        NttVariant::Recursive,
        NttVariant::DitInPlace,
    ];

    #[test]
    fn complete_set_round_trips_through_the_fast_path() {
        let gf = Gf257::new();
        for variant in VARIANTS {
            let ids = NttRabinIds::new(3, 4, &gf, variant).unwrap();
            let shares = ids.share(b"ARCHIST");
            assert_eq!(4, shares.len());
            for share in &shares {
                assert_eq!(3, share.payload().len());
                assert_eq!(7, share.original_length());
            }
            assert_eq!(b"ARCHIST".to_vec(), ids.reconstruct(&shares).unwrap());
        }
    }

    #[test]
    fn erasures_fall_back_to_interpolation() {
        let gf = Gf257::new();
        for variant in VARIANTS {
            let ids = NttRabinIds::new(3, 4, &gf, variant).unwrap();
            let shares = ids.share(b"ARCHIST");
            let subset = vec![shares[0].clone(), shares[2].clone(), shares[3].clone()];
            assert_eq!(b"ARCHIST".to_vec(), ids.reconstruct(&subset).unwrap());

            assert_eq!(
                Err(SharingError::InsufficientShares {
                    required: 3,
                    provided: 2,
                }),
                ids.reconstruct(&shares[..2])
            );
        }
    }

    #[test]
    fn variants_produce_identical_shares() {
        let gf = Gf257::new();
        let reference = NttRabinIds::new(4, 8, &gf, NttVariant::Naive)
            .unwrap()
            .share(b"variant agreement");
        for variant in [NttVariant::Recursive, NttVariant::DitInPlace] {
            let shares = NttRabinIds::new(4, 8, &gf, variant).unwrap().share(b"variant agreement");
            assert_eq!(reference, shares, "{variant:?}");
        }
    }

    #[test]
    fn matches_the_classical_scheme_on_the_secret() {
        // Evaluation points differ, so shares differ, but both schemes must
        // round-trip the same secret with the same (k, n).
        let gf = Gf257::new();
        let secret = b"cross-checked secret";
        let ntt_ids = NttRabinIds::new(3, 8, &gf, NttVariant::DitInPlace).unwrap();
        let classical = RabinIds::new(3, 8, &gf).unwrap();
        assert_eq!(
            classical.reconstruct(&classical.share(secret)[..3]).unwrap(),
            ntt_ids.reconstruct(&ntt_ids.share(secret)).unwrap(),
        );
    }

    #[test]
    fn non_power_of_two_share_count_is_rejected() {
        let gf = Gf257::new();
        for share_count in [3usize, 5, 6, 12] {
            let err = NttRabinIds::new(2, share_count, &gf, NttVariant::Naive)
                .err()
                .unwrap();
            assert_eq!(SharingError::InvalidNttShareCount(share_count), err);
        }
    }

    #[test]
    fn largest_supported_share_count_works() {
        let gf = Gf257::new();
        let ids = NttRabinIds::new(5, 256, &gf, NttVariant::DitInPlace).unwrap();
        let shares = ids.share(b"wide dispersal");
        assert_eq!(256, shares.len());
        assert_eq!(b"wide dispersal".to_vec(), ids.reconstruct(&shares).unwrap());
        assert_eq!(
            b"wide dispersal".to_vec(),
            ids.reconstruct(&shares[200..205]).unwrap()
        );
    }

    #[test]
    fn tampered_complete_set_is_detected() {
        let gf = Gf257::new();
        let ids = NttRabinIds::new(2, 4, &gf, NttVariant::DitInPlace).unwrap();
        let shares = ids.share(b"ab");
        let mut tampered = shares.clone();
        let bumped = (tampered[0].payload()[0] + 1) % 257;
        tampered[0] = Share::new(1, vec![bumped], 2).unwrap();
        // A corrupted evaluation shifts every coefficient, so the padding
        // coefficients beyond the threshold stop being zero.
        assert_eq!(
            Err(SharingError::InconsistentShares),
            ids.reconstruct(&tampered)
        );
    }

    #[test]
    fn empty_secret_round_trips() {
        let gf = Gf257::new();
        let ids = NttRabinIds::new(2, 4, &gf, NttVariant::Recursive).unwrap();
        let shares = ids.share(b"");
        assert_eq!(Vec::<u8>::new(), ids.reconstruct(&shares).unwrap());
    }

    #[proptest(cases = 32)]
    fn round_trip_with_and_without_erasures(
        #[strategy(proptest::sample::select(vec![2usize, 4, 8, 16]))] share_count: usize,
        #[strategy(1usize..=#share_count)] threshold: usize,
        #[strategy(proptest::collection::vec(any::<u8>(), 0..48))] secret: Vec<u8>,
    ) {
        let gf = Gf257::new();
        let ids = NttRabinIds::new(threshold, share_count, &gf, NttVariant::DitInPlace).unwrap();
        let shares = ids.share(&secret);
        prop_assert_eq!(&secret, &ids.reconstruct(&shares).unwrap());
        let subset = &shares[share_count - threshold..];
        prop_assert_eq!(&secret, &ids.reconstruct(subset).unwrap());
    }
}
