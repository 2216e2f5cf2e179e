use thiserror::Error;

use math::FieldError;

/// Result type specialized for sharing operations.
pub type SharingResult<T> = std::result::Result<T, SharingError>;

/// Errors that can arise while configuring a scheme or reconstructing a
/// secret. Configuration variants are raised once at construction;
/// reconstruction variants are per call and carry enough detail for the
/// caller to decide whether fetching more shares can help.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharingError {
    #[error("invalid threshold configuration: threshold {threshold} with {share_count} shares")]
    InvalidThreshold {
        threshold: usize,
        share_count: usize,
    },
    #[error("share count {requested} exceeds the field maximum {max}")]
    UnsupportedShareCount { requested: usize, max: usize },
    #[error("share count {0} is not a supported transform size")]
    InvalidNttShareCount(usize),
    #[error("insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("invalid share index {0}")]
    InvalidShareIndex(u16),
    #[error("duplicate share index {0}")]
    DuplicateShareIndex(u16),
    #[error("inconsistent share lengths")]
    InconsistentShareLengths,
    #[error("share element {value} is outside the field of size {field_size}")]
    InvalidShareElement { value: u16, field_size: usize },
    #[error("shares do not agree on a degree-bounded polynomial")]
    InconsistentShares,
    #[error("reconstructed element {0} does not fit a byte")]
    NonByteElement(u16),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encoding(#[from] FieldError),
}

/// Errors raised by the erasure decoder.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("insufficient points: need {required}, got {provided}")]
    InsufficientPoints { required: usize, provided: usize },
    #[error("duplicate evaluation point {0}")]
    DuplicatePoint(u16),
}
