use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Ntt(#[from] NttError),
}

/// Errors raised while building field tables or crossing the byte boundary.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error("element {element} has no inverse modulo {modulus}")]
    NonInvertibleElement { element: u32, modulus: u32 },
    #[error("byte stream ends in the middle of an escape sequence")]
    TruncatedEscape,
    #[error("invalid escape byte {0:#04x}")]
    InvalidEscape(u8),
}

/// Errors returned by the NTT operator.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum NttError {
    #[error("length must be a power of two, got {0}")]
    NonPowerOfTwo(usize),
    #[error("{root} is not a primitive root of unity of order {order}")]
    WrongRootOrder { root: u16, order: usize },
}
