pub use crate::error::{FieldError, MathError, NttError, Result};
pub use crate::field::{Field, NttField};
pub use crate::gf256::Gf256;
pub use crate::gf257::Gf257;
pub use crate::ntt::{Ntt, NttVariant};
