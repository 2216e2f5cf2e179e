pub mod error;
pub mod field;
pub mod gf256;
pub mod gf257;
pub mod ntt;
pub mod prelude;

pub use error::{FieldError, MathError, NttError, Result};
pub use field::{Field, NttField};
pub use gf256::Gf256;
pub use gf257::Gf257;
pub use ntt::{Ntt, NttVariant};
