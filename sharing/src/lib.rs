pub mod decoder;
pub mod error;
pub mod mac;
pub mod ntt_rabin;
pub mod params;
pub mod rabin;
pub mod share;

pub use decoder::ErasureDecoder;
pub use error::{DecodeError, SharingError, SharingResult};
pub use ntt_rabin::NttRabinIds;
pub use rabin::RabinIds;
pub use share::Share;
