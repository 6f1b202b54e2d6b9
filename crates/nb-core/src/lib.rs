pub mod error;
pub mod types;

pub use error::NumBurstError;
pub use types::*;
