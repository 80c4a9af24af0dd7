mod bytes;
mod error;
mod helper;
mod uint;

pub use crate::bytes::*;
pub use crate::error::Error;
pub use crate::uint::{U128, U256, U512};
