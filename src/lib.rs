#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![deny(unsafe_code)]

mod chain;
pub use chain::*;

mod dimensions;
pub use dimensions::*;

mod error;
pub use error::*;

mod input_weight;
pub use input_weight::*;

mod outputs;
pub use outputs::*;

mod script_size;
pub use script_size::*;

mod script_type;
pub use script_type::*;

pub mod virtual_sizes;

pub mod zcash;
pub use zcash::ZcashFeeParams;
