#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod error;
mod helpers;
mod init;
mod query_params;
mod unicode;
mod values;

// Public API
pub use error::DecodeError;
pub use init::Init;
pub use query_params::{Iter, QueryParams};
pub use unicode::percent_encode::{decode_component, encode_component, try_decode_component};
pub use values::Values;

pub type Result<T> = core::result::Result<T, DecodeError>;
