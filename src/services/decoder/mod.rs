//! XRPL binary decoding and transaction mapping.
//!
//! The external binary codec is consumed through the [`BinaryCodec`] trait:
//! a primitive that maps a hex blob to a flat attribute mapping. Everything
//! downstream of that seam is typed; the untyped mapping never leaves this
//! module.

pub(crate) mod attrs;
mod codec;
mod error;
mod mapper;
mod tx_details;

pub use codec::{compute_tx_hash, AttrMap, BinaryCodec, CodecError, Decoder};
pub use error::DecodeError;
pub use mapper::map_transaction;
