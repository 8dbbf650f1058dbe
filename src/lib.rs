//! Base58 encoding and decoding over configurable 58-character alphabets.
//!
//! ```
//! use base58_codec::base58::{self, RIPPLE};
//!
//! assert_eq!(base58::encode("hello world"), "StV1DL6CwTryKyV");
//! assert_eq!(base58::decode("StV1DL6CwTryKyV").unwrap(), b"hello world");
//! assert_eq!(base58::encode_with([0x00, 0x3a], &RIPPLE), "rpr");
//! ```

pub mod base58;
pub mod hex;

pub use base58::{decode, decode_with, encode, encode_with, Alphabet, Decoder, Encoder};
