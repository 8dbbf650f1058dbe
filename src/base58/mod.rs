pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod serialization;

pub use alphabet::{Alphabet, BITCOIN, DEFAULT, FLICKR, IPFS, RIPPLE};
pub use decode::{decode, decode_into, decode_with, Decoder};
pub use encode::{encode, encode_into, encode_with, Encoder};
