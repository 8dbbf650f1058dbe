use super::{Alphabet, DEFAULT};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidSymbol,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidSymbol => write!(f, "invalid base58 string"),
        }
    }
}

/// Number of bytes needed for `len` base58 digits, rounded up: log(58) / log(256) < 0.733.
const fn capacity(len: usize) -> usize {
    len * 733 / 1000 + 1
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub const fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Decodes `input` into the start of `output` and returns the decoded length.
    ///
    /// The whole of `output` may be overwritten, including on failure.
    pub fn decode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();

        let zero = self.alphabet.zero();
        let zeros = input.chars().take_while(|&character| character == zero).count();
        if zeros > output.len() {
            return Err(Error::BufferTooSmall);
        }

        // Bytes are written right to left after the zero prefix, `start` is the first written slot.
        let window = &mut output[zeros..];
        window.fill(0);
        let mut start = window.len();

        for character in input.chars().skip(zeros) {
            let mut carry = self.alphabet.decode(character).ok_or(Error::InvalidSymbol)? as usize;
            let mut index = window.len();
            while index > start || carry > 0 {
                index = index.checked_sub(1).ok_or(Error::BufferTooSmall)?;
                carry += (window[index] as usize) * 58;
                window[index] = (carry & 0xFF) as u8;
                carry >>= 8;
            }
            start = start.min(index);
        }

        let len = window.len() - start;
        window.copy_within(start.., 0);
        output[..zeros].fill(0);
        Ok(zeros + len)
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let zero = self.alphabet.zero();
        let zeros = input.chars().take_while(|&character| character == zero).count();
        let digits = input.chars().count() - zeros;
        let mut output = vec![0u8; zeros + capacity(digits)];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&DEFAULT);

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode_with(input: impl AsRef<str>, alphabet: &Alphabet) -> Result<Vec<u8>, Error> {
    Decoder::new(alphabet).decode(input)
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::base58::{encode_with, Alphabet, BITCOIN, FLICKR, IPFS, RIPPLE};
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("1"), Ok(vec![0x00]));
        assert_eq!(super::decode("11"), Ok(vec![0x00, 0x00]));
        assert_eq!(super::decode("21"), Ok(vec![0x3a]));
        assert_eq!(super::decode("2g"), Ok(b"a".to_vec()));
        assert_eq!(super::decode("a3gV"), Ok(b"bbb".to_vec()));
        assert_eq!(super::decode("aPEr"), Ok(b"ccc".to_vec()));
        assert_eq!(super::decode("StV1DL6CwTryKyV"), Ok(b"hello world".to_vec()));
        assert_eq!(super::decode("2cFupjhnEsSn59qHXstmK2ffpLv2"), Ok(b"simply a long string".to_vec()));
        assert_eq!(
            super::decode("1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
            Ok(vec![
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ])
        );
        assert_eq!(super::decode("ABnLTmg"), Ok(vec![0x51, 0x6b, 0x6f, 0xcd, 0x0f]));
        assert_eq!(
            super::decode("3SEo3LWLoPntC"),
            Ok(vec![0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
        );
        assert_eq!(super::decode("3EFU7m"), Ok(vec![0x57, 0x2e, 0x47, 0x94]));
        assert_eq!(
            super::decode("EJDM8drfXA6uyA"),
            Ok(vec![0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21]),
        );
        assert_eq!(super::decode("Rt5zm"), Ok(vec![0x10, 0xc8, 0x51, 0x1e]));
        assert_eq!(super::decode("1111111111"), Ok(vec![0x00; 10]));
    }

    #[test]
    fn invalid_symbol() {
        assert_eq!(super::decode("0"), Err(Error::InvalidSymbol));
        assert_eq!(super::decode("2g0"), Err(Error::InvalidSymbol));
        assert_eq!(super::decode("1O"), Err(Error::InvalidSymbol));
        assert_eq!(super::decode("StV1DL6CwTryKyV "), Err(Error::InvalidSymbol));
        assert_eq!(super::decode("é"), Err(Error::InvalidSymbol));
        assert_eq!(super::decode_with("0", &RIPPLE), Err(Error::InvalidSymbol));
        for _ in 0..3 {
            assert_eq!(super::decode("l"), Err(Error::InvalidSymbol));
        }
        assert_eq!(Error::InvalidSymbol.to_string(), "invalid base58 string");
    }

    #[test]
    fn decode_into() {
        let mut output = [0xffu8; 4];
        assert_eq!(super::decode_into("Rt5zm", &mut output), Ok(4));
        assert_eq!(output, [0x10, 0xc8, 0x51, 0x1e]);

        let mut output = [0xffu8; 8];
        assert_eq!(super::decode_into("112g", &mut output), Ok(3));
        assert_eq!(&output[..3], &[0x00, 0x00, 0x61]);

        let mut output = [0u8; 3];
        assert_eq!(super::decode_into("Rt5zm", &mut output), Err(Error::BufferTooSmall));
        let mut output = [0u8; 1];
        assert_eq!(super::decode_into("11", &mut output), Err(Error::BufferTooSmall));
        let mut output = [0u8; 0];
        assert_eq!(super::decode_into("", &mut output), Ok(0));
    }

    #[test]
    fn decode_with() {
        assert_eq!(super::decode_with("2F", &FLICKR), Ok(b"a".to_vec()));
        assert_eq!(super::decode_with("rr", &RIPPLE), Ok(vec![0x00, 0x00]));
        assert_eq!(super::decode_with("pr", &RIPPLE), Ok(vec![0x3a]));

        let characters: String = ('\u{3b1}'..).take(58).collect();
        let alphabet = Alphabet::new(&characters).unwrap();
        assert_eq!(super::decode_with("\u{3b1}\u{3b2}\u{3b1}", &alphabet), Ok(vec![0x00, 0x3a]));
        assert_eq!(super::decode_with("1", &alphabet), Err(Error::InvalidSymbol));
    }

    #[test]
    fn round_trip() {
        let mut rng = SmallRng::seed_from_u64(58);
        for alphabet in [&BITCOIN, &IPFS, &FLICKR, &RIPPLE] {
            for len in 0..64 {
                let zeros = rng.gen_range(0..=len);
                let mut input = vec![0u8; len];
                rng.fill(&mut input[zeros..]);
                let encoded = encode_with(&input, alphabet);
                assert_eq!(super::decode_with(&encoded, alphabet), Ok(input));
            }
            assert_eq!(super::decode_with(encode_with([0xff; 256], alphabet), alphabet), Ok(vec![0xff; 256]));
        }
    }
}
