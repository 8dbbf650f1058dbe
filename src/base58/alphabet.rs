use std::{error, fmt, str::FromStr};

pub const SIZE: usize = 58;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize },
    UnknownName,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => write!(f, "Base58 alphabet length must be {}, but is {}", SIZE, length),
            Self::UnknownName => write!(f, "Unknown base58 alphabet name"),
        }
    }
}

/// Ordered mapping between the digits 0..57 and 58 characters.
///
/// Characters are not required to be unique. When a character appears more
/// than once, decoding resolves it to its first index, so encoding with such an
/// alphabet is lossy.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Alphabet {
    encode: [char; SIZE],
    ascii: [Option<u8>; 128],
}

// `characters` is a &str, so every sequence starting at `index` is valid UTF-8.
const fn next_char(bytes: &[u8], index: usize) -> (char, usize) {
    let first = bytes[index];
    let (width, mut value) = if first < 0x80 {
        (1, first as u32)
    } else if first < 0xE0 {
        (2, (first & 0x1F) as u32)
    } else if first < 0xF0 {
        (3, (first & 0x0F) as u32)
    } else {
        (4, (first & 0x07) as u32)
    };
    let mut offset = 1;
    while offset < width {
        value = (value << 6) | (bytes[index + offset] & 0x3F) as u32;
        offset += 1;
    }
    match char::from_u32(value) {
        Some(character) => (character, width),
        None => (char::REPLACEMENT_CHARACTER, width),
    }
}

impl Alphabet {
    pub const fn new(characters: &str) -> Result<Self, Error> {
        let bytes = characters.as_bytes();
        let mut encode = ['\0'; SIZE];
        let mut ascii: [Option<u8>; 128] = [None; 128];

        let mut length = 0;
        let mut offset = 0;
        while offset < bytes.len() {
            let (character, width) = next_char(bytes, offset);
            offset += width;
            if length < SIZE {
                encode[length] = character;
                let code = character as u32 as usize;
                if code < 128 && ascii[code].is_none() {
                    ascii[code] = Some(length as u8);
                }
            }
            length += 1;
        }

        if length != SIZE {
            return Err(Error::InvalidLength { length });
        }
        Ok(Self { encode, ascii })
    }

    /// Resolves one of the canonical alphabet names, ignoring case.
    pub fn from_name(name: &str) -> Result<&'static Self, Error> {
        match name.to_ascii_lowercase().as_str() {
            "bitcoin" => Ok(&BITCOIN),
            "ipfs" => Ok(&IPFS),
            "flickr" => Ok(&FLICKR),
            "ripple" => Ok(&RIPPLE),
            _ => Err(Error::UnknownName),
        }
    }

    pub fn encode(&self, digit: usize) -> char {
        self.encode[digit]
    }

    pub fn decode(&self, character: char) -> Option<u8> {
        match self.ascii.get(character as usize) {
            Some(&digit) => digit,
            None => self.encode.iter().position(|&value| value == character).map(|index| index as u8),
        }
    }

    /// Character standing for a leading zero byte.
    pub const fn zero(&self) -> char {
        self.encode[0]
    }

    pub const fn characters(&self) -> &[char; SIZE] {
        &self.encode
    }

    pub fn is_ascii(&self) -> bool {
        self.encode.iter().all(char::is_ascii)
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for character in &self.encode {
            write!(f, "{}", character)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}

const fn build(characters: &str) -> Alphabet {
    match Alphabet::new(characters) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    }
}

pub const BITCOIN: Alphabet = build("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
pub const IPFS: Alphabet = build("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
pub const FLICKR: Alphabet = build("123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ");
pub const RIPPLE: Alphabet = build("rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");

pub const DEFAULT: Alphabet = BITCOIN;
