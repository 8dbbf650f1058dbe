use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
    OddLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidCharacter { character, index } => write!(f, "Invalid hex character {:?} at index {}", character, index),
            Error::OddLength => write!(f, "Odd number of hex digits"),
        }
    }
}

const TABLE: &[u8; 16] = b"0123456789abcdef";

fn nibble(input: &[u8], index: usize) -> Result<u8, Error> {
    let character = input[index];
    match character {
        b'0'..=b'9' => Ok(character - b'0'),
        b'a'..=b'f' => Ok(character - b'a' + 10),
        b'A'..=b'F' => Ok(character - b'A' + 10),
        _ => Err(Error::InvalidCharacter {
            character: character as char,
            index,
        }),
    }
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    if input.len() % 2 != 0 {
        return Err(Error::OddLength);
    }
    let mut output = Vec::with_capacity(input.len() / 2);
    for index in (0..input.len()).step_by(2) {
        output.push(nibble(input, index)? << 4 | nibble(input, index + 1)?);
    }
    Ok(output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize] as char);
        output.push(TABLE[(byte & 0x0F) as usize] as char);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn encode() {
        assert_eq!(super::encode(b"Hello world"), "48656c6c6f20776f726c64");
        assert_eq!(super::encode([0x00, 0xff]), "00ff");
        assert_eq!(super::encode(b""), "");
    }

    #[test]
    fn decode() {
        assert_eq!(super::decode("48656c6c6f20776f726c64"), Ok(b"Hello world".to_vec()));
        assert_eq!(super::decode("00FF"), Ok(vec![0x00, 0xff]));
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("abc"), Err(Error::OddLength));
        assert_eq!(super::decode("0g"), Err(Error::InvalidCharacter { character: 'g', index: 1 }));
    }
}
