use super::{Alphabet, DEFAULT};

/// Number of base58 digits needed for `len` bytes, rounded up: log(256) / log(58) < 1.38.
const fn capacity(len: usize) -> usize {
    len * 138 / 100 + 1
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub const fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Appends the base58 representation of `input` to `output`.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut String) {
        let input = input.as_ref();
        let zeros = input.iter().take_while(|&&value| value == 0).count();
        let input = &input[zeros..];

        // Digits are written right to left, `start` is the first written slot.
        let mut digits = vec![0u8; capacity(input.len())];
        let mut start = digits.len();

        for &value in input {
            let mut carry = value as usize;
            let mut index = digits.len();
            while index > start || carry > 0 {
                index -= 1;
                carry += (digits[index] as usize) << 8;
                digits[index] = (carry % 58) as u8;
                carry /= 58;
            }
            start = start.min(index);
        }

        let zero = self.alphabet.zero();
        let width = if self.alphabet.is_ascii() { 1 } else { 4 };
        output.reserve(zeros * zero.len_utf8() + (digits.len() - start) * width);
        for _ in 0..zeros {
            output.push(zero);
        }
        for &digit in &digits[start..] {
            output.push(self.alphabet.encode(digit as usize));
        }
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let mut output = String::new();
        self.encode_into(input, &mut output);
        output
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&DEFAULT);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut String) {
    Encoder::default().encode_into(input, output)
}

pub fn encode_with(input: impl AsRef<[u8]>, alphabet: &Alphabet) -> String {
    Encoder::new(alphabet).encode(input)
}
