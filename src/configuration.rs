use crate::error::Error;
use base58_codec::Alphabet;
use std::{env, fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Format {
    Text,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected text or json, got {}", value)),
        }
    }
}

/// How binary data is read by `encode` and written by `decode`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Binary {
    Raw,
    Hex,
}

impl FromStr for Binary {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "raw" => Ok(Self::Raw),
            "hex" => Ok(Self::Hex),
            _ => Err(format!("expected raw or hex, got {}", value)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    alphabet: Alphabet,
    format: Format,
    binary: Binary,
    verbose: bool,
}

fn var(key: &str, default: Option<&str>) -> Result<String, Error> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.map(String::from).ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

fn var_map<T, E: Display>(key: &str, f: impl FnOnce(&str) -> Result<T, E>, default: Option<T>) -> Result<T, Error> {
    match env::var(key) {
        Ok(value) => f(&value).map_err(|error| Error::new(format!("Invalid {} {}: {}", key, value, error))),
        Err(_) => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

/// A canonical alphabet name, or the 58 characters of a custom alphabet.
pub fn parse_alphabet(value: &str) -> Result<Alphabet, Error> {
    match Alphabet::from_name(value) {
        Ok(alphabet) => Ok(*alphabet),
        Err(_) => Ok(value.parse()?),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        let alphabet = parse_alphabet(&var("ALPHABET", Some("bitcoin"))?)?;
        let format = var_map("FORMAT", |format| format.parse(), Some(Format::Text))?;
        let binary = var_map("BINARY", |binary| binary.parse(), Some(Binary::Raw))?;
        let verbose = var_map("VERBOSE", |verbose| verbose.parse(), Some(false))?;
        Ok(Self::with(alphabet, format, binary, verbose))
    }

    pub fn with(alphabet: Alphabet, format: Format, binary: Binary, verbose: bool) -> Self {
        Self {
            alphabet,
            format,
            binary,
            verbose,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn binary(&self) -> Binary {
        self.binary
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
