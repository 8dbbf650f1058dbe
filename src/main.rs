pub mod chronometer;
pub mod configuration;
pub mod error;
pub mod logger;

use self::{
    configuration::{Binary, Configuration, Format},
    error::Error,
    logger::Logger,
};
use base58_codec::{hex, Decoder, Encoder};
use serde_json::json;
use std::{
    env,
    io::{self, Read, Write},
    process,
};

const USAGE: &str = "Usage: base58 <encode|decode> [INPUT]";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Command {
    Encode,
    Decode,
}

impl Command {
    fn parse(value: &str) -> Result<Self, Error> {
        match value {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            _ => Err(Error::new(format!("Unknown command {}\n{}", value, USAGE))),
        }
    }
}

fn trim_end(input: &[u8]) -> &[u8] {
    let len = input.iter().rposition(|value| !value.is_ascii_whitespace()).map_or(0, |index| index + 1);
    &input[..len]
}

fn render_binary(bytes: &[u8], binary: Binary) -> String {
    match binary {
        Binary::Raw => String::from_utf8_lossy(bytes).into_owned(),
        Binary::Hex => hex::encode(bytes),
    }
}

fn encode(input: &[u8], configuration: &Configuration, logger: &Logger) -> Result<Vec<u8>, Error> {
    let bytes = match configuration.binary() {
        Binary::Raw => input.to_vec(),
        Binary::Hex => hex::decode(trim_end(input))?,
    };
    let output = Encoder::new(configuration.alphabet()).encode(&bytes);
    logger.log(format!("Encoded {} bytes into {} characters", bytes.len(), output.chars().count()));
    let output = match configuration.format() {
        Format::Text => output,
        Format::Json => json!({
            "alphabet": configuration.alphabet().to_string(),
            "input": render_binary(&bytes, configuration.binary()),
            "output": output,
        })
        .to_string(),
    };
    Ok(output.into_bytes())
}

fn decode(input: &[u8], configuration: &Configuration, logger: &Logger) -> Result<Vec<u8>, Error> {
    let input = std::str::from_utf8(trim_end(input)).map_err(|_| Error::new("Input is not valid UTF-8"))?;
    let bytes = Decoder::new(configuration.alphabet()).decode(input)?;
    logger.log(format!("Decoded {} characters into {} bytes", input.chars().count(), bytes.len()));
    let output = match (configuration.format(), configuration.binary()) {
        (Format::Text, Binary::Raw) => bytes,
        (Format::Text, Binary::Hex) => hex::encode(&bytes).into_bytes(),
        (Format::Json, binary) => json!({
            "alphabet": configuration.alphabet().to_string(),
            "input": input,
            "output": render_binary(&bytes, binary),
        })
        .to_string()
        .into_bytes(),
    };
    Ok(output)
}

fn execute(command: Command, input: &[u8], configuration: &Configuration, logger: &Logger) -> Result<Vec<u8>, Error> {
    match command {
        Command::Encode => encode(input, configuration, logger),
        Command::Decode => decode(input, configuration, logger),
    }
}

fn run() -> Result<(), Error> {
    let configuration = Configuration::new()?;
    let logger = Logger::new(configuration.verbose());

    let mut args = env::args().skip(1);
    let command = Command::parse(&args.next().ok_or_else(|| Error::new(USAGE))?)?;
    let input = match args.next() {
        Some(input) => input.into_bytes(),
        None => {
            let mut input = Vec::new();
            io::stdin().read_to_end(&mut input)?;
            input
        }
    };
    logger.log(format!("Read {} bytes of input", input.len()));

    let output = execute(command, &input, &configuration, &logger)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    if configuration.format() == Format::Json || command == Command::Encode || configuration.binary() == Binary::Hex {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{}", error.message());
        process::exit(1);
    }
}
