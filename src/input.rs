use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const LENGTH_PROMPT: &str = "Podaj długość sekwencji: ";
pub const ID_PROMPT: &str = "Podaj ID sekwencji: ";
pub const DESCRIPTION_PROMPT: &str = "Podaj opis sekwencji: ";
pub const LABEL_PROMPT: &str = "Podaj imię: ";

/// The only recognised input error: a bad sequence length.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LengthError {
    #[error("Długość musi być liczbą całkowitą.")]
    NotAnInteger(String),
    #[error("Długość nie może być ujemna.")]
    Negative(i64),
}

/// Parses the sequence length. Surrounding whitespace is ignored.
pub fn parse_length(raw: &str) -> Result<usize, LengthError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| LengthError::NotAnInteger(trimmed.to_string()))?;
    if value < 0 {
        return Err(LengthError::Negative(value));
    }
    usize::try_from(value).map_err(|_| LengthError::NotAnInteger(trimmed.to_string()))
}

/// Everything a run needs from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub length: usize,
    pub id: String,
    pub description: String,
    pub label: String,
}

/// Values already supplied on the command line; `None` means ask.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub length: Option<String>,
    pub id: Option<String>,
    pub description: Option<String>,
    pub label: Option<String>,
}

/// Prints `prompt` and reads one line. End of input reads as an empty line.
pub fn prompt_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<String> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read from standard input")?;
    Ok(line)
}

fn value_or_prompt<R: BufRead, W: Write>(
    value: Option<String>,
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => prompt_line(reader, writer, prompt),
    }
}

/// Collects length, id, description and label in that order.
///
/// The length is validated before anything else is asked, so a bad length
/// stops the run without further prompts.
pub fn collect_inputs<R: BufRead, W: Write>(
    overrides: Overrides,
    reader: &mut R,
    writer: &mut W,
) -> Result<Inputs> {
    let raw_length = value_or_prompt(overrides.length, reader, writer, LENGTH_PROMPT)?;
    let length = parse_length(&raw_length)?;

    let id = value_or_prompt(overrides.id, reader, writer, ID_PROMPT)?;
    let description = value_or_prompt(overrides.description, reader, writer, DESCRIPTION_PROMPT)?;
    let label = value_or_prompt(overrides.label, reader, writer, LABEL_PROMPT)?;

    Ok(Inputs {
        length,
        id: id.trim().to_string(),
        description: description.trim().to_string(),
        label: label.trim().to_string(),
    })
}
