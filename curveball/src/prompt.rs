//! Line-oriented prompts over a pair of byte streams.

use crate::{Error, Result};
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_traits::Num;
use std::io::{BufRead, Write};

/// Writes prompts to `W` and reads one line of answer from `R`.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Wrap an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Write `line` followed by a newline.
    pub fn say(&mut self, line: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Write `prompt` (without a newline) and read the answer.
    ///
    /// The trailing line terminator is stripped; everything else is returned
    /// verbatim. Running out of input is [`Error::Eof`].
    pub fn ask(&mut self, prompt: &str) -> Result<&str> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(Error::Eof);
        }

        let line = self.line.strip_suffix('\n').unwrap_or(&self.line);
        Ok(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Write `prompt` and parse the answer as an integer in base `radix`.
    pub fn ask_int(&mut self, prompt: &str, radix: u32) -> Result<BigInt> {
        let literal = self.ask(prompt)?;
        parse_int(literal, radix)
    }

    /// Unwrap the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Parse an integer literal.
///
/// Surrounding whitespace is ignored. The literal may carry a sign, a
/// `0x`/`0X` prefix when `radix` is 16 (optionally followed by one
/// underscore), and single underscores between digits. Only ASCII digits
/// are accepted.
pub fn parse_int(literal: &str, radix: u32) -> Result<BigInt> {
    let malformed = || Error::Malformed {
        radix,
        literal: literal.to_owned(),
    };

    let trimmed = literal.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits = match radix {
        16 => match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
            None => digits,
        },
        _ => digits,
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(malformed());
    }

    let magnitude =
        BigUint::from_str_radix(&digits.replace('_', ""), radix).map_err(|_| malformed())?;
    let value = BigInt::from(magnitude);
    Ok(if negative { -value } else { value })
}
