// crates/register-cli/src/terminal.rs - Interactive prompting over any reader/writer pair
//
// Every operation talks to the user through a `Terminal`. In the binary it
// wraps locked stdin and stdout; in tests it wraps a byte slice and a Vec, so
// the prompt loops run without a real terminal.

use anyhow::{Context as AnyhowContext, Result, bail};
use console::style;
use register_core::validate::{is_whole_number, parse_patient_no};
use std::fmt::Display;
use std::io::{BufRead, Write};

const INVALID_PATIENT_NO: &str = "Invalid patient number. Enter a whole number.";

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line of output
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print the prompt and read one answer, trimmed of surrounding whitespace
    ///
    /// Running out of input is an error: there is no answer to wait for.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from standard input")?;
        if read == 0 {
            bail!(
                "Input ended while waiting for: {}",
                prompt.trim_end_matches([':', ' '])
            );
        }

        Ok(line.trim().to_string())
    }

    /// Keep asking until `is_valid` accepts the answer, showing `hint` after
    /// every rejected one
    pub fn ask_until(
        &mut self,
        prompt: &str,
        hint: &str,
        is_valid: impl Fn(&str) -> bool,
    ) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if is_valid(&answer) {
                return Ok(answer);
            }
            self.say(style(hint).yellow())?;
        }
    }

    /// Keep asking until the answer is a whole number
    ///
    /// Returns `None` for whole numbers no patient can have (zero, negative,
    /// too large); callers answer those as "not found".
    pub fn ask_patient_no(&mut self, prompt: &str) -> Result<Option<u32>> {
        let answer = self.ask_until(prompt, INVALID_PATIENT_NO, is_whole_number)?;
        Ok(parse_patient_no(&answer))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
