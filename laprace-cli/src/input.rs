//! Line-oriented prompts with retry on invalid answers.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::CliError;

pub const RETRY_MESSAGE: &str = "Please try again.";

pub struct Prompt<R, W> {
    input: R,
    output: W,
    /// 0 means unlimited.
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, max_attempts: usize) -> Self {
        Self {
            input,
            output,
            max_attempts,
        }
    }

    /// Prints `question` and reads one trimmed line.
    pub fn ask(&mut self, question: &str) -> Result<String, CliError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until `process` accepts the answer.
    ///
    /// Each rejection prints the reason followed by [`RETRY_MESSAGE`] and
    /// asks again, up to `max_attempts` rejections when that is non-zero.
    pub fn retry_scan<T, E, F>(&mut self, question: &str, mut process: F) -> Result<T, CliError>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: Display,
    {
        let mut attempts = 0;
        loop {
            let answer = self.ask(question)?;
            match process(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    attempts += 1;
                    debug!(%reason, attempts, "rejected input");
                    writeln!(self.output, "{reason}")?;
                    writeln!(self.output, "{RETRY_MESSAGE}")?;
                    if self.max_attempts != 0 && attempts >= self.max_attempts {
                        return Err(CliError::RetriesExhausted { attempts });
                    }
                }
            }
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn positive(answer: &str) -> Result<u32, String> {
        match answer.parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("not a positive number: {answer}")),
        }
    }

    #[test]
    fn test_accepts_first_valid_answer() {
        let mut out = Vec::new();
        let mut prompt = Prompt::new(Cursor::new(" 7 \n"), &mut out, 0);
        assert_eq!(prompt.retry_scan("laps? ", positive).unwrap(), 7);
        assert_eq!(String::from_utf8(out).unwrap(), "laps? ");
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut out = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("abc\n0\n3\n"), &mut out, 0);
        assert_eq!(prompt.retry_scan("laps? ", positive).unwrap(), 3);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("laps? ").count(), 3);
        assert_eq!(text.matches(RETRY_MESSAGE).count(), 2);
        assert!(text.contains("not a positive number: abc"));
    }

    #[test]
    fn test_bounded_retries() {
        let mut prompt = Prompt::new(Cursor::new("x\ny\nz\n4\n"), Vec::new(), 2);
        let err = prompt.retry_scan("laps? ", positive).unwrap_err();
        assert!(matches!(err, CliError::RetriesExhausted { attempts: 2 }));
    }

    #[test]
    fn test_end_of_input() {
        let mut prompt = Prompt::new(Cursor::new("nope\n"), Vec::new(), 0);
        let err = prompt.retry_scan("laps? ", positive).unwrap_err();
        assert!(matches!(err, CliError::EndOfInput));
    }
}
