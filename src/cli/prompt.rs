//! Interactive confirmation on the terminal

use crate::application::Confirm;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Asks a yes/no question and reads the answer from a line-based reader
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConfirm { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{} [y/N] ", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes" | "是"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let answer = LineConfirm::new(Cursor::new(input.to_string()), &mut out)
            .confirm("Delete?")
            .unwrap();
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_yes_answers() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
        assert!(ask("是\n").0);
    }

    #[test]
    fn test_default_is_no() {
        assert!(!ask("\n").0);
        assert!(!ask("").0);
        assert!(!ask("nope\n").0);
    }

    #[test]
    fn test_prompt_written() {
        assert_eq!(ask("n\n").1, "Delete? [y/N] ");
    }
}
