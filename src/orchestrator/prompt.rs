//! Line-oriented question/answer I/O.
//!
//! [`Prompter`] is generic over any `BufRead`/`Write` pair so the collector and session
//! can be driven from in-memory buffers in tests and from the terminal in the binary.

use crate::error::Result;
use std::io::{self, BufRead, ErrorKind, Stdin, StdinLock, Stdout, Write};

const END_OF_INPUT: &str = "EOF when reading a line";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Binds a prompter to the process's standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` without a newline, then blocks for one line of input.
    /// The answer comes back trimmed. Closed input is not a line and fails with
    /// [`ErrorKind::UnexpectedEof`].
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, END_OF_INPUT).into());
        }
        Ok(line.trim().to_string())
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrchestratorError;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_answer() {
        let mut prompter = Prompter::new(Cursor::new("  hello world \n"), Vec::new());
        let answer = prompter.ask("Your answer: ").unwrap();
        assert_eq!(answer, "hello world");
        assert_eq!(prompter.into_output(), b"Your answer: ");
    }

    #[test]
    fn test_ask_at_end_of_input_fails() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        match prompter.ask("> ") {
            Err(OrchestratorError::Io(e)) => {
                assert_eq!(e.kind(), ErrorKind::UnexpectedEof);
                assert_eq!(e.to_string(), "EOF when reading a line");
            }
            other => panic!("expected end-of-input error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.ask("> ").unwrap(), "");
        assert!(prompter.ask("> ").is_err());
    }

    #[test]
    fn test_ask_reads_one_line_at_a_time() {
        let mut prompter = Prompter::new(Cursor::new("first\nsecond\r\n"), Vec::new());
        assert_eq!(prompter.ask("").unwrap(), "first");
        assert_eq!(prompter.ask("").unwrap(), "second");
    }

    #[test]
    fn test_say_appends_newline() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        prompter.say("Question 1").unwrap();
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "Question 1\n");
    }
}
