//! Interactive selection on the terminal.

use std::io::{self, BufRead, Write};

use saol::Prompt;
use saol::types::DisambiguationOption;

/// A [`Prompt`] that lists options on stdout and reads choices from stdin.
pub struct StdinPrompt<R, W> {
    input: R,
    output: W,
}

impl StdinPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Creates a prompt on the process' stdin and stdout.
    #[must_use]
    pub fn new() -> Self {
        StdinPrompt {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl Default for StdinPrompt<io::StdinLock<'static>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    /// Creates a prompt over arbitrary streams.
    pub const fn with_streams(input: R, output: W) -> Self {
        StdinPrompt { input, output }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for StdinPrompt<R, W> {
    fn present(&mut self, query: &str, options: &[DisambiguationOption]) -> io::Result<()> {
        writeln!(self.output, "The word {query} occurs in the following forms:")?;

        for (n, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {}: {}", n + 1, option.word_class, option.href)?;
        }

        writeln!(
            self.output,
            "Select a number between 1 and {} for the desired form.",
            options.len()
        )
    }

    fn read_choice(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "~> ")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }

    fn reject(&mut self, _input: &str) -> io::Result<()> {
        writeln!(self.output, "Please enter a valid number.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<DisambiguationOption> {
        vec![
            DisambiguationOption {
                word_class: "substantiv".to_string(),
                href: "/saol/?id=1".to_string(),
            },
            DisambiguationOption {
                word_class: "verb".to_string(),
                href: "/saol/?id=2".to_string(),
            },
        ]
    }

    #[test]
    fn presents_numbered_options() {
        let mut prompt = StdinPrompt::with_streams(&b""[..], Vec::new());

        prompt.present("vara", &options()).unwrap();

        let output = String::from_utf8(prompt.into_output()).unwrap();

        assert_eq!(
            output,
            "The word vara occurs in the following forms:\n  \
             1. substantiv: /saol/?id=1\n  \
             2. verb: /saol/?id=2\n\
             Select a number between 1 and 2 for the desired form.\n"
        );
    }

    #[test]
    fn reads_until_valid_choice() {
        let options = options();
        let mut prompt = StdinPrompt::with_streams(&b"0\nfoo\n2\n"[..], Vec::new());
        let chosen = saol::prompt::choose(&mut prompt, "vara", &options).unwrap();

        assert_eq!(chosen.word_class, "verb");

        let output = String::from_utf8(prompt.into_output()).unwrap();

        assert_eq!(output.matches("Please enter a valid number.").count(), 2);
        assert_eq!(output.matches("~> ").count(), 3);
    }

    #[test]
    fn end_of_input_closes_prompt() {
        let mut prompt = StdinPrompt::with_streams(&b""[..], Vec::new());

        assert_eq!(prompt.read_choice().unwrap(), None);
    }
}
