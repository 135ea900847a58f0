//! Interactive selection among disambiguation options.

use std::io;

use tracing::debug;

use crate::Error;
use crate::types::DisambiguationOption;

/// A source of choices when a query matches entries of several word classes.
pub trait Prompt {
    /// Shows the candidate `options` for `query` to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the options could not be written.
    fn present(&mut self, query: &str, options: &[DisambiguationOption]) -> io::Result<()>;

    /// Reads the user's raw answer. Returns `None` once input is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the answer failed.
    fn read_choice(&mut self) -> io::Result<Option<String>>;

    /// Tells the user that `input` was not a valid choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be written.
    fn reject(&mut self, input: &str) -> io::Result<()>;
}

/// Parses `input` as a 1-based choice among `count` options and returns its 0-based index.
///
/// # Example
///
/// ```rust
/// use saol::prompt::parse_choice;
/// assert_eq!(parse_choice("2", 3), Some(1));
/// assert_eq!(parse_choice("0", 3), None);
/// assert_eq!(parse_choice("4", 3), None);
/// ```
#[must_use]
pub fn parse_choice(input: &str, count: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;

    (1..=count).contains(&choice).then(|| choice - 1)
}

/// Presents `options` through `prompt` and asks until a valid choice is made.
///
/// # Errors
///
/// - [`Error::NotFound`]: If there are no options to choose from.
/// - [`Error::PromptClosed`]: If input ends before a valid choice is made.
/// - [`Error::Prompt`]: If interacting with the prompt fails.
pub fn choose<'a, P>(
    prompt: &mut P,
    query: &str,
    options: &'a [DisambiguationOption],
) -> Result<&'a DisambiguationOption, Error>
where
    P: Prompt + ?Sized,
{
    if options.is_empty() {
        return Err(Error::NotFound(query.to_string()));
    }

    prompt.present(query, options)?;

    loop {
        let Some(input) = prompt.read_choice()? else {
            return Err(Error::PromptClosed);
        };

        if let Some(index) = parse_choice(&input, options.len()) {
            debug!(choice = index + 1, "user made a choice");

            return Ok(&options[index]);
        }

        prompt.reject(&input)?;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    #[derive(Default)]
    struct Scripted {
        answers: VecDeque<&'static str>,
        presented: usize,
        rejected: Vec<String>,
    }

    impl Prompt for Scripted {
        fn present(&mut self, _query: &str, options: &[DisambiguationOption]) -> io::Result<()> {
            self.presented = options.len();
            Ok(())
        }

        fn read_choice(&mut self) -> io::Result<Option<String>> {
            Ok(self.answers.pop_front().map(String::from))
        }

        fn reject(&mut self, input: &str) -> io::Result<()> {
            self.rejected.push(input.to_string());
            Ok(())
        }
    }

    fn options() -> Vec<DisambiguationOption> {
        ["substantiv", "verb"]
            .iter()
            .enumerate()
            .map(|(i, class)| DisambiguationOption {
                word_class: (*class).to_string(),
                href: format!("/saol/?id={}", i + 1),
            })
            .collect()
    }

    #[test]
    fn parse_choice_accepts_range() {
        assert_eq!(parse_choice("1", 2), Some(0));
        assert_eq!(parse_choice(" 2\n", 2), Some(1));
    }

    #[test]
    fn parse_choice_rejects_out_of_range_and_garbage() {
        assert_eq!(parse_choice("0", 2), None);
        assert_eq!(parse_choice("3", 2), None);
        assert_eq!(parse_choice("-1", 2), None);
        assert_eq!(parse_choice("ett", 2), None);
        assert_eq!(parse_choice("", 2), None);
    }

    #[test]
    fn choose_reprompts_until_valid() {
        let options = options();
        let mut prompt = Scripted {
            answers: VecDeque::from(["0", "tre", "3", "2"]),
            ..Default::default()
        };
        let chosen = choose(&mut prompt, "vara", &options).unwrap();

        assert_eq!(chosen.word_class, "verb");
        assert_eq!(prompt.presented, 2);
        assert_eq!(prompt.rejected, ["0", "tre", "3"]);
    }

    #[test]
    fn choose_fails_when_input_closes() {
        let options = options();
        let mut prompt = Scripted {
            answers: VecDeque::from(["9"]),
            ..Default::default()
        };

        assert!(matches!(
            choose(&mut prompt, "vara", &options),
            Err(Error::PromptClosed)
        ));
    }

    #[test]
    fn choose_without_options_is_not_found() {
        let mut prompt = Scripted::default();

        assert!(matches!(
            choose(&mut prompt, "qwxz", &[]),
            Err(Error::NotFound(query)) if query == "qwxz"
        ));
        assert_eq!(prompt.presented, 0);
    }
}
