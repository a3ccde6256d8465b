//! Splitting a command line into comma-separated tokens.
//!
//! The accepted shape is `keyword word[, word[, word ...]]`: the keyword is
//! separated from the first operand by blanks only, and every later pair of
//! tokens by exactly one comma with optional blanks around it. Blanks are
//! spaces and tabs.

use crate::CommandError;

#[inline]
const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

#[inline]
const fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | ',')
}

/// A cursor over one command line.
///
/// Tokens are borrowed from the line; nothing is copied.
///
/// # Examples
///
/// ```
/// use setcalc::{CommandError, Lexer};
///
/// let mut lexer = Lexer::new("union_set SETA, SETB ,SETC");
/// assert_eq!(lexer.first_token(), Ok("union_set"));
/// assert_eq!(lexer.next_token(), Ok("SETA"));
/// assert_eq!(lexer.next_token(), Ok("SETB"));
/// assert_eq!(lexer.next_token(), Ok("SETC"));
/// assert_eq!(lexer.next_token(), Ok(""));
///
/// let mut lexer = Lexer::new("print_set SETA SETB");
/// lexer.first_token()?;
/// assert_eq!(lexer.next_token(), Err(CommandError::MissingComma));
/// # Ok::<(), CommandError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    rest: &'a str,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `line`.
    #[must_use]
    pub const fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Returns the text not consumed yet.
    #[must_use]
    pub const fn rest(&self) -> &'a str {
        self.rest
    }

    /// Returns `true` once the whole line has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.rest.is_empty()
    }

    fn take_word(&mut self) -> &'a str {
        let end = self.rest.find(is_delimiter).unwrap_or(self.rest.len());
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        word
    }

    /// Reads the command keyword.
    ///
    /// # Errors
    ///
    /// [`CommandError::EmptyInput`] if the line is blank, and
    /// [`CommandError::IllegalComma`] if a comma follows the keyword.
    pub fn first_token(&mut self) -> Result<&'a str, CommandError> {
        self.rest = self.rest.trim_start_matches(is_blank);
        if self.rest.is_empty() {
            return Err(CommandError::EmptyInput);
        }

        let word = self.take_word();
        self.rest = self.rest.trim_start_matches(is_blank);
        if self.rest.starts_with(',') {
            return Err(CommandError::IllegalComma);
        }
        Ok(word)
    }

    /// Reads the next operand and the separator after it.
    ///
    /// At the end of the line this yields an empty token.
    ///
    /// # Errors
    ///
    /// * [`CommandError::TrailingText`] if the line ends in a comma.
    /// * [`CommandError::MissingComma`] if the next token follows without a
    ///   comma.
    /// * [`CommandError::MultipleCommas`] if two or more commas precede the
    ///   next token.
    pub fn next_token(&mut self) -> Result<&'a str, CommandError> {
        let word = self.take_word();

        let end = self
            .rest
            .find(|c: char| !is_delimiter(c))
            .unwrap_or(self.rest.len());
        let (separator, rest) = self.rest.split_at(end);
        self.rest = rest;

        let commas = separator.bytes().filter(|&b| b == b',').count();
        match (rest.is_empty(), commas) {
            (true, 0) | (false, 1) => Ok(word),
            (true, _) => Err(CommandError::TrailingText),
            (false, 0) => Err(CommandError::MissingComma),
            (false, _) => Err(CommandError::MultipleCommas),
        }
    }
}
