//! Errors reported for a rejected command line.

use core::fmt;

/// Why a command line was rejected.
///
/// Every variant is a recoverable user-input error: the command is abandoned
/// before any set is touched. The [`Display`](fmt::Display) output is the
/// exact diagnostic printed by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandError {
    /// The line contains nothing but whitespace.
    EmptyInput,
    /// A comma follows the command keyword.
    IllegalComma,
    /// Two tokens are separated by whitespace only.
    MissingComma,
    /// Two tokens are separated by more than one comma.
    MultipleCommas,
    /// The line ends in a dangling comma.
    TrailingText,
    /// A read-list member is not a canonical decimal integer.
    NotAnInteger,
    /// A read-list member is outside `0..=127`.
    OutOfRange,
    /// The read-list ends without the `-1` terminator.
    NotTerminated,
    /// Something follows a complete command.
    ExtraneousText,
    /// A required operand is absent.
    MissingParameter,
    /// An operand does not name one of the six sets.
    UndefinedSetName,
    /// The first token is not a known command.
    UndefinedCommandName,
}

impl CommandError {
    /// Returns the diagnostic message for this error.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyInput => "Non-content input",
            Self::IllegalComma => "Illegal comma",
            Self::MissingComma => "Missing comma",
            Self::MultipleCommas => "Multiple consecutive commas",
            Self::TrailingText | Self::ExtraneousText => "Extraneous text after end of command",
            Self::NotAnInteger => "Invalid set member - not an integer",
            Self::OutOfRange => "Invalid set member - value out of range",
            Self::NotTerminated => "List of set members is not terminated correctly",
            Self::MissingParameter => "Missing parameter",
            Self::UndefinedSetName => "Undefined set name",
            Self::UndefinedCommandName => "Undefined command name",
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}
