//! Command keywords and set names.

use core::{fmt, str::FromStr};

use enum_map::Enum;

use crate::{CommandError, SetOp};

/// What a command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `stop`: end the session.
    Stop,
    /// `read_set`: replace a set with a list of members.
    Read,
    /// `print_set`: show a set.
    Print,
    /// `union_set`, `intersect_set`, `sub_set`, `symdiff_set`.
    Apply(SetOp),
}

impl Operation {
    /// Every operation, in keyword order.
    pub const ALL: [Self; 7] = [
        Self::Stop,
        Self::Read,
        Self::Print,
        Self::Apply(SetOp::Union),
        Self::Apply(SetOp::Intersect),
        Self::Apply(SetOp::Sub),
        Self::Apply(SetOp::SymDiff),
    ];

    /// The keyword that selects this operation.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Read => "read_set",
            Self::Print => "print_set",
            Self::Apply(SetOp::Union) => "union_set",
            Self::Apply(SetOp::Intersect) => "intersect_set",
            Self::Apply(SetOp::Sub) => "sub_set",
            Self::Apply(SetOp::SymDiff) => "symdiff_set",
        }
    }

    /// Looks up a keyword. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// [`CommandError::UndefinedCommandName`] if `token` is not a keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use setcalc::{CommandError, Operation, SetOp};
    ///
    /// assert_eq!(Operation::resolve("sub_set"), Ok(Operation::Apply(SetOp::Sub)));
    /// assert_eq!(Operation::resolve("STOP"), Err(CommandError::UndefinedCommandName));
    /// ```
    pub fn resolve(token: &str) -> Result<Self, CommandError> {
        Self::ALL
            .into_iter()
            .find(|op| op.keyword() == token)
            .ok_or(CommandError::UndefinedCommandName)
    }
}

impl FromStr for Operation {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One of the six set slots a session owns.
///
/// The name-to-slot binding never changes; [`EnumMap`](enum_map::EnumMap)
/// keyed by `SetName` gives each name its own storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
pub enum SetName {
    /// `SETA`
    SetA,
    /// `SETB`
    SetB,
    /// `SETC`
    SetC,
    /// `SETD`
    SetD,
    /// `SETE`
    SetE,
    /// `SETF`
    SetF,
}

impl SetName {
    /// Every set name, in slot order.
    pub const ALL: [Self; 6] = [
        Self::SetA,
        Self::SetB,
        Self::SetC,
        Self::SetD,
        Self::SetE,
        Self::SetF,
    ];

    /// The spelling used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SetA => "SETA",
            Self::SetB => "SETB",
            Self::SetC => "SETC",
            Self::SetD => "SETD",
            Self::SetE => "SETE",
            Self::SetF => "SETF",
        }
    }

    /// Looks up a set name. Matching is exact and case-sensitive.
    ///
    /// ```
    /// use setcalc::SetName;
    ///
    /// assert_eq!(SetName::resolve("SETD"), Some(SetName::SetD));
    /// assert_eq!(SetName::resolve("setd"), None);
    /// assert_eq!(SetName::resolve("SETX"), None);
    /// ```
    #[must_use]
    pub fn resolve(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == token)
    }
}

impl FromStr for SetName {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or(CommandError::UndefinedSetName)
    }
}

impl fmt::Display for SetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
