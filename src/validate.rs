//! Turning a raw command line into a validated [`Command`].
//!
//! Validation is all-or-nothing: a line either yields a complete
//! [`Command`] or a [`CommandError`], and only a `Command` can be executed,
//! so a rejected line never mutates a set.

use alloc::vec::Vec;

use crate::{CommandError, Lexer, Literal, Operation, SetName, SetOp};

/// A command line that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Stop,
    /// Replace `target` with `members`, in the order they were listed.
    Read {
        /// Set to overwrite.
        target: SetName,
        /// Members as listed, duplicates included.
        members: Vec<u8>,
    },
    /// Show `target`.
    Print {
        /// Set to show.
        target: SetName,
    },
    /// Store `lhs <op> rhs` into `dest`.
    Apply {
        /// Operation to compute.
        op: SetOp,
        /// First operand.
        lhs: SetName,
        /// Second operand.
        rhs: SetName,
        /// Set receiving the result; may be either operand.
        dest: SetName,
    },
}

/// Tokens of a command line: the keyword and up to four operands.
///
/// Absent operands are empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slots<'a> {
    keyword: &'a str,
    operands: [&'a str; 4],
}

/// Lexes, resolves and validates one command line.
///
/// Errors are reported in pipeline order: separator errors from the first
/// five tokens, then an unknown keyword, then the operand checks of the
/// resolved operation.
///
/// # Errors
///
/// Returns the first [`CommandError`] found.
///
/// # Examples
///
/// ```
/// use setcalc::{Command, CommandError, SetName, SetOp, parse_command};
///
/// assert_eq!(
///     parse_command("read_set SETB, 3, 5, 3, -1"),
///     Ok(Command::Read { target: SetName::SetB, members: vec![3, 5, 3] })
/// );
/// assert_eq!(
///     parse_command("  sub_set SETA,SETB , SETC"),
///     Ok(Command::Apply {
///         op: SetOp::Sub,
///         lhs: SetName::SetA,
///         rhs: SetName::SetB,
///         dest: SetName::SetC,
///     })
/// );
/// assert_eq!(parse_command("print_set SETX"), Err(CommandError::UndefinedSetName));
/// assert_eq!(parse_command("read_set SETA 3, 5, -1"), Err(CommandError::MissingComma));
/// ```
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut lexer = Lexer::new(line);
    let keyword = lexer.first_token()?;
    let first = lexer.next_token()?;
    // The read-list starts right after the first operand.
    let read_list = lexer.clone();
    let second = lexer.next_token()?;
    let third = lexer.next_token()?;
    let fourth = lexer.next_token()?;

    let slots = Slots {
        keyword,
        operands: [first, second, third, fourth],
    };
    validate(&slots, read_list)
}

fn validate(slots: &Slots<'_>, read_list: Lexer<'_>) -> Result<Command, CommandError> {
    let [first, second, third, fourth] = slots.operands;

    match Operation::resolve(slots.keyword)? {
        Operation::Stop => Ok(Command::Stop),
        Operation::Read => {
            require(&[first, second])?;
            let target = set_name(first)?;
            let members = read_members(read_list)?;
            Ok(Command::Read { target, members })
        }
        Operation::Print => {
            require(&[first])?;
            let target = set_name(first)?;
            reject_extra(second)?;
            Ok(Command::Print { target })
        }
        Operation::Apply(op) => {
            require(&[first, second, third])?;
            let (lhs, rhs, dest) = (set_name(first)?, set_name(second)?, set_name(third)?);
            reject_extra(fourth)?;
            Ok(Command::Apply { op, lhs, rhs, dest })
        }
    }
}

fn require(operands: &[&str]) -> Result<(), CommandError> {
    if operands.iter().any(|s| s.is_empty()) {
        return Err(CommandError::MissingParameter);
    }
    Ok(())
}

fn set_name(token: &str) -> Result<SetName, CommandError> {
    SetName::resolve(token).ok_or(CommandError::UndefinedSetName)
}

fn reject_extra(token: &str) -> Result<(), CommandError> {
    if token.is_empty() {
        Ok(())
    } else {
        Err(CommandError::ExtraneousText)
    }
}

/// Validates and collects a `-1`-terminated list of members in one pass.
///
/// # Errors
///
/// * separator errors from the lexer,
/// * the member's own parse error,
/// * [`CommandError::NotTerminated`] if the line ends before `-1`,
/// * [`CommandError::ExtraneousText`] if anything follows `-1`.
pub fn read_members(mut lexer: Lexer<'_>) -> Result<Vec<u8>, CommandError> {
    let mut members = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.is_empty() {
            return Err(CommandError::NotTerminated);
        }
        match Literal::parse_canonical(token) {
            Literal::Value(n) => members.push(n),
            Literal::Terminator => break,
            Literal::Invalid(err) => return Err(err),
        }
    }

    if lexer.is_at_end() {
        Ok(members)
    } else {
        Err(CommandError::ExtraneousText)
    }
}
