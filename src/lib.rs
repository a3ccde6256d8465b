//! An interactive calculator over six fixed sets of small integers.
//!
//! The crate has two halves:
//!
//! - [`SmallSet`], a set of integers from the universe `0..128` stored as a
//!   16-byte bit vector, with union, intersection, difference and symmetric
//!   difference.
//! - A command pipeline that turns lines such as `union_set SETA, SETB,
//!   SETC` into validated [`Command`]s: the [`Lexer`] splits the line, the
//!   [`Literal`] parser classifies read-list members, [`Operation`] and
//!   [`SetName`] resolve keywords and set names, and [`parse_command`]
//!   checks operands before anything is executed.
//!
//! With the `std` feature, [`Session`] drives the prompt/read/execute loop
//! over any [`BufRead`](std::io::BufRead) and [`Write`](std::io::Write)
//! pair.
//!
//! # Examples
//!
//! ```
//! use setcalc::{Command, SetName, SmallSet, parse_command};
//!
//! let Ok(Command::Read { members, .. }) = parse_command("read_set SETA, 3, 5, 127, -1") else {
//!     panic!("expected a read command");
//! };
//!
//! let mut a = SmallSet::new();
//! a.load_from(members);
//! assert_eq!(a.to_string(), "3, 5, 127");
//! ```
//!
//! # Command language
//!
//! | Command | Effect |
//! |---|---|
//! | `read_set SETA, 1, 2, -1` | replace `SETA` with the listed members |
//! | `print_set SETA` | print the members of `SETA` |
//! | `union_set SETA, SETB, SETC` | `SETC = SETA ∪ SETB` |
//! | `intersect_set SETA, SETB, SETC` | `SETC = SETA ∩ SETB` |
//! | `sub_set SETA, SETB, SETC` | `SETC = SETA \ SETB` |
//! | `symdiff_set SETA, SETB, SETC` | `SETC = SETA △ SETB` |
//! | `stop` | end the session |
//!
//! # Features
//!
//! - `std` (default): [`Session`] and `std::error::Error` impls. Without it
//!   the crate is `no_std` with `alloc`.
//! - `serde`: serialization of [`SmallSet`] as a sorted list of members.
//! - `cli` (default): the `setcalc` binary.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod command;
mod error;
mod iter;
mod lexer;
mod literal;
mod macros;
mod set;
mod set_ops;
mod traits;
mod validate;

#[cfg(feature = "std")]
mod session;

#[cfg(feature = "serde")]
mod ser;

#[cfg(feature = "serde")]
pub mod serde;

pub use command::{Operation, SetName};
pub use error::CommandError;
pub use iter::{BitIter, IntoIter, Iter};
pub use lexer::Lexer;
pub use literal::{Literal, MAX_VALUE, MIN_VALUE, TERMINATOR, count_digits};
pub use set::{DATA_SIZE, ROW_SIZE, SmallSet, UNIVERSE_SIZE};
pub use set_ops::SetOp;
pub use validate::{Command, parse_command, read_members};

#[cfg(feature = "std")]
pub use session::{ECHO_HEADER, END_OF_INPUT, Flow, PROMPT, Session, SessionOptions};
