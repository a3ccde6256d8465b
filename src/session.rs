//! The interactive read-eval loop.

use std::io::{self, BufRead, Write};

use enum_map::EnumMap;
use log::{debug, trace};

use crate::{Command, SetName, SmallSet, parse_command};

/// Printed before every line is read.
pub const PROMPT: &str = "Please enter a command:";
/// Printed before echoing the line just read.
pub const ECHO_HEADER: &str = "Command received:";
/// Printed when input ends at the prompt.
pub const END_OF_INPUT: &str = "End of file reached";

/// Knobs for how chatty a [`Session`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Print [`PROMPT`] before reading each line.
    pub prompt: bool,
    /// Echo each line after reading it.
    pub echo: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: true,
            echo: true,
        }
    }
}

/// Whether the loop should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read another line.
    Continue,
    /// `stop` was given or input ended.
    Stop,
}

/// A session owning the six sets, reading commands from `R` and writing
/// results and diagnostics to `W`.
///
/// # Examples
///
/// ```
/// use setcalc::{Session, SetName, set};
///
/// let input = "read_set SETA, 1, 2, -1\nread_set SETB, 2, 3, -1\nunion_set SETA, SETB, SETC\nstop\n";
/// let mut session = Session::new(input.as_bytes(), Vec::new());
/// session.run()?;
///
/// assert_eq!(*session.set(SetName::SetC), set![1, 2, 3]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Session<R, W> {
    sets: EnumMap<SetName, SmallSet>,
    input: R,
    output: W,
    options: SessionOptions,
    buf: Vec<u8>,
    line: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with all sets empty and default options.
    pub fn new(input: R, output: W) -> Self {
        Self::with_options(input, output, SessionOptions::default())
    }

    /// Creates a session with all sets empty.
    pub fn with_options(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            sets: EnumMap::default(),
            input,
            output,
            options,
            buf: Vec::new(),
            line: String::new(),
        }
    }

    /// Returns every set, keyed by name.
    pub fn sets(&self) -> &EnumMap<SetName, SmallSet> {
        &self.sets
    }

    /// Returns one set.
    pub fn set(&self, name: SetName) -> &SmallSet {
        &self.sets[name]
    }

    /// Returns the output written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the session, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Processes lines until `stop` or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading or writing. Rejected commands are
    /// reported on the output and are not errors.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == Flow::Continue {}
        self.output.flush()
    }

    /// Prompts for, reads and executes one line.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading or writing.
    pub fn step(&mut self) -> io::Result<Flow> {
        if self.options.prompt {
            writeln!(self.output, "{PROMPT}")?;
            self.output.flush()?;
        }

        if !self.read_line()? {
            writeln!(self.output, "{END_OF_INPUT}")?;
            debug!("input exhausted");
            return Ok(Flow::Stop);
        }
        if self.options.echo {
            writeln!(self.output, "{ECHO_HEADER}\n{}", self.line)?;
        }

        match parse_command(&self.line) {
            Ok(command) => {
                debug!("accepted {command:?}");
                self.execute(command)
            }
            Err(err) => {
                debug!("rejected {:?}: {err:?}", self.line);
                writeln!(self.output, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Runs a validated command against the session's sets.
    ///
    /// Binary operations read both operands before writing the destination,
    /// so the destination may be an operand.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing output.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Stop => return Ok(Flow::Stop),
            Command::Read { target, members } => {
                self.sets[target].load_from(members);
                trace!("{target} = {:?}", self.sets[target]);
            }
            Command::Print { target } => self.print_set(target)?,
            Command::Apply { op, lhs, rhs, dest } => {
                let result = op.apply(&self.sets[lhs], &self.sets[rhs]);
                self.sets[dest] = result;
                trace!("{dest} = {lhs} {op} {rhs} = {result:?}");
            }
        }
        Ok(Flow::Continue)
    }

    fn print_set(&mut self, name: SetName) -> io::Result<()> {
        let s = &self.sets[name];
        if s.is_empty() {
            writeln!(self.output, "The set is empty")
        } else {
            writeln!(self.output, "The set is:\n{s}")
        }
    }

    /// Reads the next line into `self.line` without its line ending.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line is
    /// rejected by the parser instead of ending the session.
    ///
    /// Returns `false` at end of input.
    fn read_line(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        self.line.clear();
        self.line.push_str(&String::from_utf8_lossy(&self.buf));
        Ok(true)
    }
}
