//! Command trait, argument vector and execution context.

use alloc::vec::Vec;

use crate::MonResult;
use crate::config::kernel::MAX_ARGS;
use crate::error::MonError;
use crate::hal::TrapContext;
use crate::machine::Machine;

/// Control value a command hands back to the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Continue,
    /// Leave the monitor.
    Exit,
}

impl ExitSignal {
    pub const fn code(self) -> i32 {
        match self {
            Self::Continue => 0,
            Self::Exit => -1,
        }
    }

    /// Any negative code terminates the monitor.
    pub const fn from_code(code: i32) -> Self {
        if code < 0 { Self::Exit } else { Self::Continue }
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Split `line` into whitespace-separated tokens borrowed from it.
///
/// One slot of the [`MAX_ARGS`] vector stays reserved, so a line with more
/// than `MAX_ARGS - 1` tokens is rejected as a whole.
pub fn tokenize(line: &str) -> MonResult<Vec<&str>> {
    let mut argv = Vec::with_capacity(MAX_ARGS);
    for token in line.split(is_separator).filter(|t| !t.is_empty()) {
        if argv.len() == MAX_ARGS - 1 {
            return Err(MonError::TooManyArgs(MAX_ARGS).into());
        }
        argv.push(token);
    }
    Ok(argv)
}

/// Parsed command arguments.
pub struct Args<'a> {
    args: Vec<&'a str>,
}

impl<'a> Args<'a> {
    /// Create Args from a slice of string references.
    pub fn new(args: Vec<&'a str>) -> Self {
        Self { args }
    }

    /// Get argument at index (0 is first argument after command name).
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterate over arguments.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.args.iter().copied()
    }
}

/// Command execution context.
pub struct CommandContext<'a, 'm> {
    /// The command name that was invoked.
    pub command: &'a str,
    /// Parsed arguments (excluding command name).
    pub args: Args<'a>,
    pub machine: &'a mut Machine<'m>,
    /// Present when the monitor was entered from a trap.
    pub trap: Option<&'a dyn TrapContext>,
}

/// Trait for implementing commands.
///
/// Commands are registered statically and looked up by exact name.
pub trait Command: Sync {
    /// Primary command name.
    fn name(&self) -> &'static str;

    /// Short description (shown in help list).
    fn description(&self) -> &'static str;

    /// Argument synopsis, shown by `help <command>` and on misuse.
    fn usage(&self) -> &'static str {
        self.name()
    }

    /// Execute the command with the given context.
    fn execute(&self, ctx: &mut CommandContext<'_, '_>) -> MonResult<ExitSignal>;
}
