//! Command registry - static command registration, lookup and dispatch.

use alloc::vec::Vec;

use crate::error::MonError;
use crate::hal::TrapContext;
use crate::machine::Machine;
use crate::user::command::{Args, Command, CommandContext, ExitSignal, tokenize};
use crate::user::commands;

/// Static array of all registered commands, in `help` order.
static COMMANDS: &[&dyn Command] = &[
    &commands::HELP,
    &commands::KERNINFO,
    &commands::BACKTRACE,
    &commands::TIME,
    &commands::MEMDUMP,
    &commands::SHOWMAPPINGS,
    &commands::CHMAPPING,
    &commands::EXIT,
];

/// Find a command by exact name.
pub fn find_command(name: &str) -> Option<&'static dyn Command> {
    COMMANDS.iter().copied().find(|cmd| cmd.name() == name)
}

/// Get all registered commands.
pub fn all_commands() -> &'static [&'static dyn Command] {
    COMMANDS
}

/// Run the command named by `argv[0]` with the remaining tokens.
///
/// Failures are reported on the console and never stop the monitor; only
/// the command's own [`ExitSignal`] can.
pub fn dispatch(
    argv: Vec<&str>,
    machine: &mut Machine<'_>,
    trap: Option<&dyn TrapContext>,
) -> ExitSignal {
    let mut tokens = argv.into_iter();
    let Some(name) = tokens.next() else {
        return ExitSignal::Continue;
    };

    let Some(cmd) = find_command(name) else {
        trace!("rejected unknown command {name:?}");
        let _ = writeln!(machine.console, "{}", MonError::UnknownCommand(name.into()));
        return ExitSignal::Continue;
    };

    let mut ctx = CommandContext {
        command: name,
        args: Args::new(tokens.collect()),
        machine,
        trap,
    };
    match cmd.execute(&mut ctx) {
        Ok(signal) => signal,
        Err(err) => {
            let _ = writeln!(ctx.machine.console, "{err:#}");
            ExitSignal::Continue
        }
    }
}

/// Tokenize and dispatch one command line.
pub fn run_line(
    line: &str,
    machine: &mut Machine<'_>,
    trap: Option<&dyn TrapContext>,
) -> ExitSignal {
    match tokenize(line) {
        Ok(argv) => dispatch(argv, machine, trap),
        Err(err) => {
            trace!("rejected line: {err}");
            let _ = writeln!(machine.console, "{err}");
            ExitSignal::Continue
        }
    }
}
