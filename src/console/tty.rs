//! The monitor's read-eval loop.
//!
//! Each line read from the console is owned by one iteration: the tokenizer
//! borrows it, the command runs to completion, and the buffer is dropped
//! before the next prompt.

use crate::MonResult;
use crate::config::kernel::PROMPT;
use crate::hal::TrapContext;
use crate::machine::Machine;
use crate::user::{ExitSignal, run_line};

/// Run the monitor until a command returns [`ExitSignal::Exit`].
///
/// When entered from an exception, `trap` is dumped before the first prompt
/// and stays available to commands.
pub fn monitor(machine: &mut Machine<'_>, trap: Option<&dyn TrapContext>) -> MonResult<()> {
    info!("entering kernel monitor");
    writeln!(machine.console, "Welcome to the kernel monitor!")?;
    writeln!(machine.console, "Type 'help' for a list of commands.")?;

    if let Some(trap) = trap {
        writeln!(machine.console, "{trap:?}")?;
        let pc = trap.pc();
        let info = machine.symbols.resolve(pc);
        writeln!(
            machine.console,
            "Trapped at {pc:#x} ({}:{} {}+{})",
            info.file,
            info.line,
            info.function,
            info.offset_of(pc)
        )?;
    }

    loop {
        let Some(line) = machine.console.read_line(PROMPT) else {
            continue;
        };
        if run_line(&line, machine, trap) == ExitSignal::Exit {
            break;
        }
    }

    info!("leaving kernel monitor");
    Ok(())
}
