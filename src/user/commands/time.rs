//! Time command - cycle count of a nested command.

use alloc::string::String;
use alloc::vec::Vec;

use crate::MonResult;
use crate::error::MonError;
use crate::user::registry::run_line;
use crate::user::{Command, CommandContext, ExitSignal};

const USAGE: &str = "time <command> [args...]";

/// Time command instance.
pub static TIME: TimeCommand = TimeCommand;

/// Time command implementation.
pub struct TimeCommand;

impl Command for TimeCommand {
    fn name(&self) -> &'static str {
        "time"
    }

    fn description(&self) -> &'static str {
        "Report the cycles consumed by running a command"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn execute(&self, ctx: &mut CommandContext<'_, '_>) -> MonResult<ExitSignal> {
        let Some(name) = ctx.args.get(0) else {
            return Err(MonError::Usage(USAGE).into());
        };
        // The nested line gets its own buffer; the caller's line stays borrowed.
        let line: String = ctx.args.iter().collect::<Vec<_>>().join(" ");

        let start = ctx.machine.cpu.cycles();
        let signal = run_line(&line, &mut *ctx.machine, ctx.trap);
        let end = ctx.machine.cpu.cycles();

        writeln!(ctx.machine.console, "{name} cycles: {}", end.saturating_sub(start))?;
        Ok(signal)
    }
}
