//! System commands - leaving the monitor.

use crate::MonResult;
use crate::user::{Command, CommandContext, ExitSignal};

/// Exit command instance.
pub static EXIT: ExitCommand = ExitCommand;

/// Exit command implementation.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Leave the monitor and resume the kernel"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_, '_>) -> MonResult<ExitSignal> {
        Ok(ExitSignal::Exit)
    }
}
