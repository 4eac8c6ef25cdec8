//! Help command - displays available commands and their usage.

use crate::MonResult;
use crate::error::MonError;
use crate::user::registry::{all_commands, find_command};
use crate::user::{Command, CommandContext, ExitSignal};

/// Help command instance.
pub static HELP: HelpCommand = HelpCommand;

/// Help command implementation.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Display this list of commands"
    }

    fn usage(&self) -> &'static str {
        "help [command]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_, '_>) -> MonResult<ExitSignal> {
        let out = &mut *ctx.machine.console;
        match ctx.args.get(0) {
            Some(name) => {
                let cmd = find_command(name).ok_or_else(|| MonError::UnknownCommand(name.into()))?;
                writeln!(out, "{} - {}", cmd.name(), cmd.description())?;
                writeln!(out, "Usage: {}", cmd.usage())?;
            }
            None => {
                for cmd in all_commands() {
                    writeln!(out, "{} - {}", cmd.name(), cmd.description())?;
                }
            }
        }
        Ok(ExitSignal::Continue)
    }
}
