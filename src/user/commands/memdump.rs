//! Memdump command - raw byte inspection of a virtual or physical range.

use memory_addr::{pa, va};

use crate::MonResult;
use crate::config::kernel::DUMP_BYTES_PER_LINE;
use crate::error::{MonError, parse_number};
use crate::mm::phys_to_virt;
use crate::user::{Command, CommandContext, ExitSignal};

const USAGE: &str = "memdump <-v|-p> <start> <end>";

/// Memdump command instance.
pub static MEMDUMP: MemdumpCommand = MemdumpCommand;

/// Memdump command implementation.
pub struct MemdumpCommand;

impl Command for MemdumpCommand {
    fn name(&self) -> &'static str {
        "memdump"
    }

    fn description(&self) -> &'static str {
        "Dump the contents of a range of memory"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn execute(&self, ctx: &mut CommandContext<'_, '_>) -> MonResult<ExitSignal> {
        let (Some(mode), Some(start), Some(end), 3) =
            (ctx.args.get(0), ctx.args.get(1), ctx.args.get(2), ctx.args.len())
        else {
            return Err(MonError::Usage(USAGE).into());
        };
        let physical = match mode {
            "-v" => false,
            "-p" => true,
            _ => return Err(MonError::Usage(USAGE).into()),
        };
        let start = parse_number(start)?;
        let end = parse_number(end)?;
        anyhow::ensure!(start <= end, "memdump: start {start:#x} is above end {end:#x}");

        let memory = ctx.machine.memory;
        let out = &mut *ctx.machine.console;
        let mut addr = start;
        loop {
            if (addr - start) % DUMP_BYTES_PER_LINE == 0 {
                if addr != start {
                    writeln!(out)?;
                }
                write!(out, "{addr:#x}:")?;
            }
            let vaddr = if physical { phys_to_virt(pa!(addr)) } else { va!(addr) };
            write!(out, " {:02x}", memory.read_u8(vaddr))?;
            if addr == end {
                break;
            }
            addr += 1;
        }
        writeln!(out)?;
        Ok(ExitSignal::Continue)
    }
}
