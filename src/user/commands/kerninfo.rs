//! Kerninfo command - kernel image section addresses.

use memory_addr::va;

use crate::MonResult;
use crate::mm::virt_to_phys;
use crate::user::{Command, CommandContext, ExitSignal};

/// Kerninfo command instance.
pub static KERNINFO: KerninfoCommand = KerninfoCommand;

/// Kerninfo command implementation.
pub struct KerninfoCommand;

impl Command for KerninfoCommand {
    fn name(&self) -> &'static str {
        "kerninfo"
    }

    fn description(&self) -> &'static str {
        "Display information about the kernel"
    }

    fn execute(&self, ctx: &mut CommandContext<'_, '_>) -> MonResult<ExitSignal> {
        let layout = ctx.machine.layout;
        let out = &mut *ctx.machine.console;

        writeln!(out, "Special kernel symbols:")?;
        for (label, addr) in [
            ("entry", layout.entry),
            ("etext", layout.etext),
            ("edata", layout.edata),
            ("end", layout.end),
        ] {
            let paddr = virt_to_phys(va!(addr));
            writeln!(out, "  {label:<6} {addr:016x} (virt)  {:016x} (phys)", paddr.as_usize())?;
        }
        writeln!(out, "Kernel executable memory footprint: {}KB", layout.footprint_kib())?;
        Ok(ExitSignal::Continue)
    }
}
