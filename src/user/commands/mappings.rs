//! Page-table commands - list mappings and flip permission bits.

use memory_addr::{align_down, va};

use crate::MonResult;
use crate::error::{MonError, parse_number};
use crate::mm::paging::PERM_CODES;
use crate::mm::{LARGE_PAGE_SIZE, PAGE_SIZE, PteFlags};
use crate::user::{Command, CommandContext, ExitSignal};

const SHOWMAPPINGS_USAGE: &str = "showmappings <start> <end>";
const CHMAPPING_USAGE: &str = "chmapping <+|-> <W|U|PWT|PCD|A|D|G> <addr>";

/// Showmappings command instance.
pub static SHOWMAPPINGS: ShowMappingsCommand = ShowMappingsCommand;

/// Chmapping command instance.
pub static CHMAPPING: ChMappingCommand = ChMappingCommand;

/// Showmappings command implementation.
pub struct ShowMappingsCommand;

impl Command for ShowMappingsCommand {
    fn name(&self) -> &'static str {
        "showmappings"
    }

    fn description(&self) -> &'static str {
        "Display the physical page mappings and corresponding permission bits"
    }

    fn usage(&self) -> &'static str {
        SHOWMAPPINGS_USAGE
    }

    fn execute(&self, ctx: &mut CommandContext<'_, '_>) -> MonResult<ExitSignal> {
        let (Some(start), Some(end), 2) = (ctx.args.get(0), ctx.args.get(1), ctx.args.len()) else {
            return Err(MonError::Usage(SHOWMAPPINGS_USAGE).into());
        };
        let start = parse_number(start)?;
        let end = parse_number(end)?;

        let machine = &mut *ctx.machine;
        let mut vaddr = start;
        while vaddr <= end {
            let entry = machine.page_table.walk(va!(vaddr), false).map(|pte| *pte);
            let out = &mut *machine.console;

            // Rows are labelled with the page, or the block when the entry is huge.
            match entry {
                Some(pte) if pte.is_present() => {
                    let block = if pte.is_huge() { LARGE_PAGE_SIZE } else { PAGE_SIZE };
                    write!(
                        out,
                        "{:#010x} => {:#010x}",
                        align_down(vaddr, block),
                        pte.paddr().as_usize()
                    )?;
                    let flags = pte.flags();
                    for (flag, code) in PERM_CODES {
                        if flags.contains(*flag) {
                            write!(out, " {code}")?;
                        }
                    }
                    writeln!(out)?;
                }
                _ => writeln!(out, "{:#010x} => NOT EXIST", align_down(vaddr, PAGE_SIZE))?,
            }

            match vaddr.checked_add(LARGE_PAGE_SIZE) {
                Some(next) => vaddr = next,
                None => break,
            }
        }
        Ok(ExitSignal::Continue)
    }
}

/// Chmapping command implementation.
pub struct ChMappingCommand;

impl Command for ChMappingCommand {
    fn name(&self) -> &'static str {
        "chmapping"
    }

    fn description(&self) -> &'static str {
        "Change the permission bits of a mapping"
    }

    fn usage(&self) -> &'static str {
        CHMAPPING_USAGE
    }

    fn execute(&self, ctx: &mut CommandContext<'_, '_>) -> MonResult<ExitSignal> {
        let (Some(op), Some(code), Some(addr), 3) =
            (ctx.args.get(0), ctx.args.get(1), ctx.args.get(2), ctx.args.len())
        else {
            return Err(MonError::Usage(CHMAPPING_USAGE).into());
        };
        let set = match op {
            "+" => true,
            "-" => false,
            _ => return Err(MonError::Usage(CHMAPPING_USAGE).into()),
        };
        let flag = PteFlags::from_code(code).ok_or(MonError::Usage(CHMAPPING_USAGE))?;
        let vaddr = va!(parse_number(addr)?);

        let page_table = &mut *ctx.machine.page_table;
        let Some(pte) = page_table.walk(vaddr, false) else {
            return Ok(ExitSignal::Continue);
        };
        let before = *pte;
        pte.set_flag(flag, set);
        let after = *pte;
        page_table.flush_tlb(vaddr);

        debug!("chmapping {:#x}: {:?} -> {:?}", vaddr.as_usize(), before, after);
        Ok(ExitSignal::Continue)
    }
}
