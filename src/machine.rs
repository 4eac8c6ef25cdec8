//! The machine state a monitor session operates on.

use crate::console::Console;
use crate::hal::Cpu;
use crate::mm::{Memory, PageTable};
use crate::symbols::SymbolResolver;

/// Link-time addresses of the kernel image sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KernelLayout {
    pub entry: usize,
    pub etext: usize,
    pub edata: usize,
    pub end: usize,
}

impl KernelLayout {
    /// In-memory footprint of the image, rounded up to whole KiB.
    pub const fn footprint_kib(&self) -> usize {
        self.end.saturating_sub(self.entry).div_ceil(1024)
    }
}

/// Collaborators borrowed for one monitor session.
///
/// Nothing else runs while the monitor holds these, so none of them is
/// locked.
pub struct Machine<'a> {
    pub console: &'a mut dyn Console,
    pub page_table: &'a mut dyn PageTable,
    pub memory: &'a dyn Memory,
    pub cpu: &'a dyn Cpu,
    pub symbols: &'a dyn SymbolResolver,
    pub layout: KernelLayout,
}
