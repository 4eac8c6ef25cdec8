//! Raw memory access used by `memdump` and the frame walker.

use memory_addr::VirtAddr;

/// Reads of arbitrary kernel virtual memory.
pub trait Memory {
    fn read_u8(&self, vaddr: VirtAddr) -> u8;

    /// Reads one machine word; `vaddr` is word aligned on well-formed frames.
    fn read_word(&self, vaddr: VirtAddr) -> usize;
}

/// Direct loads from the current address space.
pub struct RawMemory {
    _private: (),
}

impl RawMemory {
    /// # Safety
    ///
    /// Every address later passed to [`Memory`] must be mapped and readable in
    /// the active page table, and the caller must have exclusive access to the
    /// machine while the monitor runs.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl Memory for RawMemory {
    fn read_u8(&self, vaddr: VirtAddr) -> u8 {
        // Safety: guaranteed by `RawMemory::new`.
        unsafe { (vaddr.as_usize() as *const u8).read_volatile() }
    }

    fn read_word(&self, vaddr: VirtAddr) -> usize {
        // Safety: guaranteed by `RawMemory::new`.
        unsafe { (vaddr.as_usize() as *const usize).read_volatile() }
    }
}
