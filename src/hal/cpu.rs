//! CPU-related operations and utilities.

use crate::arch;

/// CPU state the monitor samples.
pub trait Cpu {
    /// Current value of a monotonically increasing cycle counter.
    fn cycles(&self) -> u64;

    /// Frame pointer of the function that called this method.
    fn frame_pointer(&self) -> usize;
}

/// The CPU the monitor is running on.
pub struct NativeCpu;

impl Cpu for NativeCpu {
    fn cycles(&self) -> u64 {
        arch::read_cycle_counter()
    }

    #[inline(never)]
    fn frame_pointer(&self) -> usize {
        // Our own frame record dies on return, so hand out the caller's.
        let fp = arch::read_frame_pointer();
        if fp == 0 {
            return 0;
        }
        // Safety: a non-null frame pointer addresses this function's live
        // frame record, whose first word is the caller's frame pointer.
        unsafe { (fp as *const usize).read_volatile() }
    }
}
