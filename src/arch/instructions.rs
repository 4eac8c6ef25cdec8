//! Register reads the monitor needs from the running CPU.

#[cfg(any(target_arch = "aarch64", target_arch = "x86_64"))]
use core::arch::asm;

/// Reads the frame pointer register (x29) of the calling function.
#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn read_frame_pointer() -> usize {
    let fp: usize;
    unsafe { asm!("mov {}, x29", out(reg) fp, options(nomem, nostack, preserves_flags)) };
    fp
}

/// Reads the frame pointer register (rbp) of the calling function.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn read_frame_pointer() -> usize {
    let fp: usize;
    unsafe { asm!("mov {}, rbp", out(reg) fp, options(nomem, nostack, preserves_flags)) };
    fp
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
pub fn read_frame_pointer() -> usize {
    0
}

/// Reads the physical count register (CNTPCT_EL0).
#[cfg(target_arch = "aarch64")]
#[inline]
pub fn read_cycle_counter() -> u64 {
    use aarch64_cpu::registers::{CNTPCT_EL0, Readable};

    // Keep the read from being hoisted above earlier instructions.
    unsafe { asm!("isb", options(nomem, nostack, preserves_flags)) };
    CNTPCT_EL0.get()
}

/// Reads the time-stamp counter.
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn read_cycle_counter() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
pub fn read_cycle_counter() -> u64 {
    0
}
