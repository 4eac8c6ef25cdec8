//! Trap context handed to the monitor when it is entered from an exception.

use core::fmt;

/// An execution context the monitor can print and unwind from.
///
/// The `Debug` implementation is the trap-frame printer shown when the
/// monitor starts.
pub trait TrapContext: fmt::Debug {
    /// Frame pointer saved when the trap was taken.
    fn frame_pointer(&self) -> usize;

    /// Program counter of the trapped instruction.
    fn pc(&self) -> usize;
}

/// Saved registers when a trap (exception) occurs.
#[repr(C)]
#[derive(Default, Clone, Copy)]
pub struct TrapFrame {
    /// General-purpose registers (R0..R30).
    pub r: [u64; 31],
    /// User Stack Pointer (SP_EL0).
    pub usp: u64,
    /// Exception Link Register (ELR_EL1).
    pub elr: u64,
    /// Saved Process Status Register (SPSR_EL1).
    pub spsr: u64,
}

impl TrapContext for TrapFrame {
    fn frame_pointer(&self) -> usize {
        // x29
        self.r[29] as usize
    }

    fn pc(&self) -> usize {
        self.elr as usize
    }
}

impl fmt::Debug for TrapFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TrapFrame: {{")?;
        for (i, &reg) in self.r.iter().enumerate() {
            writeln!(f, "    r{i}: {reg:#x},")?;
        }
        writeln!(f, "    usp: {:#x},", self.usp)?;
        writeln!(f, "    elr: {:#x},", self.elr)?;
        writeln!(f, "    spsr: {:#x},", self.spsr)?;
        write!(f, "}}")?;
        Ok(())
    }
}
