//! Kernel configuration constants.

pub const PHYS_VIRT_OFFSET: usize = 0xffff_0000_0000_0000;

/// Argument vector slots, including the reserved sentinel slot.
pub const MAX_ARGS: usize = 16;
pub const MAX_BACKTRACE_DEPTH: usize = 64;
pub const FRAME_ARG_WORDS: usize = 5;

pub const PROMPT: &str = "K> ";
pub const DUMP_BYTES_PER_LINE: usize = 8;
