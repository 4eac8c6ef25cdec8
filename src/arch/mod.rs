//! Architecture-specific primitives.

pub mod instructions;

pub use self::instructions::{read_cycle_counter, read_frame_pointer};
