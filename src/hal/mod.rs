//! HAL (Hardware Abstraction Layer) module.
//!
//! CPU sampling and the trap context the monitor may be entered with.

pub mod context;
pub mod cpu;

pub use context::{TrapContext, TrapFrame};
pub use cpu::{Cpu, NativeCpu};
