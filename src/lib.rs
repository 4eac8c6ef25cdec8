//! kmonitor - an interactive in-kernel monitor.
//!
//! The monitor reads command lines from the operator's console and runs
//! commands that inspect or change live machine state: stack backtraces,
//! raw memory dumps and page-table mappings. Everything it touches belongs
//! to the kernel and is reached through the traits bundled in [`Machine`]:
//!
//! - [`console::Console`] - line input and command output
//! - [`mm::PageTable`] - the page-table walk primitive
//! - [`mm::Memory`] - raw memory reads
//! - [`hal::Cpu`] - cycle counter and frame pointer
//! - [`symbols::SymbolResolver`] - address to function/file/line
//!
//! A kernel enters the monitor with [`console::monitor`], optionally
//! passing the trap frame it stopped on.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

extern crate alloc;

pub mod arch;
pub mod config;
pub mod console;
pub mod error;
pub mod hal;
pub mod machine;
pub mod mm;
pub mod symbols;
pub mod user;

#[cfg(test)]
mod testing;

pub use error::{MonError, MonResult};
pub use machine::{KernelLayout, Machine};
pub use user::ExitSignal;
