//! Console module - line input, command output and logging.
//!
//! The monitor talks to the operator through a [`Console`], which the kernel
//! backs with its UART line editor. Log records go through a separate output
//! primitive registered with [`init_logger`].

pub mod logger;
pub mod tty;

use alloc::string::String;
use core::fmt;

pub use logger::init as init_logger;
pub use tty::monitor;

/// The operator's terminal.
pub trait Console: fmt::Write {
    /// Prints `prompt` and blocks until a full line is entered.
    ///
    /// Returns `None` when no line could be read (e.g. an aborted edit).
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}
