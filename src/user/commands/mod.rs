//! Command implementations.
//!
//! Each command is defined in its own module file.

pub mod backtrace;
pub mod help;
pub mod kerninfo;
pub mod mappings;
pub mod memdump;
pub mod system;
pub mod time;

// Re-export command instances for registry
pub use backtrace::BACKTRACE;
pub use help::HELP;
pub use kerninfo::KERNINFO;
pub use mappings::{CHMAPPING, SHOWMAPPINGS};
pub use memdump::MEMDUMP;
pub use system::EXIT;
pub use time::TIME;
