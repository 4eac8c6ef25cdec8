//! Memory management module.
//!
//! The monitor's view of memory:
//! - Direct-map address translation
//! - Page-table entries and the walk primitive the kernel supplies
//! - Raw memory reads

pub mod addr;
pub mod memory;
pub mod paging;

pub use addr::{phys_to_virt, virt_to_phys};
pub use memory::{Memory, RawMemory};
pub use paging::{LARGE_PAGE_SIZE, PAGE_SIZE, PageTable, Pte, PteFlags};
