//! Page-table entry view and the page-table walk interface.
//!
//! The monitor never builds or tears down page tables. It asks the kernel's
//! walker for the leaf entry covering an address and reads or flips single
//! permission bits in place.

use core::fmt;

use memory_addr::{PhysAddr, VirtAddr, pa};

/// Size of a regular page.
pub const PAGE_SIZE: usize = memory_addr::PAGE_SIZE_4K;
/// Size of the block mapped by one large-page entry.
pub const LARGE_PAGE_SIZE: usize = 0x20_0000;

bitflags::bitflags! {
    /// Permission and status bits of a page-table entry.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct PteFlags: u64 {
        const PRESENT       = 1 << 0;
        const WRITABLE      = 1 << 1;
        const USER          = 1 << 2;
        const WRITE_THROUGH = 1 << 3;
        const NO_CACHE      = 1 << 4;
        const ACCESSED      = 1 << 5;
        const DIRTY         = 1 << 6;
        /// Entry maps a [`LARGE_PAGE_SIZE`] block instead of a page.
        const HUGE_PAGE     = 1 << 7;
        const GLOBAL        = 1 << 8;
    }
}

/// Display codes of the permission bits, in listing order.
pub const PERM_CODES: &[(PteFlags, &str)] = &[
    (PteFlags::WRITABLE, "W"),
    (PteFlags::USER, "U"),
    (PteFlags::WRITE_THROUGH, "PWT"),
    (PteFlags::NO_CACHE, "PCD"),
    (PteFlags::ACCESSED, "A"),
    (PteFlags::DIRTY, "D"),
    (PteFlags::HUGE_PAGE, "PS"),
    (PteFlags::GLOBAL, "G"),
];

impl PteFlags {
    /// Look up a bit by its exact display code.
    ///
    /// `PS` is excluded: flipping it would change how the walker interprets
    /// the entry rather than what the mapping allows.
    pub fn from_code(code: &str) -> Option<Self> {
        PERM_CODES
            .iter()
            .filter(|(flag, _)| *flag != PteFlags::HUGE_PAGE)
            .find(|(_, name)| *name == code)
            .map(|(flag, _)| *flag)
    }
}

impl fmt::Debug for PteFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// A raw page-table entry word.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pte(u64);

impl Pte {
    const PHYS_ADDR_MASK: u64 = 0x000f_ffff_ffff_f000;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn new_page(paddr: PhysAddr, flags: PteFlags) -> Self {
        Self((paddr.as_usize() as u64 & Self::PHYS_ADDR_MASK) | flags.bits())
    }

    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Returns the physical frame address stored in this entry.
    pub fn paddr(&self) -> PhysAddr {
        pa!((self.0 & Self::PHYS_ADDR_MASK) as usize)
    }

    pub fn flags(&self) -> PteFlags {
        PteFlags::from_bits_truncate(self.0)
    }

    pub fn is_present(&self) -> bool {
        self.flags().contains(PteFlags::PRESENT)
    }

    pub fn is_huge(&self) -> bool {
        self.flags().contains(PteFlags::HUGE_PAGE)
    }

    /// Set or clear `flag`, leaving every other bit untouched.
    pub fn set_flag(&mut self, flag: PteFlags, value: bool) {
        if value {
            self.0 |= flag.bits();
        } else {
            self.0 &= !flag.bits();
        }
    }
}

impl fmt::Debug for Pte {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Pte")
            .field("paddr", &self.paddr())
            .field("flags", &self.flags())
            .finish()
    }
}

/// The kernel's page-table walk primitive.
pub trait PageTable {
    /// Returns the leaf entry covering `vaddr`.
    ///
    /// With `create` unset the walker must not allocate intermediate tables
    /// and returns `None` when any level is missing. A huge entry is returned
    /// for every address inside its block.
    fn walk(&mut self, vaddr: VirtAddr, create: bool) -> Option<&mut Pte>;

    /// Drop any cached translation of `vaddr` after its entry changed.
    fn flush_tlb(&mut self, _vaddr: VirtAddr) {}
}
