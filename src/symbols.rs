//! Mapping instruction addresses to source locations.

/// Debug information resolved for one instruction address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugInfo<'a> {
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
    /// First instruction of `function`.
    pub function_start: usize,
}

impl DebugInfo<'_> {
    /// Placeholder for an address no symbol covers.
    pub const fn unknown(addr: usize) -> DebugInfo<'static> {
        DebugInfo {
            file: "<unknown>",
            line: 0,
            function: "<unknown>",
            function_start: addr,
        }
    }

    /// Byte offset of `addr` into the resolved function.
    pub const fn offset_of(&self, addr: usize) -> usize {
        addr.wrapping_sub(self.function_start)
    }
}

/// The kernel's debug-info resolver.
pub trait SymbolResolver {
    fn resolve(&self, addr: usize) -> DebugInfo<'_>;
}

/// One function of the kernel image.
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    pub start: usize,
    pub size: usize,
    pub name: &'static str,
    pub file: &'static str,
    /// Line of the function's definition.
    pub line: u32,
}

impl Symbol {
    fn contains(&self, addr: usize) -> bool {
        addr >= self.start && addr - self.start < self.size
    }
}

/// A function table sorted by start address, as emitted at link time.
pub struct SymbolTable<'a> {
    symbols: &'a [Symbol],
}

impl<'a> SymbolTable<'a> {
    /// `symbols` must be sorted by `start` and non-overlapping.
    pub const fn new(symbols: &'a [Symbol]) -> Self {
        Self { symbols }
    }

    pub fn lookup(&self, addr: usize) -> Option<&'a Symbol> {
        let idx = self.symbols.partition_point(|sym| sym.start <= addr);
        let sym = self.symbols.get(idx.checked_sub(1)?)?;
        sym.contains(addr).then_some(sym)
    }
}

impl SymbolResolver for SymbolTable<'_> {
    fn resolve(&self, addr: usize) -> DebugInfo<'_> {
        match self.lookup(addr) {
            Some(sym) => DebugInfo {
                file: sym.file,
                line: sym.line,
                function: sym.name,
                function_start: sym.start,
            },
            None => DebugInfo::unknown(addr),
        }
    }
}
