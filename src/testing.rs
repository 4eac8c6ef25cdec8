//! In-memory collaborators for host tests.

use alloc::collections::{BTreeMap, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use memory_addr::{VirtAddr, align_down};

use crate::MonResult;
use crate::console::Console;
use crate::hal::{Cpu, TrapContext};
use crate::machine::{KernelLayout, Machine};
use crate::mm::{LARGE_PAGE_SIZE, Memory, PAGE_SIZE, PageTable, Pte};
use crate::symbols::{Symbol, SymbolTable};
use crate::user::{ExitSignal, run_line};

/// Scripted input, captured output.
#[derive(Default)]
pub struct MockConsole {
    input: VecDeque<Option<String>>,
    output: String,
    prompts: Vec<String>,
}

impl MockConsole {
    pub fn push_lines(&mut self, lines: &[&str]) {
        self.input.extend(lines.iter().map(|line| Some(String::from(*line))));
    }

    pub fn push_none(&mut self) {
        self.input.push_back(None);
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn pending(&self) -> usize {
        self.input.len()
    }
}

impl fmt::Write for MockConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.push_str(s);
        Ok(())
    }
}

impl Console for MockConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(String::from(prompt));
        self.input.pop_front().expect("console input exhausted")
    }
}

/// Leaf entries keyed by the address they map; huge entries sit at their
/// block base.
#[derive(Default)]
pub struct MockPageTable {
    entries: BTreeMap<usize, Pte>,
    walked: Vec<VirtAddr>,
    flushed: Vec<VirtAddr>,
}

impl MockPageTable {
    pub fn map(&mut self, vaddr: usize, pte: Pte) {
        self.entries.insert(vaddr, pte);
    }

    pub fn entry(&self, vaddr: usize) -> Option<Pte> {
        self.entries.get(&vaddr).copied()
    }

    pub fn walked(&self) -> Vec<VirtAddr> {
        self.walked.clone()
    }

    pub fn flushed(&self) -> Vec<VirtAddr> {
        self.flushed.clone()
    }
}

impl PageTable for MockPageTable {
    fn walk(&mut self, vaddr: VirtAddr, create: bool) -> Option<&mut Pte> {
        self.walked.push(vaddr);
        let block = align_down(vaddr.as_usize(), LARGE_PAGE_SIZE);
        if self.entries.get(&block).is_some_and(|pte| pte.is_huge()) {
            return self.entries.get_mut(&block);
        }
        let page = align_down(vaddr.as_usize(), PAGE_SIZE);
        if create {
            return Some(self.entries.entry(page).or_insert(Pte::empty()));
        }
        self.entries.get_mut(&page)
    }

    fn flush_tlb(&mut self, vaddr: VirtAddr) {
        self.flushed.push(vaddr);
    }
}

/// Sparse memory; unwritten locations read as zero.
#[derive(Default)]
pub struct MockMemory {
    bytes: BTreeMap<usize, u8>,
    words: BTreeMap<usize, usize>,
    reads: Cell<usize>,
}

impl MockMemory {
    pub fn write_bytes(&mut self, addr: usize, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            self.bytes.insert(addr + i, *byte);
        }
    }

    pub fn write_word(&mut self, addr: usize, value: usize) {
        self.words.insert(addr, value);
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Memory for MockMemory {
    fn read_u8(&self, vaddr: VirtAddr) -> u8 {
        self.reads.set(self.reads.get() + 1);
        self.bytes.get(&vaddr.as_usize()).copied().unwrap_or(0)
    }

    fn read_word(&self, vaddr: VirtAddr) -> usize {
        self.reads.set(self.reads.get() + 1);
        self.words.get(&vaddr.as_usize()).copied().unwrap_or(0)
    }
}

/// Counter that moves by a fixed step on every read.
pub struct MockCpu {
    counter: Cell<u64>,
    step: i64,
    fp: usize,
}

impl Default for MockCpu {
    fn default() -> Self {
        Self { counter: Cell::new(0), step: 1, fp: 0 }
    }
}

impl MockCpu {
    pub fn set_counter(&mut self, value: u64) {
        self.counter.set(value);
    }

    pub fn set_step(&mut self, step: i64) {
        self.step = step;
    }

    pub fn set_frame_pointer(&mut self, fp: usize) {
        self.fp = fp;
    }
}

impl Cpu for MockCpu {
    fn cycles(&self) -> u64 {
        let now = self.counter.get();
        self.counter.set(now.wrapping_add_signed(self.step));
        now
    }

    fn frame_pointer(&self) -> usize {
        self.fp
    }
}

pub const SYMBOLS: &[Symbol] = &[
    Symbol { start: 0x1000, size: 0x40, name: "kernel_init", file: "src/main.rs", line: 48 },
    Symbol { start: 0x1040, size: 0x80, name: "rust_main", file: "src/main.rs", line: 61 },
];

pub const LAYOUT: KernelLayout = KernelLayout {
    entry: 0xffff_0000_4008_0000,
    etext: 0xffff_0000_400a_0000,
    edata: 0xffff_0000_400c_0000,
    end: 0xffff_0000_400c_2001,
};

/// A full set of collaborators plus helpers to drive the monitor.
pub struct Rig {
    pub console: MockConsole,
    pub page_table: MockPageTable,
    pub memory: MockMemory,
    pub cpu: MockCpu,
    pub symbols: SymbolTable<'static>,
    pub layout: KernelLayout,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            console: MockConsole::default(),
            page_table: MockPageTable::default(),
            memory: MockMemory::default(),
            cpu: MockCpu::default(),
            symbols: SymbolTable::new(SYMBOLS),
            layout: LAYOUT,
        }
    }

    pub fn machine(&mut self) -> Machine<'_> {
        Machine {
            console: &mut self.console,
            page_table: &mut self.page_table,
            memory: &self.memory,
            cpu: &self.cpu,
            symbols: &self.symbols,
            layout: self.layout,
        }
    }

    pub fn run(&mut self, line: &str) -> ExitSignal {
        run_line(line, &mut self.machine(), None)
    }

    pub fn run_trapped(&mut self, line: &str, trap: &dyn TrapContext) -> ExitSignal {
        run_line(line, &mut self.machine(), Some(trap))
    }

    pub fn enter(&mut self, trap: Option<&dyn TrapContext>) -> MonResult<()> {
        crate::console::monitor(&mut self.machine(), trap)
    }

    pub fn output(&self) -> &str {
        &self.console.output
    }

    pub fn take_output(&mut self) -> String {
        core::mem::take(&mut self.console.output)
    }
}
