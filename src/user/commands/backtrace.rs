//! Backtrace command - walks the frame-pointer chain.
//!
//! Every frame record starts with the caller's frame pointer, followed by
//! the return address and the argument words the caller spilled:
//!
//! ```text
//! fp + 0w   previous frame pointer
//! fp + 1w   return address
//! fp + 2w   saved argument words (FRAME_ARG_WORDS of them)
//! ```

use memory_addr::va;

use crate::MonResult;
use crate::config::kernel::{FRAME_ARG_WORDS, MAX_BACKTRACE_DEPTH};
use crate::error::MonError;
use crate::mm::Memory;
use crate::user::{Command, CommandContext, ExitSignal};

const USAGE: &str = "backtrace [trap]";
const WORD: usize = size_of::<usize>();

/// One decoded frame record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackFrame {
    pub frame_pointer: usize,
    pub return_address: usize,
    pub args: [usize; FRAME_ARG_WORDS],
    /// Frame pointer saved by this frame's caller; zero ends the chain.
    pub caller_frame_pointer: usize,
}

impl StackFrame {
    pub fn read(memory: &dyn Memory, fp: usize) -> Self {
        let word = |index: usize| memory.read_word(va!(fp.wrapping_add(index * WORD)));
        Self {
            frame_pointer: fp,
            return_address: word(1),
            args: core::array::from_fn(|i| word(2 + i)),
            caller_frame_pointer: word(0),
        }
    }
}

/// Iterator over the frame chain starting at a frame pointer.
///
/// The chain is trusted: nothing checks for cycles or stack bounds, so
/// callers must cap the walk.
pub struct FrameWalker<'a> {
    memory: &'a dyn Memory,
    fp: usize,
}

impl<'a> FrameWalker<'a> {
    pub fn new(memory: &'a dyn Memory, fp: usize) -> Self {
        Self { memory, fp }
    }

    /// True once the walk has reached the null frame pointer.
    pub fn is_done(&self) -> bool {
        self.fp == 0
    }
}

impl Iterator for FrameWalker<'_> {
    type Item = StackFrame;

    fn next(&mut self) -> Option<StackFrame> {
        if self.fp == 0 {
            return None;
        }
        let frame = StackFrame::read(self.memory, self.fp);
        self.fp = frame.caller_frame_pointer;
        Some(frame)
    }
}

/// Backtrace command instance.
pub static BACKTRACE: BacktraceCommand = BacktraceCommand;

/// Backtrace command implementation.
pub struct BacktraceCommand;

impl Command for BacktraceCommand {
    fn name(&self) -> &'static str {
        "backtrace"
    }

    fn description(&self) -> &'static str {
        "Display backtrace information (function, line, arguments)"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn execute(&self, ctx: &mut CommandContext<'_, '_>) -> MonResult<ExitSignal> {
        let fp = match (ctx.args.get(0), ctx.args.len()) {
            (None, _) => ctx.machine.cpu.frame_pointer(),
            (Some("trap"), 1) => match ctx.trap {
                Some(trap) => trap.frame_pointer(),
                None => anyhow::bail!("backtrace: monitor was not entered from a trap"),
            },
            _ => return Err(MonError::Usage(USAGE).into()),
        };

        let machine = &mut *ctx.machine;
        let out = &mut *machine.console;
        let mut walker = FrameWalker::new(machine.memory, fp);

        writeln!(out, "Stack backtrace:")?;
        for frame in walker.by_ref().take(MAX_BACKTRACE_DEPTH) {
            write!(out, "  fp {:016x}  ra {:016x}  args", frame.frame_pointer, frame.return_address)?;
            for arg in frame.args {
                write!(out, " {arg:016x}")?;
            }
            writeln!(out)?;

            let info = machine.symbols.resolve(frame.return_address);
            writeln!(
                out,
                "         {}:{} {}+{}",
                info.file,
                info.line,
                info.function,
                info.offset_of(frame.return_address)
            )?;
        }

        if !walker.is_done() {
            warn!("backtrace truncated at {MAX_BACKTRACE_DEPTH} frames");
            writeln!(
                out,
                "  ... stopped after {MAX_BACKTRACE_DEPTH} frames, frame chain may be corrupt"
            )?;
        }
        Ok(ExitSignal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::TrapFrame;
    use crate::testing::{MockMemory, Rig};

    /// Lay out a chain of frame records; each entry is (fp, return address).
    fn build_chain(memory: &mut MockMemory, frames: &[(usize, usize)]) {
        for (i, &(fp, ra)) in frames.iter().enumerate() {
            let caller = frames.get(i + 1).map_or(0, |&(next, _)| next);
            memory.write_word(fp, caller);
            memory.write_word(fp + WORD, ra);
            for arg in 0..FRAME_ARG_WORDS {
                memory.write_word(fp + (2 + arg) * WORD, (i + 1) * 0x10 + arg);
            }
        }
    }

    #[test]
    fn empty_chain_prints_no_frames() {
        let mut rig = Rig::new();
        rig.cpu.set_frame_pointer(0);
        assert_eq!(rig.run("backtrace"), ExitSignal::Continue);
        assert_eq!(rig.output(), "Stack backtrace:\n");
        assert_eq!(rig.memory.reads(), 0);
    }

    #[test]
    fn walks_and_symbolizes_each_frame() {
        let mut rig = Rig::new();
        build_chain(&mut rig.memory, &[(0x8000, 0x1064), (0x8100, 0x9999)]);
        rig.cpu.set_frame_pointer(0x8000);

        rig.run("backtrace");
        assert_eq!(
            rig.output(),
            "Stack backtrace:\n\
             \x20 fp 0000000000008000  ra 0000000000001064  args \
             0000000000000010 0000000000000011 0000000000000012 0000000000000013 0000000000000014\n\
             \x20        src/main.rs:61 rust_main+36\n\
             \x20 fp 0000000000008100  ra 0000000000009999  args \
             0000000000000020 0000000000000021 0000000000000022 0000000000000023 0000000000000024\n\
             \x20        <unknown>:0 <unknown>+0\n"
        );
    }

    #[test]
    fn walker_follows_saved_frame_pointers() {
        let mut memory = MockMemory::default();
        build_chain(&mut memory, &[(0x8000, 0x10), (0x8040, 0x20), (0x8080, 0x30)]);

        let frames: alloc::vec::Vec<StackFrame> = FrameWalker::new(&memory, 0x8000).collect();
        let pcs: alloc::vec::Vec<usize> = frames.iter().map(|f| f.return_address).collect();
        assert_eq!(pcs, [0x10, 0x20, 0x30]);
        assert_eq!(frames[1].caller_frame_pointer, 0x8080);
        assert_eq!(frames[2].caller_frame_pointer, 0);
    }

    #[test]
    fn cyclic_chain_is_cut_off() {
        let mut rig = Rig::new();
        // Frame points back at itself.
        rig.memory.write_word(0x8000, 0x8000);
        rig.memory.write_word(0x8000 + WORD, 0x1010);
        rig.cpu.set_frame_pointer(0x8000);

        assert_eq!(rig.run("backtrace"), ExitSignal::Continue);
        let output = rig.output();
        assert_eq!(output.matches("  fp ").count(), MAX_BACKTRACE_DEPTH);
        assert!(output.ends_with("  ... stopped after 64 frames, frame chain may be corrupt\n"));
    }

    #[test]
    fn chain_of_exactly_max_depth_is_complete() {
        let mut rig = Rig::new();
        let frames: alloc::vec::Vec<(usize, usize)> =
            (0..MAX_BACKTRACE_DEPTH).map(|i| (0x10_0000 + i * 0x100, 0x1010)).collect();
        build_chain(&mut rig.memory, &frames);
        rig.cpu.set_frame_pointer(0x10_0000);

        rig.run("backtrace");
        let output = rig.output();
        assert_eq!(output.matches("  fp ").count(), MAX_BACKTRACE_DEPTH);
        assert!(!output.contains("stopped after"));
        assert!(output.ends_with("src/main.rs:48 kernel_init+16\n"));
    }

    #[test]
    fn trap_variant_starts_from_saved_frame() {
        let mut rig = Rig::new();
        build_chain(&mut rig.memory, &[(0x9000, 0x1008)]);
        rig.cpu.set_frame_pointer(0);
        let mut tf = TrapFrame::default();
        tf.r[29] = 0x9000;

        rig.run_trapped("backtrace trap", &tf);
        let output = rig.take_output();
        assert!(output.contains("  fp 0000000000009000  ra 0000000000001008"));
        assert!(output.contains("src/main.rs:48 kernel_init+8\n"));
    }

    #[test]
    fn trap_variant_needs_a_trap() {
        let mut rig = Rig::new();
        rig.run("backtrace trap");
        assert_eq!(rig.output(), "backtrace: monitor was not entered from a trap\n");

        let mut rig = Rig::new();
        rig.run("backtrace now please");
        assert_eq!(rig.output(), "Usage: backtrace [trap]\n");
    }
}
