use std::collections::VecDeque;

use itertools::Itertools;

use crate::{
    disassembler::{
        instruction::{Flow, Instruction},
        labels::{InterruptVectors, LabelSet, MarkSet, NamedLabels},
    },
    memory::{MemoryImage, PRG_WINDOW_START},
};

// -------------------------------------------------------------------------------------------------

/// Order in which pending entry points are walked. Both produce the same classification.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TraceOrder {
    #[default]
    Fifo,
    Lifo,
}

/// Everything the tracer learns about a program.
#[derive(Clone, Debug)]
pub struct TraceAnalysis {
    pub vectors: InterruptVectors,
    /// Addresses where an instruction starts.
    pub marks:   MarkSet,
    pub labels:  LabelSet,
    pub named:   NamedLabels,
}

/// Follows control flow from the interrupt vectors until no reachable instruction is left unvisited.
pub struct CodeTracer<'m> {
    mem:      &'m MemoryImage,
    order:    TraceOrder,
    worklist: VecDeque<u16>,
    analysis: TraceAnalysis,
}

// -------------------------------------------------------------------------------------------------

impl TraceAnalysis {
    pub fn is_code(&self, addr: u16) -> bool {
        self.marks.is_marked(addr)
    }

    pub fn code_bytes(&self) -> usize {
        self.marks.count()
    }

    /// Text a label at `addr` is written as: the vector name, or `L` and the address.
    pub fn label_text(&self, addr: u16) -> String {
        match self.named.get(addr) {
            Some(name) => name.to_string(),
            None => format!("L{addr:04X}"),
        }
    }
}

impl<'m> CodeTracer<'m> {
    pub fn new(mem: &'m MemoryImage, order: TraceOrder) -> Self {
        let vectors = InterruptVectors::read_from(mem);
        let mut labels = LabelSet::new();
        let mut worklist = VecDeque::new();
        for (vector, addr) in vectors.iter() {
            if addr < mem.base() {
                log::warn!("{} vector points below the program ROM: ${addr:04X}", vector.name());
            }
            labels.insert(addr);
            worklist.push_back(addr);
        }
        let named = NamedLabels::from_vectors(&vectors);
        log::info!(
            "Tracing from vectors {}",
            named.iter().map(|(addr, name)| format!("{name}=${addr:04X}")).join(", ")
        );

        let analysis = TraceAnalysis { vectors, marks: MarkSet::new(), labels, named };
        Self { mem, order, worklist, analysis }
    }

    pub fn run(mut self) -> TraceAnalysis {
        while self.step() {}
        log::info!(
            "Trace finished: {} instructions, {} labels",
            self.analysis.code_bytes(),
            self.analysis.labels.len()
        );
        self.analysis
    }

    /// Walks the next pending entry point. Returns `false` once nothing is left to walk.
    pub fn step(&mut self) -> bool {
        match self.next_entry() {
            Some(entry) => {
                self.walk(entry);
                true
            }
            None => false,
        }
    }

    pub fn analysis(&self) -> &TraceAnalysis {
        &self.analysis
    }

    pub fn pending(&self) -> impl Iterator<Item = u16> + '_ {
        self.worklist.iter().copied()
    }

    fn next_entry(&mut self) -> Option<u16> {
        match self.order {
            TraceOrder::Fifo => self.worklist.pop_front(),
            TraceOrder::Lifo => self.worklist.pop_back(),
        }
    }

    /// Marks straight-line code starting at `pc` until it hits known code or leaves no way forward.
    fn walk(&mut self, mut pc: u16) {
        log::debug!("Walking code at ${pc:04X}");
        while !self.analysis.marks.is_marked(pc) {
            let instruction = Instruction::fetch(self.mem, pc);
            log::trace!(
                "${pc:04X}: {} ({})",
                instruction.display(self.mem),
                instruction.opcode.mode.name()
            );
            match instruction.flow(self.mem) {
                Flow::Undefined => {
                    log::debug!("Undefined opcode {:02X} at ${pc:04X}", self.mem.read(pc));
                    return;
                }
                Flow::Branch(target) | Flow::Call(target) => {
                    self.analysis.marks.mark(pc);
                    self.follow(target);
                }
                Flow::Jump(target) => {
                    self.analysis.marks.mark(pc);
                    self.follow(target);
                    return;
                }
                Flow::IndirectJump | Flow::Return => {
                    self.analysis.marks.mark(pc);
                    return;
                }
                Flow::Sequential => {
                    self.analysis.marks.mark(pc);
                    match instruction.absolute_operand(self.mem) {
                        Some(addr) if addr >= PRG_WINDOW_START => {
                            self.analysis.labels.insert(addr);
                        }
                        _ => {}
                    }
                }
            }

            pc = match instruction.next_offset() {
                Some(next) => next,
                None => {
                    log::warn!("Code at ${pc:04X} runs past the end of the address space");
                    return;
                }
            };
        }
    }

    fn follow(&mut self, target: u16) {
        if !self.analysis.marks.is_marked(target) {
            self.worklist.push_back(target);
        }
        self.analysis.labels.insert(target);
    }
}

pub fn trace(mem: &MemoryImage, order: TraceOrder) -> TraceAnalysis {
    CodeTracer::new(mem, order).run()
}

// -------------------------------------------------------------------------------------------------
