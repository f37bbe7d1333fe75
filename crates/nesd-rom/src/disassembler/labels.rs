use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::memory::{MemoryImage, ADDRESS_SPACE_SIZE};

#[rustfmt::skip]
pub mod vectors {
    pub const NMI:   u16 = 0xFFFA;
    pub const RESET: u16 = 0xFFFC;
    pub const IRQ:   u16 = 0xFFFE;
}

// -------------------------------------------------------------------------------------------------

/// One bit per address of the CPU address space, set once the address is known to start an instruction.
#[derive(Clone)]
pub struct MarkSet {
    bits: Box<[bool]>,
}

/// Addresses that get a label line in the listing.
///
/// Remembers insertion order and answers membership in constant time. Nothing is ever removed.
#[derive(Clone, Default)]
pub struct LabelSet {
    addrs: IndexSet<u16>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Vector {
    /// Also taken by `BRK`.
    Irq,
    Reset,
    Nmi,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InterruptVectors {
    pub irq:   u16,
    pub reset: u16,
    pub nmi:   u16,
}

/// Names given to the vector entry points.
#[derive(Clone, Debug, Default)]
pub struct NamedLabels {
    names: IndexMap<u16, &'static str>,
}

// -------------------------------------------------------------------------------------------------

impl MarkSet {
    pub fn new() -> Self {
        Self { bits: vec![false; ADDRESS_SPACE_SIZE].into_boxed_slice() }
    }

    pub fn mark(&mut self, addr: u16) {
        self.bits[addr as usize] = true;
    }

    pub fn is_marked(&self, addr: u16) -> bool {
        self.bits[addr as usize]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.bits.iter().enumerate().filter(|(_, b)| **b).map(|(addr, _)| addr as u16)
    }
}

impl Default for MarkSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MarkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MarkSet({} addresses)", self.count())
    }
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the address was not labelled before.
    pub fn insert(&mut self, addr: u16) -> bool {
        self.addrs.insert(addr)
    }

    pub fn contains(&self, addr: u16) -> bool {
        self.addrs.contains(&addr)
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// Labels in the order they were discovered.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.addrs.iter().copied()
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.addrs.iter().map(|addr| format!("${addr:04X}"))).finish()
    }
}

impl Vector {
    /// Order in which the vectors are named; a later vector takes over the name of an earlier one
    /// pointing at the same address.
    pub const ALL: [Vector; 3] = [Vector::Irq, Vector::Reset, Vector::Nmi];

    pub fn name(self) -> &'static str {
        match self {
            Vector::Irq => "irq",
            Vector::Reset => "reset",
            Vector::Nmi => "nmi",
        }
    }

    /// Address the vector is read from.
    pub fn location(self) -> u16 {
        match self {
            Vector::Irq => vectors::IRQ,
            Vector::Reset => vectors::RESET,
            Vector::Nmi => vectors::NMI,
        }
    }
}

impl InterruptVectors {
    pub fn read_from(mem: &MemoryImage) -> Self {
        Self {
            irq:   mem.read_word(Vector::Irq.location()),
            reset: mem.read_word(Vector::Reset.location()),
            nmi:   mem.read_word(Vector::Nmi.location()),
        }
    }

    pub fn target(&self, vector: Vector) -> u16 {
        match vector {
            Vector::Irq => self.irq,
            Vector::Reset => self.reset,
            Vector::Nmi => self.nmi,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vector, u16)> + '_ {
        Vector::ALL.into_iter().map(move |v| (v, self.target(v)))
    }
}

impl NamedLabels {
    pub fn from_vectors(vectors: &InterruptVectors) -> Self {
        let mut named = Self::default();
        for (vector, addr) in vectors.iter() {
            named.insert(addr, vector.name());
        }
        named
    }

    /// Replaces the name of an already named address in place.
    pub fn insert(&mut self, addr: u16, name: &'static str) {
        self.names.insert(addr, name);
    }

    pub fn get(&self, addr: u16) -> Option<&'static str> {
        self.names.get(&addr).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        self.names.iter().map(|(&addr, &name)| (addr, name))
    }
}

// -------------------------------------------------------------------------------------------------
