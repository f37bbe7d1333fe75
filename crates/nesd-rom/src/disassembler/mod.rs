pub mod addressing;
pub mod instruction;
pub mod labels;
pub mod listing;
pub mod opcodes;
pub mod tracer;

pub use self::{
    instruction::{Flow, Instruction},
    labels::{InterruptVectors, LabelSet, MarkSet, NamedLabels, Vector},
    listing::Listing,
    tracer::{trace, CodeTracer, TraceAnalysis, TraceOrder},
};
