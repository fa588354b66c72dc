// Adapters layer: concrete output sinks.

pub mod sink;

pub use sink::{MemorySink, StdoutSink};
