//! Line-oriented text I/O: one `<source> <destination> <weight>` record per line.

pub mod reader;
pub mod writer;

pub use reader::{Record, TripleReader};
pub use writer::TripleWriter;
