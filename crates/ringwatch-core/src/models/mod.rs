//! Data model shared by the graph builder, detectors, and result assembler.

pub mod document;
pub mod graph;
pub mod record;
pub mod ring;
pub mod score;

pub use document::*;
pub use graph::*;
pub use record::*;
pub use ring::*;
pub use score::*;
