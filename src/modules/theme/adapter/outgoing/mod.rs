mod environment;
mod in_memory_document;

pub use environment::{CountingTransitions, FixedColorScheme, ImmediateTransitions};
pub use in_memory_document::InMemoryDocumentRoot;
