//! Receptro agent library: the pipeline around the rule engine.
//!
//! The engine itself only maps text to records. This crate supplies the
//! text (transcript or captured document text read from a `TextSource`),
//! drives the engine, and persists the resulting reports as JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod mock;
pub mod pipeline;
pub mod source;

pub use error::{AgentError, AgentResult};
pub use mock::MockTextSource;
pub use pipeline::Pipeline;
pub use source::{FileTextSource, TextSource};
