pub mod chunker;
pub mod discover;
pub mod error;
pub mod pipeline;
pub mod progress;

pub use error::PipelineError;
pub use pipeline::{summarize, Pipeline, RunOptions, RunReport, DEFAULT_INSTRUCTION};
pub use progress::Spinner;
