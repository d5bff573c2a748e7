use std::path::PathBuf;

use recap_llm::CompletionError;

/// Errors that abort a summarization run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no .txt input files found in {}", dir.display())]
    NoInputFiles { dir: PathBuf },
    #[error("could not {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("completion for chunk {chunk} failed: {source}")]
    Completion {
        chunk: usize,
        source: CompletionError,
    },
}
