pub mod client;
pub mod openai;

pub use client::{CompletionClient, CompletionError};
pub use openai::OpenAiCompletions;
