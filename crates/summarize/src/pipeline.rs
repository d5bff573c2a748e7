//! End-to-end orchestration: discover inputs, merge, chunk, summarize each
//! chunk, dedupe, write the result, then optionally remove the inputs.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use recap_llm::CompletionClient;
use tracing::{debug, info, warn};

use crate::chunker;
use crate::discover;
use crate::error::PipelineError;
use crate::progress::Spinner;

/// Instruction prepended to every chunk sent for summarization.
pub const DEFAULT_INSTRUCTION: &str = "This is a transcribed text (without diarization) from an online video. Could you summarize the main topics or points of view presented by the speakers in bullet point form?";

/// Per-run settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub instruction: String,
    pub summary_file: String,
    pub merge_file: String,
    pub cleanup: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            instruction: DEFAULT_INSTRUCTION.to_string(),
            summary_file: "summary.txt".to_string(),
            merge_file: "combined.txt".to_string(),
            cleanup: true,
        }
    }
}

/// What a finished run did.
#[derive(Debug)]
pub struct RunReport {
    pub input_files: Vec<PathBuf>,
    pub merge_file: Option<PathBuf>,
    pub chunk_count: usize,
    pub summary_count: usize,
    pub summary_file: PathBuf,
    pub cleanup_failures: usize,
}

pub struct Pipeline<'a> {
    client: &'a dyn CompletionClient,
    options: RunOptions,
}

impl<'a> Pipeline<'a> {
    pub fn new(client: &'a dyn CompletionClient, options: RunOptions) -> Self {
        Self { client, options }
    }

    /// Summarize the `.txt` transcripts in `dir`. Steps run strictly in
    /// order and the first error aborts the run; the summary file is only
    /// written once every chunk has completed.
    pub async fn run(&self, dir: &Path) -> Result<RunReport, PipelineError> {
        let exclude = [
            self.options.summary_file.as_str(),
            self.options.merge_file.as_str(),
        ];
        let inputs = discover::discover_inputs(dir, &exclude)?;
        info!("found {} transcript file(s)", inputs.len());

        // Multiple inputs are concatenated into a merge file, which then
        // becomes the transcript source.
        let merge_file = if inputs.len() > 1 {
            let path = dir.join(&self.options.merge_file);
            discover::merge_inputs(&inputs, &path)?;
            Some(path)
        } else {
            None
        };
        let source = merge_file.as_deref().unwrap_or(&inputs[0]);

        let transcript = fs::read_to_string(source).map_err(|e| PipelineError::Io {
            op: "read",
            path: source.to_path_buf(),
            source: e,
        })?;

        let limit = chunker::effective_limit(&self.options.instruction)?;
        let chunks = chunker::split(&transcript, limit)?;
        debug!("split transcript into {} chunk(s)", chunks.len());

        // The spinner runs only while completions are in flight and is
        // stopped on both exit paths before the error propagates.
        let fragments = if chunks.is_empty() {
            Vec::new()
        } else {
            let spinner = Spinner::start();
            let outcome = complete_all(self.client, &self.options.instruction, &chunks).await;
            spinner.stop().await;
            outcome?
        };

        let summaries = dedupe(fragments);

        let summary_file = dir.join(&self.options.summary_file);
        write_summaries(&summary_file, &summaries)?;
        info!(
            "wrote {} summary line(s) to {}",
            summaries.len(),
            summary_file.display()
        );

        let cleanup_failures = if self.options.cleanup {
            remove_run_files(&inputs, merge_file.as_deref())
        } else {
            0
        };

        Ok(RunReport {
            chunk_count: chunks.len(),
            summary_count: summaries.len(),
            input_files: inputs,
            merge_file,
            summary_file,
            cleanup_failures,
        })
    }
}

/// Summarize in-memory text in one shot: chunk, complete per chunk, dedupe,
/// join. Entry point for tools that already hold the transcript.
pub async fn summarize(
    client: &dyn CompletionClient,
    instruction: &str,
    text: &str,
) -> Result<String, PipelineError> {
    let limit = chunker::effective_limit(instruction)?;
    let chunks = chunker::split(text, limit)?;
    let fragments = complete_all(client, instruction, &chunks).await?;
    Ok(dedupe(fragments).join("\n"))
}

/// One completion call per chunk, in order. The first failure aborts;
/// there is no retry.
async fn complete_all(
    client: &dyn CompletionClient,
    instruction: &str,
    chunks: &[String],
) -> Result<Vec<String>, PipelineError> {
    let mut fragments = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        debug!("summarizing chunk {} of {}", i + 1, chunks.len());
        let fragment = client
            .complete(instruction, chunk)
            .await
            .map_err(|source| PipelineError::Completion {
                chunk: i + 1,
                source,
            })?;
        fragments.push(fragment);
    }
    Ok(fragments)
}

/// Drop exact-duplicate fragments, keeping first occurrences in order.
pub fn dedupe(fragments: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    fragments
        .into_iter()
        .filter(|fragment| seen.insert(fragment.clone()))
        .collect()
}

fn write_summaries(path: &Path, summaries: &[String]) -> Result<(), PipelineError> {
    let mut out = String::new();
    for summary in summaries {
        out.push_str(summary);
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| PipelineError::Io {
        op: "write",
        path: path.to_path_buf(),
        source: e,
    })
}

/// Delete the discovered inputs and the merge file. Failures are logged
/// per file and counted, never fatal; the summary is already on disk.
fn remove_run_files(inputs: &[PathBuf], merge_file: Option<&Path>) -> usize {
    let mut failures = 0;
    for path in inputs.iter().map(PathBuf::as_path).chain(merge_file) {
        match fs::remove_file(path) {
            Ok(()) => debug!("removed {}", path.display()),
            Err(err) => {
                warn!("could not remove {}: {}", path.display(), err);
                failures += 1;
            }
        }
    }
    failures
}
