use anyhow::{bail, Context, Result};
use clap::Parser;

use recap_core::{load_dotenv, OpenAiConfig};
use recap_llm::OpenAiCompletions;
use recap_summarize::{Pipeline, RunOptions, DEFAULT_INSTRUCTION};
use tracing::{info, warn};

/// Summarize transcripts in the current directory.
///
/// Collects every `.txt` file, merges them when there is more than one,
/// summarizes the text chunk by chunk, and writes the deduplicated
/// summary. On success the inputs are removed unless --no-cleanup is set.
#[derive(Parser, Debug)]
#[command(name = "summarize", about = "Chunk-and-summarize .txt transcripts")]
struct CliArgs {
    /// Keep input and merge files after a successful run
    #[arg(long)]
    no_cleanup: bool,

    /// Completion engine identifier
    #[arg(long, default_value = "text-davinci-003")]
    engine: String,

    /// Sampling temperature
    #[arg(long, default_value = "0.5")]
    temperature: f32,

    /// Maximum completion tokens per chunk
    #[arg(long, default_value = "200")]
    max_tokens: u32,

    /// Instruction prepended to every chunk
    #[arg(long, default_value = DEFAULT_INSTRUCTION)]
    prompt: String,

    /// Summary output filename
    #[arg(long, default_value = "summary.txt")]
    output_summary: String,

    /// Merge filename used when multiple inputs exist
    #[arg(long, default_value = "combined.txt")]
    output_combined: String,

    /// API key, falling back to the OPENAI_KEY env var
    #[arg(long, env = "OPENAI_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let args = CliArgs::parse();

    // The key check happens before any transcript is touched.
    let Some(api_key) = args.api_key else {
        bail!("no API key found: set OPENAI_KEY or pass --api-key");
    };
    let openai = OpenAiConfig::from_env();

    let client = OpenAiCompletions::new(
        api_key,
        args.engine,
        openai.base_url,
        args.temperature,
        args.max_tokens,
    );

    let options = RunOptions {
        instruction: args.prompt,
        summary_file: args.output_summary,
        merge_file: args.output_combined,
        cleanup: !args.no_cleanup,
    };

    let dir = std::env::current_dir().context("could not resolve working directory")?;
    let report = Pipeline::new(&client, options).run(&dir).await?;

    info!(
        "summarized {} chunk(s) into {} line(s) at {}",
        report.chunk_count,
        report.summary_count,
        report.summary_file.display()
    );
    if report.cleanup_failures > 0 {
        warn!("{} file(s) could not be removed", report.cleanup_failures);
    }

    Ok(())
}
