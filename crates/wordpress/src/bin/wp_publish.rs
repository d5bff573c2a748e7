use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use recap_core::{load_dotenv, OpenAiConfig, WordPressConfig};
use recap_llm::OpenAiCompletions;
use recap_summarize::{summarize, DEFAULT_INSTRUCTION};
use recap_wordpress::WpClient;

/// Instruction used to generate a post title when --title is absent.
const HEADLINE_INSTRUCTION: &str = "Read this transcript and come up with the most click-worthy headline for a blog post about the video.";

/// Summarize a transcript and publish it as a WordPress post.
#[derive(Parser, Debug)]
#[command(name = "wp-publish", about = "Publish a transcript summary to WordPress")]
struct CliArgs {
    /// Path to the video transcript file
    transcript_file: PathBuf,

    /// Custom title for the blog post (generated from the transcript if absent)
    #[arg(long)]
    title: Option<String>,

    /// Completion engine identifier
    #[arg(long, default_value = "text-davinci-003")]
    engine: String,

    /// Sampling temperature
    #[arg(long, default_value = "0.5")]
    temperature: f32,

    /// Maximum completion tokens per chunk
    #[arg(long, default_value = "200")]
    max_tokens: u32,

    /// API key, falling back to the OPENAI_KEY env var
    #[arg(long, env = "OPENAI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// WordPress username (overrides WORDPRESS_USERNAME)
    #[arg(long)]
    wp_username: Option<String>,

    /// WordPress password (overrides WORDPRESS_PASSWORD)
    #[arg(long)]
    wp_password: Option<String>,

    /// WordPress site URL (overrides WORDPRESS_SITE_URL)
    #[arg(long)]
    wp_url: Option<String>,
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

    // Both credential sets are checked before the transcript is read.
    let Some(api_key) = args.api_key else {
        bail!("no API key found: set OPENAI_KEY or pass --api-key");
    };
    let openai = OpenAiConfig::from_env();
    let creds = WordPressConfig::from_env()
        .with_overrides(args.wp_username, args.wp_password, args.wp_url)
        .into_credentials()?;

    let transcript = fs::read_to_string(&args.transcript_file).with_context(|| {
        format!("could not read {}", args.transcript_file.display())
    })?;

    let completions = OpenAiCompletions::new(
        api_key,
        args.engine,
        openai.base_url,
        args.temperature,
        args.max_tokens,
    );

    let title = match args.title {
        Some(title) => title,
        None => summarize(&completions, HEADLINE_INSTRUCTION, &transcript)
            .await
            .context("could not generate a post title")?,
    };

    let body = summarize(&completions, DEFAULT_INSTRUCTION, &transcript)
        .await
        .context("could not summarize the transcript")?;

    let client = WpClient::new(creds.site_url, creds.username, creds.password);
    let post_id = client.create_post(&title, &body).await?;
    info!("published post {}: {}", post_id, title);

    Ok(())
}
