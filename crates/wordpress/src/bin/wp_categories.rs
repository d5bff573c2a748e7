use anyhow::Result;
use clap::Parser;

use recap_core::{load_dotenv, WordPressConfig};
use recap_wordpress::WpClient;

/// List the categories of a WordPress site.
#[derive(Parser, Debug)]
#[command(name = "wp-categories", about = "Retrieve WordPress categories")]
struct CliArgs {
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

    let creds = WordPressConfig::from_env()
        .with_overrides(args.wp_username, args.wp_password, args.wp_url)
        .into_credentials()?;

    let client = WpClient::new(creds.site_url, creds.username, creds.password);
    for category in client.list_categories().await? {
        println!("ID: {}, Name: {}", category.id, category.name);
    }

    Ok(())
}
