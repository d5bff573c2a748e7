pub mod config;

pub use config::{load_dotenv, MissingCredentials, OpenAiConfig, WordPressConfig, WpCredentials};
