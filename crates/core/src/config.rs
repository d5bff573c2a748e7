use std::env;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

// ── OpenAI ────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Endpoint base, overridable for self-hosted gateways and tests.
    pub base_url: String,
}

impl OpenAiConfig {
    /// Build from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com"),
        }
    }
}

// ── WordPress ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct WordPressConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub site_url: Option<String>,
}

/// Raised when required WordPress settings are absent from both flags and
/// environment; the message names every missing variable.
#[derive(Debug, thiserror::Error)]
#[error("WordPress credentials not provided; missing: {0}")]
pub struct MissingCredentials(pub String);

/// Fully resolved WordPress credentials.
#[derive(Debug, Clone)]
pub struct WpCredentials {
    pub username: String,
    pub password: String,
    pub site_url: String,
}

impl WordPressConfig {
    /// Build from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            username: env_opt("WORDPRESS_USERNAME"),
            password: env_opt("WORDPRESS_PASSWORD"),
            site_url: env_opt("WORDPRESS_SITE_URL"),
        }
    }

    /// Layer CLI overrides on top of the environment (flag wins).
    pub fn with_overrides(
        self,
        username: Option<String>,
        password: Option<String>,
        site_url: Option<String>,
    ) -> Self {
        Self {
            username: username.or(self.username),
            password: password.or(self.password),
            site_url: site_url.or(self.site_url),
        }
    }

    /// Environment variable names still unset, in reporting order.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.username.is_none() {
            missing.push("WORDPRESS_USERNAME");
        }
        if self.password.is_none() {
            missing.push("WORDPRESS_PASSWORD");
        }
        if self.site_url.is_none() {
            missing.push("WORDPRESS_SITE_URL");
        }
        missing
    }

    /// Resolved credentials, or an error naming every missing variable.
    pub fn into_credentials(self) -> Result<WpCredentials, MissingCredentials> {
        let missing = self.missing();
        match (self.username, self.password, self.site_url) {
            (Some(username), Some(password), Some(site_url)) => Ok(WpCredentials {
                username,
                password,
                site_url,
            }),
            _ => Err(MissingCredentials(missing.join(", "))),
        }
    }
}
