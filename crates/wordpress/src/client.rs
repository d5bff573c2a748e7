//! Thin client for the WordPress REST API: list categories, create a post.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// One category as returned by the categories endpoint; extra fields in
/// the response are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum WpError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("WordPress API error: {status} — {body}")]
    Api { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
}

pub struct WpClient {
    client: reqwest::Client,
    site_url: String,
    username: String,
    password: String,
}

impl WpClient {
    pub fn new(site_url: String, username: String, password: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            site_url,
            username,
            password,
        }
    }

    /// Fetch all categories of the site, one unpaginated GET.
    pub async fn list_categories(&self) -> Result<Vec<Category>, WpError> {
        let url = format!("{}/wp-json/wp/v2/categories", self.site_url);
        debug!("WordPress request to {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(WpError::Api { status, body });
        }

        Ok(response.json().await?)
    }

    /// Create a published post and return its id.
    pub async fn create_post(&self, title: &str, content: &str) -> Result<u64, WpError> {
        let url = format!("{}/wp-json/wp/v2/posts", self.site_url);
        debug!("WordPress request to {}", url);

        let body = json!({
            "title": title,
            "content": content,
            "status": "publish",
        });

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(WpError::Api { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        resp["id"]
            .as_u64()
            .ok_or_else(|| WpError::Parse("missing id in created post".into()))
    }
}
