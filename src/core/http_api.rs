use crate::domain::model::{ExperienceEntry, Profile, Project};
use crate::domain::ports::PortfolioApi;
use crate::utils::error::{PageError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// reqwest 實作的後端客戶端。路徑固定為 /api/*，只有 base URL 可設定。
pub struct HttpPortfolioApi {
    client: Client,
    base_url: String,
}

impl HttpPortfolioApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, resource: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(PageError::FetchFailure {
                resource: resource.to_string(),
                status: response.status().as_u16(),
            });
        }

        let data = response.json().await?;
        Ok(data)
    }
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn fetch_profile(&self) -> Result<Profile> {
        self.get_json("/api/who", "About Me data").await
    }

    async fn fetch_skills(&self) -> Result<Vec<String>> {
        self.get_json("/api/skills", "skills").await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.get_json("/api/projects", "projects").await
    }

    async fn fetch_experience(&self) -> Result<Vec<ExperienceEntry>> {
        self.get_json("/api/experience", "experience data").await
    }
}
