use crate::domain::model::{ExperienceEntry, Profile, Project};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// 後端資料來源。四個資源各自獨立取得。
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn fetch_profile(&self) -> Result<Profile>;
    async fn fetch_skills(&self) -> Result<Vec<String>>;
    async fn fetch_projects(&self) -> Result<Vec<Project>>;
    async fn fetch_experience(&self) -> Result<Vec<ExperienceEntry>>;
}
