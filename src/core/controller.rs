use crate::core::state::{PageState, PageView};
use crate::domain::ports::PortfolioApi;
use crate::utils::error::Result;

/// 頁面控制器。掛載時執行一次循序載入，之後只提供渲染決策。
pub struct PageController<A: PortfolioApi> {
    api: A,
    state: PageState,
    mounted: bool,
}

impl<A: PortfolioApi> PageController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: PageState::new(),
            mounted: false,
        }
    }

    /// 初始載入。只有第一次呼叫會發出請求，重複呼叫為 no-op。
    pub async fn load(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        tracing::info!("Starting data fetch...");
        match self.fetch_all().await {
            Ok(()) => tracing::info!("All data fetched successfully!"),
            Err(e) => {
                tracing::error!("Fetch error: {}", e);
                self.state.error = Some(e.to_string());
            }
        }
        // finalization: 成功或失敗都恰好清除一次 loading
        self.state.loading = false;
    }

    // 固定順序抓取四個資源。第一個失敗即中止，後續請求不再發出。
    async fn fetch_all(&mut self) -> Result<()> {
        tracing::debug!("Fetching who data...");
        self.state.who = Some(self.api.fetch_profile().await?);

        tracing::debug!("Fetching skills data...");
        self.state.skills = Some(self.api.fetch_skills().await?);

        tracing::debug!("Fetching projects data...");
        self.state.projects = Some(self.api.fetch_projects().await?);

        tracing::debug!("Fetching experience data...");
        self.state.experience = Some(self.api.fetch_experience().await?);

        Ok(())
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn view(&self) -> PageView<'_> {
        self.state.view()
    }
}
