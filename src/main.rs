use clap::Parser;
use portfolio_page::core::Storage;
use portfolio_page::render;
use portfolio_page::utils::{logger, validation::Validate};
use portfolio_page::{
    CliConfig, HttpPortfolioApi, LocalStorage, PageController, PageView, SiteConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting portfolio-page CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入站台文案（可選）
    let site = match &config.site_config {
        Some(path) => match SiteConfig::from_file(path) {
            Ok(site) => site,
            Err(e) => {
                eprintln!("❌ Failed to load site config '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => SiteConfig::default(),
    };
    if let Err(e) = site.validate() {
        tracing::error!("❌ Site config validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立 API 客戶端與頁面控制器，執行一次性載入
    let api = HttpPortfolioApi::new(config.api_base_url.clone());
    let mut controller = PageController::new(api);
    controller.load().await;

    let view = controller.view();
    match &view {
        PageView::Ready(_) => {
            let html = render::html::render_page(&view, &site);
            let storage = LocalStorage::new(config.output_path.clone());
            storage
                .write_file(site.output_filename(), html.as_bytes())
                .await?;

            println!("{}", render::text::render_page(&view, &site));
            tracing::info!("✅ Portfolio page rendered successfully!");
            println!("✅ Portfolio page rendered successfully!");
            println!(
                "📁 Output saved to: {}/{}",
                config.output_path,
                site.output_filename()
            );
        }
        PageView::Error(message) => {
            tracing::error!("❌ Page load failed: {}", message);
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        // load() 完成後理論上不會停在這兩個狀態，仍輸出對應的佔位畫面
        PageView::Loading | PageView::Pending => {
            println!("{}", render::text::render_page(&view, &site));
        }
    }

    Ok(())
}
