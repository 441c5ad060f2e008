use anyhow::Result;
use httpmock::prelude::*;
use portfolio_page::core::Storage;
use portfolio_page::render;
use portfolio_page::utils::validation::Validate;
use portfolio_page::{HttpPortfolioApi, LocalStorage, PageController, SiteConfig};
use tempfile::TempDir;

fn mount_api(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/api/who");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "name": "Ada",
                "title": "Engineer",
                "summary": "builds reliable systems"
            }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/skills");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(["Go", "Rust"]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/projects");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"title": "X", "link": "http://x", "description": "d"}
            ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/experience");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"role": "Eng", "company": "Acme", "years": "2020-2023", "description": "built stuff"}
            ]));
    });
}

#[tokio::test]
async fn test_end_to_end_page_written_to_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    mount_api(&server);

    let mut controller = PageController::new(HttpPortfolioApi::new(server.base_url()));
    controller.load().await;

    let site = SiteConfig::default();
    let html = render::html::render_page(&controller.view(), &site);

    let storage = LocalStorage::new(output_path.clone());
    storage
        .write_file(site.output_filename(), html.as_bytes())
        .await?;

    let written = std::path::Path::new(&output_path).join("index.html");
    assert!(written.exists());

    let content = std::fs::read_to_string(written)?;
    assert!(content.contains("<h1>Ada</h1>"));
    assert!(content.contains("builds reliable systems"));
    assert!(content.contains("Open to remote opportunities"));

    Ok(())
}

#[tokio::test]
async fn test_site_config_file_overrides_flow_into_page() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("site.toml");

    let config_content = r#"
page_title = "Ada's Corner"
availability = "Booked until spring"

[contact]
heading = "Say Hi"
blurb = "Drop me a line any time."
cta = "Email me"

[output]
filename = "portfolio.html"
"#;
    tokio::fs::write(&config_path, config_content).await?;

    let site = SiteConfig::from_file(&config_path)?;
    site.validate()?;
    assert_eq!(site.output_filename(), "portfolio.html");

    let server = MockServer::start();
    mount_api(&server);

    let mut controller = PageController::new(HttpPortfolioApi::new(server.base_url()));
    controller.load().await;

    let html = render::html::render_page(&controller.view(), &site);
    assert!(html.contains("Ada&#39;s Corner"));
    assert!(html.contains("Booked until spring"));
    assert!(html.contains("Say Hi"));
    assert!(html.contains("Drop me a line any time."));
    assert!(html.contains("Email me"));

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    storage
        .write_file(site.output_filename(), html.as_bytes())
        .await?;
    assert!(temp_dir.path().join("portfolio.html").exists());

    Ok(())
}

#[tokio::test]
async fn test_missing_site_config_file_is_an_io_error() {
    let err = SiteConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().contains("IO error"));
}
