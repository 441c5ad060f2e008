pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use crate::config::site_config::SiteConfig;
pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::controller::PageController;
pub use crate::core::http_api::HttpPortfolioApi;
pub use crate::core::state::{PageState, PageView, ReadyPage};
pub use crate::utils::error::{PageError, Result};
