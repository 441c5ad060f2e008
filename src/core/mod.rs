pub mod controller;
pub mod http_api;
pub mod state;

pub use crate::domain::model::{ExperienceEntry, Profile, Project};
pub use crate::domain::ports::{ConfigProvider, PortfolioApi, Storage};
pub use crate::utils::error::Result;
