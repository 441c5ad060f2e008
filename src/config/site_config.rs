use crate::utils::error::{PageError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 站台文案設定。所有欄位皆可省略，省略時使用內建文案。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub page_title: Option<String>,
    pub availability: Option<String>,
    pub contact: Option<ContactConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    pub heading: Option<String>,
    pub blurb: Option<String>,
    pub cta: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub filename: Option<String>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PageError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn page_title_for(&self, name: &str) -> String {
        match &self.page_title {
            Some(title) => title.clone(),
            None => format!("{} | Portfolio", name),
        }
    }

    pub fn availability_text(&self) -> &str {
        self.availability
            .as_deref()
            .unwrap_or("Available for new opportunities")
    }

    pub fn contact_heading(&self) -> &str {
        self.contact
            .as_ref()
            .and_then(|c| c.heading.as_deref())
            .unwrap_or("Let's Connect")
    }

    pub fn contact_blurb(&self) -> &str {
        self.contact.as_ref().and_then(|c| c.blurb.as_deref()).unwrap_or(
            "Ready to build something extraordinary together? I'm always excited about new challenges and innovative projects.",
        )
    }

    pub fn contact_cta(&self) -> &str {
        self.contact
            .as_ref()
            .and_then(|c| c.cta.as_deref())
            .unwrap_or("Start a Conversation")
    }

    pub fn output_filename(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.filename.as_deref())
            .unwrap_or("index.html")
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        if let Some(title) = &self.page_title {
            validate_non_empty_string("page_title", title)?;
        }
        if let Some(availability) = &self.availability {
            validate_non_empty_string("availability", availability)?;
        }
        if let Some(contact) = &self.contact {
            if let Some(heading) = &contact.heading {
                validate_non_empty_string("contact.heading", heading)?;
            }
            if let Some(blurb) = &contact.blurb {
                validate_non_empty_string("contact.blurb", blurb)?;
            }
            if let Some(cta) = &contact.cta {
                validate_non_empty_string("contact.cta", cta)?;
            }
        }
        if let Some(output) = &self.output {
            if let Some(filename) = &output.filename {
                validate_non_empty_string("output.filename", filename)?;
            }
        }
        Ok(())
    }
}
