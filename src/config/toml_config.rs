use crate::domain::model::{
    default_pages, default_partials, default_placeholders, NavSettings, PageDescriptor,
    PartialSource, Placeholder, SiteLayout,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

fn default_root() -> String {
    ".".to_string()
}

/// On-disk shape of a site file. Every section is optional.
#[derive(Debug, Deserialize)]
struct RawSiteFile {
    #[serde(default)]
    site: SiteSection,
    #[serde(default = "default_partials")]
    partials: Vec<PartialSource>,
    #[serde(default = "default_placeholders")]
    placeholders: Vec<Placeholder>,
    #[serde(default = "default_pages")]
    pages: Vec<PageDescriptor>,
    #[serde(default)]
    nav: NavSettings,
}

#[derive(Debug, Clone)]
pub struct TomlConfig {
    pub site: SiteSection,
    pub layout: SiteLayout,
}

impl TomlConfig {
    /// Loads a site file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let raw: RawSiteFile =
            toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        Ok(Self {
            site: raw.site,
            layout: SiteLayout {
                partials: raw.partials,
                placeholders: raw.placeholders,
                pages: raw.pages,
                nav: raw.nav,
            },
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn site_root(&self) -> &str {
        &self.site.root
    }

    fn layout(&self) -> &SiteLayout {
        &self.layout
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("site.root", &self.site.root)?;
        self.layout.validate()
    }
}
