pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::toml_config::TomlConfig;

pub use crate::core::{build::BuildEngine, partials::PartialSet, rewriter::rewrite_page};
pub use crate::domain::model::{PageDescriptor, Placeholder, SiteLayout};
pub use crate::utils::error::{Result, SiteError};
