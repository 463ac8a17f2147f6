pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::toml_config::TomlConfig;
    use crate::domain::model::SiteLayout;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;
    use std::path::Path;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "site-inject")]
    #[command(about = "Inject shared navigation and footer partials into the site's pages")]
    pub struct CliConfig {
        /// Site directory that partial and page paths are relative to
        #[arg(long)]
        pub root: Option<String>,

        /// TOML site file describing partials, placeholders and pages.
        /// A relative `[site] root` in it is taken from the file's directory
        #[arg(short, long)]
        pub config: Option<String>,

        /// Report what would be injected without writing any page
        #[arg(long)]
        pub dry_run: bool,

        /// Mark the current page's link in the injected navigation
        #[arg(long)]
        pub highlight_active_nav: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[arg(skip = SiteLayout::default())]
        pub layout: SiteLayout,
    }

    impl CliConfig {
        /// Applies the site file, if any, then the command-line overrides.
        /// An explicit `--root` wins over the site file's root, and a relative
        /// site file root is joined onto the site file's directory.
        pub fn resolve(mut self) -> Result<Self> {
            if let Some(path) = &self.config {
                tracing::info!("Loading site file from: {}", path);
                let site_file = TomlConfig::from_file(path)?;
                site_file.validate()?;
                if self.root.is_none() {
                    let site_root = Path::new(&site_file.site.root);
                    let resolved = match Path::new(path).parent() {
                        Some(dir) if site_root.is_relative() => dir.join(site_root),
                        _ => site_root.to_path_buf(),
                    };
                    self.root = Some(resolved.to_string_lossy().into_owned());
                }
                self.layout = site_file.layout;
            }

            if self.highlight_active_nav {
                self.layout.nav.highlight_active = true;
            }

            Ok(self)
        }
    }

    impl ConfigProvider for CliConfig {
        fn site_root(&self) -> &str {
            self.root.as_deref().unwrap_or(".")
        }

        fn layout(&self) -> &SiteLayout {
            &self.layout
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("root", self.site_root())?;
            self.layout.validate()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::Write;
        use tempfile::NamedTempFile;

        #[test]
        fn test_no_arguments_uses_default_layout() {
            let config = CliConfig::parse_from(["site-inject"]).resolve().unwrap();

            assert_eq!(config.site_root(), ".");
            assert_eq!(config.layout, SiteLayout::default());
            assert!(!config.dry_run);
            assert!(!config.layout.nav.highlight_active);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_highlight_flag_enables_nav_highlighting() {
            let config = CliConfig::parse_from(["site-inject", "--highlight-active-nav"])
                .resolve()
                .unwrap();
            assert!(config.layout.nav.highlight_active);
        }

        #[test]
        fn test_site_file_root_and_cli_override() {
            let mut site_file = NamedTempFile::new().unwrap();
            site_file
                .write_all(b"[site]\nroot = \"public\"\n\n[[pages]]\nfile = \"a.html\"\nid = \"a\"\n")
                .unwrap();
            let path = site_file.path().to_str().unwrap();

            let from_file = CliConfig::parse_from(["site-inject", "--config", path])
                .resolve()
                .unwrap();
            let expected = site_file.path().parent().unwrap().join("public");
            assert_eq!(Path::new(from_file.site_root()), expected);
            assert_eq!(from_file.layout.pages.len(), 1);

            let overridden =
                CliConfig::parse_from(["site-inject", "--config", path, "--root", "dist"])
                    .resolve()
                    .unwrap();
            assert_eq!(overridden.site_root(), "dist");
        }

        #[test]
        fn test_relative_site_root_follows_site_file_directory() {
            let temp_dir = tempfile::TempDir::new().unwrap();
            std::fs::create_dir(temp_dir.path().join("sites")).unwrap();
            let site_path = temp_dir.path().join("sites/a.toml");
            std::fs::write(&site_path, "[site]\nroot = \"public\"\n").unwrap();

            let config =
                CliConfig::parse_from(["site-inject", "--config", site_path.to_str().unwrap()])
                    .resolve()
                    .unwrap();
            assert_eq!(
                Path::new(config.site_root()),
                temp_dir.path().join("sites/public")
            );

            std::fs::write(&site_path, "[site]\nroot = \"/srv/www\"\n").unwrap();
            let absolute =
                CliConfig::parse_from(["site-inject", "--config", site_path.to_str().unwrap()])
                    .resolve()
                    .unwrap();
            assert_eq!(absolute.site_root(), "/srv/www");
        }

        #[test]
        fn test_missing_site_file_is_error() {
            let result = CliConfig::parse_from(["site-inject", "--config", "/nonexistent/site.toml"])
                .resolve();
            assert!(result.is_err());
        }
    }
}
