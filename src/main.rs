use anyhow::Context;
use clap::Parser;
use site_inject::domain::ports::ConfigProvider;
use site_inject::utils::{logger, validation::Validate};
use site_inject::{BuildEngine, CliConfig, LocalStorage};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting site-inject");

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load site configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let root = std::fs::canonicalize(config.site_root())
        .with_context(|| format!("cannot resolve site root '{}'", config.site_root()))?;
    anyhow::ensure!(root.is_dir(), "site root '{}' is not a directory", root.display());

    let dry_run = config.dry_run;
    let storage = LocalStorage::new(&root);
    tracing::debug!("Site root resolved to {}", storage.base_path().display());
    let engine = BuildEngine::new_with_dry_run(storage, config, dry_run);

    match engine.run() {
        Ok(report) => {
            tracing::debug!(
                "{} page(s), {} injection(s)",
                report.pages.len(),
                report.total_injections()
            );
        }
        Err(e) => {
            tracing::error!("Build failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
