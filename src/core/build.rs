use crate::core::partials::load_partials;
use crate::core::rewriter::rewrite_page;
use crate::domain::model::{BuildReport, PageReport};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{Result, SiteError};

pub struct BuildEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    dry_run: bool,
}

impl<S: Storage, C: ConfigProvider> BuildEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::new_with_dry_run(storage, config, false)
    }

    pub fn new_with_dry_run(storage: S, config: C, dry_run: bool) -> Self {
        Self {
            storage,
            config,
            dry_run,
        }
    }

    /// Injects partials into every page of the manifest, in order.
    ///
    /// All partials are loaded before the first page is read, and the first
    /// failure stops the run.
    pub fn run(&self) -> Result<BuildReport> {
        let layout = self.config.layout();
        tracing::info!(
            "Building {} page(s) under {}",
            layout.pages.len(),
            self.config.site_root()
        );

        let partials = load_partials(&self.storage, &layout.partials)?;
        tracing::debug!("Loaded {} partial(s)", partials.len());

        let mut report = BuildReport {
            pages: Vec::with_capacity(layout.pages.len()),
            dry_run: self.dry_run,
        };

        for page in &layout.pages {
            let original =
                self.storage
                    .read_to_string(&page.file)
                    .map_err(|e| SiteError::PageReadError {
                        path: page.file.clone(),
                        source: e,
                    })?;

            let outcome =
                rewrite_page(&original, &page.id, &layout.placeholders, &partials, &layout.nav)?;

            let verb = if self.dry_run { "Would inject" } else { "Injected" };
            for label in &outcome.injected {
                println!("✓ {} {} into {}", verb, label, page.file);
            }

            if self.dry_run {
                tracing::debug!("Dry run, not writing {}", page.file);
            } else {
                self.storage
                    .write_string(&page.file, &outcome.content)
                    .map_err(|e| SiteError::PageWriteError {
                        path: page.file.clone(),
                        source: e,
                    })?;
                tracing::debug!("Wrote {} ({} bytes)", page.file, outcome.content.len());
            }

            report.pages.push(PageReport {
                file: page.file.clone(),
                injected: outcome.injected,
            });
        }

        if self.dry_run {
            println!("\n✓ Dry run complete! No files written.");
        } else {
            println!("\n✓ Build complete! Components injected.");
        }

        tracing::info!(
            "Processed {} page(s), {} injection(s)",
            report.pages.len(),
            report.total_injections()
        );

        Ok(report)
    }
}
