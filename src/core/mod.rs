pub mod build;
pub mod nav;
pub mod partials;
pub mod rewriter;

pub use crate::domain::model::{BuildReport, PageDescriptor, Partial, RewriteOutcome, SiteLayout};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
