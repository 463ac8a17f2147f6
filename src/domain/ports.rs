use crate::domain::model::SiteLayout;

/// File access relative to the site root.
///
/// Errors stay as `std::io::Error` so the engine can classify them as
/// partial, page-read or page-write failures.
pub trait Storage {
    fn read_to_string(&self, path: &str) -> std::io::Result<String>;
    fn write_string(&self, path: &str, content: &str) -> std::io::Result<()>;
}

pub trait ConfigProvider {
    fn site_root(&self) -> &str;
    fn layout(&self) -> &SiteLayout;
}
