use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NAV_MARKER: &str = "<!-- INJECT: site-nav -->";
pub const FOOTER_MARKER: &str = "<!-- INJECT: footer-contacts -->";

pub const NAV_PARTIAL: &str = "navigation";
pub const FOOTER_PARTIAL: &str = "footer-contacts";

/// A loaded fragment of markup. The content is kept exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial {
    pub name: String,
    pub content: String,
}

/// Where a partial is read from, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialSource {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// Literal text matched by exact substring equality.
    pub marker: String,
    /// Name of the partial that replaces the marker.
    pub partial: String,
    /// Short name used in progress output.
    pub label: String,
    /// Pass the partial through the navigation builder before injecting.
    #[serde(default)]
    pub navigation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub file: String,
    pub id: String,
}

impl PageDescriptor {
    pub fn new(file: &str, id: &str) -> Self {
        Self {
            file: file.to_string(),
            id: id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSettings {
    #[serde(default)]
    pub highlight_active: bool,
    #[serde(default = "default_active_attribute")]
    pub active_attribute: String,
    /// Page id to the href of that page's navigation link.
    #[serde(default = "default_nav_links")]
    pub links: BTreeMap<String, String>,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            highlight_active: false,
            active_attribute: default_active_attribute(),
            links: default_nav_links(),
        }
    }
}

/// Everything a build run needs to know about the site, passed explicitly
/// into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLayout {
    pub partials: Vec<PartialSource>,
    pub placeholders: Vec<Placeholder>,
    pub pages: Vec<PageDescriptor>,
    pub nav: NavSettings,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            partials: default_partials(),
            placeholders: default_placeholders(),
            pages: default_pages(),
            nav: NavSettings::default(),
        }
    }
}

pub fn default_partials() -> Vec<PartialSource> {
    vec![
        PartialSource {
            name: NAV_PARTIAL.to_string(),
            path: "components/header-nav.html".to_string(),
        },
        PartialSource {
            name: FOOTER_PARTIAL.to_string(),
            path: "components/footer-contacts.html".to_string(),
        },
    ]
}

pub fn default_placeholders() -> Vec<Placeholder> {
    vec![
        Placeholder {
            marker: NAV_MARKER.to_string(),
            partial: NAV_PARTIAL.to_string(),
            label: "nav".to_string(),
            navigation: true,
        },
        Placeholder {
            marker: FOOTER_MARKER.to_string(),
            partial: FOOTER_PARTIAL.to_string(),
            label: "footer".to_string(),
            navigation: false,
        },
    ]
}

pub fn default_pages() -> Vec<PageDescriptor> {
    vec![
        PageDescriptor::new("index.html", "home"),
        PageDescriptor::new("about.html", "about"),
        PageDescriptor::new("courses.html", "courses"),
    ]
}

pub fn default_active_attribute() -> String {
    r#"aria-current="page""#.to_string()
}

pub fn default_nav_links() -> BTreeMap<String, String> {
    default_pages()
        .into_iter()
        .map(|page| (page.id, page.file))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub content: String,
    /// Labels of the placeholders that were filled, in placeholder order.
    pub injected: Vec<String>,
    /// Markers that still occur after their first (replaced) occurrence.
    pub duplicates: Vec<String>,
}

impl RewriteOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.injected.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub file: String,
    pub injected: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: Vec<PageReport>,
    pub dry_run: bool,
}

impl BuildReport {
    pub fn total_injections(&self) -> usize {
        self.pages.iter().map(|page| page.injected.len()).sum()
    }
}
