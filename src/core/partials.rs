use crate::domain::model::{Partial, PartialSource};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, SiteError};

/// Partials loaded for one build run, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct PartialSet {
    partials: Vec<Partial>,
}

impl PartialSet {
    pub fn new(partials: Vec<Partial>) -> Self {
        Self { partials }
    }

    pub fn get(&self, name: &str) -> Option<&Partial> {
        self.partials.iter().find(|partial| partial.name == name)
    }

    pub fn len(&self) -> usize {
        self.partials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partials.is_empty()
    }
}

pub fn load_partial<S: Storage>(storage: &S, source: &PartialSource) -> Result<Partial> {
    let content = storage
        .read_to_string(&source.path)
        .map_err(|e| SiteError::PartialReadError {
            name: source.name.clone(),
            path: source.path.clone(),
            source: e,
        })?;

    tracing::debug!(
        "Loaded partial '{}' from {} ({} bytes)",
        source.name,
        source.path,
        content.len()
    );

    Ok(Partial {
        name: source.name.clone(),
        content,
    })
}

/// Loads every partial or none: the first failure aborts the run.
pub fn load_partials<S: Storage>(storage: &S, sources: &[PartialSource]) -> Result<PartialSet> {
    let partials = sources
        .iter()
        .map(|source| load_partial(storage, source))
        .collect::<Result<Vec<_>>>()?;
    Ok(PartialSet::new(partials))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapStorage {
        files: HashMap<String, String>,
    }

    impl Storage for MapStorage {
        fn read_to_string(&self, path: &str) -> std::io::Result<String> {
            self.files.get(path).cloned().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                )
            })
        }

        fn write_string(&self, _path: &str, _content: &str) -> std::io::Result<()> {
            unreachable!("partial loading never writes")
        }
    }

    fn source(name: &str, path: &str) -> PartialSource {
        PartialSource {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_partial_content_is_not_trimmed() {
        let storage = MapStorage {
            files: HashMap::from([("nav.html".to_string(), "  <nav>X</nav>\n\n".to_string())]),
        };

        let set = load_partials(&storage, &[source("navigation", "nav.html")]).unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("navigation").unwrap().content, "  <nav>X</nav>\n\n");
        assert!(set.get("footer-contacts").is_none());
    }

    #[test]
    fn test_missing_partial_names_partial_and_path() {
        let storage = MapStorage {
            files: HashMap::from([("nav.html".to_string(), "<nav/>".to_string())]),
        };

        let err = load_partials(
            &storage,
            &[source("navigation", "nav.html"), source("footer-contacts", "footer.html")],
        )
        .unwrap_err();

        match err {
            SiteError::PartialReadError { name, path, source } => {
                assert_eq!(name, "footer-contacts");
                assert_eq!(path, "footer.html");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
