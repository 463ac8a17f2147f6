use crate::domain::model::SiteLayout;
use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Value is listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

impl Validate for SiteLayout {
    fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(SiteError::MissingConfigError {
                field: "pages".to_string(),
            });
        }

        for page in &self.pages {
            validate_path("pages.file", &page.file)?;
            validate_non_empty_string("pages.id", &page.id)?;
        }
        validate_unique("pages.file", self.pages.iter().map(|p| p.file.as_str()))?;

        for partial in &self.partials {
            validate_non_empty_string("partials.name", &partial.name)?;
            validate_path("partials.path", &partial.path)?;
        }
        validate_unique("partials.name", self.partials.iter().map(|p| p.name.as_str()))?;

        let declared: HashSet<&str> = self.partials.iter().map(|p| p.name.as_str()).collect();
        for placeholder in &self.placeholders {
            // An empty marker would match at offset 0 of every page.
            if placeholder.marker.is_empty() {
                return Err(SiteError::InvalidConfigValueError {
                    field: "placeholders.marker".to_string(),
                    value: String::new(),
                    reason: "Marker cannot be empty".to_string(),
                });
            }
            if !declared.contains(placeholder.partial.as_str()) {
                return Err(SiteError::ConfigValidationError {
                    field: "placeholders.partial".to_string(),
                    message: format!(
                        "placeholder '{}' refers to undeclared partial '{}'",
                        placeholder.label, placeholder.partial
                    ),
                });
            }
        }
        validate_unique(
            "placeholders.marker",
            self.placeholders.iter().map(|p| p.marker.as_str()),
        )?;

        validate_non_empty_string("nav.active_attribute", &self.nav.active_attribute)?;

        Ok(())
    }
}
