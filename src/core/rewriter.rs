use crate::core::nav::build_nav;
use crate::core::partials::PartialSet;
use crate::domain::model::{NavSettings, Placeholder, RewriteOutcome};
use crate::utils::error::{Result, SiteError};
use std::borrow::Cow;

struct Splice<'a> {
    start: usize,
    end: usize,
    replacement: Cow<'a, str>,
}

/// Replaces the first occurrence of each placeholder marker in `page`.
///
/// Markers are located in the original text only, so injected partials are
/// never searched for further markers. Absent markers are skipped.
pub fn rewrite_page(
    page: &str,
    page_id: &str,
    placeholders: &[Placeholder],
    partials: &PartialSet,
    nav: &NavSettings,
) -> Result<RewriteOutcome> {
    let mut splices: Vec<Splice> = Vec::new();
    let mut injected = Vec::new();
    let mut duplicates = Vec::new();

    for placeholder in placeholders {
        let partial = partials
            .get(&placeholder.partial)
            .ok_or_else(|| SiteError::ConfigError {
                message: format!(
                    "placeholder '{}' refers to unknown partial '{}'",
                    placeholder.label, placeholder.partial
                ),
            })?;

        let Some(start) = page.find(placeholder.marker.as_str()) else {
            continue;
        };
        let end = start + placeholder.marker.len();

        if splices.iter().any(|s| start < s.end && s.start < end) {
            tracing::warn!(
                "Marker for '{}' overlaps an earlier placeholder, skipping",
                placeholder.label
            );
            continue;
        }

        if page[end..].contains(placeholder.marker.as_str()) {
            tracing::warn!(
                "Marker '{}' occurs more than once; only the first is replaced",
                placeholder.marker
            );
            duplicates.push(placeholder.marker.clone());
        }

        let replacement = if placeholder.navigation {
            build_nav(&partial.content, page_id, nav)
        } else {
            Cow::Borrowed(partial.content.as_str())
        };

        splices.push(Splice {
            start,
            end,
            replacement,
        });
        injected.push(placeholder.label.clone());
    }

    splices.sort_by_key(|s| s.start);

    let extra: usize = splices.iter().map(|s| s.replacement.len()).sum();
    let mut content = String::with_capacity(page.len() + extra);
    let mut cursor = 0;
    for splice in &splices {
        content.push_str(&page[cursor..splice.start]);
        content.push_str(&splice.replacement);
        cursor = splice.end;
    }
    content.push_str(&page[cursor..]);

    Ok(RewriteOutcome {
        content,
        injected,
        duplicates,
    })
}
