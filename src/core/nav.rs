use crate::domain::model::NavSettings;
use std::borrow::Cow;

/// Produces the navigation markup for `page_id`.
///
/// Unless `highlight_active` is set, every page gets the template as is.
/// With highlighting on, the active attribute is added right after the
/// first `href="..."` that matches the page's link.
pub fn build_nav<'a>(template: &'a str, page_id: &str, settings: &NavSettings) -> Cow<'a, str> {
    if !settings.highlight_active {
        return Cow::Borrowed(template);
    }

    let Some(href) = settings.links.get(page_id) else {
        tracing::warn!("No navigation link configured for page '{}'", page_id);
        return Cow::Borrowed(template);
    };

    let needle = format!("href=\"{}\"", href);
    match template.find(&needle) {
        Some(start) => {
            let insert_at = start + needle.len();
            let mut out =
                String::with_capacity(template.len() + settings.active_attribute.len() + 1);
            out.push_str(&template[..insert_at]);
            out.push(' ');
            out.push_str(&settings.active_attribute);
            out.push_str(&template[insert_at..]);
            Cow::Owned(out)
        }
        None => {
            tracing::warn!(
                "Navigation template has no link to '{}' for page '{}'",
                href,
                page_id
            );
            Cow::Borrowed(template)
        }
    }
}
