//! Marker substitution: data lookup first, then a caller-supplied resolver

use crate::domain::tag::Tag;
use crate::domain::value::Value;

/// Outcome of the data lookup phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataResolution {
    /// Tags the data could not resolve, in discovery order
    pub unresolved: Vec<Tag>,
    /// `(marker, value)` for every tag the data resolved
    pub resolved: Vec<(String, String)>,
}

/// Replace the markers of tags whose name path resolves to text in `data`
///
/// A path that ends on a mapping is left unresolved so the caller can handle
/// it (e.g. by iterating over the mapping itself).
pub fn resolve_from_data(content: &mut String, tags: Vec<Tag>, data: &Value) -> DataResolution {
    if data.is_empty() {
        return DataResolution {
            unresolved: tags,
            resolved: Vec::new(),
        };
    }

    let mut resolution = DataResolution::default();
    for tag in tags {
        match data.lookup(tag.name_path.as_slice()).and_then(Value::as_text) {
            Some(text) => {
                tracing::debug!(path = %tag.path(), marker = %tag.marker, "resolved from data");
                *content = content.replace(&tag.marker, text);
                resolution.resolved.push((tag.marker, text.to_string()));
            }
            None => resolution.unresolved.push(tag),
        }
    }
    resolution
}

/// Replace every tag's marker with what `callback` returns for it
///
/// The callback runs in discovery order. A later tag's text can hold the
/// markers of earlier tags, so substitution runs newest first, and markers
/// of tags already resolved from data (`resolved`) are filled in last.
pub fn resolve_with<F>(
    content: &mut String,
    tags: &[Tag],
    resolved: &[(String, String)],
    mut callback: F,
) where
    F: FnMut(&Tag) -> String,
{
    let replacements: Vec<String> = tags
        .iter()
        .map(|tag| {
            tracing::debug!(path = %tag.path(), marker = %tag.marker, "resolved by callback");
            callback(tag)
        })
        .collect();

    for (tag, replacement) in tags.iter().zip(&replacements).rev() {
        *content = content.replace(&tag.marker, replacement);
    }
    for (marker, value) in resolved {
        *content = content.replace(marker, value);
    }
}

/// Put each tag's original text back in place of its marker
pub fn restore(content: &mut String, tags: &[Tag], resolved: &[(String, String)]) {
    resolve_with(content, tags, resolved, |tag| tag.full_text.clone());
}
