//! Cross-reference resolution over the assembled first-pass text.

use crate::ast::LabelTable;
use crate::config::ReferenceConfig;
use crate::error::{ResolutionError, Result};
use crate::parser::lexer::reference;
use crate::render::html::reference_link;

const REF_OPEN: &str = r"\ref{";

/// Replace every `\ref{label}` in `text`.
///
/// Known labels become links showing their number; unknown or empty ones
/// become the unresolved marker, or an error in strict mode. An unclosed
/// `\ref{` is left as is.
pub fn resolve_references(text: &str, labels: &LabelTable, config: &ReferenceConfig) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(REF_OPEN) {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos..];

        match reference(candidate) {
            Ok((after, label)) => {
                out.push_str(&resolve_label(label, labels, config)?);
                rest = after;
            }
            Err(_) => {
                out.push_str(REF_OPEN);
                rest = &candidate[REF_OPEN.len()..];
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn resolve_label(label: &str, labels: &LabelTable, config: &ReferenceConfig) -> Result<String> {
    match labels.get(label) {
        Some(number) if !label.is_empty() => Ok(reference_link(label, number)),
        _ => {
            if config.strict {
                return Err(ResolutionError::UnknownReference(label.to_string()).into());
            }
            log::warn!("unresolved reference to '{}'", label);
            Ok(config.unresolved_marker.clone())
        }
    }
}
