//! Numbering and the second, reference-resolving pass.

pub mod counter;
pub mod numbering;
pub mod references;

pub use counter::{CounterId, CounterTree};
pub use numbering::Numbering;
pub use references::resolve_references;

use crate::ast::Draft;
use crate::config::ReferenceConfig;
use crate::error::Result;

/// Resolve all `\ref{...}` placeholders of a first-pass draft.
pub fn resolve(draft: Draft, config: &ReferenceConfig) -> Result<String> {
    resolve_references(&draft.text, &draft.labels, config)
}
