//! Data passed between the first pass and reference resolution.

use std::collections::HashMap;

/// Label identifier → number string active when the label was declared.
pub type LabelTable = HashMap<String, String>;

/// A currently open environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Environment kind, e.g. `theorem`.
    pub kind: String,
    /// Fragment emitted when the environment closes, rendered at open time.
    pub closing: String,
    /// 0-based line of the `\begin`.
    pub opened_at: usize,
    /// Raw text of that line.
    pub source: String,
}

/// Output of the first pass: assembled text with unresolved `\ref{...}`
/// placeholders and the completed label table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub text: String,
    pub labels: LabelTable,
}
