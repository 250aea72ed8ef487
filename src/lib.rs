//! # t2h
//!
//! Converts a small LaTeX subset into an HTML document: sections, named
//! theorem-like environments with automatic numbering, lists, `%` comments
//! and `\label`/`\ref` cross-references. Math is left in place for a
//! client-side script (MathJax by default) to typeset.
//!
//! ## Quick Start
//!
//! ```rust
//! use t2h::{convert, Config};
//!
//! let input = r"\begin{document}
//! \section{Intro}
//! \begin{theorem}\label{t1}
//! Every natural number is interesting.
//! \end{theorem}
//! See \ref{t1}.
//! \end{document}";
//!
//! let html = convert(input, &Config::default()).unwrap();
//! assert!(html.contains(r##"<a href="#label_t1" class="ref">1</a>"##));
//! ```
//!
//! ## Syntax Reference
//!
//! - Comment: a line starting with `%`
//! - Environments: `\begin{kind}[annotation]\label{label}` ... `\end{kind}`.
//!   Content must be wrapped in `\begin{document}` ... `\end{document}`.
//! - Lists: `itemize` and `enumerate` with `\item` lines
//! - Headings: `\section{Title}`, `\subsection{...}`, `\subsubsection{...}`, ...;
//!   a `*` after the command (`\section*{...}`) leaves it unnumbered.
//!   A `\label{...}` may follow the title.
//! - References: `\ref{label}` anywhere in content
//!
//! Numbered environments are `theorem`, `lemma`, `example`, `hint` and
//! `remark`, plus any kind given a display name in [`Config::environments`].
//!
//! ## Pipeline
//!
//! 1. [`parser::parse`] runs the environment stack machine over all lines,
//!    producing a [`Draft`]: HTML with `\ref{...}` placeholders plus the
//!    label table.
//! 2. [`resolve::resolve`] rewrites the placeholders against the table.
//!
//! Malformed input is a hard failure: every structural problem is reported
//! as a [`ParseError`] carrying the 0-based line number and its text.

pub mod ast;
pub mod config;
pub mod error;
pub mod parser;
pub mod render;
pub mod resolve;

// Convenience re-exports
pub use ast::{Draft, Frame, LabelTable};
pub use config::{Config, EnvironmentNumbering, Language};
pub use error::{ConfigError, Error, ParseError, ParseErrorKind, ResolutionError, Result};
pub use parser::parse;
pub use render::MathBackend;
pub use resolve::resolve;

use std::path::Path;

/// Convert a whole source text to HTML.
pub fn convert(input: &str, config: &Config) -> Result<String> {
    let lines: Vec<&str> = input.lines().collect();
    convert_lines(&lines, config)
}

/// Convert a document given as lines to HTML.
///
/// This combines `parse` and `resolve`.
pub fn convert_lines<S: AsRef<str>>(lines: &[S], config: &Config) -> Result<String> {
    let draft = parse(lines, config)?;
    resolve(draft, &config.references)
}

/// Read a source file and convert it to HTML.
///
/// Failing to read the file is reported as [`Error::Io`].
pub fn convert_file<P: AsRef<Path>>(path: P, config: &Config) -> Result<String> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    log::info!("converting {} ({} lines)", path.display(), source.lines().count());
    convert(&source, config)
}
