//! Error types for the t2h library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A structural error raised by the first pass.
///
/// `line` is 0-based; `context` is the raw source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} on line {line} with context '{context}'{}", in_environment(.environment))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub context: String,
    /// Kind of the innermost open environment, when one applies.
    pub environment: Option<String>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize, context: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            context: context.into(),
            environment: None,
        }
    }

    pub fn in_env(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }
}

fn in_environment(environment: &Option<String>) -> String {
    match environment {
        Some(env) => format!(" inside environment '{}'", env),
        None => String::new(),
    }
}

/// What went wrong while parsing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Can't parse \\begin{{, directive is malformed")]
    MalformedBegin,

    #[error("Can't parse \\end{{, directive is malformed")]
    MalformedEnd,

    #[error("\\begin{{document}} expected before \\begin{{{0}}}")]
    PrematureContent(String),

    #[error("Environment {opened} ended with {closed}")]
    MismatchedClose { opened: String, closed: String },

    #[error("\\end{{{0}}} without a matching \\begin")]
    UnopenedClose(String),

    #[error("\\item outside of list environments")]
    ItemOutsideList,

    #[error("Section level mismatch: depth {depth} after depth {current}")]
    SectionLevelSkip { depth: usize, current: usize },

    #[error("Section is not closed properly")]
    UnclosedSectionBracket,

    #[error("Environment {0} is never closed")]
    UnclosedEnvironment(String),

    #[error("No \\begin{{document}} found")]
    MissingDocument,
}

/// Errors that occur during reference resolution.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Unknown reference label: {0}")]
    UnknownReference(String),
}

/// Errors that occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ParseFile {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
