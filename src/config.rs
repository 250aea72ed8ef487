//! Conversion settings, loadable from TOML.

use crate::error::ConfigError;
use crate::render::html::{is_list, DOCUMENT};
use crate::render::MathBackend;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level configuration for a conversion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Language used for environment display names.
    pub language: Language,
    /// Extra or overridden environment display names, keyed by kind.
    ///
    /// Every kind with a display name is numbered.
    pub environments: BTreeMap<String, String>,
    /// Numbering behaviour.
    pub numbering: NumberingConfig,
    /// HTML output settings.
    pub html: HtmlConfig,
    /// Reference resolution settings.
    pub references: ReferenceConfig,
}

/// Language of the built-in environment names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    fn builtin_names(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => &[
                ("theorem", "Theorem"),
                ("lemma", "Lemma"),
                ("example", "Example"),
                ("hint", "Hint"),
                ("remark", "Remark"),
            ],
            Language::Ru => &[
                ("theorem", "Теорема"),
                ("lemma", "Лемма"),
                ("example", "Пример"),
                ("hint", "Подсказка"),
                ("remark", "Замечание"),
            ],
        }
    }
}

/// When environment counters restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnvironmentNumbering {
    /// One running number per kind for the whole document.
    #[default]
    Continuous,
    /// Restart at every numbered top-level section.
    PerSection,
    /// Restart at every numbered top-level section and prefix the section number.
    WithinSection,
}

/// Numbering settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NumberingConfig {
    pub environments: EnvironmentNumbering,
}

/// HTML output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HtmlConfig {
    /// Script included in the document prologue for client-side math.
    pub math: MathBackend,
    /// Optional document `<title>`.
    pub title: Option<String>,
}

/// Reference resolution settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReferenceConfig {
    /// Text substituted for references to unknown labels.
    pub unresolved_marker: String,
    /// Whether to error on unknown references (default: false).
    pub strict: bool,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            unresolved_marker: "(??)".to_string(),
            strict: false,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Read and parse a configuration file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        toml::from_str(&content).map_err(|source| ConfigError::ParseFile {
            config_path: config_path.to_path_buf(),
            source,
        })
    }

    /// Display name of an environment kind, if it has one.
    pub fn display_name(&self, kind: &str) -> Option<&str> {
        if let Some(name) = self.environments.get(kind) {
            return Some(name.as_str());
        }
        self.language
            .builtin_names()
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, name)| *name)
    }

    /// Whether environments of this kind get a running number.
    ///
    /// The document and list environments are never numbered, even when
    /// given a display name.
    pub fn is_enumerable(&self, kind: &str) -> bool {
        kind != DOCUMENT && !is_list(kind) && self.display_name(kind).is_some()
    }
}
