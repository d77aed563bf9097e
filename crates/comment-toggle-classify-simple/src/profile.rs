//! YAML language profiles.
//!
//! A profile describes just enough of a language to drive comment toggling: its comment tokens
//! and a handful of classification patterns.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors produced by the profile loader/compiler.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("profile '{0}' declares no classification patterns")]
    /// The profile has an empty `patterns` list.
    MissingPatterns(String),

    #[error("regex compile error for pattern '{pattern}': {message}")]
    /// A pattern regex failed to compile.
    RegexCompile {
        /// The regex pattern string.
        pattern: String,
        /// The compiler error message.
        message: String,
    },
}

/// Raw YAML language profile.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageProfile {
    /// Human-readable language name.
    pub name: String,

    #[serde(default)]
    /// File extensions associated with this language.
    pub file_extensions: Vec<String>,

    #[serde(default)]
    /// Line comment token (e.g. `//`, `#`).
    pub line_comment: Option<String>,

    #[serde(default)]
    /// Block comment tokens, when the language has them.
    pub block_comment: Option<BlockTokens>,

    /// Classification patterns, applied in order.
    pub patterns: Vec<PatternRule>,
}

/// Block comment delimiter pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockTokens {
    /// Opening token (e.g. `/*`).
    pub start: String,
    /// Closing token (e.g. `*/`).
    pub end: String,
}

/// A single `match`/`tag` pattern entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternRule {
    #[serde(rename = "match")]
    /// The regex source string.
    pub regex: String,

    /// The tag assigned to matched text.
    pub tag: String,
}

impl LanguageProfile {
    /// Parse a profile from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ProfileError> {
        let profile: LanguageProfile = serde_yaml::from_str(yaml)?;
        if profile.patterns.is_empty() {
            return Err(ProfileError::MissingPatterns(profile.name));
        }
        Ok(profile)
    }

    /// Load a profile from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}
