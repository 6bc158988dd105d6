//! Entry title validation and storage key construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title is empty")]
    Empty,

    #[error("Title contains illegal character {0:?}")]
    IllegalCharacter(char),

    #[error("Title {0:?} is reserved")]
    Reserved(String),
}

/// A validated entry title.
///
/// Rules:
/// - Surrounding whitespace is trimmed
/// - Must not be empty after trimming
/// - No path separators (`/`, `\`) and no control characters
/// - Must not start with `.` (rules out `.`, `..` and hidden files)
///
/// A title that passes these rules maps to exactly one file name inside the
/// entries directory, so key construction can never escape it.
///
/// # Examples
///
/// ```
/// use encyclopedia_core::Title;
///
/// assert_eq!(Title::parse("  Python ").unwrap().as_str(), "Python");
/// assert!(Title::parse("../etc/passwd").is_err());
/// assert!(Title::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub fn parse(raw: &str) -> Result<Self, TitleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TitleError::Empty);
        }

        if let Some(bad) = trimmed
            .chars()
            .find(|c| matches!(c, '/' | '\\') || c.is_control())
        {
            return Err(TitleError::IllegalCharacter(bad));
        }

        if trimmed.starts_with('.') {
            return Err(TitleError::Reserved(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Recover a title from a storage key such as `Python.md`.
    ///
    /// Returns `None` for keys without the extension or whose stem is not a
    /// valid title.
    pub fn from_key(key: &str, extension: &str) -> Option<Self> {
        let stem = key.strip_suffix(extension)?.strip_suffix('.')?;
        let title = Self::parse(stem).ok()?;
        // Stems with surrounding whitespace would not round-trip through `key`
        (title.0 == stem).then_some(title)
    }

    /// Storage key for this title
    pub fn key(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = TitleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}
