use serde::{Deserialize, Serialize};
use std::fmt;

/// One `name/version (comment)` component of a User-Agent string.
///
/// An empty `version` or `comment` means the part is absent and is left out
/// when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub comment: String,
}

impl Product {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            comment: String::new(),
        }
    }

    /// A product without a version, e.g. `Mozilla`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.version.is_empty() {
            write!(f, "/{}", self.version)?;
        }
        if !self.comment.is_empty() {
            write!(f, " ({})", self.comment)?;
        }
        Ok(())
    }
}
