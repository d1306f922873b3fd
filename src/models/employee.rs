use serde::Serialize;
use std::fmt;

/// Canonical employee identity: the normalized staff name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Employee(String);

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Employee(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Deterministic file-name stem: spaces become underscores and
    /// characters that are unsafe in file names are replaced.
    pub fn file_stem(&self) -> String {
        self.0
            .chars()
            .map(|c| match c {
                ' ' => '_',
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
