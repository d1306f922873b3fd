use serde::Serialize;

/// Direction of a clock event.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Entry,
    Exit,
}

impl Direction {
    /// Match a direction cell against the configured marker tokens
    /// (case-insensitive, surrounding whitespace ignored).
    pub fn from_marker(s: &str, entry_markers: &[String], exit_markers: &[String]) -> Option<Self> {
        let token = s.trim().to_lowercase();
        if token.is_empty() {
            return None;
        }
        if entry_markers.iter().any(|m| m.trim().to_lowercase() == token) {
            return Some(Self::Entry);
        }
        if exit_markers.iter().any(|m| m.trim().to_lowercase() == token) {
            return Some(Self::Exit);
        }
        None
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, Direction::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Direction::Exit)
    }
}
