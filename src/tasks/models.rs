//! Task model types for the to-do list.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Task priority levels.
///
/// Serialized as the label (`"High"`, `"Medium"`, `"Low"`), exact case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// High priority.
    High,
    /// Medium priority.
    Medium,
    /// Low priority.
    Low,
}

impl Priority {
    /// All levels, in the order they are offered to the user.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Canonical level name (`HIGH`, `MEDIUM`, `LOW`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Label stored in the tasks file and shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Urgency rank, 0 being the most urgent.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Parse free-form user input into a priority.
    ///
    /// The text is trimmed and capitalized (first letter upper, rest lower),
    /// then matched against each level's name ignoring case, and finally
    /// against each level's label exactly.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPriority`] if no level matches.
    pub fn parse(text: &str) -> std::result::Result<Self, InvalidPriority> {
        let choice = capitalize(text.trim());

        if let Some(level) = Self::ALL.into_iter().find(|p| p.name().eq_ignore_ascii_case(&choice))
        {
            return Ok(level);
        }
        Self::ALL
            .into_iter()
            .find(|p| p.label() == choice)
            .ok_or_else(|| InvalidPriority(text.to_string()))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Priority {
    type Err = InvalidPriority;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Error when priority text does not name any level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPriority(pub String);

impl std::fmt::Display for InvalidPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid priority: '{}' (must be one of: High, Medium, Low)", self.0)
    }
}

impl std::error::Error for InvalidPriority {}

impl From<InvalidPriority> for Error {
    fn from(err: InvalidPriority) -> Self {
        Self::Validation(err.to_string())
    }
}

/// A task in the to-do list.
///
/// Tasks have no identifier; they are addressed by their position in the
/// display ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing. Never empty.
    #[serde(rename = "task")]
    pub name: String,
    /// Whether the task has been done.
    #[serde(default)]
    pub completed: bool,
    /// Priority level.
    pub priority: Priority,
}

impl Task {
    /// Create an incomplete task, trimming the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name is empty or only whitespace.
    pub fn new(name: &str, priority: Priority) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Task name cannot be empty!".to_string()));
        }
        Ok(Self { name: name.to_string(), completed: false, priority })
    }

    /// Human-readable completion status.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        if self.completed {
            "Done"
        } else {
            "Not Done"
        }
    }
}
