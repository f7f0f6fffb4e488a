//! Display modes for the book list

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of three mutually exclusive rendering shapes
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Grid of cards with a "View Resource" link
    #[default]
    Card,
    /// One row per book, text block beside the link
    List,
    /// Dense rows with a bare "View" link
    Compact,
}

impl ViewMode {
    /// Every mode, in button order
    pub const ALL: [Self; 3] = [Self::Card, Self::List, Self::Compact];

    /// Storage and button identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::List => "list",
            Self::Compact => "compact",
        }
    }

    /// Class applied to the results container
    #[must_use]
    pub const fn layout_class(self) -> &'static str {
        match self {
            Self::Card => "books-grid",
            Self::List => "books-list",
            Self::Compact => "books-compact",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode identifier is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view mode: {0}")]
pub struct UnknownViewMode(pub String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "list" => Ok(Self::List),
            "compact" => Ok(Self::Compact),
            other => Err(UnknownViewMode(other.to_string())),
        }
    }
}
