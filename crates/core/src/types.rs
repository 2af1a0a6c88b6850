//! Core types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker for a position component that is not known.
pub const UNKNOWN_POSITION: i64 = -1;

/// Position in a character stream that a processing error refers to.
///
/// Line and column are 1-indexed. Components that are not available are
/// reported as [`UNKNOWN_POSITION`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Line number
    pub line: i64,
    /// Column number
    pub column: i64,
    /// Character offset from the start of the input
    #[serde(default = "unknown_position")]
    pub char_offset: i64,
    /// Public identifier of the input, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    /// System identifier (usually a path or URI) of the input, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_id: Option<String>,
}

fn unknown_position() -> i64 {
    UNKNOWN_POSITION
}

impl Location {
    /// Create a location from a line and column only.
    pub fn new(line: i64, column: i64) -> Self {
        Self {
            line,
            column,
            char_offset: UNKNOWN_POSITION,
            public_id: None,
            system_id: None,
        }
    }

    /// Location with every component unknown.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_POSITION, UNKNOWN_POSITION)
    }

    /// Set the character offset.
    pub fn with_char_offset(mut self, char_offset: i64) -> Self {
        self.char_offset = char_offset;
        self
    }

    /// Set the public identifier.
    pub fn with_public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = Some(public_id.into());
        self
    }

    /// Set the system identifier.
    pub fn with_system_id(mut self, system_id: impl Into<String>) -> Self {
        self.system_id = Some(system_id.into());
        self
    }

    /// Line number, `-1` if unknown
    pub fn line_number(&self) -> i64 {
        self.line
    }

    /// Column number, `-1` if unknown
    pub fn column_number(&self) -> i64 {
        self.column
    }

    /// Whether both line and column are known.
    pub fn is_known(&self) -> bool {
        self.line != UNKNOWN_POSITION && self.column != UNKNOWN_POSITION
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(system_id) = &self.system_id {
            write!(f, "{}:", system_id)?;
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}
