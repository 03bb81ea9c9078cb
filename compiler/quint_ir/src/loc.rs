//! Source locations.
//!
//! A [`Loc`] is what the Source Map records for every identifier: the source
//! name plus start and (when the parser knows it) end positions.

use std::fmt;

/// A point in a source file.
///
/// `line` and `col` are 0-based as reported by the parser driver; `index` is
/// the absolute character offset from the start of the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub col: u32,
    pub index: u32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, col: u32, index: u32) -> Self {
        Position { line, col, index }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rendered 1-based, the way editors count.
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Source span of a construct.
#[derive(Clone, Eq, PartialEq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loc {
    /// Source name (usually a file path).
    pub source: String,
    pub start: Position,
    /// End position, absent when the parser stopped inside the construct.
    pub end: Option<Position>,
}

impl Loc {
    /// Create a location with both ends known.
    pub fn new(source: impl Into<String>, start: Position, end: Position) -> Self {
        Loc {
            source: source.into(),
            start,
            end: Some(end),
        }
    }

    /// Create a location whose end is unknown.
    pub fn open(source: impl Into<String>, start: Position) -> Self {
        Loc {
            source: source.into(),
            start,
            end: None,
        }
    }

    /// Length in characters, when the end is known.
    pub fn len(&self) -> Option<u32> {
        self.end
            .map(|end| end.index.saturating_sub(self.start.index))
    }

    /// Check whether this location covers no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Check whether another location lies within this one.
    ///
    /// Locations from different sources never contain each other, and a
    /// location with an unknown end contains only those starting after it.
    pub fn contains(&self, other: &Loc) -> bool {
        if self.source != other.source || other.start.index < self.start.index {
            return false;
        }
        match (self.end, other.end) {
            (Some(end), Some(other_end)) => other_end.index <= end.index,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}:{}-{}", self.source, self.start, end),
            None => write!(f, "{}:{}", self.source, self.start),
        }
    }
}
