//! The [`Cell`] type and its closed set of [`CellType`]s.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// What a grid cell currently represents.
///
/// `Searching`, `Searched` and `Path` are *transient*: they are painted by a
/// search run and wiped before the next run or a grid regeneration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellType {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Searching,
    Searched,
    Path,
}

impl CellType {
    /// Every type, in declaration order.
    pub const ALL: [CellType; 7] = [
        Self::Empty,
        Self::Wall,
        Self::Start,
        Self::End,
        Self::Searching,
        Self::Searched,
        Self::Path,
    ];

    /// Types a user may draw onto the grid.
    pub const DRAWABLE: [CellType; 4] = [Self::Empty, Self::Wall, Self::Start, Self::End];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Wall => "wall",
            Self::Start => "start",
            Self::End => "end",
            Self::Searching => "searching",
            Self::Searched => "searched",
            Self::Path => "path",
        }
    }

    /// Whether this type is produced by a search run.
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Searching | Self::Searched | Self::Path)
    }

    /// Whether this type is one of the two unique endpoints.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Whether a grid may be filled with this type.
    #[inline]
    pub const fn is_fill(self) -> bool {
        matches!(self, Self::Empty | Self::Wall)
    }

    /// Character used by the ASCII map format.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Searching => '+',
            Self::Searched => '-',
            Self::Path => '*',
        }
    }

    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.glyph() == ch)
    }

    /// Parse `name`, falling back to `alternative` when it is not a known
    /// type. An `alternative` that is not a valid fill becomes `Empty`.
    pub fn fallback(name: &str, alternative: CellType) -> CellType {
        let alternative = if alternative.is_fill() {
            alternative
        } else {
            Self::Empty
        };
        name.parse().unwrap_or(alternative)
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown cell type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCellType(pub String);

impl fmt::Display for UnknownCellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cell type \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownCellType {}

impl FromStr for CellType {
    type Err = UnknownCellType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| UnknownCellType(s.to_string()))
    }
}

/// A single grid position and its current type.
///
/// The position is fixed when the owning grid creates the cell; the type
/// only changes through that grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    kind: CellType,
}

impl Cell {
    #[inline]
    pub const fn new(pos: Point, kind: CellType) -> Self {
        Self { pos, kind }
    }

    #[inline]
    pub const fn pos(self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn kind(self) -> CellType {
        self.kind
    }

    #[inline]
    pub(crate) fn set_kind(&mut self, kind: CellType) {
        self.kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Wall ".parse::<CellType>(), Ok(CellType::Wall));
        assert_eq!("PATH".parse::<CellType>(), Ok(CellType::Path));
        assert!("lava".parse::<CellType>().is_err());
    }

    #[test]
    fn fallback_sanitizes() {
        assert_eq!(CellType::fallback("wall", CellType::Empty), CellType::Wall);
        assert_eq!(CellType::fallback("lava", CellType::Wall), CellType::Wall);
        assert_eq!(CellType::fallback("", CellType::Start), CellType::Empty);
    }

    #[test]
    fn transient_types() {
        let transient: Vec<_> = CellType::ALL
            .into_iter()
            .filter(|t| t.is_transient())
            .collect();
        assert_eq!(
            transient,
            vec![CellType::Searching, CellType::Searched, CellType::Path]
        );
    }

    #[test]
    fn glyph_lookup() {
        for t in CellType::ALL {
            assert_eq!(CellType::from_glyph(t.glyph()), Some(t));
        }
        assert_eq!(CellType::from_glyph('?'), None);
    }

    #[test]
    fn cell_accessors() {
        let c = Cell::new(Point::new(1, 2), CellType::End);
        assert_eq!(c.pos(), Point::new(1, 2));
        assert_eq!(c.kind(), CellType::End);
    }
}
