use std::fmt;

use pathstep_core::Point;

/// Why a search could not be bound to a grid.
///
/// A cell holds one type, so a grid with exactly one start and one end
/// always has them on distinct cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No cell has type `Start`.
    MissingStart,
    /// No cell has type `End`.
    MissingEnd,
    /// More than one cell has type `Start`.
    DuplicateStart(Vec<Point>),
    /// More than one cell has type `End`.
    DuplicateEnd(Vec<Point>),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("grid must contain a start cell"),
            Self::MissingEnd => f.write_str("grid must contain an end cell"),
            Self::DuplicateStart(at) => {
                write!(f, "grid contains {} start cells", at.len())?;
                write_positions(f, at)
            }
            Self::DuplicateEnd(at) => {
                write!(f, "grid contains {} end cells", at.len())?;
                write_positions(f, at)
            }
        }
    }
}

fn write_positions(f: &mut fmt::Formatter<'_>, at: &[Point]) -> fmt::Result {
    f.write_str(" at")?;
    for p in at {
        write!(f, " {p}")?;
    }
    Ok(())
}

impl std::error::Error for SearchError {}
