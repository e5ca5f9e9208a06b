//! The [`Grid`] type: a rectangle of [`Cell`]s with shared-handle semantics.
//!
//! A `Grid` is a *handle* onto a shared backing buffer. Cloning a `Grid`
//! yields another handle onto the **same** storage, which is how a running
//! search and a renderer observe one set of cells. Everything runs on one
//! thread; callers must not hold a borrow across a search step.
//!
//! Mutation never fails loudly: out-of-range lookups return `None` and
//! out-of-range writes return `false`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cell::{Cell, CellType};
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// Construction parameters for a [`Grid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    /// Type given to positions that have no surviving cell on regeneration.
    pub fill: CellType,
    /// Gap drawn between cells. Only renderers look at it.
    pub border: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            fill: CellType::Empty,
            border: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Internal shared buffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct GridBuffer {
    cells: Vec<Cell>,
    size: Point,
    fill: CellType,
    border: i32,
}

impl GridBuffer {
    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if Range::sized(self.size).contains(p) {
            Some((p.y as usize) * (self.size.x as usize) + (p.x as usize))
        } else {
            None
        }
    }
}

type ResizeListener = Rc<dyn Fn(Point)>;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-size, row-major collection of [`Cell`]s backed by shared storage.
///
/// At most one cell holds [`CellType::Start`] and at most one holds
/// [`CellType::End`] as long as cells are written through
/// [`set_cell`](Grid::set_cell).
#[derive(Clone)]
pub struct Grid {
    buffer: Rc<RefCell<GridBuffer>>,
    listeners: Rc<RefCell<Vec<ResizeListener>>>,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with empty cells.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_config(GridConfig {
            width,
            height,
            ..GridConfig::default()
        })
    }

    /// Create a grid from a [`GridConfig`]. Negative sizes clamp to zero and
    /// a fill that is not `Empty` or `Wall` becomes `Empty`.
    pub fn with_config(config: GridConfig) -> Self {
        let size = Point::new(config.width, config.height).max(Point::ZERO);
        let fill = sanitize_fill(config.fill);
        let cells = Range::sized(size).iter().map(|p| Cell::new(p, fill)).collect();
        Self {
            buffer: Rc::new(RefCell::new(GridBuffer {
                cells,
                size,
                fill,
                border: config.border,
            })),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Load a map from its ASCII form (see [`CellType::glyph`]).
    ///
    /// Cells are taken verbatim: a map with two `S` glyphs yields a grid with
    /// two start cells, which a search will then refuse.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridError::InconsistentSize {
                    line: y,
                    expected: width,
                    found: row.chars().count(),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let kind = CellType::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, pos })?;
                cells.push(Cell::new(pos, kind));
            }
        }
        let grid = Self::new(0, 0);
        {
            let mut buf = grid.buffer.borrow_mut();
            buf.size = Point::new(width as i32, rows.len() as i32);
            buf.cells = cells;
        }
        Ok(grid)
    }

    /// Dump the grid in the format read by [`from_ascii`](Grid::from_ascii).
    pub fn to_ascii(&self) -> String {
        let buf = self.buffer.borrow();
        let width = buf.size.x.max(1) as usize;
        buf.cells
            .chunks(width)
            .map(|row| row.iter().map(|c| c.kind().glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // -----------------------------------------------------------------------
    // Dimensions
    // -----------------------------------------------------------------------

    #[inline]
    pub fn size(&self) -> Point {
        self.buffer.borrow().size
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size().x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size().y
    }

    /// The range `[0, size)` covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.size())
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.borrow().cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Type used to fill new positions on regeneration.
    #[inline]
    pub fn fill(&self) -> CellType {
        self.buffer.borrow().fill
    }

    /// Change the fill type for future regenerations. Invalid fills become
    /// `Empty`. Existing cells are not touched.
    pub fn set_fill(&self, fill: CellType) {
        self.buffer.borrow_mut().fill = sanitize_fill(fill);
    }

    #[inline]
    pub fn border(&self) -> i32 {
        self.buffer.borrow().border
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `p`, or `None` outside the grid.
    pub fn get_cell(&self, p: Point) -> Option<Cell> {
        let buf = self.buffer.borrow();
        buf.index(p).map(|i| buf.cells[i])
    }

    /// The type of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn kind_at(&self, p: Point) -> Option<CellType> {
        self.get_cell(p).map(Cell::kind)
    }

    /// Set the cell at `p` to `kind`.
    ///
    /// Writing `Start` or `End` first demotes any current holder of that type
    /// to `Empty`, even when `p` then turns out to be outside the grid.
    /// Returns `false` when `p` is outside the grid.
    pub fn set_cell(&self, kind: CellType, p: Point) -> bool {
        let mut buf = self.buffer.borrow_mut();
        if kind.is_endpoint() {
            for c in buf.cells.iter_mut().filter(|c| c.kind() == kind) {
                c.set_kind(CellType::Empty);
            }
        }
        let Some(i) = buf.index(p) else {
            return false;
        };
        buf.cells[i].set_kind(kind);
        true
    }

    /// [`set_cell`](Grid::set_cell) by type name. Unknown names are rejected.
    pub fn set_cell_named(&self, name: &str, p: Point) -> bool {
        match name.parse::<CellType>() {
            Ok(kind) => self.set_cell(kind, p),
            Err(_) => false,
        }
    }

    /// Snapshot of every cell in row-major order.
    pub fn cells(&self) -> Vec<Cell> {
        self.buffer.borrow().cells.clone()
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }

    /// Positions of every cell of type `kind`, row-major.
    pub fn find(&self, kind: CellType) -> Vec<Point> {
        self.buffer
            .borrow()
            .cells
            .iter()
            .filter(|c| c.kind() == kind)
            .map(|c| c.pos())
            .collect()
    }

    /// Number of cells of type `kind`.
    pub fn count(&self, kind: CellType) -> usize {
        self.buffer
            .borrow()
            .cells
            .iter()
            .filter(|c| c.kind() == kind)
            .count()
    }

    /// The in-bounds cardinal neighbours of `p`: up, right, down, left.
    pub fn neighbours(&self, p: Point) -> Vec<Cell> {
        p.neighbors_4()
            .into_iter()
            .filter_map(|n| self.get_cell(n))
            .collect()
    }

    /// Reset every transient cell to `Empty`. Returns how many changed.
    pub fn clear_transient(&self) -> usize {
        let mut cleared = 0;
        self.map_cells(|c| {
            if c.kind().is_transient() {
                c.set_kind(CellType::Empty);
                cleared += 1;
            }
        });
        cleared
    }

    pub(crate) fn map_cells(&self, mut f: impl FnMut(&mut Cell)) {
        let mut buf = self.buffer.borrow_mut();
        for c in buf.cells.iter_mut() {
            f(c);
        }
    }

    // -----------------------------------------------------------------------
    // Regeneration
    // -----------------------------------------------------------------------

    pub fn set_width(&self, width: i32) {
        let size = self.size();
        self.resize(Point::new(width, size.y));
    }

    pub fn set_height(&self, height: i32) {
        let size = self.size();
        self.resize(Point::new(size.x, height));
    }

    /// Regenerate the grid at `size`.
    ///
    /// Non-transient cells that are still in bounds keep their type; every
    /// other position gets the fill type. Resize listeners run afterwards.
    pub fn resize(&self, size: Point) {
        let size = size.max(Point::ZERO);
        {
            let mut buf = self.buffer.borrow_mut();
            let old = std::mem::take(&mut buf.cells);
            let old_bounds = Range::sized(buf.size);
            let old_width = buf.size.x as usize;
            let fill = buf.fill;
            buf.cells = Range::sized(size)
                .iter()
                .map(|p| {
                    old_bounds
                        .contains(p)
                        .then(|| old[(p.y as usize) * old_width + (p.x as usize)])
                        .filter(|c| !c.kind().is_transient())
                        .unwrap_or(Cell::new(p, fill))
                })
                .collect();
            buf.size = size;
        }
        self.notify_resize(size);
    }

    /// Register a callback fired with the new size after every regeneration.
    ///
    /// Callbacks run after the grid is released, so they may read or write it.
    pub fn on_resize(&self, f: impl Fn(Point) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(f));
    }

    fn notify_resize(&self, size: Point) {
        let listeners: Vec<ResizeListener> = self.listeners.borrow().clone();
        for l in listeners {
            l(size);
        }
    }

    /// Whether two handles share the same storage.
    pub fn ptr_eq(&self, other: &Grid) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer)
    }
}

fn sanitize_fill(fill: CellType) -> CellType {
    if fill.is_fill() {
        fill
    } else {
        CellType::Empty
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.buffer.borrow();
        f.debug_struct("Grid")
            .field("size", &buf.size)
            .field("fill", &buf.fill)
            .field("border", &buf.border)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the [`Cell`]s of a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: crate::geom::RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        self.grid.get_cell(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when loading an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row does not have the width of the first row.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a cell glyph.
    InvalidGlyph { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has {found} cells, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "map contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell as Counter;

    #[test]
    fn grid_new_and_get() {
        let g = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        assert_eq!(g.kind_at(Point::new(0, 0)), Some(CellType::Empty));
        assert_eq!(g.get_cell(Point::new(3, 2)).map(Cell::pos), Some(Point::new(3, 2)));
        assert_eq!(g.get_cell(Point::new(4, 0)), None);
        assert_eq!(g.get_cell(Point::new(0, -1)), None);
    }

    #[test]
    fn negative_size_clamps() {
        let g = Grid::new(-3, 2);
        assert_eq!(g.size(), Point::new(0, 2));
        assert!(g.is_empty());
    }

    #[test]
    fn invalid_fill_is_sanitized() {
        let g = Grid::with_config(GridConfig {
            width: 2,
            height: 2,
            fill: CellType::Start,
            border: 0,
        });
        assert_eq!(g.fill(), CellType::Empty);
        assert_eq!(g.count(CellType::Empty), 4);

        let walls = Grid::with_config(GridConfig {
            width: 2,
            height: 1,
            fill: CellType::Wall,
            border: 1,
        });
        assert_eq!(walls.count(CellType::Wall), 2);
    }

    #[test]
    fn set_cell_out_of_bounds() {
        let g = Grid::new(3, 3);
        assert!(!g.set_cell(CellType::Wall, Point::new(3, 0)));
        assert!(!g.set_cell(CellType::Start, Point::new(-1, 1)));
        assert_eq!(g.count(CellType::Empty), 9);
    }

    #[test]
    fn single_start_and_end() {
        let g = Grid::new(5, 5);
        let writes = [
            (CellType::Start, Point::new(0, 0)),
            (CellType::End, Point::new(4, 4)),
            (CellType::Start, Point::new(2, 2)),
            (CellType::Wall, Point::new(1, 1)),
            (CellType::End, Point::new(3, 0)),
            (CellType::End, Point::new(3, 0)),
        ];
        for (kind, p) in writes {
            g.set_cell(kind, p);
            assert!(g.count(CellType::Start) <= 1);
            assert!(g.count(CellType::End) <= 1);
        }
        assert_eq!(g.find(CellType::Start), vec![Point::new(2, 2)]);
        assert_eq!(g.find(CellType::End), vec![Point::new(3, 0)]);
        assert_eq!(g.kind_at(Point::new(0, 0)), Some(CellType::Empty));
    }

    #[test]
    fn out_of_range_endpoint_write_demotes_holder() {
        let g = Grid::new(3, 3);
        g.set_cell(CellType::Start, Point::new(1, 1));
        g.set_cell(CellType::End, Point::new(2, 2));
        assert!(!g.set_cell(CellType::Start, Point::new(9, 9)));
        assert_eq!(g.count(CellType::Start), 0);
        assert_eq!(g.kind_at(Point::new(1, 1)), Some(CellType::Empty));
        // Only the written type is demoted.
        assert_eq!(g.find(CellType::End), vec![Point::new(2, 2)]);
        // Non-endpoint writes out of range change nothing.
        assert!(!g.set_cell(CellType::Wall, Point::new(-1, 0)));
        assert_eq!(g.count(CellType::Empty), 8);
    }

    #[test]
    fn set_cell_named_rejects_unknown() {
        let g = Grid::new(2, 2);
        assert!(g.set_cell_named("Wall", Point::new(1, 1)));
        assert!(!g.set_cell_named("lava", Point::new(0, 0)));
        assert_eq!(g.kind_at(Point::new(1, 1)), Some(CellType::Wall));
    }

    #[test]
    fn clones_share_storage() {
        let g = Grid::new(3, 3);
        let view = g.clone();
        view.set_cell(CellType::Wall, Point::new(1, 1));
        assert_eq!(g.kind_at(Point::new(1, 1)), Some(CellType::Wall));
        assert!(g.ptr_eq(&view));
        assert!(!g.ptr_eq(&Grid::new(3, 3)));
    }

    #[test]
    fn neighbours_stay_in_bounds() {
        let g = Grid::new(3, 2);
        for p in g.bounds() {
            let n = g.neighbours(p);
            assert!(!n.is_empty() && n.len() <= 4);
            assert!(n.iter().all(|c| g.contains(c.pos())));
        }
        let corner: Vec<_> = g.neighbours(Point::new(0, 0)).iter().map(|c| c.pos()).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert!(Grid::new(1, 1).neighbours(Point::ZERO).is_empty());
    }

    #[test]
    fn clear_transient_keeps_layout() {
        let g = Grid::new(3, 1);
        g.set_cell(CellType::Searching, Point::new(0, 0));
        g.set_cell(CellType::Path, Point::new(1, 0));
        g.set_cell(CellType::Wall, Point::new(2, 0));
        assert_eq!(g.clear_transient(), 2);
        assert_eq!(g.to_ascii(), "..#");
    }

    #[test]
    fn resize_preserves_non_transient() {
        let g = Grid::new(4, 4);
        g.set_cell(CellType::Start, Point::new(0, 0));
        g.set_cell(CellType::Wall, Point::new(1, 1));
        g.set_cell(CellType::Searched, Point::new(2, 1));
        g.set_cell(CellType::End, Point::new(3, 3));
        g.set_fill(CellType::Wall);

        g.resize(Point::new(3, 5));
        assert_eq!(g.size(), Point::new(3, 5));
        assert_eq!(g.kind_at(Point::new(0, 0)), Some(CellType::Start));
        assert_eq!(g.kind_at(Point::new(1, 1)), Some(CellType::Wall));
        // Transient paint is replaced by the fill.
        assert_eq!(g.kind_at(Point::new(2, 1)), Some(CellType::Wall));
        // Newly exposed row gets the fill.
        assert_eq!(g.kind_at(Point::new(1, 4)), Some(CellType::Wall));
        // End fell outside.
        assert_eq!(g.count(CellType::End), 0);
        for c in g.iter() {
            assert!(g.contains(c.pos()));
        }
    }

    #[test]
    fn resize_notifies_listeners() {
        let g = Grid::new(2, 2);
        let seen = Rc::new(Counter::new(Point::ZERO));
        let hits = Rc::new(Counter::new(0));
        {
            let seen = Rc::clone(&seen);
            let hits = Rc::clone(&hits);
            let view = g.clone();
            g.on_resize(move |size| {
                seen.set(size);
                hits.set(hits.get() + 1);
                // The grid is readable from inside the callback.
                assert_eq!(view.size(), size);
            });
        }
        g.set_width(6);
        assert_eq!(seen.get(), Point::new(6, 2));
        g.set_height(3);
        assert_eq!(seen.get(), Point::new(6, 3));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn ascii_load_and_dump() {
        let map = "\
S..#
.#.E
....";
        let g = Grid::from_ascii(map).unwrap();
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.kind_at(Point::new(0, 0)), Some(CellType::Start));
        assert_eq!(g.kind_at(Point::new(3, 1)), Some(CellType::End));
        assert_eq!(g.to_ascii(), map);
        assert_eq!(g.to_string(), map);
    }

    #[test]
    fn ascii_errors() {
        assert_eq!(
            Grid::from_ascii("..\n...").unwrap_err(),
            GridError::InconsistentSize {
                line: 1,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(
            Grid::from_ascii("..\n.x").unwrap_err(),
            GridError::InvalidGlyph {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn ascii_keeps_duplicate_endpoints() {
        let g = Grid::from_ascii("S.S\n..E").unwrap();
        assert_eq!(g.count(CellType::Start), 2);
        // Writing through set_cell restores the invariant.
        g.set_cell(CellType::Start, Point::new(1, 0));
        assert_eq!(g.find(CellType::Start), vec![Point::new(1, 0)]);
    }
}
