//! Drawing a [`Simulation`] into a terminal.

use std::cell::Cell as Flag;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::{
    cursor, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathstep_core::{Color, Grid, Point};

use crate::sim::Simulation;

/// Terminal columns per grid cell; two columns make cells roughly square.
pub const CELL_COLUMNS: i32 = 2;

/// Maps a [`pathstep_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    let (r, g, b) = (c.r(), c.g(), c.b());
    CtColor::Rgb { r, g, b }
}

/// Placement of a grid on the screen.
///
/// Each cell takes [`CELL_COLUMNS`] columns plus `gap` blank columns; the
/// grid is centred above the status line, which takes the last row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    origin: Point,
    grid: Point,
    gap: i32,
}

impl Layout {
    /// Lay out a grid of `grid` cells on a screen of `screen` cells. A
    /// non-zero `border` leaves one blank column between cells.
    pub fn new(screen: Point, grid: Point, border: i32) -> Self {
        let gap = i32::from(border > 0);
        let width = grid.x * (CELL_COLUMNS + gap) - gap;
        let rows = screen.y - 1;
        let origin = Point::new((screen.x - width) / 2, (rows - grid.y) / 2).max(Point::ZERO);
        Self { origin, grid, gap }
    }

    /// Columns from the start of one cell to the next.
    pub fn stride(&self) -> i32 {
        CELL_COLUMNS + self.gap
    }

    /// Top-left screen position of grid cell `p`.
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(self.origin.x + p.x * self.stride(), self.origin.y + p.y)
    }

    /// Grid cell under screen position `s`, if any. Gap columns belong to
    /// no cell.
    pub fn to_grid(&self, s: Point) -> Option<Point> {
        let rel = s - self.origin;
        if rel.x < 0 || rel.y < 0 {
            return None;
        }
        let stride = self.stride();
        if rel.x % stride >= CELL_COLUMNS {
            return None;
        }
        let p = Point::new(rel.x / stride, rel.y);
        (p.x < self.grid.x && p.y < self.grid.y).then_some(p)
    }
}

/// Draws the grid and a status line with crossterm commands.
///
/// The renderer listens for grid resizes and clears the whole screen on the
/// next frame after one, so cells from a larger grid do not linger.
pub struct TermRenderer<W: Write> {
    out: W,
    screen: Point,
    dirty: Rc<Flag<bool>>,
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W, grid: &Grid, screen: Point) -> Self {
        let dirty = Rc::new(Flag::new(true));
        let flag = Rc::clone(&dirty);
        grid.on_resize(move |size| {
            log::trace!("grid resized to {size}, full redraw queued");
            flag.set(true);
        });
        Self { out, screen, dirty }
    }

    /// Record a new terminal size.
    pub fn set_screen(&mut self, screen: Point) {
        if screen != self.screen {
            self.screen = screen;
            self.dirty.set(true);
        }
    }

    pub fn layout(&self, grid: &Grid) -> Layout {
        Layout::new(self.screen, grid.size(), grid.border())
    }

    /// Draw one frame.
    pub fn render(&mut self, sim: &Simulation) -> io::Result<()> {
        let grid = sim.grid();
        let layout = self.layout(grid);
        if self.dirty.replace(false) {
            queue!(self.out, ResetColor, terminal::Clear(ClearType::All))?;
        }
        let blank = " ".repeat(CELL_COLUMNS as usize);
        for cell in grid.iter() {
            let at = layout.to_screen(cell.pos());
            if at.x < 0 || at.y < 0 || at.x >= self.screen.x || at.y >= self.screen.y - 1 {
                continue;
            }
            queue!(
                self.out,
                cursor::MoveTo(at.x as u16, at.y as u16),
                SetBackgroundColor(to_ct_color(cell.kind().colour())),
                Print(&blank)
            )?;
        }
        let status_row = (self.screen.y - 1).max(0) as u16;
        let mut status = sim.status();
        status.truncate(self.screen.x.max(0) as usize);
        queue!(
            self.out,
            ResetColor,
            cursor::MoveTo(0, status_row),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(to_ct_color(sim.tool().colour())),
            Print("\u{2588}\u{2588} "),
            ResetColor,
            Print(status)
        )?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use pathstep_core::CellType;

    #[test]
    fn layout_centres_grid() {
        let l = Layout::new(Point::new(80, 25), Point::new(10, 10), 0);
        // 20 columns wide, 24 usable rows.
        assert_eq!(l.to_screen(Point::ZERO), Point::new(30, 7));
        assert_eq!(l.to_screen(Point::new(9, 9)), Point::new(48, 16));
    }

    #[test]
    fn layout_maps_back() {
        let l = Layout::new(Point::new(80, 25), Point::new(10, 10), 0);
        assert_eq!(l.to_grid(Point::new(30, 7)), Some(Point::ZERO));
        assert_eq!(l.to_grid(Point::new(31, 7)), Some(Point::ZERO));
        assert_eq!(l.to_grid(Point::new(32, 8)), Some(Point::new(1, 1)));
        assert_eq!(l.to_grid(Point::new(29, 7)), None);
        assert_eq!(l.to_grid(Point::new(50, 7)), None);
        assert_eq!(l.to_grid(Point::new(30, 17)), None);
    }

    #[test]
    fn layout_with_gap() {
        let l = Layout::new(Point::new(29, 5), Point::new(3, 3), 1);
        assert_eq!(l.stride(), 3);
        // 8 columns wide.
        assert_eq!(l.to_screen(Point::ZERO), Point::new(10, 0));
        assert_eq!(l.to_grid(Point::new(13, 1)), Some(Point::new(1, 1)));
        assert_eq!(l.to_grid(Point::new(12, 1)), None);
    }

    #[test]
    fn layout_clamps_on_small_screen() {
        let l = Layout::new(Point::new(10, 5), Point::new(25, 25), 1);
        assert_eq!(l.to_screen(Point::ZERO), Point::ZERO);
    }

    #[test]
    fn render_writes_cells_and_status() {
        let grid = Grid::from_ascii("S.\n.E").unwrap();
        let sim = Simulation::new(grid.clone(), &RunConfig::default());
        let mut r = TermRenderer::new(Vec::new(), &grid, Point::new(40, 10));
        r.render(&sim).unwrap();
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.contains("Breadth First"));
        let (red, mint) = (CellType::End.colour(), CellType::Start.colour());
        assert!(out.contains(&format!("48;2;{};{};{}m", red.r(), red.g(), red.b())));
        assert!(out.contains(&format!("48;2;{};{};{}m", mint.r(), mint.g(), mint.b())));
    }

    #[test]
    fn resize_forces_clear() {
        let grid = Grid::new(2, 2);
        let sim = Simulation::new(grid.clone(), &RunConfig::default());
        let mut r = TermRenderer::new(Vec::new(), &grid, Point::new(20, 6));
        r.render(&sim).unwrap();
        let first = r.out.len();
        r.render(&sim).unwrap();
        let second = r.out.len() - first;
        grid.resize(Point::new(2, 2));
        r.render(&sim).unwrap();
        let third = r.out.len() - first - second;
        assert!(third > second);
    }
}
