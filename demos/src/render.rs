//! Terminal rendering of a search in progress.
//!
//! [`TraceView`] is the demo's [`EventSink`]: it keeps one [`Tile`] per grid
//! cell, remembers which cells changed since the last draw, and paints only
//! those with crossterm. Each cell is two columns wide so the grid looks
//! roughly square.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{Cell, GridModel, MIN_WEIGHT};
use pathviz_search::{EventSink, SearchOutcome};

const START_COLOR: CtColor = CtColor::Rgb { r: 0, g: 255, b: 0 };
const FINISH_COLOR: CtColor = CtColor::Rgb { r: 0, g: 100, b: 255 };
const OBSTACLE_COLOR: CtColor = CtColor::Rgb { r: 255, g: 0, b: 0 };
const SEARCHED_COLOR: CtColor = CtColor::Rgb { r: 150, g: 150, b: 150 };
const PATH_COLOR: CtColor = CtColor::Rgb { r: 255, g: 255, b: 0 };
const WEIGHT_COLOR: CtColor = CtColor::Rgb { r: 255, g: 165, b: 0 };
const BACKGROUND_COLOR: CtColor = CtColor::Rgb { r: 30, g: 30, b: 30 };
const TEXT_COLOR: CtColor = CtColor::Rgb { r: 255, g: 255, b: 255 };
const DARK_TEXT_COLOR: CtColor = CtColor::Rgb { r: 0, g: 0, b: 0 };

/// What a single cell currently shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Open,
    Weighted(u8),
    Obstacle,
    Start,
    End,
    Searched,
    Path,
}

impl Tile {
    fn colors(self) -> (CtColor, CtColor) {
        match self {
            Self::Open => (TEXT_COLOR, BACKGROUND_COLOR),
            Self::Weighted(_) => (DARK_TEXT_COLOR, WEIGHT_COLOR),
            Self::Obstacle => (TEXT_COLOR, OBSTACLE_COLOR),
            Self::Start => (DARK_TEXT_COLOR, START_COLOR),
            Self::End => (TEXT_COLOR, FINISH_COLOR),
            Self::Searched => (DARK_TEXT_COLOR, SEARCHED_COLOR),
            Self::Path => (DARK_TEXT_COLOR, PATH_COLOR),
        }
    }

    fn text(self) -> String {
        match self {
            Self::Weighted(w) => format!("{w} "),
            _ => "  ".to_string(),
        }
    }
}

/// Per-cell view of a grid and the search running over it.
#[derive(Debug, Clone)]
pub struct TraceView {
    cols: i32,
    rows: i32,
    /// The tile each cell shows when the search has not touched it.
    base: Vec<Tile>,
    tiles: Vec<Tile>,
    dirty: Vec<Cell>,
    outcome: Option<SearchOutcome>,
}

impl TraceView {
    /// A view of `grid` with nothing searched yet.
    pub fn new(grid: &GridModel) -> Self {
        let bounds = grid.bounds();
        let base: Vec<Tile> = bounds
            .iter()
            .map(|c| {
                if grid.start() == Some(c) {
                    Tile::Start
                } else if grid.end() == Some(c) {
                    Tile::End
                } else if grid.is_obstacle(c) {
                    Tile::Obstacle
                } else {
                    match grid.weight(c) {
                        MIN_WEIGHT => Tile::Open,
                        w => Tile::Weighted(w),
                    }
                }
            })
            .collect();
        Self {
            cols: bounds.cols,
            rows: bounds.rows,
            tiles: base.clone(),
            base,
            dirty: bounds.iter().collect(),
            outcome: None,
        }
    }

    /// The tile shown at `c`, or `None` outside the grid.
    pub fn tile(&self, c: Cell) -> Option<Tile> {
        self.index(c).map(|i| self.tiles[i])
    }

    /// The outcome reported through `on_completed`, if any.
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// Number of cells waiting to be redrawn.
    pub fn pending(&self) -> usize {
        self.dirty.len()
    }

    fn index(&self, c: Cell) -> Option<usize> {
        if c.x < 0 || c.y < 0 || c.x >= self.cols || c.y >= self.rows {
            return None;
        }
        Some((c.y * self.cols + c.x) as usize)
    }

    fn paint(&mut self, c: Cell, tile: Tile) {
        if let Some(i) = self.index(c) {
            if self.tiles[i] != tile {
                self.tiles[i] = tile;
                self.dirty.push(c);
            }
        }
    }

    /// Clear the terminal and redraw every cell.
    pub fn draw_all<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        queue!(out, terminal::Clear(ClearType::All))?;
        self.dirty.clear();
        for y in 0..self.rows {
            for x in 0..self.cols {
                self.dirty.push(Cell::new(x, y));
            }
        }
        self.flush(out)
    }

    /// Paint the cells changed since the last call.
    pub fn flush<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let dirty = std::mem::take(&mut self.dirty);
        for c in dirty {
            let Some(tile) = self.tile(c) else {
                continue;
            };
            let (fg, bg) = tile.colors();
            queue!(
                out,
                cursor::MoveTo((c.x * 2) as u16, c.y as u16),
                SetForegroundColor(fg),
                SetBackgroundColor(bg),
                Print(tile.text())
            )?;
        }
        queue!(out, ResetColor, cursor::MoveTo(0, self.rows as u16))?;
        out.flush()
    }

    /// Plain-text rendering, one character per cell: `.` open, `#` wall,
    /// `S`/`E` endpoints, digits for weights, `+` searched and `*` path.
    pub fn to_ascii(&self) -> String {
        let mut s = String::with_capacity(((self.cols + 1) * self.rows) as usize);
        for row in self.tiles.chunks(self.cols.max(1) as usize) {
            for tile in row {
                s.push(match tile {
                    Tile::Open => '.',
                    Tile::Weighted(w) => char::from(b'0' + w),
                    Tile::Obstacle => '#',
                    Tile::Start => 'S',
                    Tile::End => 'E',
                    Tile::Searched => '+',
                    Tile::Path => '*',
                });
            }
            s.push('\n');
        }
        s
    }
}

impl EventSink for TraceView {
    fn on_visited(&mut self, cell: Cell) {
        self.paint(cell, Tile::Searched);
    }

    /// Searched cells fall back to their base look, then the path is drawn
    /// over them, leaving the endpoints untouched.
    fn on_completed(&mut self, outcome: SearchOutcome, path: &[Cell]) {
        self.outcome = Some(outcome);
        for i in 0..self.tiles.len() {
            if self.tiles[i] == Tile::Searched {
                let c = Cell::new(i as i32 % self.cols, i as i32 / self.cols);
                self.paint(c, self.base[i]);
            }
        }
        for &c in path {
            if matches!(self.tile(c), Some(Tile::Start | Tile::End)) {
                continue;
            }
            self.paint(c, Tile::Path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_search::{SearchEngine, Strategy};

    const MAP: &str = "
S...
.##.
..3E
";

    #[test]
    fn base_tiles_follow_grid() {
        let g = GridModel::parse(MAP).unwrap();
        let view = TraceView::new(&g);
        assert_eq!(view.tile(Cell::new(0, 0)), Some(Tile::Start));
        assert_eq!(view.tile(Cell::new(3, 2)), Some(Tile::End));
        assert_eq!(view.tile(Cell::new(1, 1)), Some(Tile::Obstacle));
        assert_eq!(view.tile(Cell::new(2, 2)), Some(Tile::Weighted(3)));
        assert_eq!(view.tile(Cell::new(4, 0)), None);
        assert_eq!(view.pending(), 12);
        assert_eq!(view.to_ascii(), "S...\n.##.\n..3E\n");
    }

    #[test]
    fn finished_search_shows_only_path() {
        let g = GridModel::parse(MAP).unwrap();
        let mut view = TraceView::new(&g);
        let mut engine = SearchEngine::new();
        engine
            .start(&g, Strategy::Dijkstra, g.start(), g.end())
            .unwrap();
        engine.step(&g, &mut view);
        assert!(view.to_ascii().contains('+'));

        engine.run_to_completion(&g, &mut view);
        assert_eq!(view.outcome(), Some(SearchOutcome::Found));
        assert_eq!(view.to_ascii(), "S***\n.##*\n..3E\n");
    }

    #[test]
    fn flush_writes_and_clears_dirty() {
        let g = GridModel::parse(MAP).unwrap();
        let mut view = TraceView::new(&g);
        let mut out = Vec::new();
        view.flush(&mut out).unwrap();
        assert_eq!(view.pending(), 0);
        assert!(!out.is_empty());

        view.on_visited(Cell::new(1, 0));
        view.on_visited(Cell::new(1, 0));
        assert_eq!(view.pending(), 1);
    }
}
