use std::fmt;
use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{Direction, Grid};

/// One tile of the rendered raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
    Blocked,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const TILE_WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Open => "  ".with(Color::Reset),
            Tile::Wall => "⬜".with(Color::White),
            Tile::Blocked => "⬛".with(Color::DarkGrey),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Renders a grid to a `(2n+1)` by `(2n+1)` tile raster: a blocked fill at the center
/// of every closed cell, a wall tile on the edge slot of every wall flag
/// still present, and corner posts next to walled edges. Both neighbors of a
/// shared edge draw onto the same tile, so an opening only shows through
/// when every flag covering that edge is cleared.
///
/// Returns the tiles in row-major order together with the raster side
/// length; row `y`, column `x` is at `y * side + x`.
pub fn rasterize(grid: &Grid) -> (Vec<Tile>, usize) {
    let side = grid.size() * 2 + 1;
    let mut tiles = vec![Tile::Open; side * side];

    for cell in grid.cells() {
        let (cx, cy) = (cell.x * 2 + 1, cell.y * 2 + 1);
        if !cell.is_open {
            tiles[cy * side + cx] = Tile::Blocked;
        }
        for direction in Direction::ALL {
            if cell.wall(direction) {
                let (dx, dy) = direction.delta();
                let ex = cx.wrapping_add_signed(dx);
                let ey = cy.wrapping_add_signed(dy);
                tiles[ey * side + ex] = Tile::Wall;
            }
        }
    }

    // Corner posts sit at even-even coordinates; raise one wherever an
    // adjacent edge slot is walled
    for py in (0..side).step_by(2) {
        for px in (0..side).step_by(2) {
            let walled = [(1isize, 0isize), (-1, 0), (0, 1), (0, -1)]
                .into_iter()
                .filter_map(|(dx, dy)| {
                    let ex = px.checked_add_signed(dx)?;
                    let ey = py.checked_add_signed(dy)?;
                    (ex < side && ey < side).then(|| tiles[ey * side + ex])
                })
                .any(|tile| tile == Tile::Wall);
            if walled {
                tiles[py * side + px] = Tile::Wall;
            }
        }
    }

    (tiles, side)
}

/// Draws the finished grid to the terminal, highest row first so that `Up`
/// walls appear above their cell.
pub fn draw_maze(grid: &Grid, out: &mut impl Write) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let (tiles, side) = rasterize(grid);
    for y in (0..side).rev() {
        for x in 0..side {
            write!(out, "{}", tiles[y * side + x])?;
        }
        writeln!(out)?;
    }
    out.flush()
}
