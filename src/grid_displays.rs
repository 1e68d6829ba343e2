use fnv::FnvHashSet;
use std::fmt;

use crate::cells::Cell;
use crate::grid::MazeGrid;
use crate::pathing::Distances;

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cell) -> String {
        String::from("   ")
    }
}

/// Empty cell bodies, walls only.
#[derive(Debug, Copy, Clone)]
pub struct BlankDisplay;
impl GridDisplay for BlankDisplay {}

/// Distances over `0xfff` no longer fit in a cell body and render as `+++`.
impl GridDisplay for Distances {
    fn render_cell_body(&self, cell: Cell) -> String {
        if let Some(d) = self.distance_from_start_to(cell) {
            if d > 0xfff {
                String::from("+++")
            } else {
                // centre align, padding 3, lowercase hexadecimal
                format!("{:^3x}", d)
            }
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start: Cell,
    end: Cell,
}
impl StartEndPointsDisplay {
    pub fn new(start: Cell, end: Cell) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }

    /// Ball start in the top left, goal in the bottom right.
    pub fn corners(grid: &MazeGrid) -> StartEndPointsDisplay {
        StartEndPointsDisplay::new(grid.start_corner(), grid.goal_corner())
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        if cell == self.start {
            String::from(" S ")
        } else if cell == self.end {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_cells: FnvHashSet<Cell>,
    start_end: Option<StartEndPointsDisplay>,
}
impl PathDisplay {
    /// Marks the first and last cell of the path with `S` and `E`, the rest with dots.
    pub fn new(path: &[Cell]) -> Self {
        let start_end = match (path.first(), path.last()) {
            (Some(start), Some(end)) => Some(StartEndPointsDisplay::new(*start, *end)),
            _ => None,
        };
        PathDisplay {
            on_path_cells: path.iter().cloned().collect(),
            start_end,
        }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        let marker = self.start_end
            .as_ref()
            .map(|start_end| start_end.render_cell_body(cell))
            .filter(|body| body.trim() != "");
        if let Some(body) = marker {
            body
        } else if self.on_path_cells.contains(&cell) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

/// Text rendering of a maze with cell bodies supplied by a `GridDisplay`.
pub struct MazeText<'a> {
    grid: &'a MazeGrid,
    display: &'a dyn GridDisplay,
}

impl<'a> MazeText<'a> {
    pub fn new(grid: &'a MazeGrid, display: &'a dyn GridDisplay) -> MazeText<'a> {
        MazeText { grid, display }
    }

    // Is there a wall along the horizontal lattice line `line` (0 is the top border) over
    // `column`.
    fn horizontal_segment(&self, line: usize, column: usize) -> bool {
        let rows = self.grid.rows().0;
        line == 0 || line == rows || !self.grid.horizontal_open()[line - 1][column]
    }

    // Is there a wall along the vertical lattice line `line` (0 is the left border) beside
    // `row`.
    fn vertical_segment(&self, row: usize, line: usize) -> bool {
        let columns = self.grid.columns().0;
        line == 0 || line == columns || !self.grid.vertical_open()[row][line - 1]
    }

    fn junction(&self, row_line: usize, column_line: usize) -> &'static str {
        let (rows, columns) = (self.grid.rows().0, self.grid.columns().0);
        let left = column_line > 0 && self.horizontal_segment(row_line, column_line - 1);
        let right = column_line < columns && self.horizontal_segment(row_line, column_line);
        let up = row_line > 0 && self.vertical_segment(row_line - 1, column_line);
        let down = row_line < rows && self.vertical_segment(row_line, column_line);
        junction_glyph(left, right, up, down)
    }
}

fn junction_glyph(left: bool, right: bool, up: bool, down: bool) -> &'static str {
    match (left, right, up, down) {
        (true, true, true, true) => "┼",
        (true, true, true, false) => "┴",
        (true, true, false, true) => "┬",
        (true, false, true, true) => "┤",
        (false, true, true, true) => "├",
        (true, true, false, false) => "─",
        (false, false, true, true) => "│",
        (false, true, true, false) => "└",
        (true, false, false, true) => "┐",
        (true, false, true, false) => "┘",
        (false, true, false, true) => "┌",
        (true, false, false, false) => "╴",
        (false, true, false, false) => "╶",
        (false, false, true, false) => "╵",
        (false, false, false, true) => "╷",
        (false, false, false, false) => " ",
    }
}

impl<'a> fmt::Display for MazeText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_LR_3: &str = "───";
        const WALL_UD: &str = "│";

        let (rows, columns) = (self.grid.rows().0, self.grid.columns().0);
        let mut output = String::new();

        for row_line in 0..(rows + 1) {
            // Corners and the walls running between them.
            for column_line in 0..(columns + 1) {
                output.push_str(self.junction(row_line, column_line));
                if column_line < columns {
                    if self.horizontal_segment(row_line, column_line) {
                        output.push_str(WALL_LR_3);
                    } else {
                        output.push_str("   ");
                    }
                }
            }
            output.push('\n');

            // The cell bodies of the row below the line, with the walls between them.
            if row_line < rows {
                for column_line in 0..(columns + 1) {
                    if self.vertical_segment(row_line, column_line) {
                        output.push_str(WALL_UD);
                    } else {
                        output.push(' ');
                    }
                    if column_line < columns {
                        let body = self.display.render_cell_body(Cell::new(row_line, column_line));
                        output.push_str(&body);
                    }
                }
                output.push('\n');
            }
        }

        write!(f, "{}", output)
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", MazeText::new(self, &BlankDisplay))
    }
}
