use error_chain::bail;
use rand::Rng;

use crate::cells::{Cell, CellSmallVec, CompassPrimary};
use crate::errors::*;
use crate::units::{ColumnIndex, ColumnsCount, EdgesCount, RowIndex, RowsCount};

/// The three boolean grids describing one maze.
///
/// - `visited[rows][columns]`: has the generator carved through the cell.
/// - `vertical_open[rows][columns - 1]`: is the wall between `(row, column)` and
///   `(row, column + 1)` open.
/// - `horizontal_open[rows - 1][columns]`: is the wall between `(row, column)` and
///   `(row + 1, column)` open.
///
/// Everything starts false (unvisited, every wall present).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MazeGrid {
    rows: usize,
    columns: usize,
    visited: Vec<Vec<bool>>,
    vertical_open: Vec<Vec<bool>>,
    horizontal_open: Vec<Vec<bool>>,
}

/// Which wall grid entry sits between a cell and its neighbour.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallSlot {
    Vertical(RowIndex, ColumnIndex),
    Horizontal(RowIndex, ColumnIndex),
}

impl MazeGrid {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<MazeGrid> {
        let (RowsCount(rows), ColumnsCount(columns)) = (rows, columns);
        if rows == 0 || columns == 0 {
            bail!(ErrorKind::InvalidDimensions(rows, columns));
        }

        Ok(MazeGrid {
            rows,
            columns,
            visited: vec![vec![false; columns]; rows],
            vertical_open: vec![vec![false; columns - 1]; rows],
            horizontal_open: vec![vec![false; columns]; rows - 1],
        })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.rows)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.columns)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    /// The number of open walls a perfect maze of this size has.
    #[inline]
    pub fn spanning_tree_edges(&self) -> EdgesCount {
        EdgesCount(self.size() - 1)
    }

    pub fn visited(&self) -> &[Vec<bool>] {
        &self.visited
    }

    pub fn vertical_open(&self) -> &[Vec<bool>] {
        &self.vertical_open
    }

    pub fn horizontal_open(&self) -> &[Vec<bool>] {
        &self.horizontal_open
    }

    /// Panics if the cell is outside the grid.
    #[inline]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited[cell.row][cell.column]
    }

    /// Panics if the cell is outside the grid.
    #[inline]
    pub fn mark_visited(&mut self, cell: Cell) {
        self.visited[cell.row][cell.column] = true;
    }

    /// Panics unless `row < rows` and `column < columns - 1`.
    #[inline]
    pub fn is_vertical_open(&self, row: RowIndex, column: ColumnIndex) -> bool {
        self.vertical_open[row.0][column.0]
    }

    #[inline]
    pub fn open_vertical(&mut self, row: RowIndex, column: ColumnIndex) {
        self.vertical_open[row.0][column.0] = true;
    }

    /// Panics unless `row < rows - 1` and `column < columns`.
    #[inline]
    pub fn is_horizontal_open(&self, row: RowIndex, column: ColumnIndex) -> bool {
        self.horizontal_open[row.0][column.0]
    }

    #[inline]
    pub fn open_horizontal(&mut self, row: RowIndex, column: ColumnIndex) {
        self.horizontal_open[row.0][column.0] = true;
    }

    /// Is the cell within this grid's dimensions
    #[inline]
    pub fn is_valid_cell(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    pub fn neighbour_at_direction(&self, cell: Cell, direction: CompassPrimary) -> Option<Cell> {
        cell.offset(direction).filter(|neighbour| self.is_valid_cell(*neighbour))
    }

    /// Cells up, right, down or left of `cell`, linked or not.
    pub fn neighbours(&self, cell: Cell) -> CellSmallVec {
        CompassPrimary::ALL.iter()
            .filter_map(|dir| self.neighbour_at_direction(cell, *dir))
            .collect()
    }

    /// The wall grid entry between `cell` and its neighbour in `direction`, None if that
    /// neighbour is off the grid.
    pub fn wall_slot(&self, cell: Cell, direction: CompassPrimary) -> Option<WallSlot> {
        self.neighbour_at_direction(cell, direction)?;
        let (row, column) = (cell.row, cell.column);
        let slot = match direction {
            CompassPrimary::West => WallSlot::Vertical(RowIndex(row), ColumnIndex(column - 1)),
            CompassPrimary::East => WallSlot::Vertical(RowIndex(row), ColumnIndex(column)),
            CompassPrimary::North => WallSlot::Horizontal(RowIndex(row - 1), ColumnIndex(column)),
            CompassPrimary::South => WallSlot::Horizontal(RowIndex(row), ColumnIndex(column)),
        };
        Some(slot)
    }

    /// Remove the wall between `cell` and its neighbour in `direction`.
    ///
    /// Returns the neighbour, or None (and changes nothing) if there is no neighbour there.
    pub fn open_wall(&mut self, cell: Cell, direction: CompassPrimary) -> Option<Cell> {
        let slot = self.wall_slot(cell, direction)?;
        match slot {
            WallSlot::Vertical(row, column) => self.open_vertical(row, column),
            WallSlot::Horizontal(row, column) => self.open_horizontal(row, column),
        }
        cell.offset(direction)
    }

    /// Can you walk from `cell` to its neighbour in `direction`?
    pub fn is_passage_open(&self, cell: Cell, direction: CompassPrimary) -> bool {
        match self.wall_slot(cell, direction) {
            Some(WallSlot::Vertical(row, column)) => self.is_vertical_open(row, column),
            Some(WallSlot::Horizontal(row, column)) => self.is_horizontal_open(row, column),
            None => false,
        }
    }

    /// Cells linked to `cell` by an open wall.
    pub fn links(&self, cell: Cell) -> CellSmallVec {
        CompassPrimary::ALL.iter()
            .filter(|dir| self.is_passage_open(cell, **dir))
            .filter_map(|dir| cell.offset(*dir))
            .collect()
    }

    pub fn is_linked(&self, a: Cell, b: Cell) -> bool {
        CompassPrimary::ALL.iter()
            .any(|dir| self.neighbour_at_direction(a, *dir) == Some(b) &&
                       self.is_passage_open(a, *dir))
    }

    pub fn open_walls_count(&self) -> usize {
        let count_open = |walls: &Vec<Vec<bool>>| -> usize {
            walls.iter().map(|row| row.iter().filter(|open| **open).count()).sum()
        };
        count_open(&self.vertical_open) + count_open(&self.horizontal_open)
    }

    pub fn is_fully_visited(&self) -> bool {
        self.visited.iter().all(|row| row.iter().all(|v| *v))
    }

    /// Every open wall as the pair of cells it joins, vertical walls first, row major.
    pub fn iter_open_walls<'a>(&'a self) -> impl Iterator<Item = (Cell, Cell)> + 'a {
        let verticals = self.vertical_open.iter().enumerate().flat_map(|(row, walls)| {
            walls.iter()
                .enumerate()
                .filter(|&(_, open)| *open)
                .map(move |(column, _)| (Cell::new(row, column), Cell::new(row, column + 1)))
        });
        let horizontals = self.horizontal_open.iter().enumerate().flat_map(|(row, walls)| {
            walls.iter()
                .enumerate()
                .filter(|&(_, open)| *open)
                .map(move |(column, _)| (Cell::new(row, column), Cell::new(row + 1, column)))
        });
        verticals.chain(horizontals)
    }

    /// The maze as text: line 1 is `vertices edges`, then one `a b` line per open wall
    /// using 1-based row major cell numbers, in `iter_open_walls` order.
    pub fn edge_list(&self) -> String {
        let mut graph_data = String::new();
        graph_data.push_str(&format!("{} {}\n", self.size(), self.open_walls_count()));

        for (src, dst) in self.iter_open_walls() {
            let src_as_1_based_index = src.row_major_index(self.columns) + 1;
            let dst_as_1_based_index = dst.row_major_index(self.columns) + 1;
            graph_data.push_str(&format!("{} {}\n", src_as_1_based_index, dst_as_1_based_index));
        }
        graph_data
    }

    /// Row major iteration over every cell.
    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            cells_count: self.size(),
            columns: self.columns,
        }
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.rows), rng.gen_range(0..self.columns))
    }

    /// The ball starts in the top left cell.
    pub fn start_corner(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// The goal sits in the bottom right cell.
    pub fn goal_corner(&self) -> Cell {
        Cell::new(self.rows - 1, self.columns - 1)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    cells_count: usize,
    columns: usize,
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Cell;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let cell = Cell::from_row_major_index(self.current_cell_number, self.columns);
            self.current_cell_number += 1;
            Some(cell)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

impl<'a> IntoIterator for &'a MazeGrid {
    type Item = Cell;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
