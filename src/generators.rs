use error_chain::bail;
use log::{debug, trace};
use rand::Rng;

use crate::cells::{Cell, CompassPrimary, DirectionSmallVec};
use crate::errors::*;
use crate::grid::MazeGrid;
use crate::shuffle::shuffle;
use crate::units::{ColumnsCount, RowsCount};
use crate::validation;

/// Decides the order in which a cell's four candidate neighbours are tried.
///
/// This is the only source of variety in a generated maze.
pub trait NeighbourOrdering {
    fn order(&mut self, candidates: &mut [CompassPrimary]);
}

/// Uniformly random candidate order drawn from `rng`.
#[derive(Debug)]
pub struct RandomOrdering<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RandomOrdering<'a, R> {
    pub fn new(rng: &'a mut R) -> RandomOrdering<'a, R> {
        RandomOrdering { rng }
    }
}

impl<'a, R: Rng + ?Sized> NeighbourOrdering for RandomOrdering<'a, R> {
    fn order(&mut self, candidates: &mut [CompassPrimary]) {
        shuffle(candidates, &mut *self.rng);
    }
}

/// The same priority order at every cell. With no randomness the carve degenerates
/// into long serpentine corridors, but it is handy for reproducible fixtures.
#[derive(Debug, Copy, Clone)]
pub struct FixedOrdering {
    priority: [CompassPrimary; 4],
}

impl FixedOrdering {
    pub fn new(priority: [CompassPrimary; 4]) -> FixedOrdering {
        FixedOrdering { priority }
    }

    fn rank(&self, direction: CompassPrimary) -> usize {
        self.priority
            .iter()
            .position(|d| *d == direction)
            .unwrap_or_else(|| self.priority.len())
    }
}

impl NeighbourOrdering for FixedOrdering {
    fn order(&mut self, candidates: &mut [CompassPrimary]) {
        candidates.sort_by_key(|direction| self.rank(*direction));
    }
}

/// Where the carve begins.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum StartCell {
    /// Uniformly random cell, drawn from the same random source as the carve.
    Random,
    At(Cell),
}

impl Default for StartCell {
    fn default() -> StartCell {
        StartCell::Random
    }
}

// One suspended visit: the cell, its candidates in the order they are to be tried and
// how many of them have been tried so far.
#[derive(Debug)]
struct Frame {
    cell: Cell,
    candidates: DirectionSmallVec,
    next: usize,
}

impl Frame {
    fn next_candidate(&mut self) -> Option<CompassPrimary> {
        let candidate = self.candidates.get(self.next).cloned();
        if candidate.is_some() {
            self.next += 1;
        }
        candidate
    }
}

/// Carve a perfect maze into a fresh grid using the randomized recursive backtracker.
///
/// From a cell we try each of its neighbours in the order chosen by `ordering`. A neighbour
/// that is off the grid or already visited is skipped, otherwise the wall to it is opened and
/// we continue from that neighbour, returning to try the remaining candidates once
/// everything reachable from it has been carved.
///
/// The pending visits live on a heap allocated stack rather than the call stack, so large
/// grids cannot overflow it. The walls opened, and the order in which `ordering` is asked to
/// order candidates, are exactly those of the directly recursive formulation.
///
/// A start cell outside the grid is rejected before anything is mutated.
pub fn recursive_backtracker<O>(grid: &mut MazeGrid, start: Cell, ordering: &mut O) -> Result<()>
    where O: NeighbourOrdering + ?Sized
{
    if !grid.is_valid_cell(start) {
        let (RowsCount(rows), ColumnsCount(columns)) = (grid.rows(), grid.columns());
        bail!(ErrorKind::StartOutOfBounds(start.row, start.column, rows, columns));
    }
    debug!("carving {} x {} maze from {}", grid.rows().0, grid.columns().0, start);

    let mut stack: Vec<Frame> = Vec::new();
    if let Some(frame) = enter_cell(grid, start, ordering) {
        stack.push(frame);
    }

    while let Some(frame) = stack.last_mut() {
        let cell = frame.cell;
        let direction = match frame.next_candidate() {
            Some(direction) => direction,
            None => {
                stack.pop();
                continue;
            }
        };

        let neighbour = match grid.neighbour_at_direction(cell, direction) {
            Some(neighbour) if !grid.is_visited(neighbour) => neighbour,
            _ => continue,
        };

        grid.open_wall(cell, direction);
        trace!("opened wall {} -> {} ({:?})", cell, neighbour, direction);

        if let Some(next_frame) = enter_cell(grid, neighbour, ordering) {
            stack.push(next_frame);
        }
    }

    debug!("carved {} open walls", grid.open_walls_count());
    Ok(())
}

// Returns None for a cell that was already visited, which ends that branch of the carve.
fn enter_cell<O>(grid: &mut MazeGrid, cell: Cell, ordering: &mut O) -> Option<Frame>
    where O: NeighbourOrdering + ?Sized
{
    if grid.is_visited(cell) {
        return None;
    }
    grid.mark_visited(cell);

    let mut candidates = CompassPrimary::offset_directions();
    ordering.order(&mut candidates);

    Some(Frame {
        cell,
        candidates,
        next: 0,
    })
}

/// Allocate a `rows` x `columns` grid, pick the start cell and carve a perfect maze,
/// all randomness being drawn from `rng`.
///
/// The finished grid is checked to be a spanning tree before it is handed back.
pub fn generate_maze<R>(rows: RowsCount,
                        columns: ColumnsCount,
                        start: StartCell,
                        rng: &mut R)
                        -> Result<MazeGrid>
    where R: Rng + ?Sized
{
    let mut grid = MazeGrid::new(rows, columns)?;
    let start_cell = match start {
        StartCell::Random => grid.random_cell(rng),
        StartCell::At(cell) => cell,
    };

    recursive_backtracker(&mut grid, start_cell, &mut RandomOrdering::new(rng))?;
    validation::verify_perfect_maze(&grid)?;
    Ok(grid)
}

/// As `generate_maze` but with a caller supplied neighbour ordering and start cell.
pub fn generate_maze_with_ordering<O>(rows: RowsCount,
                                      columns: ColumnsCount,
                                      start: Cell,
                                      ordering: &mut O)
                                      -> Result<MazeGrid>
    where O: NeighbourOrdering + ?Sized
{
    let mut grid = MazeGrid::new(rows, columns)?;
    recursive_backtracker(&mut grid, start, ordering)?;
    validation::verify_perfect_maze(&grid)?;
    Ok(grid)
}
