use fnv::FnvHashMap;
use itertools::Itertools;
use smallvec::SmallVec;

use crate::cells::Cell;
use crate::grid::MazeGrid;


/// Step counts from a start cell to every cell reachable through open walls.
#[derive(Debug, Clone)]
pub struct Distances {
    start: Cell,
    distances: FnvHashMap<Cell, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill outwards from `start`. Returns None if `start` is not on the grid.
    pub fn new(grid: &MazeGrid, start: Cell) -> Option<Distances> {

        if !grid.is_valid_cell(start) {
            return None;
        }

        let mut max = 0;
        let mut distances = FnvHashMap::with_capacity_and_hasher(grid.size(), Default::default());
        distances.insert(start, 0);

        // Every step costs one, so the first time a cell is reached is the shortest route to
        // it and the map doubles as the visited set.
        let mut frontier = vec![start];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell in &frontier {
                let distance_to_cell = distances[cell];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for link in grid.links(*cell).iter() {
                    if !distances.contains_key(link) {
                        distances.insert(*link, distance_to_cell + 1);
                        new_frontier.push(*link);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, cell: Cell) -> Option<u32> {
        self.distances.get(&cell).cloned()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Cells at the maximum distance, row major.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[Cell; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(cell, _)| *cell)
            .sorted()
            .collect()
    }
}

/// Walk back from `end` towards the start of `distances_from_start`, always stepping to the
/// linked neighbour one closer. Returns the cells from start to end inclusive, or None if
/// `end` cannot be reached.
pub fn shortest_path(grid: &MazeGrid,
                     distances_from_start: &Distances,
                     end: Cell)
                     -> Option<Vec<Cell>> {

    let mut current_distance = distances_from_start.distance_from_start_to(end)?;
    let mut path = vec![end];
    let mut current = end;

    while current != distances_from_start.start() {
        let closer = grid.links(current)
            .iter()
            .cloned()
            .find(|link| {
                distances_from_start.distance_from_start_to(*link) == Some(current_distance - 1)
            })?;

        current = closer;
        current_distance -= 1;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// The route from the ball's start corner to the goal corner.
pub fn solve(grid: &MazeGrid) -> Option<Vec<Cell>> {
    let distances = Distances::new(grid, grid.start_corner())?;
    shortest_path(grid, &distances, grid.goal_corner())
}

/// The longest route in the maze: the cell furthest from an arbitrary start is one end of
/// it, the cell furthest from that is the other. Only holds for perfect mazes.
pub fn longest_path(grid: &MazeGrid) -> Option<Vec<Cell>> {
    let first_distances = Distances::new(grid, Cell::new(0, 0))?;
    let long_path_start = *first_distances.furthest_points_on_grid().first()?;

    let distances_from_start = Distances::new(grid, long_path_start)?;
    let end = *distances_from_start.furthest_points_on_grid().first()?;

    shortest_path(grid, &distances_from_start, end)
}
