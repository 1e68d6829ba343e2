use error_chain::bail;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::errors::*;
use crate::grid::MazeGrid;

/// The maze as an undirected graph: one node per cell in row major order, one edge per
/// open wall.
pub fn passage_graph(grid: &MazeGrid) -> UnGraph<(), ()> {
    let columns = grid.columns().0;
    let mut graph = UnGraph::with_capacity(grid.size(), grid.open_walls_count());
    for _ in 0..grid.size() {
        let _ = graph.add_node(());
    }
    for (a, b) in grid.iter_open_walls() {
        let _ = graph.add_edge(NodeIndex::new(a.row_major_index(columns)),
                               NodeIndex::new(b.row_major_index(columns)),
                               ());
    }
    graph
}

/// Is the graph of open walls a spanning tree of the grid: every cell reachable and
/// exactly `size - 1` open walls, so no loops.
pub fn is_spanning_tree(grid: &MazeGrid) -> bool {
    let graph = passage_graph(grid);
    graph.edge_count() == grid.size() - 1 && connected_components(&graph) == 1
}

/// Check the post-conditions of a finished carve.
///
/// Failing any of these is a bug in the generator, not a user error.
pub fn verify_perfect_maze(grid: &MazeGrid) -> Result<()> {
    if !grid.is_fully_visited() {
        let unvisited = grid.iter().filter(|cell| !grid.is_visited(*cell)).count();
        bail!(ErrorKind::InvariantViolation(format!("{} cells never visited", unvisited)));
    }

    let open = grid.open_walls_count();
    let expected = grid.spanning_tree_edges().0;
    if open != expected {
        bail!(ErrorKind::InvariantViolation(format!("{} open walls, expected {}", open, expected)));
    }

    if !is_spanning_tree(grid) {
        bail!(ErrorKind::InvariantViolation(String::from("open walls do not connect every cell")));
    }

    Ok(())
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::{Cell, CompassPrimary};
    use crate::units::{ColumnsCount, RowsCount};

    fn grid(rows: usize, columns: usize) -> MazeGrid {
        MazeGrid::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
    }

    fn visit_all(g: &mut MazeGrid) {
        for cell in g.iter() {
            g.mark_visited(cell);
        }
    }

    fn is_invariant_violation(result: Result<()>) -> bool {
        match result {
            Err(Error(ErrorKind::InvariantViolation(_), _)) => true,
            _ => false,
        }
    }

    #[test]
    fn single_cell_is_a_spanning_tree() {
        let mut g = grid(1, 1);
        assert!(is_spanning_tree(&g));
        assert!(is_invariant_violation(verify_perfect_maze(&g)));
        visit_all(&mut g);
        assert!(verify_perfect_maze(&g).is_ok());
    }

    #[test]
    fn graph_mirrors_open_walls() {
        let mut g = grid(2, 3);
        g.open_wall(Cell::new(0, 0), CompassPrimary::East);
        g.open_wall(Cell::new(1, 2), CompassPrimary::North);
        let graph = passage_graph(&g);
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.find_edge(NodeIndex::new(0), NodeIndex::new(1)).is_some());
        assert!(graph.find_edge(NodeIndex::new(2), NodeIndex::new(5)).is_some());
    }

    #[test]
    fn a_loop_is_not_a_spanning_tree() {
        let mut g = grid(2, 2);
        visit_all(&mut g);
        g.open_wall(Cell::new(0, 0), CompassPrimary::East);
        g.open_wall(Cell::new(0, 0), CompassPrimary::South);
        g.open_wall(Cell::new(1, 1), CompassPrimary::North);
        assert!(is_spanning_tree(&g));

        g.open_wall(Cell::new(1, 1), CompassPrimary::West);
        assert!(!is_spanning_tree(&g));
        assert!(is_invariant_violation(verify_perfect_maze(&g)));
    }

    #[test]
    fn disconnected_walls_are_not_a_spanning_tree() {
        let mut g = grid(2, 3);
        visit_all(&mut g);
        // a 4-cycle on the left plus an isolated right column: 5 edges, 2 components
        g.open_wall(Cell::new(0, 0), CompassPrimary::East);
        g.open_wall(Cell::new(0, 0), CompassPrimary::South);
        g.open_wall(Cell::new(1, 1), CompassPrimary::North);
        g.open_wall(Cell::new(1, 1), CompassPrimary::West);
        g.open_wall(Cell::new(0, 2), CompassPrimary::South);
        assert_eq!(g.open_walls_count(), g.size() - 1);
        assert!(!is_spanning_tree(&g));
        assert!(is_invariant_violation(verify_perfect_maze(&g)));
    }
}
