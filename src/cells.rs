use smallvec::SmallVec;
use std::fmt;

/// A position in the maze. Carries no payload, it is purely an index into the grids.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

pub type CellSmallVec = SmallVec<[Cell; 4]>;
pub type DirectionSmallVec = SmallVec<[CompassPrimary; 4]>;

impl Cell {
    pub fn new(row: usize, column: usize) -> Cell {
        Cell { row, column }
    }

    /// Convert a one dimensional row major index into a cell for a grid `columns` wide.
    #[inline]
    pub fn from_row_major_index(index: usize, columns: usize) -> Cell {
        Cell::new(index / columns, index % columns)
    }

    #[inline]
    pub fn row_major_index(&self, columns: usize) -> usize {
        self.row * columns + self.column
    }

    /// The cell one step away in `dir`.
    ///
    /// Returns None if that would leave the non-negative quadrant. Whether the cell is
    /// inside a particular grid is for the grid to decide.
    pub fn offset(&self, dir: CompassPrimary) -> Option<Cell> {
        let (row, column) = (self.row, self.column);
        match dir {
            CompassPrimary::North => {
                if row > 0 {
                    Some(Cell::new(row - 1, column))
                } else {
                    None
                }
            }
            CompassPrimary::South => Some(Cell::new(row + 1, column)),
            CompassPrimary::East => Some(Cell::new(row, column + 1)),
            CompassPrimary::West => {
                if column > 0 {
                    Some(Cell::new(row, column - 1))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// North is up (row - 1), East is right (column + 1), South is down (row + 1) and West is
/// left (column - 1).
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    /// Candidate order before any shuffling: up, right, down, left.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    pub fn offset_directions() -> DirectionSmallVec {
        CompassPrimary::ALL.iter().cloned().collect()
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn offsets_in_every_direction() {
        let c = Cell::new(3, 5);
        assert_eq!(c.offset(CompassPrimary::North), Some(Cell::new(2, 5)));
        assert_eq!(c.offset(CompassPrimary::East), Some(Cell::new(3, 6)));
        assert_eq!(c.offset(CompassPrimary::South), Some(Cell::new(4, 5)));
        assert_eq!(c.offset(CompassPrimary::West), Some(Cell::new(3, 4)));
    }

    #[test]
    fn offsets_do_not_underflow() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.offset(CompassPrimary::North), None);
        assert_eq!(origin.offset(CompassPrimary::West), None);
        assert_eq!(origin.offset(CompassPrimary::South), Some(Cell::new(1, 0)));
        assert_eq!(origin.offset(CompassPrimary::East), Some(Cell::new(0, 1)));
    }

    #[test]
    fn opposite_directions_undo_an_offset() {
        let c = Cell::new(4, 4);
        for &dir in CompassPrimary::ALL.iter() {
            let there = c.offset(dir).unwrap();
            assert_eq!(there.offset(dir.opposite()), Some(c));
        }
    }

    #[test]
    fn row_major_index_round_trip() {
        let columns = 7;
        for index in 0..42 {
            let c = Cell::from_row_major_index(index, columns);
            assert!(c.column < columns);
            assert_eq!(c.row_major_index(columns), index);
        }
        assert_eq!(Cell::from_row_major_index(8, columns), Cell::new(1, 1));
    }

    #[test]
    fn default_candidate_order() {
        assert_eq!(&*CompassPrimary::offset_directions(),
                   &[CompassPrimary::North,
                     CompassPrimary::East,
                     CompassPrimary::South,
                     CompassPrimary::West]);
    }
}
