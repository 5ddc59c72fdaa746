use smallvec::SmallVec;
use std::convert::From;
use std::fmt;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: usize,
    pub z: usize,
}

impl GridCoordinate {
    pub fn new(x: usize, z: usize) -> GridCoordinate {
        GridCoordinate { x, z }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_width: usize) -> GridCoordinate {
        GridCoordinate::new(index % row_width, index / row_width)
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(x_z_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(x_z_pair.0, x_z_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type DirectionSmallVec = SmallVec<[Direction; 4]>;

/// The four sides of a cell. The discriminants are the wall flag indices, so a direction `d` and
/// `(d + 2) % 4` are always opposites.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North,
                                     Direction::East,
                                     Direction::South,
                                     Direction::West];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Direction {
        Direction::ALL[index % Direction::ALL.len()]
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        Direction::from_index(self.index() + 2)
    }

    /// Unit step `(dx, dz)` for this direction. North is towards smaller z.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Creates a new coordinate offset 1 cell away in this direction.
    /// Returns None if the coordinate is not representable (below zero), the upper grid
    /// boundary is left for the grid to check.
    pub fn offset_coordinate(self, coord: GridCoordinate) -> Option<GridCoordinate> {
        let GridCoordinate { x, z } = coord;
        match self {
            Direction::North => z.checked_sub(1).map(|z| GridCoordinate::new(x, z)),
            Direction::East => x.checked_add(1).map(|x| GridCoordinate::new(x, z)),
            Direction::South => z.checked_add(1).map(|z| GridCoordinate::new(x, z)),
            Direction::West => x.checked_sub(1).map(|x| GridCoordinate::new(x, z)),
        }
    }

    pub fn all() -> DirectionSmallVec {
        Direction::ALL.iter().cloned().collect()
    }
}

/// One unit square of the maze: four wall flags in North, East, South, West order plus the
/// generation-only visited mark.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    walls: [bool; 4],
    visited: bool,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            walls: [true; 4],
            visited: false,
        }
    }
}

impl Cell {
    #[inline]
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| wall).count()
    }

    /// The sides of this cell that still carry a wall, in North, East, South, West order.
    pub fn wall_directions(&self) -> DirectionSmallVec {
        Direction::ALL.iter()
            .cloned()
            .filter(|dir| self.has_wall(*dir))
            .collect()
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    #[inline]
    pub(crate) fn remove_wall(&mut self, dir: Direction) {
        self.walls[dir.index()] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_pair_up() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::West.opposite(), Direction::East);
        for dir in Direction::ALL.iter() {
            assert_eq!(dir.opposite().opposite(), *dir);
            assert_eq!(dir.opposite().index(), (dir.index() + 2) % 4);
        }
    }

    #[test]
    fn offsets_match_direction_indices() {
        let offsets = Direction::ALL.iter().map(|d| d.offset()).collect::<Vec<_>>();
        assert_eq!(offsets, vec![(0, -1), (1, 0), (0, 1), (-1, 0)]);
    }

    #[test]
    fn offset_coordinate_stops_below_zero() {
        let origin = GridCoordinate::new(0, 0);
        assert_eq!(Direction::North.offset_coordinate(origin), None);
        assert_eq!(Direction::West.offset_coordinate(origin), None);
        assert_eq!(Direction::East.offset_coordinate(origin),
                   Some(GridCoordinate::new(1, 0)));
        assert_eq!(Direction::South.offset_coordinate(origin),
                   Some(GridCoordinate::new(0, 1)));

        let gc = GridCoordinate::new(3, 5);
        assert_eq!(Direction::North.offset_coordinate(gc),
                   Some(GridCoordinate::new(3, 4)));
        assert_eq!(Direction::West.offset_coordinate(gc),
                   Some(GridCoordinate::new(2, 5)));
    }

    #[test]
    fn new_cell_is_fully_walled_and_unvisited() {
        let cell = Cell::default();
        assert_eq!(cell.walls(), [true, true, true, true]);
        assert_eq!(cell.wall_count(), 4);
        assert!(!cell.is_visited());
        assert_eq!(&*cell.wall_directions(), &Direction::ALL[..]);
    }

    #[test]
    fn removing_walls() {
        let mut cell = Cell::default();
        cell.remove_wall(Direction::East);
        cell.remove_wall(Direction::North);
        assert_eq!(cell.walls(), [false, false, true, true]);
        assert!(!cell.has_wall(Direction::East));
        assert!(cell.has_wall(Direction::West));
        assert_eq!(cell.wall_count(), 2);
        assert_eq!(&*cell.wall_directions(), &[Direction::South, Direction::West]);
    }

    #[test]
    fn row_major_index_to_coordinate() {
        assert_eq!(GridCoordinate::from_row_major_index(0, 4), GridCoordinate::new(0, 0));
        assert_eq!(GridCoordinate::from_row_major_index(5, 4), GridCoordinate::new(1, 1));
        assert_eq!(GridCoordinate::from_row_major_index(11, 4), GridCoordinate::new(3, 2));
        assert_eq!(GridCoordinate::from((2, 7)), GridCoordinate::new(2, 7));
    }
}
