use itertools::Itertools;
use smallvec::SmallVec;

use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::utils;
use crate::utils::FnvHashMap;

/// Flood fill step counts from a start cell to every cell reachable through open passages.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Returns None if the start coordinate is not on the grid.
    pub fn new(grid: &Grid, start_coordinate: GridCoordinate) -> Option<Distances> {
        if !grid.is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max: u32 = 0;
        let mut distances: FnvHashMap<GridCoordinate, u32> = utils::fnv_hashmap(grid.size());
        distances.insert(start_coordinate, 0);

        // Every passage is one step, so the first time a cell is reached is also its shortest
        // distance. The distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                let distance_to_cell = distances[cell_coord];
                max = max.max(distance_to_cell);

                for link_coordinate in grid.links(*cell_coord).unwrap_or_default() {
                    if !distances.contains_key(&link_coordinate) {
                        distances.insert(link_coordinate, distance_to_cell + 1);
                        new_frontier.push(link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// None for unreachable or invalid coordinates.
    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// Number of cells reachable from the start, the start included.
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// The cells at the maximum distance, in row major order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[GridCoordinate; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .sorted_by_key(|coord| (coord.z, coord.x))
            .collect()
    }
}

/// Walk back from `end_point` towards the start of `distances_from_start`, always stepping to a
/// linked neighbour one closer. Returns the path start first, or None if the end is unreachable.
pub fn shortest_path(grid: &Grid,
                     distances_from_start: &Distances,
                     end_point: GridCoordinate)
                     -> Option<Vec<GridCoordinate>> {

    // The end point must be reachable from start.
    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {
        let closer = grid.links(current_coord)?
            .iter()
            .cloned()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(coord).map(|d| (coord, d))
            })
            .min_by_key(|&(_, distance)| distance);

        match closer {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance => {
                current_coord = closer_coord;
                current_distance = closer_distance;
                path.push(current_coord);
            }
            // Distances were not computed on this grid.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The longest path in the maze: the furthest cell from an arbitrary start is one end of it,
/// the furthest cell from that is the other. Exact on perfect mazes.
pub fn longest_path(grid: &Grid) -> Option<Vec<GridCoordinate>> {
    let first_distances = Distances::new(grid, GridCoordinate::new(0, 0))?;
    let long_path_start_coordinate = *first_distances.furthest_points_on_grid().first()?;

    let distances_from_start = Distances::new(grid, long_path_start_coordinate)?;
    let end_point = *distances_from_start.furthest_points_on_grid().first()?;

    shortest_path(grid, &distances_from_start, end_point)
}

/// A spanning tree of open passages: every cell reachable from `(0, 0)` and exactly
/// `size - 1` passages, so no cycles.
pub fn is_perfect_maze(grid: &Grid) -> bool {
    let all_reachable = Distances::new(grid, GridCoordinate::new(0, 0))
        .map_or(false, |d| d.reachable_count() == grid.size());
    all_reachable && grid.passages_count() == grid.size() - 1
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::cells::Direction;
    use crate::generators;
    use crate::units::{Height, Width};

    static OUT_OF_GRID_COORDINATE: GridCoordinate = GridCoordinate {
        x: usize::MAX,
        z: usize::MAX,
    };

    fn grid(w: usize, h: usize) -> Grid {
        Grid::new(Width(w), Height(h)).unwrap()
    }

    // Every passage of a 2x2 grid open: a cycle, so not a perfect maze.
    fn open_square() -> Grid {
        let mut g = grid(2, 2);
        let gc = |x, z| GridCoordinate::new(x, z);
        g.carve_passage(gc(0, 0), Direction::East).unwrap();
        g.carve_passage(gc(0, 0), Direction::South).unwrap();
        g.carve_passage(gc(1, 0), Direction::South).unwrap();
        g.carve_passage(gc(0, 1), Direction::East).unwrap();
        g
    }

    #[test]
    fn distances_construction_requires_valid_start_coordinate() {
        let g = grid(3, 3);
        assert!(Distances::new(&g, OUT_OF_GRID_COORDINATE).is_none());
    }

    #[test]
    fn start() {
        let g = grid(3, 3);
        let start_coordinate = GridCoordinate::new(1, 1);
        let distances = Distances::new(&g, start_coordinate).unwrap();
        assert_eq!(start_coordinate, distances.start());
    }

    #[test]
    fn distances_to_unreachable_cells_is_none() {
        let g = grid(3, 3);
        let start_coordinate = GridCoordinate::new(0, 0);
        let distances = Distances::new(&g, start_coordinate).unwrap();
        for coord in g.iter() {
            let d = distances.distance_from_start_to(coord);
            if coord != start_coordinate {
                assert!(d.is_none());
            } else {
                assert_eq!(d, Some(0));
            }
        }
        assert_eq!(distances.reachable_count(), 1);
        assert_eq!(distances.distance_from_start_to(OUT_OF_GRID_COORDINATE), None);
    }

    #[test]
    fn distances_on_open_grid() {
        let g = open_square();
        let gc = |x, z| GridCoordinate::new(x, z);
        let distances = Distances::new(&g, gc(0, 0)).unwrap();

        assert_eq!(distances.distance_from_start_to(gc(0, 0)), Some(0));
        assert_eq!(distances.distance_from_start_to(gc(1, 0)), Some(1));
        assert_eq!(distances.distance_from_start_to(gc(0, 1)), Some(1));
        assert_eq!(distances.distance_from_start_to(gc(1, 1)), Some(2));
        assert_eq!(distances.max(), 2);
        assert_eq!(&*distances.furthest_points_on_grid(), &[gc(1, 1)]);
    }

    #[test]
    fn open_square_is_connected_but_not_perfect() {
        let g = open_square();
        assert_eq!(Distances::new(&g, GridCoordinate::new(0, 0)).unwrap().reachable_count(), 4);
        assert!(!is_perfect_maze(&g));
        assert!(!is_perfect_maze(&grid(2, 2)));
        assert!(is_perfect_maze(&grid(1, 1)));
    }

    #[test]
    fn shortest_path_follows_passages() {
        let mut g = grid(3, 2);
        let gc = |x, z| GridCoordinate::new(x, z);
        // A 'U' shape: (0,1) up to (0,0), across to (2,0), down to (2,1)
        g.carve_passage(gc(0, 1), Direction::North).unwrap();
        g.carve_passage(gc(0, 0), Direction::East).unwrap();
        g.carve_passage(gc(1, 0), Direction::East).unwrap();
        g.carve_passage(gc(2, 0), Direction::South).unwrap();

        let distances = Distances::new(&g, gc(0, 1)).unwrap();
        assert_eq!(shortest_path(&g, &distances, gc(2, 1)),
                   Some(vec![gc(0, 1), gc(0, 0), gc(1, 0), gc(2, 0), gc(2, 1)]));
        assert_eq!(shortest_path(&g, &distances, gc(0, 1)), Some(vec![gc(0, 1)]));
        // (1, 1) is walled in
        assert_eq!(shortest_path(&g, &distances, gc(1, 1)), None);

        assert_eq!(longest_path(&g).map(|p| p.len()), Some(5));
    }

    #[test]
    fn longest_path_spans_generated_maze() {
        let mut g = grid(8, 8);
        let mut rng = XorShiftRng::seed_from_u64(3);
        generators::recursive_backtracker(&mut g, &mut rng).unwrap();

        let path = longest_path(&g).unwrap();
        let start_distances = Distances::new(&g, path[0]).unwrap();
        assert_eq!(path.len() as u32, start_distances.max() + 1);
        for pair in path.windows(2) {
            assert!(g.links(pair[0]).unwrap().contains(&pair[1]));
        }
    }
}
