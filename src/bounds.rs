//! Solid wall volumes for collision checks.
//!
//! A cell `(x, z)` occupies `[x, x + 1] x [z, z + 1]` on the floor plane, with walls standing
//! `WALL_HEIGHT` tall along the y axis. Each wall still present on a cell becomes a thin
//! axis aligned box on the matching edge, grown by `WALL_MARGIN` on x and z so that it has
//! some thickness to test points against.

use smallvec::SmallVec;

use crate::cells::{Direction, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;

pub const WALL_HEIGHT: f32 = 1.0;
pub const WALL_MARGIN: f32 = 0.1;

pub type BoundsSmallVec = SmallVec<[WallBounds; 4]>;

/// How a point relates to a box.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Containment {
    Disjoint,
    /// On a face, edge or corner.
    Intersects,
    /// Strictly inside.
    Contains,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Aabb {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Aabb {
    pub fn new(min: [f32; 3], max: [f32; 3]) -> Aabb {
        Aabb { min, max }
    }

    /// The box spanned by two opposite corners given in any order.
    pub fn from_corners(a: [f32; 3], b: [f32; 3]) -> Aabb {
        let mut min = a;
        let mut max = a;
        for axis in 0..3 {
            min[axis] = a[axis].min(b[axis]);
            max[axis] = a[axis].max(b[axis]);
        }
        Aabb { min, max }
    }

    /// A point with a NaN coordinate is never inside.
    pub fn contains(&self, point: [f32; 3]) -> Containment {
        let within = (0..3).all(|axis| {
            point[axis] >= self.min[axis] && point[axis] <= self.max[axis]
        });
        if !within {
            return Containment::Disjoint;
        }
        let on_boundary = (0..3).any(|axis| {
            point[axis] == self.min[axis] || point[axis] == self.max[axis]
        });
        if on_boundary {
            Containment::Intersects
        } else {
            Containment::Contains
        }
    }
}

/// The volume of one wall, tagged with the side of the cell it stands on.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct WallBounds {
    pub side: Direction,
    pub aabb: Aabb,
}

/// The un-inflated wall face for one side of the unit cell at `(x, z)`.
fn wall_face(x: f32, z: f32, side: Direction) -> Aabb {
    let (near, far) = match side {
        Direction::North => ([x, 0.0, z], [x + 1.0, WALL_HEIGHT, z]),
        Direction::East => ([x + 1.0, 0.0, z], [x + 1.0, WALL_HEIGHT, z + 1.0]),
        Direction::South => ([x, 0.0, z + 1.0], [x + 1.0, WALL_HEIGHT, z + 1.0]),
        Direction::West => ([x, 0.0, z], [x, WALL_HEIGHT, z + 1.0]),
    };
    Aabb::from_corners(near, far)
}

fn inflate(face: Aabb) -> Aabb {
    Aabb {
        min: [face.min[0] - WALL_MARGIN, face.min[1], face.min[2] - WALL_MARGIN],
        max: [face.max[0] + WALL_MARGIN, face.max[1], face.max[2] + WALL_MARGIN],
    }
}

/// The solid volumes a mover may not enter within the cell at `(x, z)`: one per wall the cell
/// still has, in North, East, South, West order. Fails if the coordinate is off the grid.
pub fn bounds_for_cell(grid: &Grid, x: usize, z: usize) -> Result<BoundsSmallVec> {
    let cell = grid.cell(GridCoordinate::new(x, z))?;
    let (fx, fz) = (x as f32, z as f32);

    Ok(cell.wall_directions()
        .iter()
        .map(|&side| {
            WallBounds {
                side,
                aabb: inflate(wall_face(fx, fz, side)),
            }
        })
        .collect())
}
