//! Cubie definitions and coordinate types.
//!
//! The cube is a 3x3x3 lattice of unit cells with the center cell missing,
//! leaving 26 cubies. Each cubie carries a fixed color per outward direction,
//! assigned once at construction from its position on the outer shell; only
//! its position and orientation change afterwards.

use glam::{Quat, Vec3};

/// A 3D lattice coordinate, each component in -1..=1.
pub type Coord = (i32, i32, i32);

/// Edge length of one cubie.
pub const CUBIE_SIZE: f32 = 1.0;

/// Gap between neighboring cubies.
pub const CUBIE_GAP: f32 = 0.05;

/// Center-to-center distance between lattice neighbors.
pub const SPACING: f32 = CUBIE_SIZE + CUBIE_GAP;

/// Number of cubies (3^3 minus the hidden center).
pub const CUBIE_COUNT: usize = 26;

/// Sticker color of one cubie face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceColor {
    White,
    Yellow,
    Blue,
    Green,
    Red,
    Orange,
    /// Dark filler for faces that point into the cube.
    Interior,
}

impl FaceColor {
    /// Single-letter form used by the text net.
    pub fn letter(self) -> char {
        match self {
            FaceColor::White => 'W',
            FaceColor::Yellow => 'Y',
            FaceColor::Blue => 'B',
            FaceColor::Green => 'G',
            FaceColor::Red => 'R',
            FaceColor::Orange => 'O',
            FaceColor::Interior => '.',
        }
    }
}

/// The six outward directions in box-face order: +X, -X, +Y, -Y, +Z, -Z.
pub const FACE_DIRECTIONS: [Coord; 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Shell colors by direction index: red right, orange left, white top,
/// yellow bottom, blue front, green back.
pub const SHELL_COLORS: [FaceColor; 6] = [
    FaceColor::Red,
    FaceColor::Orange,
    FaceColor::White,
    FaceColor::Yellow,
    FaceColor::Blue,
    FaceColor::Green,
];

/// Index of a principal direction in [`FACE_DIRECTIONS`].
pub fn direction_index(dir: Coord) -> Option<usize> {
    FACE_DIRECTIONS.iter().position(|&d| d == dir)
}

/// Continuous position of a lattice point.
pub fn lattice_position(coord: Coord) -> Vec3 {
    Vec3::new(coord.0 as f32, coord.1 as f32, coord.2 as f32) * SPACING
}

/// One visible unit cell of the cube.
#[derive(Clone, Debug)]
pub struct Cubie {
    /// Lattice coordinate at construction, before any move.
    pub home: Coord,
    /// Lattice coordinate after the last completed move.
    pub lattice: Coord,
    /// Continuous position; `lattice * SPACING` whenever no move is in flight.
    pub position: Vec3,
    /// Accumulated rotation from all completed moves.
    pub orientation: Quat,
    /// Fixed colors by direction index, in the cubie's own frame.
    pub faces: [FaceColor; 6],
}

impl Cubie {
    fn new(home: Coord) -> Self {
        let mut faces = [FaceColor::Interior; 6];
        for (index, &(dx, dy, dz)) in FACE_DIRECTIONS.iter().enumerate() {
            // on the outer shell in this direction iff the coordinate matches
            // the direction's extreme
            if home.0 * dx + home.1 * dy + home.2 * dz == 1 {
                faces[index] = SHELL_COLORS[index];
            }
        }
        Self {
            home,
            lattice: home,
            position: lattice_position(home),
            orientation: Quat::IDENTITY,
            faces,
        }
    }

    /// Color currently showing in the given world direction.
    ///
    /// Rotates the direction back into the cubie's frame and rounds to the
    /// nearest principal direction; quarter-turn orientations keep the
    /// rounding unambiguous.
    pub fn visible_color(&self, world_dir: Coord) -> FaceColor {
        let world = Vec3::new(world_dir.0 as f32, world_dir.1 as f32, world_dir.2 as f32);
        let local = self.orientation.inverse() * world;
        let rounded = (
            local.x.round() as i32,
            local.y.round() as i32,
            local.z.round() as i32,
        );
        direction_index(rounded).map_or(FaceColor::Interior, |index| self.faces[index])
    }

    /// Re-seats the cubie exactly on the lattice after a completed move,
    /// removing accumulated floating-point error.
    pub(crate) fn snap_to_lattice(&mut self) {
        self.lattice = (
            (self.position.x / SPACING).round() as i32,
            (self.position.y / SPACING).round() as i32,
            (self.position.z / SPACING).round() as i32,
        );
        self.position = lattice_position(self.lattice);
        self.orientation = self.orientation.normalize();
    }
}

/// Builds the 26 cubies in a fixed deterministic order (x, then y, then z).
pub fn build() -> Vec<Cubie> {
    let mut cubies = Vec::with_capacity(CUBIE_COUNT);
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                if (x, y, z) == (0, 0, 0) {
                    continue;
                }
                cubies.push(Cubie::new((x, y, z)));
            }
        }
    }
    cubies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        let cubies = build();
        assert_eq!(cubies.len(), CUBIE_COUNT);
        assert_eq!(cubies[0].home, (-1, -1, -1));
        assert_eq!(cubies[CUBIE_COUNT - 1].home, (1, 1, 1));
        assert!(cubies.iter().all(|cubie| cubie.home != (0, 0, 0)));
    }

    #[test]
    fn test_shell_color_assignment() {
        let cubies = build();

        let center = cubies.iter().find(|c| c.home == (1, 0, 0)).unwrap();
        assert_eq!(center.faces[0], FaceColor::Red);
        for index in 1..6 {
            assert_eq!(center.faces[index], FaceColor::Interior);
        }

        let corner = cubies.iter().find(|c| c.home == (1, 1, 1)).unwrap();
        assert_eq!(corner.faces[0], FaceColor::Red);
        assert_eq!(corner.faces[2], FaceColor::White);
        assert_eq!(corner.faces[4], FaceColor::Blue);
        assert_eq!(corner.faces[1], FaceColor::Interior);
        assert_eq!(corner.faces[3], FaceColor::Interior);
        assert_eq!(corner.faces[5], FaceColor::Interior);
    }

    #[test]
    fn test_colored_face_count_matches_shell_membership() {
        for cubie in build() {
            let colored = cubie
                .faces
                .iter()
                .filter(|&&face| face != FaceColor::Interior)
                .count();
            let (x, y, z) = cubie.home;
            let on_shell = (x.abs() + y.abs() + z.abs()) as usize;
            assert_eq!(
                colored, on_shell,
                "cubie {:?} should have {on_shell} colored faces",
                cubie.home
            );
        }
    }

    #[test]
    fn test_visible_color_at_identity_orientation() {
        for cubie in build() {
            for (index, &dir) in FACE_DIRECTIONS.iter().enumerate() {
                assert_eq!(cubie.visible_color(dir), cubie.faces[index]);
            }
        }
    }

    #[test]
    fn test_snap_removes_drift() {
        let mut cubie = build().pop().unwrap();
        cubie.position = lattice_position((1, 1, 1)) + Vec3::splat(0.003);
        cubie.snap_to_lattice();
        assert_eq!(cubie.lattice, (1, 1, 1));
        assert_eq!(cubie.position, lattice_position((1, 1, 1)));
    }
}
