//! The twelve face-turn moves and their inversion rule.
//!
//! Move names use face notation: `R`, `L`, `U`, `D`, `F`, `B` turn the
//! right, left, top, bottom, front, and back layer; an `i` suffix marks the
//! counter-clockwise inverse of the same face.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

/// A rotation axis of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// This axis' component of a vector.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// One face turn: a signed quarter rotation of one layer about one axis.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    /// Face-notation name.
    pub name: &'static str,
    /// Rotation axis.
    pub axis: Axis,
    /// Layer along the axis, in lattice units.
    pub layer: i32,
    /// Rotation angle in radians; the sign selects the turn direction.
    pub angle: f32,
}

/// The fixed move catalog: 6 faces times 2 directions.
///
/// Positive layers turn with a negative angle for the clockwise move, so a
/// move and its `i` partner differ only in the angle's sign.
pub const MOVES: [Move; 12] = [
    Move { name: "R", axis: Axis::X, layer: 1, angle: -FRAC_PI_2 },
    Move { name: "L", axis: Axis::X, layer: -1, angle: FRAC_PI_2 },
    Move { name: "U", axis: Axis::Y, layer: 1, angle: -FRAC_PI_2 },
    Move { name: "D", axis: Axis::Y, layer: -1, angle: FRAC_PI_2 },
    Move { name: "F", axis: Axis::Z, layer: 1, angle: -FRAC_PI_2 },
    Move { name: "B", axis: Axis::Z, layer: -1, angle: FRAC_PI_2 },
    Move { name: "Ri", axis: Axis::X, layer: 1, angle: FRAC_PI_2 },
    Move { name: "Li", axis: Axis::X, layer: -1, angle: -FRAC_PI_2 },
    Move { name: "Ui", axis: Axis::Y, layer: 1, angle: FRAC_PI_2 },
    Move { name: "Di", axis: Axis::Y, layer: -1, angle: -FRAC_PI_2 },
    Move { name: "Fi", axis: Axis::Z, layer: 1, angle: FRAC_PI_2 },
    Move { name: "Bi", axis: Axis::Z, layer: -1, angle: -FRAC_PI_2 },
];

/// Looks up a move by name. Returns `None` for names outside the catalog.
pub fn lookup(name: &str) -> Option<Move> {
    MOVES.iter().copied().find(|mv| mv.name == name)
}

/// Returns the name of the move that undoes `name`.
///
/// Toggles the `i` suffix, so applying `inverse` twice yields the original
/// name and the inverse's angle is the negation of the input's. Returns
/// `None` for names outside the catalog.
pub fn inverse(name: &str) -> Option<&'static str> {
    lookup(name)?;
    let toggled = match name.strip_suffix('i') {
        Some(base) => base.to_owned(),
        None => format!("{name}i"),
    };
    lookup(&toggled).map(|mv| mv.name)
}

/// Splits a whitespace-separated move sequence into names.
pub fn parse_sequence(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_owned).collect()
}

/// Joins move names for display.
pub fn format_sequence(names: &[&str]) -> String {
    names.join(" ")
}
