//! Cube state: the 26 cubies, slice selection, and the text net.
//!
//! Positions are continuous so a rotation in flight can be rendered, but
//! between moves every cubie sits exactly on the lattice. Slice membership
//! is re-derived from current positions immediately before each move, since
//! earlier moves change which cubies occupy which layer.

use rustc_hash::FxHashSet;

use crate::cubies::{self, Coord, Cubie, FaceColor, SPACING};
use crate::moves::Axis;

/// The full cube: 26 cubies in a flat list, in construction order.
pub struct Cube {
    cubies: Vec<Cubie>,
}

impl Cube {
    /// Creates a solved cube.
    pub fn new() -> Self {
        Self {
            cubies: cubies::build(),
        }
    }

    /// All cubies, in construction order.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    pub(crate) fn cubie_mut(&mut self, index: usize) -> &mut Cubie {
        &mut self.cubies[index]
    }

    /// Indices of the cubies currently occupying one layer along an axis.
    ///
    /// The threshold is strictly less than half the spacing, so it absorbs
    /// floating-point error without ever capturing a neighboring layer.
    pub fn slice(&self, axis: Axis, layer: i32) -> Vec<usize> {
        let target = layer as f32 * SPACING;
        let threshold = SPACING / 2.0 - 0.01;

        self.cubies
            .iter()
            .enumerate()
            .filter(|(_, cubie)| (axis.component(cubie.position) - target).abs() < threshold)
            .map(|(index, _)| index)
            .collect()
    }

    /// The cubie currently at a lattice point, if any.
    pub fn cubie_at(&self, lattice: Coord) -> Option<&Cubie> {
        self.cubies.iter().find(|cubie| cubie.lattice == lattice)
    }

    /// Checks that every cubie sits on a distinct valid lattice point.
    pub fn lattice_is_valid(&self) -> bool {
        let mut seen: FxHashSet<Coord> = FxHashSet::default();
        self.cubies.iter().all(|cubie| {
            let (x, y, z) = cubie.lattice;
            (-1..=1).contains(&x)
                && (-1..=1).contains(&y)
                && (-1..=1).contains(&z)
                && cubie.lattice != (0, 0, 0)
                && seen.insert(cubie.lattice)
        })
    }

    /// The 3x3 sticker colors showing on one face, viewed from outside.
    ///
    /// Rows run top to bottom and columns left to right in the standard net
    /// orientation for that face.
    pub fn face_stickers(&self, dir: Coord) -> [[FaceColor; 3]; 3] {
        let (up, right) = page_basis(dir);
        let mut grid = [[FaceColor::Interior; 3]; 3];

        for (r, row) in grid.iter_mut().enumerate() {
            let vertical = 1 - r as i32;
            for (c, cell) in row.iter_mut().enumerate() {
                let horizontal = c as i32 - 1;
                let lattice = (
                    dir.0 + up.0 * vertical + right.0 * horizontal,
                    dir.1 + up.1 * vertical + right.1 * horizontal,
                    dir.2 + up.2 * vertical + right.2 * horizontal,
                );
                if let Some(cubie) = self.cubie_at(lattice) {
                    *cell = cubie.visible_color(dir);
                }
            }
        }

        grid
    }

    /// Whether every face shows its designated shell color on all 9 stickers.
    pub fn is_solved(&self) -> bool {
        cubies::FACE_DIRECTIONS
            .iter()
            .enumerate()
            .all(|(index, &dir)| {
                self.face_stickers(dir)
                    .iter()
                    .flatten()
                    .all(|&color| color == cubies::SHELL_COLORS[index])
            })
    }

    /// Formats the cube as an unfolded net.
    ///
    /// The top face sits above the middle band, which shows left, front,
    /// right, and back faces side by side, with the bottom face below.
    pub fn format_net(&self) -> String {
        let top = self.face_stickers((0, 1, 0));
        let left = self.face_stickers((-1, 0, 0));
        let front = self.face_stickers((0, 0, 1));
        let right = self.face_stickers((1, 0, 0));
        let back = self.face_stickers((0, 0, -1));
        let bottom = self.face_stickers((0, -1, 0));

        let mut output = String::new();
        for row in &top {
            output.push_str(&format!("       {}\n", format_row(row)));
        }
        for r in 0..3 {
            output.push_str(&format!(
                "{}  {}  {}  {}\n",
                format_row(&left[r]),
                format_row(&front[r]),
                format_row(&right[r]),
                format_row(&back[r]),
            ));
        }
        for row in &bottom {
            output.push_str(&format!("       {}\n", format_row(row)));
        }
        output
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

/// Page orientation (up, right) for drawing a face in the standard net.
fn page_basis(dir: Coord) -> (Coord, Coord) {
    match dir {
        (0, 1, 0) => ((0, 0, -1), (1, 0, 0)),
        (0, -1, 0) => ((0, 0, 1), (1, 0, 0)),
        (0, 0, 1) => ((0, 1, 0), (1, 0, 0)),
        (0, 0, -1) => ((0, 1, 0), (-1, 0, 0)),
        (1, 0, 0) => ((0, 1, 0), (0, 0, -1)),
        _ => ((0, 1, 0), (0, 0, 1)),
    }
}

fn format_row(row: &[FaceColor; 3]) -> String {
    let letters: Vec<String> = row.iter().map(|color| color.letter().to_string()).collect();
    letters.join(" ")
}
