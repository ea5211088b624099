//! Animated execution of a single face turn.
//!
//! A move rotates its slice about a pivot at the cube's center. Instead of
//! reparenting scene nodes, the animation captures each member's transform
//! relative to the pivot once at setup, then recomputes world transforms
//! from that snapshot every tick: `world = pivot_rotation * start`. The
//! final tick applies the exact target angle and re-seats the slice on the
//! lattice, so no interpolation error survives the move.

use std::time::Duration;

use glam::{Quat, Vec3};

use crate::cube::Cube;
use crate::moves::Move;

/// Wall-clock length of one move animation.
pub const MOVE_DURATION: Duration = Duration::from_millis(300);

/// Transform of one slice member relative to the pivot at setup time.
///
/// The pivot sits at the origin with identity rotation, so the relative
/// transform equals the world transform.
struct SliceMember {
    index: usize,
    start_position: Vec3,
    start_orientation: Quat,
}

/// One in-flight slice rotation.
///
/// Progress is strictly time-based against a caller-supplied clock, so it is
/// robust to variable frame rates. At most one animation may exist at a
/// time; the sequencer enforces this.
pub struct RotationAnimation {
    mv: Move,
    members: Vec<SliceMember>,
    started_at: Duration,
}

impl RotationAnimation {
    /// Selects the slice and captures its attach-time transforms.
    pub fn begin(cube: &Cube, mv: Move, now: Duration) -> Self {
        let members = cube
            .slice(mv.axis, mv.layer)
            .into_iter()
            .map(|index| {
                let cubie = &cube.cubies()[index];
                SliceMember {
                    index,
                    start_position: cubie.position,
                    start_orientation: cubie.orientation,
                }
            })
            .collect();

        Self {
            mv,
            members,
            started_at: now,
        }
    }

    /// Advances the rotation to the given time.
    ///
    /// Returns `true` once, on the tick that finalizes the move: the slice
    /// is set to the exact target angle, snapped back onto the lattice, and
    /// the animation is finished.
    pub fn tick(&self, cube: &mut Cube, now: Duration) -> bool {
        let elapsed = now.saturating_sub(self.started_at);
        let progress = (elapsed.as_secs_f32() / MOVE_DURATION.as_secs_f32()).min(1.0);

        if progress < 1.0 {
            self.apply(cube, self.mv.angle * progress);
            return false;
        }

        self.apply(cube, self.mv.angle);
        for member in &self.members {
            cube.cubie_mut(member.index).snap_to_lattice();
        }
        debug_assert!(
            cube.lattice_is_valid(),
            "move {} left the lattice inconsistent",
            self.mv.name
        );
        true
    }

    fn apply(&self, cube: &mut Cube, angle: f32) {
        let pivot = Quat::from_axis_angle(self.mv.axis.unit(), angle);
        for member in &self.members {
            let cubie = cube.cubie_mut(member.index);
            cubie.position = pivot * member.start_position;
            cubie.orientation = pivot * member.start_orientation;
        }
    }
}
