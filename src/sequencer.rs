//! Single-consumer move queue and its drain loop.
//!
//! Queued move names execute strictly one at a time, in FIFO order. The
//! render loop (or a headless driver) calls [`Sequencer::tick`] once per
//! frame; that call is the only scheduling point, so a finished move hands
//! over to the next one on the following frame rather than recursing.

use std::collections::VecDeque;
use std::time::Duration;

use log::warn;

use crate::animation::RotationAnimation;
use crate::cube::Cube;
use crate::moves;

/// Observable state of the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    /// No rotation in flight; queued moves wait for the next tick.
    Idle,
    /// A controller is currently building the queue.
    Queuing,
    /// A rotation is in flight.
    Animating,
}

/// FIFO executor for move names.
pub struct Sequencer {
    queue: VecDeque<String>,
    queuing: bool,
    active: Option<RotationAnimation>,
}

impl Sequencer {
    /// Creates an idle sequencer with an empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queuing: false,
            active: None,
        }
    }

    /// Current observable state.
    pub fn state(&self) -> SequencerState {
        if self.queuing {
            SequencerState::Queuing
        } else if self.active.is_some() {
            SequencerState::Animating
        } else {
            SequencerState::Idle
        }
    }

    /// Whether the sequencer is queuing or animating.
    pub fn is_busy(&self) -> bool {
        self.state() != SequencerState::Idle
    }

    /// Number of queued moves not yet started.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Appends a move name to the tail of the queue.
    pub fn enqueue(&mut self, name: impl Into<String>) {
        self.queue.push_back(name.into());
    }

    /// Marks the start of a queue-building window.
    ///
    /// Returns `false` without changing state when the sequencer is busy,
    /// so controllers are gated the same way the UI is.
    pub fn begin_queuing(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.queuing = true;
        true
    }

    /// Ends the queue-building window; draining resumes on the next tick.
    pub fn end_queuing(&mut self) {
        self.queuing = false;
    }

    /// Drain step, called once per frame with the current clock.
    ///
    /// Advances the in-flight rotation, or starts the next queued move when
    /// idle. Unknown move names are logged and skipped without animating.
    /// Returns whether the cube changed and needs a redraw.
    pub fn tick(&mut self, cube: &mut Cube, now: Duration) -> bool {
        if self.queuing {
            return false;
        }

        if let Some(animation) = self.active.take() {
            if !animation.tick(cube, now) {
                self.active = Some(animation);
            }
            // the next queued move starts on the next tick, keeping one
            // yield point between moves
            return true;
        }

        let Some(name) = self.queue.pop_front() else {
            return false;
        };
        match moves::lookup(&name) {
            Some(mv) => {
                self.active = Some(RotationAnimation::begin(cube, mv, now));
                true
            }
            None => {
                warn!("ignoring unknown move {name:?}");
                false
            }
        }
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains the queue with a synthetic clock, for headless use.
pub fn run_to_completion(cube: &mut Cube, sequencer: &mut Sequencer, frame: Duration) {
    assert!(!frame.is_zero(), "frame must advance the clock");
    let mut now = Duration::ZERO;
    while sequencer.is_busy() || sequencer.pending() > 0 {
        sequencer.tick(cube, now);
        now += frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubies::{lattice_position, Coord};
    use crate::moves::Axis;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_moves_run_one_at_a_time_in_order() {
        let mut cube = Cube::new();
        let mut sequencer = Sequencer::new();
        sequencer.enqueue("R");
        sequencer.enqueue("U");
        assert_eq!(sequencer.state(), SequencerState::Idle);

        sequencer.tick(&mut cube, Duration::ZERO);
        assert_eq!(sequencer.state(), SequencerState::Animating);
        assert_eq!(sequencer.pending(), 1, "only the head move may start");

        run_to_completion(&mut cube, &mut sequencer, FRAME);
        assert_eq!(sequencer.state(), SequencerState::Idle);
        assert_eq!(sequencer.pending(), 0);
        assert!(cube.lattice_is_valid());
    }

    #[test]
    fn test_every_move_then_its_inverse_restores_the_cube() {
        for mv in moves::MOVES {
            let mut cube = Cube::new();
            let mut sequencer = Sequencer::new();
            let net_before = cube.format_net();
            let lattice_before: Vec<Coord> = cube.cubies().iter().map(|c| c.lattice).collect();

            sequencer.enqueue(mv.name);
            sequencer.enqueue(moves::inverse(mv.name).unwrap());
            run_to_completion(&mut cube, &mut sequencer, FRAME);

            let lattice_after: Vec<Coord> = cube.cubies().iter().map(|c| c.lattice).collect();
            assert_eq!(lattice_after, lattice_before, "{} then its inverse", mv.name);
            assert_eq!(cube.format_net(), net_before, "{} then its inverse", mv.name);
            for cubie in cube.cubies() {
                assert_eq!(cubie.position, lattice_position(cubie.lattice));
            }
        }
    }

    #[test]
    fn test_single_move_touches_only_its_slice() {
        let mut cube = Cube::new();
        let mut sequencer = Sequencer::new();
        let before: Vec<_> = cube
            .cubies()
            .iter()
            .map(|c| (c.lattice, c.position, c.orientation))
            .collect();

        let slice = cube.slice(Axis::X, 1);
        assert_eq!(slice.len(), 9);

        sequencer.enqueue("R");
        run_to_completion(&mut cube, &mut sequencer, FRAME);

        let mut moved = 0;
        for (index, cubie) in cube.cubies().iter().enumerate() {
            let (lattice, position, orientation) = before[index];
            if lattice.0 == 1 {
                // -90 degrees about X maps (x, y, z) to (x, z, -y)
                assert_eq!(cubie.lattice, (lattice.0, lattice.2, -lattice.1));
                moved += 1;
            } else {
                assert_eq!(cubie.lattice, lattice);
                assert_eq!(cubie.position, position);
                assert_eq!(cubie.orientation, orientation);
            }
        }
        assert_eq!(moved, 9);
    }

    #[test]
    fn test_unknown_move_is_skipped_with_queue_intact() {
        let mut cube = Cube::new();
        let mut sequencer = Sequencer::new();
        let net_before = cube.format_net();
        sequencer.enqueue("Q");
        sequencer.enqueue("R");

        let redraw = sequencer.tick(&mut cube, Duration::ZERO);
        assert!(!redraw, "an unknown move must not animate");
        assert_eq!(sequencer.state(), SequencerState::Idle);
        assert_eq!(sequencer.pending(), 1);
        assert_eq!(cube.format_net(), net_before);

        sequencer.tick(&mut cube, Duration::ZERO);
        assert_eq!(
            sequencer.state(),
            SequencerState::Animating,
            "the queue must keep draining after a skipped entry"
        );
        run_to_completion(&mut cube, &mut sequencer, FRAME);
        assert!(cube.lattice_is_valid());
    }

    #[test]
    fn test_tick_on_empty_queue_is_a_noop() {
        let mut cube = Cube::new();
        let mut sequencer = Sequencer::new();
        assert!(!sequencer.tick(&mut cube, Duration::ZERO));
        assert_eq!(sequencer.state(), SequencerState::Idle);
    }

    #[test]
    fn test_queuing_window_blocks_draining() {
        let mut cube = Cube::new();
        let mut sequencer = Sequencer::new();
        assert!(sequencer.begin_queuing());
        sequencer.enqueue("R");
        assert_eq!(sequencer.state(), SequencerState::Queuing);
        assert!(!sequencer.tick(&mut cube, Duration::ZERO));
        assert_eq!(sequencer.pending(), 1, "ticks must not drain while queuing");

        assert!(!sequencer.begin_queuing(), "queuing is not re-entrant");

        sequencer.end_queuing();
        sequencer.tick(&mut cube, Duration::ZERO);
        assert_eq!(sequencer.state(), SequencerState::Animating);
    }
}
