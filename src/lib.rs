//! Puzzle Cube Simulation Library
//!
//! Models a 3x3x3 puzzle cube as 26 cubies on a lattice, executes animated
//! quarter-turn face moves through a single-consumer move queue, and
//! scrambles/solves by generating a random move sequence and replaying its
//! inverse. Rendering is left to a collaborator that ticks the sequencer
//! once per frame and reads back the cubie transforms.

pub mod animation;
pub mod cube;
pub mod cubies;
pub mod moves;
pub mod scramble;
pub mod sequencer;
