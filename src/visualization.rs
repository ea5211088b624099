//! Interactive 3D view of the puzzle cube using kiss3d.

use std::time::Instant;

use kiss3d::prelude::*;

use cuber::cube::Cube;
use cuber::cubies::{self, Cubie, FaceColor, CUBIE_SIZE};
use cuber::moves;
use cuber::scramble::Scrambler;
use cuber::sequencer::Sequencer;

/// Side length of a sticker plate.
const STICKER_SIZE: f32 = 0.9;

/// Thickness of a sticker plate.
const STICKER_DEPTH: f32 = 0.02;

/// Returns the display color for a sticker.
///
/// The mapping is stable so faces keep their color across renders; interior
/// faces stay dark.
fn sticker_color(face: FaceColor) -> Color {
    match face {
        FaceColor::White => Color::new(1.0, 1.0, 1.0, 1.0),
        FaceColor::Yellow => Color::new(1.0, 0.84, 0.0, 1.0),
        FaceColor::Blue => Color::new(0.0, 0.32, 0.73, 1.0),
        FaceColor::Green => Color::new(0.0, 0.62, 0.38, 1.0),
        FaceColor::Red => Color::new(0.77, 0.12, 0.23, 1.0),
        FaceColor::Orange => Color::new(1.0, 0.35, 0.0, 1.0),
        FaceColor::Interior => Color::new(0.2, 0.2, 0.2, 1.0),
    }
}

/// Builds the scene node for one cubie: a dark body with a colored sticker
/// plate on each shell face.
///
/// The plates are children of the body node, so moving or rotating the body
/// carries them along.
fn build_cubie_node(scene: &mut SceneNode3d, cubie: &Cubie) -> SceneNode3d {
    let offset = CUBIE_SIZE / 2.0 + STICKER_DEPTH / 2.0;

    let mut body = scene
        .add_cube(CUBIE_SIZE, CUBIE_SIZE, CUBIE_SIZE)
        .set_color(sticker_color(FaceColor::Interior));

    for (index, &(dx, dy, dz)) in cubies::FACE_DIRECTIONS.iter().enumerate() {
        let face = cubie.faces[index];
        if face == FaceColor::Interior {
            continue;
        }
        body.add_cube(
            if dx == 0 { STICKER_SIZE } else { STICKER_DEPTH },
            if dy == 0 { STICKER_SIZE } else { STICKER_DEPTH },
            if dz == 0 { STICKER_SIZE } else { STICKER_DEPTH },
        )
        .set_color(sticker_color(face))
        .set_position(Vec3::new(dx as f32, dy as f32, dz as f32) * offset);
    }

    body
}

/// Window title reflecting what the user can do right now.
fn title_for(sequencer: &Sequencer, scrambler: &Scrambler, cube: &Cube) -> String {
    if sequencer.is_busy() || sequencer.pending() > 0 {
        "Cube - turning...".to_owned()
    } else if scrambler.has_scramble() {
        "Cube - scrambled - [Return] solve, [S] rescramble".to_owned()
    } else if cube.is_solved() {
        "Cube - solved - [S] scramble".to_owned()
    } else {
        "Cube - [S] scramble".to_owned()
    }
}

/// Opens the interactive viewer on a fresh, solved cube.
pub fn display() {
    pollster::block_on(display_async());
}

async fn display_async() {
    let mut cube = Cube::new();
    let mut sequencer = Sequencer::new();
    let mut scrambler = Scrambler::new();

    let mut last_title = title_for(&sequencer, &scrambler, &cube);
    let mut window = Window::new(&last_title).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(9.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(120.0))
        .set_position(Vec3::new(5.0, 10.0, 7.5));

    let mut nodes: Vec<SceneNode3d> = cube
        .cubies()
        .iter()
        .map(|cubie| build_cubie_node(&mut scene, cubie))
        .collect();

    let start = Instant::now();

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::S => {
                            if scrambler.scramble(&mut sequencer) {
                                println!(
                                    "Scramble: {}",
                                    moves::format_sequence(scrambler.record())
                                );
                            }
                        }
                        Key::Return => {
                            if scrambler.solve(&mut sequencer) {
                                println!("Solving...");
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        sequencer.tick(&mut cube, start.elapsed());

        for (cubie, node) in cube.cubies().iter().zip(nodes.iter_mut()) {
            node.set_position(Vec3::new(
                cubie.position.x,
                cubie.position.y,
                cubie.position.z,
            ));
            node.set_rotation(Quat::from_xyzw(
                cubie.orientation.x,
                cubie.orientation.y,
                cubie.orientation.z,
                cubie.orientation.w,
            ));
        }

        let title = title_for(&sequencer, &scrambler, &cube);
        if title != last_title {
            window.set_title(&title);
            last_title = title;
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
