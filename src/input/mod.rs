use std::ops::ControlFlow;

use macroquad::prelude::*;
use tracing::info;

use crate::application::GridSimulation;

/// Share of cells brought to life by the randomize key
pub const RANDOM_DENSITY: f64 = 0.3;

/// Toggle the hexagons under the cursor on a left click
pub fn handle_mouse_toggle(sim: &mut GridSimulation) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let (x, y) = mouse_position();
    let toggled = sim.toggle_at((x as f64, y as f64));
    tracing::trace!(x, y, toggled, "click");
}

fn log_layers(sim: &mut GridSimulation) {
    info!(layers = sim.layers(), "layer count");
}

fn randomize(sim: &mut GridSimulation) {
    sim.randomize(&mut ::rand::rng(), RANDOM_DENSITY);
}

fn step(sim: &mut GridSimulation) {
    sim.step();
}

/// Dispatch this frame's key presses. Escape breaks the frame loop.
pub fn process_keyboard_input(sim: &mut GridSimulation) -> ControlFlow<()> {
    if is_key_pressed(KeyCode::Escape) {
        return ControlFlow::Break(());
    }

    type KeyAction = (KeyCode, fn(&mut GridSimulation));

    let actions: [KeyAction; 10] = [
        (KeyCode::Up, GridSimulation::increase_layers),
        (KeyCode::Down, GridSimulation::decrease_layers),
        (KeyCode::Space, GridSimulation::toggle_running),
        (KeyCode::Right, step),
        (KeyCode::Left, step),
        (KeyCode::P, log_layers),
        (KeyCode::R, GridSimulation::reset),
        (KeyCode::L, GridSimulation::cycle_layout),
        (KeyCode::N, GridSimulation::cycle_neighborhood),
        (KeyCode::G, randomize),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(sim));

    ControlFlow::Continue(())
}
