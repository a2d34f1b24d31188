use macroquad::prelude::*;

use crate::application::GridSimulation;
use crate::domain::Hexagon;

/// Alive cell fill
pub const ALIVE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// Dead cell fill and background
pub const DEAD_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
/// Hexagon outline
pub const OUTLINE_COLOR: Color = Color::new(127.0 / 255.0, 127.0 / 255.0, 127.0 / 255.0, 1.0);
/// Status indicator while the automaton runs
pub const RUNNING_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
/// Status indicator while paused
pub const PAUSED_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);

pub const OUTLINE_WIDTH: f32 = 1.0;
const INDICATOR_RADIUS: f32 = 8.0;

/// Fill one hexagon as a triangle fan around its center, then outline it
pub fn draw_hexagon(hex: &Hexagon) {
    let points = hex.points().map(|(x, y)| vec2(x as f32, y as f32));
    let (cx, cy) = hex.center();
    let center = vec2(cx as f32, cy as f32);
    let fill = if hex.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };

    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_triangle(center, a, b, fill);
    }
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_line(a.x, a.y, b.x, b.y, OUTLINE_WIDTH, OUTLINE_COLOR);
    }
}

/// Draw the whole board on a cleared frame
pub fn draw_board(sim: &GridSimulation) {
    clear_background(DEAD_COLOR);
    sim.hexagons().iter().for_each(draw_hexagon);
}

/// Running/paused indicator and a one-line summary in the top-left corner
pub fn draw_status(sim: &GridSimulation) {
    let color = if sim.is_running { RUNNING_COLOR } else { PAUSED_COLOR };
    draw_circle(
        INDICATOR_RADIUS * 2.0,
        INDICATOR_RADIUS * 2.0,
        INDICATOR_RADIUS,
        color,
    );

    let summary = format!(
        "Layers: {} | {} | {} | Gen {} | Alive {}/{}",
        sim.layers(),
        sim.layout().name(),
        sim.neighborhood().name(),
        sim.generation,
        sim.alive_count(),
        sim.hexagons().len(),
    );
    draw_text(&summary, INDICATOR_RADIUS * 4.0, INDICATOR_RADIUS * 2.0 + 5.0, 18.0, OUTLINE_COLOR);
}
