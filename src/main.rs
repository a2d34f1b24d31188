use std::ops::ControlFlow;
use std::sync::OnceLock;

use clap::{CommandFactory, Parser, error::ErrorKind};
use macroquad::prelude::*;
use hex_life::{Config, GridSimulation, rendering, input};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Command line, parsed and validated once; exits through clap on bad input
fn config() -> &'static Config {
    CONFIG.get_or_init(load_config)
}

fn load_config() -> Config {
    let config = Config::parse();
    if let Err(err) = config.validate() {
        Config::command().error(ErrorKind::ValueValidation, err).exit();
    }
    config
}

fn window_conf() -> Conf {
    let config = config();
    Conf {
        window_title: "Hexagons".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let config = config();

    let mut sim = GridSimulation::new(screen_width() as u32, screen_height() as u32, config.layers)
        .with_layout(config.layout)
        .with_neighborhood(config.neighborhood)
        .with_running(config.running);

    info!(
        layers = sim.layers(),
        layout = sim.layout().name(),
        neighborhood = sim.neighborhood().name(),
        rule = sim.rule().name(),
        hexagons = sim.hexagons().len(),
        "starting"
    );

    loop {
        sim.resize(screen_width() as u32, screen_height() as u32);
        sim.tick();

        if let ControlFlow::Break(()) = input::process_keyboard_input(&mut sim) {
            break;
        }
        input::handle_mouse_toggle(&mut sim);

        rendering::draw_board(&sim);
        rendering::draw_status(&sim);

        next_frame().await;
    }

    info!(generation = sim.generation, alive = sim.alive_count(), "exiting");
}
