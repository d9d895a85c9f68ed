use std::ops::ControlFlow;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use infinite_life::{
    Camera, Config, GameState,
    application::FramePacer,
    input::{self, InputPoller},
    rendering,
};

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: "Conway's Game of Life - Infinite Grid".to_owned(),
        window_width: config.width,
        window_height: config.height,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(config: Config) {
    let mut state = GameState::from_config(&config);
    let mut camera = Camera::with_cell_size(config.cell_size);
    let mut poller = InputPoller::new();
    let mut pacer = FramePacer::new(config.max_fps);

    // Window close goes through the event stream
    prevent_quit();

    let state = loop {
        let events = poller.poll();
        state = match input::process_events(state, &mut camera, &events) {
            ControlFlow::Continue(state) => state,
            ControlFlow::Break(state) => break state,
        };

        state = state.tick(get_frame_time());

        rendering::draw_frame(&state, &camera);

        pacer.throttle();
        next_frame().await;
    };

    info!(generation = state.generation, population = state.live.len(), "shutting down");
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(config.verbose);

    config.validate().context("invalid configuration")?;
    info!(?config, "starting");

    macroquad::Window::from_config(window_conf(&config), run(config));
    Ok(())
}
