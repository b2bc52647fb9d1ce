// main.rs - Conway's Game of Life on a canvas, windowed or headless

use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use conway_canvas::runner::{self, LoopOptions};
use conway_canvas::{Config, ConfigError, Driver, DrawList, Ticker};

mod ui;

use ui::CanvasApp;

#[derive(Debug, Error)]
enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(#[from] eframe::Error),

    #[error("simulation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("conway_canvas=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Log the seed so any run can be reproduced with CONWAY_SEED.
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, tick_ms = config.tick.as_millis() as u64, headless = config.headless, "starting");
    let mut rng = StdRng::seed_from_u64(seed);

    let driver = Driver::start(&config, DrawList::new(config.surface), &mut rng)?;

    if config.headless {
        run_headless(driver, &config)
    } else {
        run_window(driver, &config)
    }
}

fn run_window(driver: Driver<DrawList>, config: &Config) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.surface.width as f32, config.surface.height as f32]),
        ..Default::default()
    };

    let mut ticker = Ticker::new(config.tick);
    ticker.start(std::time::Instant::now());

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(CanvasApp::new(driver, ticker))),
    )?;
    Ok(())
}

fn run_headless(driver: Driver<DrawList>, config: &Config) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let options = LoopOptions {
        period: config.tick,
        max_generations: config.max_generations,
    };

    let driver = runtime.block_on(async {
        let handle = runner::spawn(driver, options);

        let stop = handle.stop_handle();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("interrupted"),
                Err(err) => warn!(%err, "cannot listen for ctrl-c; stopping"),
            }
            stop.stop();
        });

        handle.join().await
    })?;

    let grid = driver.grid();
    info!(generation = grid.generation(), population = grid.population(), "finished");
    Ok(())
}
