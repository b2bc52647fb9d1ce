// runner.rs - Cancellable periodic loop on tokio

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

use crate::driver::Driver;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Fixed delay after each tick.
    pub period: Duration,
    /// Stop on its own after this many ticks. `None` runs until stopped.
    pub max_generations: Option<u64>,
}

impl LoopOptions {
    pub fn every(period: Duration) -> Self {
        Self { period, max_generations: None }
    }
}

/// Cloneable request to stop a running loop.
#[derive(Debug, Clone)]
pub struct StopHandle(Arc<watch::Sender<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.send_replace(true);
    }
}

/// Handle to a loop started with [`spawn`].
///
/// Dropping the handle stops the loop as well, even while `StopHandle`
/// clones are still around.
#[derive(Debug)]
pub struct LoopHandle<S> {
    stop: StopHandle,
    // `None` only once `join` has taken it.
    task: Option<JoinHandle<Driver<S>>>,
}

impl<S> LoopHandle<S> {
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Waits for the loop to end and hands the driver back.
    pub async fn join(mut self) -> Result<Driver<S>, JoinError> {
        match self.task.take() {
            Some(task) => task.await,
            None => unreachable!("loop task joined twice"),
        }
    }
}

impl<S> Drop for LoopHandle<S> {
    fn drop(&mut self) {
        // Harmless after a completed join; stops the loop if the handle or
        // an unfinished join is dropped.
        self.stop.stop();
    }
}

/// Runs tick → wait → tick on the current tokio runtime until stopped.
pub fn spawn<S>(driver: Driver<S>, options: LoopOptions) -> LoopHandle<S>
where
    S: Surface + Send + 'static,
{
    let (sender, receiver) = watch::channel(false);
    let task = tokio::spawn(run(driver, options, receiver));
    LoopHandle { stop: StopHandle(Arc::new(sender)), task: Some(task) }
}

async fn run<S: Surface>(
    mut driver: Driver<S>,
    options: LoopOptions,
    mut stop: watch::Receiver<bool>,
) -> Driver<S> {
    let mut ticks = 0u64;
    loop {
        if *stop.borrow_and_update() {
            break;
        }
        if options.max_generations.is_some_and(|max| ticks >= max) {
            debug!(ticks, "generation limit reached");
            break;
        }

        driver.tick();
        ticks += 1;

        tokio::select! {
            _ = tokio::time::sleep(options.period) => {}
            changed = stop.changed() => {
                // Sender gone counts as a stop request too.
                if changed.is_err() || *stop.borrow() {
                    break;
                }
            }
        }
    }

    info!(ticks, generation = driver.grid().generation(), "loop stopped");
    driver
}
