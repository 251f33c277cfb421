//! A module which provides simple logging of the search progress.

use crate::models::common::Cost;
use crate::solver::SearchState;
use crate::utils::Timer;
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Provides a way to log search progress at a configured iteration interval.
pub struct Telemetry {
    logger: InfoLogger,
    log_interval: usize,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(logger: InfoLogger, log_interval: usize) -> Self {
        Self { logger, log_interval, time: Timer::start() }
    }

    /// Reports initial solution statistics.
    pub fn on_initial(&self, cost: Cost) {
        self.log(format!("[{}s] created initial solution with cost {cost:.4}", self.time.elapsed_secs()).as_str());
    }

    /// Reports iteration statistics at the configured interval.
    pub fn on_iteration(&self, state: &SearchState) {
        if self.log_interval == 0 || state.iteration % self.log_interval != 0 {
            return;
        }

        self.log(
            format!(
                "[{}s] iteration {}: cost {:.4}, best {:.4}, empty neighborhoods {}",
                self.time.elapsed_secs(),
                state.iteration,
                state.current_cost,
                state.best_cost,
                state.empty_neighborhoods
            )
            .as_str(),
        );
    }

    /// Reports the final result statistics.
    pub fn on_result(&self, state: &SearchState) {
        self.log(
            format!(
                "[{}s] search ended after {} iterations, best cost {:.4}, empty neighborhoods {}",
                self.time.elapsed_secs(),
                state.iteration,
                state.best_cost,
                state.empty_neighborhoods
            )
            .as_str(),
        );
    }

    /// Writes a message to the log.
    fn log(&self, message: &str) {
        (self.logger)(message);
    }
}

/// Creates a logger which writes to standard output.
pub fn create_stdout_logger() -> InfoLogger {
    Arc::new(|message: &str| println!("{message}"))
}
