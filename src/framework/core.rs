//! # Phase Tasks
//!
//! Each stage of a run (ingesting orders, then fulfilling them) executes in
//! its own Tokio task. [`spawn_phase`] starts the task inside a tracing span
//! and hands back a [`PhaseHandle`]; the coordinator joins that handle before
//! it starts the next phase, so two phases never overlap.
//!
//! ```rust
//! use order_fulfillment::framework::{spawn_phase, Phase};
//!
//! #[tokio::main]
//! async fn main() {
//!     let handle = spawn_phase(Phase::Produce, async { 40 + 2 });
//!     assert_eq!(handle.join().await.unwrap(), 42);
//! }
//! ```

use std::fmt::Display;
use std::future::Future;
use tokio::task::JoinHandle;
use tracing::{info, Instrument};

/// One of the sequential stages of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Orders are read from the source and appended to the queue.
    Produce,
    /// Orders are drained from the queue and fulfilled against inventory.
    Consume,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Produce => f.write_str("produce"),
            Phase::Consume => f.write_str("consume"),
        }
    }
}

/// Errors raised while supervising phase tasks.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("{phase} task panicked")]
    TaskPanicked { phase: Phase },
    #[error("{phase} task was cancelled")]
    TaskCancelled { phase: Phase },
}

/// Handle to a running phase. Must be joined; there is no abort path.
#[must_use = "a phase must be joined before the next one starts"]
pub struct PhaseHandle<T> {
    phase: Phase,
    handle: JoinHandle<T>,
}

impl<T> PhaseHandle<T> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Waits for the phase task to run to completion.
    ///
    /// A panic inside the task surfaces as [`FrameworkError::TaskPanicked`].
    pub async fn join(self) -> Result<T, FrameworkError> {
        let phase = self.phase;
        self.handle.await.map_err(|e| {
            if e.is_panic() {
                FrameworkError::TaskPanicked { phase }
            } else {
                FrameworkError::TaskCancelled { phase }
            }
        })
    }
}

/// Spawns `task` as the given phase.
pub fn spawn_phase<F>(phase: Phase, task: F) -> PhaseHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let span = tracing::info_span!("phase", name = %phase);
    let handle = tokio::spawn(
        async move {
            info!("Phase started");
            let output = task.await;
            info!("Phase finished");
            output
        }
        .instrument(span),
    );
    PhaseHandle { phase, handle }
}
