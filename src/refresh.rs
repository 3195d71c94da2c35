//! Explicit handle for the periodic marker-regeneration task.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::coordinator::MapCoordinator;
use crate::core::constants::DEFAULT_REFRESH_INTERVAL;
use crate::surface::DisplaySurface;

/// Owns the periodic regeneration task.
///
/// The task reruns [`MapCoordinator::regenerate`] on a fixed interval until
/// cancelled. Dropping the handle aborts the task, so tearing down the
/// owning screen cannot leak the timer.
pub struct RefreshHandle {
    handle: JoinHandle<()>,
}

impl RefreshHandle {
    /// Spawns the regeneration task on the current tokio runtime.
    ///
    /// The shared mutex serializes regeneration against interleaved
    /// fit/append calls from other threads; each tick takes the lock for
    /// one whole `replace`, keeping the detach-then-attach update atomic.
    pub fn spawn<S>(coordinator: Arc<Mutex<MapCoordinator<S>>>, interval: Duration) -> Self
    where
        S: DisplaySurface + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so the initial set
            // stays whatever the caller seeded.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let result = {
                    let mut coordinator = match coordinator.lock() {
                        Ok(guard) => guard,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    coordinator.regenerate()
                };
                match result {
                    Ok(()) => log::trace!("periodic marker refresh tick"),
                    Err(err) => log::warn!("periodic marker refresh failed: {err}"),
                }
            }
        });
        Self { handle }
    }

    /// Spawns the regeneration task with the default 3-second interval
    pub fn spawn_default<S>(coordinator: Arc<Mutex<MapCoordinator<S>>>) -> Self
    where
        S: DisplaySurface + Send + 'static,
    {
        Self::spawn(coordinator, DEFAULT_REFRESH_INTERVAL)
    }

    /// Stops the periodic regeneration
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
