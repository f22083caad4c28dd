use std::{
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam_channel::{Sender, bounded, select, tick};

/// A dedicated thread that invokes a callback at a fixed period until
/// stopped. Dropping the source also stops and joins the thread.
pub(crate) struct TickSource {
    stop: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl TickSource {
    /// Spawns the tick thread. The callback runs on that thread.
    pub(crate) fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let handle = thread::spawn(move || {
            tracing::debug!(?period, "tick source started");
            let ticker = tick(period);
            loop {
                select! {
                    recv(ticker) -> _ => on_tick(),
                    recv(stop_rx) -> _ => {
                        tracing::debug!("tick source stopped");
                        return;
                    }
                }
            }
        });
        Self {
            stop: stop_tx,
            handle: Some(handle),
        }
    }

    /// Stops the tick thread and waits for it to exit.
    pub(crate) fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop.try_send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
