//! Periodic execution of a task on a background thread.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Sender};
use crossbeam::select;

/// Handle to a task that runs every `interval` until stopped.
///
/// The task runs once immediately, then again after each interval. Sending
/// a stop (or dropping the handle) ends the loop after the current run.
#[derive(Debug)]
pub struct RecurrentTask {
    stop: Sender<bool>,
    worker: Option<JoinHandle<()>>,
}

impl RecurrentTask {
    /// Starts running `task` on a new thread.
    pub fn start<F>(interval: Duration, mut task: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop, stopped) = channel::bounded::<bool>(1);
        let worker = thread::spawn(move || loop {
            task();
            select! {
                recv(channel::after(interval)) -> _ => {}
                recv(stopped) -> _ => return,
            }
        });
        Self {
            stop,
            worker: Some(worker),
        }
    }

    /// Returns a sender that stops the task when it receives any value.
    pub fn stop_sender(&self) -> Sender<bool> {
        self.stop.clone()
    }

    /// Stops the task and waits for its thread to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop.try_send(true);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for RecurrentTask {
    fn drop(&mut self) {
        self.shutdown();
    }
}
