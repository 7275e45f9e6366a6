//! A broadcast lock that waiters can block on with a timeout.
//!
//! Signaling drops the only sender of an internal channel. Every receiver
//! then observes the disconnect, so all current and future waiters resume
//! immediately.

use std::time::Duration;

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;

use crate::error::{UtilError, UtilResult};

/// A one-shot broadcast signal with timed waits.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use kitbag_util::waitlock::WaitLock;
///
/// let lock = WaitLock::new();
/// assert!(lock.wait(Duration::from_millis(10)).is_err());
/// lock.signal();
/// assert!(lock.wait(Duration::from_secs(1)).is_ok());
/// ```
#[derive(Debug)]
pub struct WaitLock {
    sender: Mutex<Option<Sender<()>>>,
    receiver: Receiver<()>,
}

impl WaitLock {
    /// Creates an unsignaled lock.
    pub fn new() -> Self {
        let (sender, receiver) = channel::bounded(0);
        Self {
            sender: Mutex::new(Some(sender)),
            receiver,
        }
    }

    /// Blocks until the lock is signaled or `timeout` elapses.
    pub fn wait(&self, timeout: Duration) -> UtilResult<()> {
        match self.receiver.recv_timeout(timeout) {
            Err(RecvTimeoutError::Timeout) => Err(UtilError::TimedOut),
            Ok(()) | Err(RecvTimeoutError::Disconnected) => Ok(()),
        }
    }

    /// Wakes every waiter. Calling it again has no effect.
    pub fn signal(&self) {
        self.sender.lock().take();
    }

    /// Returns true once [`signal`](Self::signal) has been called.
    pub fn is_signaled(&self) -> bool {
        self.sender.lock().is_none()
    }
}

impl Default for WaitLock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_wait_times_out() {
        let lock = WaitLock::new();
        let start = Instant::now();
        assert_eq!(lock.wait(Duration::from_secs(1)), Err(UtilError::TimedOut));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(1));
        assert!(elapsed < Duration::from_secs(2));
    }

    #[test]
    fn test_signal_wakes_waiter() {
        let lock = Arc::new(WaitLock::new());
        let signaler = Arc::clone(&lock);
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_secs(1));
            signaler.signal();
        });

        let start = Instant::now();
        assert_eq!(lock.wait(Duration::from_secs(5)), Ok(()));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(900));
        assert!(elapsed < Duration::from_secs(2));
        handle.join().unwrap();
    }

    #[test]
    fn test_signaled_lock_returns_immediately() {
        let lock = WaitLock::new();
        lock.signal();
        lock.signal();
        assert!(lock.is_signaled());

        let start = Instant::now();
        assert_eq!(lock.wait(Duration::from_secs(2)), Ok(()));
        assert!(start.elapsed() < Duration::from_millis(10));
    }

    #[test]
    fn test_signal_wakes_all_waiters() {
        let lock = Arc::new(WaitLock::new());
        let waiters: Vec<_> = (0..4)
            .map(|_| {
                let lock = Arc::clone(&lock);
                thread::spawn(move || lock.wait(Duration::from_secs(5)))
            })
            .collect();

        thread::sleep(Duration::from_millis(100));
        lock.signal();
        for waiter in waiters {
            assert_eq!(waiter.join().unwrap(), Ok(()));
        }
    }
}
