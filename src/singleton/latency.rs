use std::thread;
use std::time::Duration;

/// Stand-in for the time a real database round trip would take.
pub trait Latency: Send + Sync {
    fn pause(&self, duration: Duration);
}

/// Blocks the calling thread for the full duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Latency for ThreadSleep {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Latency for NoDelay {
    fn pause(&self, _duration: Duration) {}
}
