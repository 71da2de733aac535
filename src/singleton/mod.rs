//! Pattern 1: Singleton
//!
//! A process-wide `DatabaseManager` built lazily on first access. The
//! `Registry` underneath is also usable on its own when callers would rather
//! own the instance and pass references around.

mod latency;
mod manager;
mod registry;

pub use latency::{Latency, NoDelay, ThreadSleep};
pub use manager::{
    ConnectOutcome, DatabaseError, DatabaseManager, DisconnectOutcome, QueryResult, Status,
};
pub use registry::Registry;
