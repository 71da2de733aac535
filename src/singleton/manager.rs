use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::latency::{Latency, NoDelay, ThreadSleep};
use super::registry::Registry;
use crate::config::DatabaseConfig;

static GLOBAL: Registry<DatabaseManager> = Registry::new();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatabaseError {
    #[error("No active database connection")]
    NotConnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected { connection_number: u64 },
    AlreadyConnected { connection_count: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectOutcome {
    Disconnected,
    AlreadyDisconnected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub query: String,
    pub rows: usize,
}

impl QueryResult {
    // Placeholder row count: byte length of the query text.
    fn synthesize(query: &str) -> Self {
        Self {
            query: query.to_string(),
            rows: query.len(),
        }
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Result of query: '{}' - {} records found",
            self.query, self.rows
        )
    }
}

/// Point-in-time view of the connection state, read under the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    pub connected: bool,
    pub connection_count: u64,
    pub last_connection: Option<DateTime<Local>>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.connected {
            "Connected"
        } else {
            "Disconnected"
        };
        let last = match self.last_connection {
            Some(at) => at.format("%H:%M:%S").to_string(),
            None => "--:--:--".to_string(),
        };
        write!(
            f,
            "Status: {} | Connections made: {} | Last connection: {}",
            state, self.connection_count, last
        )
    }
}

#[derive(Debug, Default)]
struct ConnectionState {
    connected: bool,
    last_connection: Option<DateTime<Local>>,
    connection_count: u64,
}

/// Shared database handle.
///
/// Every operation that touches the connection state holds the same mutex
/// for its whole duration, simulated latency included, so callers see a
/// strictly ordered sequence of transitions.
pub struct DatabaseManager {
    config: DatabaseConfig,
    latency: Box<dyn Latency>,
    state: Mutex<ConnectionState>,
}

impl DatabaseManager {
    /// The process-wide instance, built with default settings on first use.
    pub fn global() -> &'static DatabaseManager {
        GLOBAL.get_or_init(|| Self::with_latency(DatabaseConfig::default(), ThreadSleep))
    }

    /// Like [`DatabaseManager::global`], but the first caller decides the
    /// settings. Later callers get the existing instance and their config
    /// is dropped.
    pub fn init_global(config: DatabaseConfig) -> &'static DatabaseManager {
        let mut pending = Some(config);
        let manager = GLOBAL.get_or_init(|| {
            Self::with_latency(pending.take().unwrap_or_default(), ThreadSleep)
        });
        if pending.is_some() {
            warn!(
                connection_string = %manager.connection_string(),
                "DatabaseManager already initialized, ignoring new config"
            );
        }
        manager
    }

    pub fn global_registry() -> &'static Registry<DatabaseManager> {
        &GLOBAL
    }

    /// Standalone manager that really sleeps for the configured delays.
    pub fn new(config: DatabaseConfig) -> Self {
        Self::with_latency(config, ThreadSleep)
    }

    /// Standalone manager whose operations complete immediately.
    pub fn instant(config: DatabaseConfig) -> Self {
        Self::with_latency(config, NoDelay)
    }

    pub fn with_latency<L>(config: DatabaseConfig, latency: L) -> Self
    where
        L: Latency + 'static,
    {
        info!(
            connection_string = %config.connection_string,
            "DatabaseManager created"
        );
        Self {
            config,
            latency: Box::new(latency),
            state: Mutex::new(ConnectionState::default()),
        }
    }

    pub fn connection_string(&self) -> &str {
        &self.config.connection_string
    }

    pub fn connect(&self) -> ConnectOutcome {
        let mut state = self.lock_state();

        if state.connected {
            debug!("connection already active");
            return ConnectOutcome::AlreadyConnected {
                connection_count: state.connection_count,
            };
        }

        info!(connection_string = %self.connection_string(), "connecting to database");
        self.latency.pause(self.config.connect_delay());

        state.connected = true;
        state.last_connection = Some(Local::now());
        state.connection_count += 1;

        info!(connection = state.connection_count, "connected");
        ConnectOutcome::Connected {
            connection_number: state.connection_count,
        }
    }

    pub fn disconnect(&self) -> DisconnectOutcome {
        let mut state = self.lock_state();

        if !state.connected {
            debug!("no active connection to close");
            return DisconnectOutcome::AlreadyDisconnected;
        }

        info!("disconnecting from database");
        self.latency.pause(self.config.disconnect_delay());
        state.connected = false;

        info!("disconnected");
        DisconnectOutcome::Disconnected
    }

    pub fn execute_query(&self, query: &str) -> Result<QueryResult, DatabaseError> {
        let state = self.lock_state();

        if !state.connected {
            return Err(DatabaseError::NotConnected);
        }

        debug!(query, "executing query");
        self.latency.pause(self.config.query_delay());

        Ok(QueryResult::synthesize(query))
    }

    pub fn status(&self) -> Status {
        let state = self.lock_state();
        Status {
            connected: state.connected,
            connection_count: state.connection_count,
            last_connection: state.last_connection,
        }
    }

    // Fields are only written after the pause returns, so a panic inside
    // `Latency::pause` never leaves a half-applied transition behind.
    fn lock_state(&self) -> MutexGuard<'_, ConnectionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for DatabaseManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseManager")
            .field("connection_string", &self.config.connection_string)
            .field("status", &self.status())
            .finish()
    }
}
