//! Outcome of probing the configured database.

/// Result of a connection test. Never an error: failures are data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// The database was reachable with the configured credential.
    Connected {
        database_title: String,
        database_id: String,
    },
    /// The check failed; `error` is never empty.
    Failed { error: String },
}

impl ConnectionStatus {
    /// Whether the check succeeded.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }
}
