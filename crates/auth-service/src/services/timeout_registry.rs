//! Per-operation artificial delay storage.
//!
//! One atomic cell per delay-bearing operation kind, all zero at process
//! start. Writers and readers never take a lock, so an in-flight request
//! sleeping on a previously captured value cannot serialize other traffic.

use crate::errors::AuthError;
use crate::models::{OperationKind, TimeoutSnapshot};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const MILLIS_PER_SECOND: u64 = 1_000;

/// Runtime-adjustable delay injector state.
#[derive(Debug, Default)]
pub struct TimeoutRegistry {
    login_ms: AtomicU64,
    logout_ms: AtomicU64,
    logged_user_ms: AtomicU64,
    is_logged_ms: AtomicU64,
    register_ms: AtomicU64,
}

impl TimeoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, kind: OperationKind) -> &AtomicU64 {
        match kind {
            OperationKind::Login => &self.login_ms,
            OperationKind::Logout => &self.logout_ms,
            OperationKind::LoggedUser => &self.logged_user_ms,
            OperationKind::IsLogged => &self.is_logged_ms,
            OperationKind::Register => &self.register_ms,
        }
    }

    /// Store a new delay for `kind` and return the resulting snapshot.
    ///
    /// Negative values are rejected without touching any cell. A request
    /// that already captured the previous value keeps it; the write only
    /// affects delays read after it completes.
    pub fn set(&self, kind: OperationKind, seconds: i64) -> Result<TimeoutSnapshot, AuthError> {
        if seconds < 0 {
            return Err(AuthError::InvalidTimeout);
        }

        let millis = (seconds as u64).saturating_mul(MILLIS_PER_SECOND);
        self.cell(kind).store(millis, Ordering::SeqCst);

        Ok(self.snapshot())
    }

    /// Currently configured delay for `kind` (zero if never set).
    pub fn delay(&self, kind: OperationKind) -> Duration {
        Duration::from_millis(self.cell(kind).load(Ordering::SeqCst))
    }

    /// Current delay in seconds, for gauge reporting.
    pub fn delay_seconds(&self, kind: OperationKind) -> f64 {
        self.cell(kind).load(Ordering::SeqCst) as f64 / 1_000.0
    }

    /// Point-in-time view of all five delays, in whole seconds.
    pub fn snapshot(&self) -> TimeoutSnapshot {
        TimeoutSnapshot {
            login: self.login_ms.load(Ordering::SeqCst) / MILLIS_PER_SECOND,
            logout: self.logout_ms.load(Ordering::SeqCst) / MILLIS_PER_SECOND,
            logged_user: self.logged_user_ms.load(Ordering::SeqCst) / MILLIS_PER_SECOND,
            is_logged: self.is_logged_ms.load(Ordering::SeqCst) / MILLIS_PER_SECOND,
            register: self.register_ms.load(Ordering::SeqCst) / MILLIS_PER_SECOND,
        }
    }
}
