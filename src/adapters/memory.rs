use crate::domain::model::AuditEntry;
use crate::domain::ports::{Auditor, ReportPersistence};
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps every saved report in memory, oldest first.
#[derive(Debug, Default)]
pub struct MemoryReportPersistence {
    saved: Mutex<Vec<String>>,
}

impl MemoryReportPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<String> {
        lock(&self.saved).clone()
    }

    pub fn last(&self) -> Option<String> {
        lock(&self.saved).last().cloned()
    }
}

impl ReportPersistence for MemoryReportPersistence {
    fn save(&self, content: &str) {
        lock(&self.saved).push(content.to_string());
    }
}

#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        lock(&self.entries).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

impl Auditor for MemoryAuditLog {
    fn record(&self, kind: &str, length: usize, timestamp: DateTime<Utc>) {
        tracing::debug!("Audit entry: {} ({} chars)", kind, length);
        lock(&self.entries).push(AuditEntry {
            kind: kind.to_string(),
            length,
            recorded_at: timestamp,
        });
    }
}
