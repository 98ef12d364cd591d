use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input row of the employee report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>, salary: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary,
        }
    }
}

/// Payload handed through the informe pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InformeData {
    pub content: String,
}

impl InformeData {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// One audit record as kept by [`MemoryAuditLog`](crate::adapters::memory::MemoryAuditLog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub kind: String,
    pub length: usize,
    pub recorded_at: DateTime<Utc>,
}
