//! Single-operation capability traits. Orchestrators in [`crate::core`]
//! depend only on these.

use crate::domain::model::{Employee, InformeData};
use chrono::{DateTime, Utc};

pub trait ReportGenerator: Send + Sync {
    fn generate(&self, data: &InformeData);
}

pub trait Notifier: Send + Sync {
    fn notify(&self, data: &InformeData);
}

pub trait Repository: Send + Sync {
    fn save(&self, data: &InformeData);
}

pub trait ReportFormatter: Send + Sync {
    fn format(&self, employees: &[Employee]) -> String;
}

pub trait ReportNotifier: Send + Sync {
    fn send(&self, content: &str);
}

pub trait ReportPersistence: Send + Sync {
    fn save(&self, content: &str);
}

pub trait Auditor: Send + Sync {
    fn record(&self, kind: &str, length: usize, timestamp: DateTime<Utc>);
}

// A caller may keep an `Arc` to an adapter it also hands to an orchestrator.
impl<T: ReportPersistence + ?Sized> ReportPersistence for std::sync::Arc<T> {
    fn save(&self, content: &str) {
        (**self).save(content)
    }
}

impl<T: Auditor + ?Sized> Auditor for std::sync::Arc<T> {
    fn record(&self, kind: &str, length: usize, timestamp: DateTime<Utc>) {
        (**self).record(kind, length, timestamp)
    }
}
