pub mod discount;
pub mod informe;
pub mod legacy;
pub mod report;
pub mod transfer;

pub use crate::domain::ports::{
    Auditor, Notifier, ReportFormatter, ReportGenerator, ReportNotifier, ReportPersistence,
    Repository,
};
