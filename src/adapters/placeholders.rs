//! Default adapters with no side effects beyond a `debug` log line.
//!
//! Each one stands where a real PDF renderer, mail client, database or
//! audit sink would be plugged in.

use crate::domain::model::InformeData;
use crate::domain::ports::{
    Auditor, Notifier, ReportGenerator, ReportNotifier, ReportPersistence, Repository,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfReportGenerator;

impl ReportGenerator for PdfReportGenerator {
    fn generate(&self, data: &InformeData) {
        tracing::debug!("PDF generation requested ({} chars, no-op)", data.content.chars().count());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn notify(&self, data: &InformeData) {
        tracing::debug!(
            "Email notification requested ({} chars, no-op)",
            data.content.chars().count()
        );
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InformeRepository;

impl Repository for InformeRepository {
    fn save(&self, data: &InformeData) {
        tracing::debug!("Database save requested ({} chars, no-op)", data.content.chars().count());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailReportNotifier;

impl ReportNotifier for EmailReportNotifier {
    fn send(&self, content: &str) {
        tracing::debug!("Report email requested ({} chars, no-op)", content.chars().count());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileReportPersistence;

impl ReportPersistence for FileReportPersistence {
    fn save(&self, content: &str) {
        tracing::debug!("Report file save requested ({} chars, no-op)", content.chars().count());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleAuditor;

impl Auditor for SimpleAuditor {
    fn record(&self, kind: &str, length: usize, timestamp: DateTime<Utc>) {
        tracing::debug!(
            "Audit requested: kind={} length={} at={} (no-op)",
            kind,
            length,
            timestamp.to_rfc3339()
        );
    }
}
