use crate::domain::model::Employee;
use crate::domain::ports::{Auditor, ReportFormatter, ReportNotifier, ReportPersistence};
use chrono::Utc;

/// Audit kind recorded for every generated employee report.
pub const REPORT_AUDIT_KIND: &str = "REPORTE";

pub struct EmployeeReportService<F, N, P, A>
where
    F: ReportFormatter,
    N: ReportNotifier,
    P: ReportPersistence,
    A: Auditor,
{
    formatter: F,
    notifier: N,
    persistence: P,
    auditor: A,
}

impl<F, N, P, A> EmployeeReportService<F, N, P, A>
where
    F: ReportFormatter,
    N: ReportNotifier,
    P: ReportPersistence,
    A: Auditor,
{
    pub fn new(formatter: F, notifier: N, persistence: P, auditor: A) -> Self {
        Self {
            formatter,
            notifier,
            persistence,
            auditor,
        }
    }

    /// Formats `employees`, sends and stores the result, audits it, and
    /// returns the formatted content.
    pub fn generate_report(&self, employees: &[Employee]) -> String {
        tracing::debug!("Formatting report for {} employees", employees.len());
        let content = self.formatter.format(employees);

        self.notifier.send(&content);
        self.persistence.save(&content);

        let length = content.chars().count();
        self.auditor.record(REPORT_AUDIT_KIND, length, Utc::now());

        tracing::info!(
            "Employee report generated: {} rows, {} chars",
            employees.len(),
            length
        );
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::formatters::CsvReportFormatter;
    use chrono::{DateTime, Utc};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Silent;

    impl ReportNotifier for Silent {
        fn send(&self, _content: &str) {}
    }

    impl ReportPersistence for Silent {
        fn save(&self, _content: &str) {}
    }

    #[derive(Clone, Default)]
    struct CapturingAuditor {
        entries: Arc<Mutex<Vec<(String, usize, DateTime<Utc>)>>>,
    }

    impl Auditor for CapturingAuditor {
        fn record(&self, kind: &str, length: usize, timestamp: DateTime<Utc>) {
            self.entries
                .lock()
                .unwrap()
                .push((kind.to_string(), length, timestamp));
        }
    }

    #[test]
    fn test_empty_report() {
        let service =
            EmployeeReportService::new(CsvReportFormatter, Silent, Silent, CapturingAuditor::default());

        assert_eq!(service.generate_report(&[]), "");
    }

    #[test]
    fn test_single_employee_report() {
        let service =
            EmployeeReportService::new(CsvReportFormatter, Silent, Silent, CapturingAuditor::default());

        let report = service.generate_report(&[Employee::new("1", "Ana", 1000.0)]);

        assert_eq!(report, "1;Ana;1000\n");
    }

    #[test]
    fn test_audit_counts_characters_not_bytes() {
        let auditor = CapturingAuditor::default();
        let service = EmployeeReportService::new(CsvReportFormatter, Silent, Silent, auditor.clone());

        let before = Utc::now();
        let report = service.generate_report(&[Employee::new("7", "Íñigo", 1500.5)]);
        let after = Utc::now();

        assert_eq!(report, "7;Íñigo;1500.5\n");
        let entries = auditor.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        let (kind, length, at) = &entries[0];
        assert_eq!(kind, REPORT_AUDIT_KIND);
        assert_eq!(*length, 15);
        assert!(before <= *at && *at <= after);
    }
}
