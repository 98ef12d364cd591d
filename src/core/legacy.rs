//! The "before" side of the informe and employee report exercises, kept for
//! comparison with [`InformeService`](super::informe::InformeService) and
//! [`EmployeeReportService`](super::report::EmployeeReportService).

use crate::domain::model::Employee;
use chrono::{DateTime, Utc};

/// One type with three unrelated jobs: rendering, mailing and storing.
#[derive(Debug, Default)]
pub struct LegacyInforme;

impl LegacyInforme {
    pub fn generate_pdf(&self) {
        tracing::debug!("LegacyInforme: generate_pdf (no-op)");
    }

    pub fn send_email(&self) {
        tracing::debug!("LegacyInforme: send_email (no-op)");
    }

    pub fn save_to_database(&self) {
        tracing::debug!("LegacyInforme: save_to_database (no-op)");
    }
}

/// Builds the `id;name;salary` report and distributes it inline.
pub fn generate_employee_report(employees: &[Employee]) -> String {
    let mut lines = Vec::new();
    for e in employees {
        lines.push(format!("{};{};{}\n", e.id, e.name, e.salary));
    }
    let content = lines.concat();
    send_by_email(&content);
    save_to_file(&content);
    record_audit("REPORTE", content.chars().count(), Utc::now());
    content
}

fn send_by_email(content: &str) {
    tracing::debug!("send_by_email: {} chars (no-op)", content.chars().count());
}

fn save_to_file(content: &str) {
    tracing::debug!("save_to_file: {} chars (no-op)", content.chars().count());
}

fn record_audit(kind: &str, length: usize, at: DateTime<Utc>) {
    tracing::debug!("record_audit: {} {} {} (no-op)", kind, length, at);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::formatters::CsvReportFormatter;
    use crate::domain::ports::ReportFormatter;

    #[test]
    fn test_legacy_report_format() {
        let employees = vec![
            Employee::new("1", "Ana", 1000.0),
            Employee::new("2", "Luis", 2500.75),
        ];

        assert_eq!(
            generate_employee_report(&employees),
            "1;Ana;1000\n2;Luis;2500.75\n"
        );
        assert_eq!(generate_employee_report(&[]), "");
    }

    #[test]
    fn test_legacy_and_refactored_agree() {
        let employees = vec![
            Employee::new("10", "Marta", 1234.5),
            Employee::new("11", "Jon", 0.0),
        ];

        assert_eq!(
            generate_employee_report(&employees),
            CsvReportFormatter.format(&employees)
        );
    }

    #[test]
    fn test_legacy_informe_methods_are_callable() {
        let informe = LegacyInforme;
        informe.generate_pdf();
        informe.send_email();
        informe.save_to_database();
    }
}
