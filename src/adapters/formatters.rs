use crate::domain::model::Employee;
use crate::domain::ports::ReportFormatter;

/// `id;name;salary` per employee, newline-terminated, no header.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvReportFormatter;

impl ReportFormatter for CsvReportFormatter {
    fn format(&self, employees: &[Employee]) -> String {
        employees
            .iter()
            .map(|e| format!("{};{};{}\n", e.id, e.name, e.salary))
            .collect()
    }
}

/// Pretty or compact JSON array of the employees.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReportFormatter {
    pub pretty: bool,
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, employees: &[Employee]) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(employees)
        } else {
            serde_json::to_string(employees)
        };

        rendered.unwrap_or_else(|e| {
            tracing::error!("Failed to render employees as JSON: {}", e);
            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<Employee> {
        vec![
            Employee::new("1", "Ana", 1000.0),
            Employee::new("2", "Luis", 1999.99),
        ]
    }

    #[test]
    fn test_csv_lines_follow_input_order() {
        assert_eq!(
            CsvReportFormatter.format(&staff()),
            "1;Ana;1000\n2;Luis;1999.99\n"
        );
    }

    #[test]
    fn test_csv_empty_input() {
        assert_eq!(CsvReportFormatter.format(&[]), "");
    }

    #[test]
    fn test_json_compact() {
        let formatter = JsonReportFormatter::default();

        assert_eq!(
            formatter.format(&staff()[..1]),
            r#"[{"id":"1","name":"Ana","salary":1000.0}]"#
        );
        assert_eq!(formatter.format(&[]), "[]");
    }

    #[test]
    fn test_json_pretty_parses_back() {
        let formatter = JsonReportFormatter { pretty: true };
        let rendered = formatter.format(&staff());

        let parsed: Vec<Employee> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, staff());
        assert!(rendered.contains('\n'));
    }
}
