// Adapters layer: concrete implementations of the domain ports, plus the
// employee file reader used by the CLI.

pub mod employee_file;
pub mod formatters;
pub mod memory;
pub mod placeholders;

pub use formatters::{CsvReportFormatter, JsonReportFormatter};
pub use memory::{MemoryAuditLog, MemoryReportPersistence};
pub use placeholders::{
    EmailNotifier, EmailReportNotifier, FileReportPersistence, InformeRepository,
    PdfReportGenerator, SimpleAuditor,
};
