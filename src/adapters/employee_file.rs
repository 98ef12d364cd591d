use crate::domain::model::Employee;
use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b';')
        .has_headers(false)
        .trim(csv::Trim::All)
        .comment(Some(b'#'));
    builder
}

/// Reads `id;name;salary` rows, the same layout the report produces.
pub fn read_employees<R: Read>(reader: R) -> Result<Vec<Employee>> {
    let mut rdr = reader_builder().from_reader(reader);
    let mut employees = Vec::new();
    for row in rdr.deserialize() {
        let employee: Employee = row?;
        employees.push(employee);
    }
    Ok(employees)
}

pub fn load_employees<P: AsRef<Path>>(path: P) -> Result<Vec<Employee>> {
    tracing::debug!("Loading employees from {}", path.as_ref().display());
    let file = std::fs::File::open(path)?;
    read_employees(file)
}
