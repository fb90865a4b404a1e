use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const CLIENTS_HEADER: &str = "client,name,birth_date,address";
pub const OPERATIONS_HEADER: &str = "type,client,amount";

/// Writes `header` followed by `rows` into a fresh temporary file.
pub fn write_csv(header: &str, rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{header}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}

/// A clients file with a single client, id `1`, named Ana.
pub fn single_client() -> Result<NamedTempFile, Error> {
    write_csv(CLIENTS_HEADER, &["1,Ana,1990-04-12,Rua A 10"])
}
