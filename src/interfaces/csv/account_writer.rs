use crate::application::report::AccountSummary;
use crate::error::Result;
use std::io::Write;

const HEADER: [&str; 4] = ["branch", "number", "holder", "balance"];

/// Writes the account listing as CSV: `branch,number,holder,balance`.
///
/// The header is always written, even when there are no accounts.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(sink),
        }
    }

    pub fn write_accounts<I>(&mut self, accounts: I) -> Result<()>
    where
        I: IntoIterator<Item = AccountSummary>,
    {
        self.writer.write_record(HEADER)?;
        for account in accounts {
            self.writer.serialize(account)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
