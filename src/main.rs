use bank_ledger::application::bank::Bank;
use bank_ledger::application::operation::Operation;
use bank_ledger::config::LedgerConfig;
use bank_ledger::domain::client::{ClientId, ClientProfile};
use bank_ledger::interfaces::csv::account_writer::AccountWriter;
use bank_ledger::interfaces::csv::record_reader::RecordReader;
use bank_ledger::telemetry;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Operations CSV file (type, client, amount)
    input: PathBuf,

    /// Clients CSV file (client, name, birth_date, address)
    #[arg(long)]
    clients: PathBuf,

    /// JSON file with ledger settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Per-withdrawal ceiling for new accounts (overrides the config file)
    #[arg(long)]
    ceiling: Option<Decimal>,

    /// Lifetime withdrawal count for new accounts (overrides the config file)
    #[arg(long)]
    max_withdrawals: Option<u32>,

    /// Print this client's statement instead of the account listing
    #[arg(long, value_name = "CLIENT")]
    statement: Option<String>,
}

impl Cli {
    fn ledger_config(&self) -> Result<LedgerConfig> {
        let mut config = match &self.config {
            Some(path) => LedgerConfig::from_path(path).into_diagnostic()?,
            None => LedgerConfig::default(),
        };
        if let Some(ceiling) = self.ceiling {
            config.withdrawal_ceiling = ceiling;
        }
        if let Some(max) = self.max_withdrawals {
            config.max_withdrawals = max;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let mut bank = Bank::new(cli.ledger_config()?);

    // Register clients
    let file = File::open(&cli.clients).into_diagnostic()?;
    for profile in RecordReader::new(file).records::<ClientProfile>() {
        match profile {
            Ok(profile) => {
                if let Err(e) = bank.register_client(profile) {
                    tracing::warn!(error = %e, "Error registering client");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Error reading client"),
        }
    }

    // Process operations
    let file = File::open(&cli.input).into_diagnostic()?;
    for op in RecordReader::new(file).records::<Operation>() {
        match op {
            // Rejected operations are logged by the bank; keep going.
            Ok(op) => {
                let _ = bank.process(op);
            }
            Err(e) => tracing::warn!(error = %e, "Error reading operation"),
        }
    }

    match cli.statement {
        Some(id) => {
            let statement = bank.statement(&ClientId::new(id)).into_diagnostic()?;
            println!("{statement}");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = AccountWriter::new(stdout.lock());
            writer.write_accounts(bank.accounts()).into_diagnostic()?;
        }
    }

    Ok(())
}
