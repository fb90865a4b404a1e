use super::operation::{Operation, OperationType};
use super::report::{AccountSummary, Statement};
use crate::config::LedgerConfig;
use crate::domain::account::{Account, AccountNumber};
use crate::domain::client::{Client, ClientId, ClientProfile};
use crate::domain::ports::ClientStore;
use crate::domain::transaction::Transaction;
use crate::error::{LedgerError, Result};
use crate::infrastructure::in_memory::InMemoryClientStore;
use rust_decimal::Decimal;

/// The ledger context: client registry plus account numbering.
///
/// Every entry point takes a client id and works on that client's first
/// account; picking among several accounts is left to callers that hold the
/// `Client` directly.
pub struct Bank<S: ClientStore = InMemoryClientStore> {
    store: S,
    config: LedgerConfig,
    accounts_opened: AccountNumber,
}

impl Bank {
    pub fn new(config: LedgerConfig) -> Self {
        Self::with_store(InMemoryClientStore::new(), config)
    }
}

impl<S: ClientStore> Bank<S> {
    pub fn with_store(store: S, config: LedgerConfig) -> Self {
        Self {
            store,
            config,
            accounts_opened: 0,
        }
    }

    pub fn client(&self, id: &ClientId) -> Option<&Client> {
        self.store.get(id)
    }

    pub fn register_client(&mut self, profile: ClientProfile) -> Result<()> {
        if self.store.contains(&profile.id) {
            return Err(LedgerError::DuplicateClient(profile.id));
        }
        tracing::debug!(client = %profile.id, "client registered");
        self.store.insert(Client::new(profile));
        Ok(())
    }

    /// Opens a current account for `id` with the configured withdrawal policy.
    ///
    /// Numbers are sequential across the whole bank, starting at 1.
    pub fn open_account(&mut self, id: &ClientId) -> Result<AccountNumber> {
        let number = self.accounts_opened + 1;
        let client = self
            .store
            .get_mut(id)
            .ok_or_else(|| LedgerError::ClientNotFound(id.clone()))?;

        let account = Account::new_current(
            client,
            number,
            self.config.withdrawal_ceiling,
            self.config.max_withdrawals,
        );
        client.add_account(account);
        self.accounts_opened = number;

        tracing::debug!(client = %id, number, "account opened");
        Ok(number)
    }

    pub fn deposit(&mut self, id: &ClientId, amount: Decimal) -> Result<()> {
        self.apply(id, Transaction::Deposit(amount))
    }

    pub fn withdraw(&mut self, id: &ClientId, amount: Decimal) -> Result<()> {
        self.apply(id, Transaction::Withdrawal(amount))
    }

    /// Applies `transaction` to the client's first account.
    pub fn apply(&mut self, id: &ClientId, transaction: Transaction) -> Result<()> {
        let client = self
            .store
            .get_mut(id)
            .ok_or_else(|| LedgerError::ClientNotFound(id.clone()))?;
        let number = client
            .accounts()
            .first()
            .map(Account::number)
            .ok_or_else(|| LedgerError::NoAccount(id.clone()))?;

        client.apply_transaction(number, &transaction)?;
        tracing::debug!(
            client = %id,
            number,
            kind = %transaction.kind(),
            amount = %transaction.amount(),
            "transaction applied"
        );
        Ok(())
    }

    /// Statement of the client's first account.
    pub fn statement(&self, id: &ClientId) -> Result<Statement> {
        let client = self
            .store
            .get(id)
            .ok_or_else(|| LedgerError::ClientNotFound(id.clone()))?;
        let account = client
            .accounts()
            .first()
            .ok_or_else(|| LedgerError::NoAccount(id.clone()))?;
        Ok(Statement::new(client, account))
    }

    /// Every account in the bank, in opening order.
    pub fn accounts(&self) -> Vec<AccountSummary> {
        let mut summaries: Vec<AccountSummary> = self
            .store
            .clients()
            .flat_map(|client| {
                client
                    .accounts()
                    .iter()
                    .map(move |account| AccountSummary::new(client, account))
            })
            .collect();
        summaries.sort_by_key(|summary| summary.number);
        summaries
    }

    /// Dispatches one parsed batch row. Rejections are logged at warn level.
    pub fn process(&mut self, operation: Operation) -> Result<()> {
        let client = operation.client.clone();
        let result = self.dispatch(operation);
        if let Err(e) = &result {
            tracing::warn!(client = %client, error = %e, "Error processing operation");
        }
        result
    }

    fn dispatch(&mut self, operation: Operation) -> Result<()> {
        match operation.r#type {
            OperationType::Open => self.open_account(&operation.client).map(|_| ()),
            OperationType::Deposit => {
                let amount = operation
                    .amount
                    .ok_or(LedgerError::MissingAmount("deposit"))?;
                self.deposit(&operation.client, amount)
            }
            OperationType::Withdrawal => {
                let amount = operation
                    .amount
                    .ok_or(LedgerError::MissingAmount("withdrawal"))?;
                self.withdraw(&operation.client, amount)
            }
        }
    }
}
