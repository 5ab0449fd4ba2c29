//! Chart registry: per-tenant account lookup by code.

use std::collections::HashMap;

use super::account::{Account, AccountCode};
use super::error::ChartError;
use super::seed::BASE_CHART;

/// A tenant's chart of accounts, keyed by code.
///
/// Populated once at onboarding from [`BASE_CHART`]. The only mutation the
/// engine itself performs afterwards is deactivation; creating further
/// accounts is an administrative operation handled elsewhere through
/// [`ChartRegistry::insert`].
#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    accounts: HashMap<AccountCode, Account>,
}

impl ChartRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the base chart.
    ///
    /// Each call mints fresh account IDs, so two tenants never share them.
    #[must_use]
    pub fn base() -> Self {
        let accounts = BASE_CHART
            .iter()
            .map(|seed| {
                let code = AccountCode::from(seed.code);
                let account = Account::new(code.clone(), seed.name, seed.account_type);
                (code, account)
            })
            .collect();
        Self { accounts }
    }

    /// Adds an account to the registry.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::DuplicateCode` if the code is already taken.
    pub fn insert(&mut self, account: Account) -> Result<(), ChartError> {
        if self.accounts.contains_key(&account.code) {
            return Err(ChartError::DuplicateCode(account.code));
        }
        self.accounts.insert(account.code.clone(), account);
        Ok(())
    }

    /// Resolves an account by code, active or not.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::NotFound` if no account has this code.
    pub fn resolve(&self, code: &AccountCode) -> Result<&Account, ChartError> {
        self.accounts
            .get(code)
            .ok_or_else(|| ChartError::NotFound(code.clone()))
    }

    /// Resolves an account that must be active.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::NotFound` or `ChartError::Inactive`.
    pub fn resolve_active(&self, code: &AccountCode) -> Result<&Account, ChartError> {
        let account = self.resolve(code)?;
        if !account.is_active {
            return Err(ChartError::Inactive(code.clone()));
        }
        Ok(account)
    }

    /// Deactivates an account. Classification is never changed.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::NotFound` if no account has this code.
    pub fn deactivate(&mut self, code: &AccountCode) -> Result<(), ChartError> {
        let account = self
            .accounts
            .get_mut(code)
            .ok_or_else(|| ChartError::NotFound(code.clone()))?;
        account.is_active = false;
        Ok(())
    }

    /// Number of accounts in the chart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the chart holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterates over all accounts.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}
