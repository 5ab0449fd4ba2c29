//! Base chart of accounts seeded for every new tenant.

use super::account::AccountType;

/// Well-known account codes referenced by the seeded categories.
pub mod codes {
    /// Cash in hand and at bank.
    pub const CASH: &str = "cash";
    /// Amounts owed to the business by shops.
    pub const RECEIVABLES: &str = "receivables";
    /// Amounts the business owes suppliers.
    pub const PAYABLES: &str = "payables";
    /// Cylinder inventory at cost.
    pub const INVENTORY_CYLINDERS: &str = "inventory-cylinders";
    /// Regulator inventory at cost.
    pub const INVENTORY_REGULATORS: &str = "inventory-regulators";
    /// Stove inventory at cost.
    pub const INVENTORY_STOVES: &str = "inventory-stoves";
    /// Units pulled out of sellable stock as defected.
    pub const INVENTORY_DEFECTED: &str = "inventory-defected";
    /// Revenue from cylinder sales.
    pub const REVENUE_CYLINDERS: &str = "revenue-cylinders";
    /// Revenue from regulator sales.
    pub const REVENUE_REGULATORS: &str = "revenue-regulators";
    /// Revenue from stove sales.
    pub const REVENUE_STOVES: &str = "revenue-stoves";
    /// Revenue from shop exchange operations.
    pub const REVENUE_EXCHANGE: &str = "revenue-exchange";
    /// General operating expenses.
    pub const EXPENSE_GENERAL: &str = "expense-general";
    /// Owner capital.
    pub const OWNER_EQUITY: &str = "owner-equity";
}

/// One row of the base chart.
#[derive(Debug, Clone, Copy)]
pub struct AccountSeed {
    /// Account code.
    pub code: &'static str,
    /// Human name.
    pub name: &'static str,
    /// Classification.
    pub account_type: AccountType,
}

/// The fixed base chart every tenant starts with.
pub const BASE_CHART: &[AccountSeed] = &[
    AccountSeed {
        code: codes::CASH,
        name: "Cash",
        account_type: AccountType::Asset,
    },
    AccountSeed {
        code: codes::RECEIVABLES,
        name: "Accounts Receivable",
        account_type: AccountType::Asset,
    },
    AccountSeed {
        code: codes::PAYABLES,
        name: "Accounts Payable",
        account_type: AccountType::Liability,
    },
    AccountSeed {
        code: codes::INVENTORY_CYLINDERS,
        name: "Cylinder Inventory",
        account_type: AccountType::Asset,
    },
    AccountSeed {
        code: codes::INVENTORY_REGULATORS,
        name: "Regulator Inventory",
        account_type: AccountType::Asset,
    },
    AccountSeed {
        code: codes::INVENTORY_STOVES,
        name: "Stove Inventory",
        account_type: AccountType::Asset,
    },
    AccountSeed {
        code: codes::INVENTORY_DEFECTED,
        name: "Defected Inventory",
        account_type: AccountType::Asset,
    },
    AccountSeed {
        code: codes::REVENUE_CYLINDERS,
        name: "Cylinder Sales Revenue",
        account_type: AccountType::Income,
    },
    AccountSeed {
        code: codes::REVENUE_REGULATORS,
        name: "Regulator Sales Revenue",
        account_type: AccountType::Income,
    },
    AccountSeed {
        code: codes::REVENUE_STOVES,
        name: "Stove Sales Revenue",
        account_type: AccountType::Income,
    },
    AccountSeed {
        code: codes::REVENUE_EXCHANGE,
        name: "Exchange Revenue",
        account_type: AccountType::Income,
    },
    AccountSeed {
        code: codes::EXPENSE_GENERAL,
        name: "General Expenses",
        account_type: AccountType::Expense,
    },
    AccountSeed {
        code: codes::OWNER_EQUITY,
        name: "Owner Equity",
        account_type: AccountType::Equity,
    },
];
