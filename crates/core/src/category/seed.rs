//! Base category list seeded for every new tenant.

use super::types::CategoryKind;
use crate::chart::seed::codes as accounts;

/// Well-known category codes used by the operation services.
pub mod codes {
    /// Buying cylinders from a supplier.
    pub const CYLINDER_PURCHASE: &str = "cylinder-purchase";
    /// Retail cylinder sale.
    pub const CYLINDER_SALE: &str = "cylinder-sale";
    /// Marking or unmarking cylinders as defected.
    pub const CYLINDER_DEFECT: &str = "cylinder-defect";
    /// Buying regulators from a supplier.
    pub const REGULATOR_PURCHASE: &str = "regulator-purchase";
    /// Retail regulator sale.
    pub const REGULATOR_SALE: &str = "regulator-sale";
    /// Marking or unmarking regulators as defected.
    pub const REGULATOR_DEFECT: &str = "regulator-defect";
    /// Buying stoves from a supplier.
    pub const STOVE_PURCHASE: &str = "stove-purchase";
    /// Retail stove sale.
    pub const STOVE_SALE: &str = "stove-sale";
    /// Marking or unmarking stoves as defected.
    pub const STOVE_DEFECT: &str = "stove-defect";
    /// Paid portion of a shop exchange.
    pub const EXCHANGE_CASH: &str = "exchange-cash";
    /// Due portion of a shop exchange, posted as a receivable.
    pub const EXCHANGE_CREDIT: &str = "exchange-credit";
    /// A shop paying down its outstanding due.
    pub const DUE_PAYMENT: &str = "due-payment";
    /// General operating expense.
    pub const EXPENSE_PAYMENT: &str = "expense-payment";
}

/// One row of the base category list.
#[derive(Debug, Clone, Copy)]
pub struct CategorySeed {
    /// Category code.
    pub code: &'static str,
    /// Account debited by this category.
    pub debit_account: &'static str,
    /// Account credited by this category.
    pub credit_account: &'static str,
    /// Cash-movement classification.
    pub kind: CategoryKind,
    /// Description template.
    pub template: Option<&'static str>,
}

/// The fixed base category list every tenant starts with.
pub const BASE_CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        code: codes::CYLINDER_PURCHASE,
        debit_account: accounts::INVENTORY_CYLINDERS,
        credit_account: accounts::CASH,
        kind: CategoryKind::CashOutflow,
        template: Some("Purchased {{quantity}} {{brand}} {{size}} cylinders at {{unit_price}}"),
    },
    CategorySeed {
        code: codes::CYLINDER_SALE,
        debit_account: accounts::CASH,
        credit_account: accounts::REVENUE_CYLINDERS,
        kind: CategoryKind::CashInflow,
        template: Some("Sold {{quantity}} {{brand}} {{size}} cylinders at {{unit_price}}"),
    },
    CategorySeed {
        code: codes::CYLINDER_DEFECT,
        debit_account: accounts::INVENTORY_DEFECTED,
        credit_account: accounts::INVENTORY_CYLINDERS,
        kind: CategoryKind::NonCash,
        template: Some("Defect {{action}} of {{quantity}} {{brand}} {{size}} cylinders"),
    },
    CategorySeed {
        code: codes::REGULATOR_PURCHASE,
        debit_account: accounts::INVENTORY_REGULATORS,
        credit_account: accounts::CASH,
        kind: CategoryKind::CashOutflow,
        template: Some("Purchased {{quantity}} {{kind}} regulators at {{unit_price}}"),
    },
    CategorySeed {
        code: codes::REGULATOR_SALE,
        debit_account: accounts::CASH,
        credit_account: accounts::REVENUE_REGULATORS,
        kind: CategoryKind::CashInflow,
        template: Some("Sold {{quantity}} {{kind}} regulators at {{unit_price}}"),
    },
    CategorySeed {
        code: codes::REGULATOR_DEFECT,
        debit_account: accounts::INVENTORY_DEFECTED,
        credit_account: accounts::INVENTORY_REGULATORS,
        kind: CategoryKind::NonCash,
        template: Some("Defect {{action}} of {{quantity}} {{kind}} regulators"),
    },
    CategorySeed {
        code: codes::STOVE_PURCHASE,
        debit_account: accounts::INVENTORY_STOVES,
        credit_account: accounts::CASH,
        kind: CategoryKind::CashOutflow,
        template: Some("Purchased {{quantity}} {{model}} ({{burners}}-burner) stoves at {{unit_price}}"),
    },
    CategorySeed {
        code: codes::STOVE_SALE,
        debit_account: accounts::CASH,
        credit_account: accounts::REVENUE_STOVES,
        kind: CategoryKind::CashInflow,
        template: Some("Sold {{quantity}} {{model}} ({{burners}}-burner) stoves at {{unit_price}}"),
    },
    CategorySeed {
        code: codes::STOVE_DEFECT,
        debit_account: accounts::INVENTORY_DEFECTED,
        credit_account: accounts::INVENTORY_STOVES,
        kind: CategoryKind::NonCash,
        template: Some("Defect {{action}} of {{quantity}} {{model}} stoves"),
    },
    CategorySeed {
        code: codes::EXCHANGE_CASH,
        debit_account: accounts::CASH,
        credit_account: accounts::REVENUE_EXCHANGE,
        kind: CategoryKind::CashInflow,
        template: Some(
            "Exchange with {{shop}}: {{quantity}} cylinders swapped, paid {{paid_amount}} of {{total_price}}",
        ),
    },
    CategorySeed {
        code: codes::EXCHANGE_CREDIT,
        debit_account: accounts::RECEIVABLES,
        credit_account: accounts::REVENUE_EXCHANGE,
        kind: CategoryKind::NonCash,
        template: Some("Exchange due for {{shop}}: {{due}} outstanding of {{total_price}}"),
    },
    CategorySeed {
        code: codes::DUE_PAYMENT,
        debit_account: accounts::CASH,
        credit_account: accounts::RECEIVABLES,
        kind: CategoryKind::CashInflow,
        template: Some("Due payment from {{shop}}: {{amount}}"),
    },
    CategorySeed {
        code: codes::EXPENSE_PAYMENT,
        debit_account: accounts::EXPENSE_GENERAL,
        credit_account: accounts::CASH,
        kind: CategoryKind::CashOutflow,
        template: Some("Expense: {{purpose}}"),
    },
];
