//! Category registry: per-tenant category lookup by code.

use std::collections::HashMap;

use super::types::{Category, CategoryCode};
use super::error::CategoryError;
use super::seed::BASE_CATEGORIES;
use crate::chart::AccountCode;

/// A tenant's category list, keyed by code.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: HashMap<CategoryCode, Category>,
}

impl CategoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the base category list.
    #[must_use]
    pub fn base() -> Self {
        let categories = BASE_CATEGORIES
            .iter()
            .map(|seed| {
                let code = CategoryCode::from(seed.code);
                let category = Category {
                    code: code.clone(),
                    debit_account: AccountCode::from(seed.debit_account),
                    credit_account: AccountCode::from(seed.credit_account),
                    kind: seed.kind,
                    description_template: seed.template.map(str::to_owned),
                };
                (code, category)
            })
            .collect();
        Self { categories }
    }

    /// Adds a category to the registry.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::DuplicateCode` if the code is already taken.
    pub fn insert(&mut self, category: Category) -> Result<(), CategoryError> {
        if self.categories.contains_key(&category.code) {
            return Err(CategoryError::DuplicateCode(category.code));
        }
        self.categories.insert(category.code.clone(), category);
        Ok(())
    }

    /// Resolves a category by code.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::NotFound` if no category has this code.
    pub fn resolve(&self, code: &CategoryCode) -> Result<&Category, CategoryError> {
        self.categories
            .get(code)
            .ok_or_else(|| CategoryError::NotFound(code.clone()))
    }

    /// Number of categories in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the registry holds no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
