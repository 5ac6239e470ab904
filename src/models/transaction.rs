//! Unified ledger transaction model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountId, TransactionId};

/// Direction of a [`Transaction`].
///
/// The direction is carried here, never by a negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    /// Money going out (purchases, manual expenses).
    Expense,
    /// Money coming in (deposits, manual income).
    Income,
}

/// One row of the unified ledger.
///
/// Unifies remote purchases (expense), remote deposits (income) and manual
/// user entries into the single shape every derived view consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier: the natural purchase/deposit id for API-sourced
    /// rows, a freshly generated UUID for manual entries.
    pub id: TransactionId,
    /// Canonical timestamp (normalized from the raw API date string).
    pub date: DateTime<Utc>,
    /// Merchant name, resolved description, or user-entered text.
    pub title: String,
    /// Category label; a stored user override takes precedence over the
    /// account-alias default.
    pub category: String,
    /// Magnitude of the transaction; always `>= 0`.
    pub amount: f64,
    /// Direction of the transaction.
    pub kind: TxKind,
    /// Owning account, when known.
    pub account_id: Option<AccountId>,
    /// Upstream record id for API-sourced rows (purchase id for expenses,
    /// deposit id for income); `None` for manual entries. Non-empty values
    /// are the upsert key when merging reconciliation batches.
    pub source_purchase_id: Option<String>,
}

impl Transaction {
    /// Whether this row is an expense.
    #[inline]
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TxKind::Expense
    }

    /// Whether this row is income.
    #[inline]
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.kind == TxKind::Income
    }
}
