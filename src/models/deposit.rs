//! Raw deposit (income) record from the remote API.

use serde::{Deserialize, Serialize};

use super::{AccountId, DepositId};

/// One deposit as returned by `GET /accounts/{id}/deposits`.
///
/// Like [`super::Purchase`], the date is kept raw and normalized by the
/// reconciler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    /// Unique identifier (hex object id).
    #[serde(rename = "_id")]
    pub id: DepositId,
    /// Free-text description, e.g. "Payroll".
    #[serde(default)]
    pub description: String,
    /// Deposit amount (non-negative).
    pub amount: f64,
    /// Raw transaction date string, format not guaranteed.
    pub transaction_date: String,
    /// Account the deposit was credited to.
    #[serde(default)]
    pub payee_id: Option<AccountId>,
    /// Settlement medium, e.g. "balance".
    #[serde(default)]
    pub medium: String,
}
