//! Data models for the reconciliation core.
//!
//! Raw remote records ([`Account`], [`Purchase`], [`Deposit`], [`Merchant`])
//! deserialize directly from the sandbox API's snake_case schema. The
//! unified [`Transaction`] row, [`Budget`] and [`FinancialSummary`] are the
//! client-side model every screen consumes.

mod account;
mod budget;
mod deposit;
mod ids;
mod merchant;
mod purchase;
mod summary;
mod transaction;

pub use account::Account;
pub use budget::Budget;
pub use deposit::Deposit;
pub use ids::{AccountId, BudgetId, CustomerId, DepositId, MerchantId, PurchaseId, TransactionId};
pub use merchant::Merchant;
pub use purchase::Purchase;
pub use summary::FinancialSummary;
pub use transaction::{Transaction, TxKind};
