//! Financial summary snapshot for the chat assistant.

use serde::{Deserialize, Serialize};

use super::Transaction;

/// Plain data snapshot of the user's finances.
///
/// This is the only view of the core the chat component may read; it embeds
/// the snapshot as model context. "Ant" expenses are the small recurring
/// ones (amount under 100) tracked for micro-spending analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of balances across all held accounts.
    pub total_balance: f64,
    /// Sum of all ant expenses.
    pub total_ant_expenses: f64,
    /// Up to three category names, ranked by ant-expense count.
    pub top_categories: Vec<String>,
    /// Up to five most recent transactions.
    pub recent_transactions: Vec<Transaction>,
}
