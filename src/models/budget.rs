//! Monthly budget model.

use serde::{Deserialize, Serialize};

use super::BudgetId;

/// A named monthly spending ceiling, matched against transaction categories.
///
/// User-created only; never sourced from the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier (UUID).
    pub id: BudgetId,
    /// Category name this budget tracks (exact, case-sensitive match).
    pub name: String,
    /// Monthly ceiling (positive).
    pub limit: f64,
}
