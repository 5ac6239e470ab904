//! Raw purchase (expense) record from the remote API.

use serde::{Deserialize, Serialize};

use super::{AccountId, MerchantId, PurchaseId};

/// One purchase as returned by `GET /accounts/{id}/purchases`.
///
/// The `purchase_date` is kept as the raw string the API sent; the
/// reconciler normalizes it via [`crate::datetime`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    /// Unique identifier (hex object id).
    #[serde(rename = "_id")]
    pub id: PurchaseId,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Purchase amount (non-negative).
    pub amount: f64,
    /// Raw purchase date string, format not guaranteed.
    pub purchase_date: String,
    /// Merchant identifier; the sandbox sometimes sends an empty string.
    #[serde(default)]
    pub merchant_id: Option<MerchantId>,
    /// Account the purchase was paid from.
    #[serde(default)]
    pub payer_id: Option<AccountId>,
}

impl Purchase {
    /// The merchant id, with the sandbox's empty-string placeholder
    /// treated as absent.
    #[inline]
    #[must_use]
    pub fn merchant(&self) -> Option<&MerchantId> {
        self.merchant_id
            .as_ref()
            .filter(|id| !id.as_inner().is_empty())
    }
}
