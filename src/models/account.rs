//! Bank/credit account model.

use serde::{Deserialize, Serialize};

use super::{AccountId, CustomerId};

/// One external bank or credit account.
///
/// Deserializes directly from the sandbox API schema (`_id`, `type`,
/// snake_case fields). The set held by the ledger is replaced wholesale on
/// every reconciliation pass; the reconciler may also synthesize one locally
/// when a configured checking account is missing from the API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier (hex object id).
    #[serde(rename = "_id")]
    pub id: AccountId,
    /// Free-text classification, e.g. "Checking" or "Credit Card".
    #[serde(rename = "type")]
    pub kind: String,
    /// User-facing nickname; empty when the account has none.
    #[serde(default)]
    pub nickname: String,
    /// Rewards points balance.
    #[serde(default)]
    pub rewards: i64,
    /// Current balance (signed).
    pub balance: f64,
    /// Owning customer identifier.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
}

impl Account {
    /// Display alias: the nickname, or the account type when no nickname
    /// is set.
    #[inline]
    #[must_use]
    pub fn alias(&self) -> &str {
        if self.nickname.is_empty() {
            &self.kind
        } else {
            &self.nickname
        }
    }

    /// Whether this account's type reads as a checking account.
    #[inline]
    #[must_use]
    pub fn is_checking(&self) -> bool {
        self.kind.to_lowercase().contains("checking")
    }

    /// Whether this account's type reads as a credit/card account.
    #[inline]
    #[must_use]
    pub fn is_credit_card(&self) -> bool {
        let kind = self.kind.to_lowercase();
        kind.contains("credit") || kind.contains("card")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_checking_account() {
        let json = r#"{
            "_id": "68fcccfb9683f20dd51a43ae",
            "type": "Checking",
            "nickname": "Main",
            "rewards": 0,
            "balance": 1250.5,
            "customer_id": "68fcccfb9683f20dd51a43aa"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(
            account.id,
            AccountId::new("68fcccfb9683f20dd51a43ae".to_owned())
        );
        assert_eq!(account.kind, "Checking");
        assert_eq!(account.alias(), "Main");
        assert!(account.is_checking());
        assert!(!account.is_credit_card());
    }

    #[test]
    fn deserialize_without_optional_fields() {
        let json = r#"{
            "_id": "a-2",
            "type": "Credit Card",
            "balance": -320.0
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.nickname, "");
        assert_eq!(account.rewards, 0);
        assert!(account.customer_id.is_none());
        assert!(account.is_credit_card());
    }

    #[test]
    fn alias_falls_back_to_type() {
        let json = r#"{"_id": "a-3", "type": "Savings", "balance": 10.0}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.alias(), "Savings");
    }

    #[test]
    fn credit_card_match_is_case_insensitive() {
        let json = r#"{"_id": "a-4", "type": "CREDIT card", "balance": 0.0}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(account.is_credit_card());
    }

    #[test]
    fn serialize_roundtrip() {
        let account = Account {
            id: AccountId::new("a-1".to_owned()),
            kind: "Checking".to_owned(),
            nickname: String::new(),
            rewards: 0,
            balance: 1000.0,
            customer_id: Some(CustomerId::new("c-1".to_owned())),
        };
        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, account);
    }
}
