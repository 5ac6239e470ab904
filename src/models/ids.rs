//! Newtype wrappers for entity identifiers.
//!
//! These prevent accidentally mixing up IDs of different entity types
//! at compile time.

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapping a `String` inner type.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from the given string.
            #[inline]
            #[must_use]
            pub const fn new(value: String) -> Self {
                Self(value)
            }

            /// Returns a reference to the inner string.
            #[inline]
            #[must_use]
            pub fn as_inner(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the inner string.
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

define_string_id! {
    /// Unique identifier for a customer (hex object id).
    CustomerId
}

define_string_id! {
    /// Unique identifier for a bank/credit account (hex object id).
    AccountId
}

define_string_id! {
    /// Unique identifier for a raw purchase record (hex object id).
    PurchaseId
}

define_string_id! {
    /// Unique identifier for a raw deposit record (hex object id).
    DepositId
}

define_string_id! {
    /// Unique identifier for a merchant (hex object id).
    MerchantId
}

define_string_id! {
    /// Unique identifier for a unified ledger transaction.
    ///
    /// For API-sourced rows this is the natural purchase/deposit id; for
    /// manual entries it is a freshly generated UUID.
    TransactionId
}

define_string_id! {
    /// Unique identifier for a user-created budget (UUID).
    BudgetId
}
