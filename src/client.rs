//! HTTP client for the Nessie sandbox banking API.
//!
//! The sandbox authenticates every request with a `?key=` query parameter;
//! the key is held as a [`SecretString`] so it never shows up in debug
//! output. The [`BankDataSource`] trait is the seam the reconciler consumes,
//! letting tests substitute an in-memory double for the real client.

use core::future::Future;

use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{FinLedgerError, Result};
use crate::models::{Account, AccountId, CustomerId, Deposit, Merchant, MerchantId, Purchase};

/// Base URL for the Nessie sandbox API.
const DEFAULT_BASE_URL: &str = "http://api.nessieisreal.com";

/// Name of the API-key query parameter.
const KEY_PARAM: &str = "key";

/// Remote source of accounts, purchases, deposits and merchants.
///
/// All calls are asynchronous and may fail independently per account or
/// purchase; the reconciler isolates those failures per slice.
pub trait BankDataSource: Send + Sync {
    /// Fetches all accounts belonging to a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be deserialized.
    fn fetch_accounts(
        &self,
        customer: &CustomerId,
    ) -> impl Future<Output = Result<Vec<Account>>> + Send;

    /// Fetches all purchases drawn on an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be deserialized.
    fn fetch_purchases(
        &self,
        account: &AccountId,
    ) -> impl Future<Output = Result<Vec<Purchase>>> + Send;

    /// Fetches all deposits credited to an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be deserialized.
    fn fetch_deposits(
        &self,
        account: &AccountId,
    ) -> impl Future<Output = Result<Vec<Deposit>>> + Send;

    /// Looks up a single merchant by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be deserialized.
    fn fetch_merchant(
        &self,
        merchant: &MerchantId,
    ) -> impl Future<Output = Result<Merchant>> + Send;
}

/// Builder for constructing a [`NessieClient`].
#[derive(Debug, Default)]
pub struct NessieClientBuilder {
    /// API key for query-parameter authentication.
    api_key: Option<SecretString>,
    /// Base URL override (for testing against a mock server).
    base_url: Option<String>,
}

impl NessieClientBuilder {
    /// Sets the API key used to authenticate every request.
    #[inline]
    #[must_use]
    pub fn api_key<T: Into<String>>(mut self, key: T) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Overrides the base URL (useful for testing with a mock server).
    #[inline]
    #[must_use]
    pub fn base_url<T: Into<String>>(mut self, url: T) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`FinLedgerError::MissingApiKey`] if no key was provided.
    /// Returns [`FinLedgerError::Http`] if the HTTP client fails to build.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn build(self) -> Result<NessieClient> {
        let api_key = self.api_key.ok_or(FinLedgerError::MissingApiKey)?;
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        tracing::debug!(base_url = %base_url, "building client");
        let http = reqwest::Client::builder().build()?;

        Ok(NessieClient {
            http,
            api_key,
            base_url,
        })
    }
}

/// Async client for the Nessie sandbox API.
///
/// Use [`NessieClient::builder()`] to construct an instance.
#[derive(Debug)]
pub struct NessieClient {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// API key, sent as a query parameter.
    api_key: SecretString,
    /// API base URL.
    base_url: String,
}

impl NessieClient {
    /// Creates a new builder for configuring the client.
    #[inline]
    #[must_use]
    pub const fn builder() -> NessieClientBuilder {
        NessieClientBuilder {
            api_key: None,
            base_url: None,
        }
    }

    /// Fetches all accounts for a customer via
    /// `GET /customers/{id}/accounts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be deserialized.
    #[inline]
    pub async fn accounts(&self, customer: &CustomerId) -> Result<Vec<Account>> {
        self.get_json(&format!("/customers/{customer}/accounts"))
            .await
    }

    /// Fetches all purchases for an account via
    /// `GET /accounts/{id}/purchases`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be deserialized.
    #[inline]
    pub async fn purchases(&self, account: &AccountId) -> Result<Vec<Purchase>> {
        self.get_json(&format!("/accounts/{account}/purchases"))
            .await
    }

    /// Fetches all deposits for an account via
    /// `GET /accounts/{id}/deposits`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be deserialized.
    #[inline]
    pub async fn deposits(&self, account: &AccountId) -> Result<Vec<Deposit>> {
        self.get_json(&format!("/accounts/{account}/deposits")).await
    }

    /// Looks up a merchant via `GET /merchants/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be deserialized.
    #[inline]
    pub async fn merchant(&self, merchant: &MerchantId) -> Result<Merchant> {
        self.get_json(&format!("/merchants/{merchant}")).await
    }

    /// Sends an authenticated GET request and deserializes the response.
    #[tracing::instrument(skip_all, fields(path = %path))]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        tracing::trace!(url = %url, "sending GET request");
        let response = self
            .http
            .get(&url)
            .query(&[(KEY_PARAM, self.api_key.expose_secret())])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "received response");
        if status.is_success() {
            let body = response.text().await?;
            tracing::trace!(body_len = body.len(), "parsing response body");
            serde_json::from_str(&body).map_err(FinLedgerError::from)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_owned());
            tracing::debug!(status = status.as_u16(), message = %message, "API error");
            Err(FinLedgerError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl BankDataSource for NessieClient {
    #[inline]
    fn fetch_accounts(
        &self,
        customer: &CustomerId,
    ) -> impl Future<Output = Result<Vec<Account>>> + Send {
        self.accounts(customer)
    }

    #[inline]
    fn fetch_purchases(
        &self,
        account: &AccountId,
    ) -> impl Future<Output = Result<Vec<Purchase>>> + Send {
        self.purchases(account)
    }

    #[inline]
    fn fetch_deposits(
        &self,
        account: &AccountId,
    ) -> impl Future<Output = Result<Vec<Deposit>>> + Send {
        self.deposits(account)
    }

    #[inline]
    fn fetch_merchant(
        &self,
        merchant: &MerchantId,
    ) -> impl Future<Output = Result<Merchant>> + Send {
        self.merchant(merchant)
    }
}
