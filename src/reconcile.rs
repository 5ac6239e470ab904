//! The reconciliation pipeline.
//!
//! A pass fetches the customer's accounts, fans out one task per account
//! slice to fetch purchases and deposits concurrently, resolves merchant
//! names and category overrides, deduplicates by the records' natural ids,
//! and applies the result to the ledger as exactly one merge batch. Every
//! remote failure is local to its slice: the slice degrades to zero records
//! and the pass always completes.
//!
//! Passes are not mutually exclusive; two overlapping passes can both
//! complete and merge. Because merges upsert by id, identical remote data
//! converges to the same ledger state regardless of completion order.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::task::JoinSet;

use crate::client::BankDataSource;
use crate::datetime;
use crate::ledger::Ledger;
use crate::models::{
    Account, AccountId, CustomerId, Deposit, Purchase, Transaction, TransactionId, TxKind,
};
use crate::overrides::CategoryOverrides;

/// Account type assigned to a synthesized override account.
const SYNTHETIC_ACCOUNT_KIND: &str = "Checking";

/// Static configuration for a [`Reconciler`].
#[derive(Debug, Clone, Default)]
pub struct ReconcilerConfig {
    /// Checking account to force-include even when the account list omits
    /// it. The sandbox dataset is known to drop this account from list
    /// responses while still honoring direct-id lookups, so the reconciler
    /// both synthesizes a visible account for it and fetches its records
    /// explicitly. `None` disables both behaviors.
    pub override_checking_account_id: Option<AccountId>,
    /// Display alias for the override account's slices.
    pub override_account_alias: String,
}

/// Counters describing what one reconciliation pass did.
///
/// The pass itself never fails; these counters are how callers observe
/// partial degradation (failed slices, malformed dates) if they want to
/// surface it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Accounts published to the ledger (including a synthetic one).
    pub accounts: usize,
    /// Expense rows merged.
    pub expenses: usize,
    /// Income rows merged.
    pub income: usize,
    /// Records dropped by per-pass dedup (e.g. seen via both the account
    /// list and the explicit override fetch).
    pub duplicates: usize,
    /// Remote fetches that failed and degraded to zero records.
    pub failed_slices: usize,
    /// Records whose date could not be parsed and fell back to now.
    pub date_fallbacks: usize,
}

/// Everything one per-account task produced.
#[derive(Debug)]
struct SliceOutcome {
    /// Position of the slice in the fan-out order; the fan-in sorts by this
    /// so dedup precedence is deterministic.
    index: usize,
    /// Expense rows built from the slice's purchases.
    expenses: Vec<Transaction>,
    /// Income rows built from the slice's deposits.
    income: Vec<Transaction>,
    /// Fetches within the slice that failed.
    failures: usize,
    /// Records whose date fell back to now.
    date_fallbacks: usize,
}

/// Orchestrates reconciliation passes against an injected data source and
/// override store.
#[derive(Debug)]
pub struct Reconciler<C, S> {
    /// Remote data source.
    client: Arc<C>,
    /// Category override store.
    overrides: Arc<S>,
    /// Static pass configuration.
    config: ReconcilerConfig,
}

impl<C, S> Reconciler<C, S>
where
    C: BankDataSource + 'static,
    S: CategoryOverrides + 'static,
{
    /// Creates a reconciler over the given collaborators.
    #[inline]
    #[must_use]
    pub const fn new(client: Arc<C>, overrides: Arc<S>, config: ReconcilerConfig) -> Self {
        Self {
            client,
            overrides,
            config,
        }
    }

    /// Runs one reconciliation pass for `customer_id` and merges the result
    /// into `ledger`.
    ///
    /// Fetches for different account slices run concurrently; the ledger is
    /// touched only after every slice has settled, so it never observes a
    /// partial pass. Remote failures degrade to empty slices and are
    /// reported, never raised.
    ///
    /// Must be called within a tokio runtime (the per-slice tasks are
    /// spawned on it).
    #[tracing::instrument(skip_all, fields(customer = %customer_id))]
    pub async fn run(&self, customer_id: &CustomerId, ledger: &mut Ledger) -> ReconcileReport {
        let mut report = ReconcileReport::default();
        let mut slices: Vec<(AccountId, String)> = Vec::new();

        match self.client.fetch_accounts(customer_id).await {
            Ok(mut accounts) => {
                self.append_synthetic_account(&mut accounts, customer_id);
                report.accounts = accounts.len();
                for account in &accounts {
                    slices.push((account.id.clone(), account.alias().to_owned()));
                }
                ledger.replace_accounts(accounts);
            }
            Err(err) => {
                // Keep whatever account list the ledger already holds.
                tracing::warn!(error = %err, "account fetch failed, keeping previous accounts");
                report.failed_slices += 1;
            }
        }

        // The override account is fetched explicitly even when it also
        // appears in the list: the sandbox may only honor direct-id lookups
        // for it. The duplicate fetch is deduplicated below.
        if let Some(override_id) = &self.config.override_checking_account_id {
            slices.push((
                override_id.clone(),
                self.config.override_account_alias.clone(),
            ));
        }

        let mut tasks: JoinSet<SliceOutcome> = JoinSet::new();
        for (index, (account_id, alias)) in slices.into_iter().enumerate() {
            let client = Arc::clone(&self.client);
            let overrides = Arc::clone(&self.overrides);
            let _handle = tasks.spawn(async move {
                reconcile_slice(index, client, overrides, account_id, alias).await
            });
        }

        let mut outcomes: Vec<SliceOutcome> = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => {
                    tracing::warn!(error = %err, "slice task failed");
                    report.failed_slices += 1;
                }
            }
        }
        outcomes.sort_by_key(|outcome| outcome.index);

        let batch = collect_batch(outcomes, &mut report);
        ledger.merge_transactions(batch);
        tracing::debug!(
            accounts = report.accounts,
            expenses = report.expenses,
            income = report.income,
            duplicates = report.duplicates,
            failed_slices = report.failed_slices,
            "reconciliation pass complete"
        );
        report
    }

    /// Appends a synthetic account for the configured override id when the
    /// fetched list omits it, so a known checking account stays browsable.
    fn append_synthetic_account(&self, accounts: &mut Vec<Account>, customer_id: &CustomerId) {
        let Some(override_id) = &self.config.override_checking_account_id else {
            return;
        };
        if accounts.iter().any(|account| account.id == *override_id) {
            return;
        }
        tracing::debug!(account = %override_id, "override account missing from list, synthesizing");
        accounts.push(Account {
            id: override_id.clone(),
            kind: SYNTHETIC_ACCOUNT_KIND.to_owned(),
            nickname: self.config.override_account_alias.clone(),
            rewards: 0,
            balance: 0.0,
            customer_id: Some(customer_id.clone()),
        });
    }
}

/// Flattens slice outcomes into one merge batch, deduplicating by the
/// records' natural ids within the pass.
fn collect_batch(outcomes: Vec<SliceOutcome>, report: &mut ReconcileReport) -> Vec<Transaction> {
    let mut seen_purchases: HashSet<String> = HashSet::new();
    let mut seen_deposits: HashSet<String> = HashSet::new();
    let mut batch: Vec<Transaction> = Vec::new();

    for outcome in outcomes {
        report.failed_slices += outcome.failures;
        report.date_fallbacks += outcome.date_fallbacks;
        for tx in outcome.expenses {
            let Some(key) = tx.source_purchase_id.clone() else {
                continue;
            };
            if seen_purchases.insert(key) {
                report.expenses += 1;
                batch.push(tx);
            } else {
                report.duplicates += 1;
            }
        }
        for tx in outcome.income {
            let Some(key) = tx.source_purchase_id.clone() else {
                continue;
            };
            if seen_deposits.insert(key) {
                report.income += 1;
                batch.push(tx);
            } else {
                report.duplicates += 1;
            }
        }
    }
    batch
}

/// Fetches and maps one account slice: purchases and deposits concurrently,
/// then per-purchase merchant resolution on that purchase's own critical
/// path (other slices keep running in their own tasks).
async fn reconcile_slice<C, S>(
    index: usize,
    client: Arc<C>,
    overrides: Arc<S>,
    account_id: AccountId,
    alias: String,
) -> SliceOutcome
where
    C: BankDataSource,
    S: CategoryOverrides,
{
    let (purchases, deposits) = tokio::join!(
        client.fetch_purchases(&account_id),
        client.fetch_deposits(&account_id)
    );

    let mut expenses: Vec<Transaction> = Vec::new();
    let mut income: Vec<Transaction> = Vec::new();
    let mut failures = 0_usize;
    let mut date_fallbacks = 0_usize;

    match purchases {
        Ok(list) => {
            for purchase in list {
                let title = resolve_title(client.as_ref(), &purchase).await;
                let category = category_for(overrides.as_ref(), &purchase, &alias);
                let (date, fell_back) = normalize_date(&purchase.purchase_date);
                if fell_back {
                    date_fallbacks += 1;
                }
                expenses.push(expense_row(purchase, date, title, category, &account_id));
            }
        }
        Err(err) => {
            tracing::warn!(account = %account_id, error = %err, "purchase fetch failed, slice is empty");
            failures += 1;
        }
    }

    match deposits {
        Ok(list) => {
            for deposit in list {
                let (date, fell_back) = normalize_date(&deposit.transaction_date);
                if fell_back {
                    date_fallbacks += 1;
                }
                income.push(income_row(deposit, date, &account_id, &alias));
            }
        }
        Err(err) => {
            tracing::warn!(account = %account_id, error = %err, "deposit fetch failed, slice is empty");
            failures += 1;
        }
    }

    SliceOutcome {
        index,
        expenses,
        income,
        failures,
        date_fallbacks,
    }
}

/// Resolves a purchase's display title: the merchant name when a merchant id
/// is present and resolvable, the raw description otherwise.
async fn resolve_title<C: BankDataSource>(client: &C, purchase: &Purchase) -> String {
    if let Some(merchant_id) = purchase.merchant() {
        match client.fetch_merchant(merchant_id).await {
            Ok(merchant) => return merchant.name,
            Err(err) => {
                tracing::warn!(merchant = %merchant_id, error = %err, "merchant lookup failed, using description");
            }
        }
    }
    purchase.description.clone()
}

/// Resolves a purchase's category: the stored user override wins, the
/// caller-supplied default (the account alias) otherwise.
fn category_for<S: CategoryOverrides>(overrides: &S, purchase: &Purchase, default_label: &str) -> String {
    match overrides.get(&purchase.id) {
        Ok(Some(category)) => category,
        Ok(None) => default_label.to_owned(),
        Err(err) => {
            tracing::warn!(purchase = %purchase.id, error = %err, "override lookup failed, using default");
            default_label.to_owned()
        }
    }
}

/// Normalizes a raw remote date, reporting whether the now-fallback was
/// taken (a data-quality event, already logged).
fn normalize_date(raw: &str) -> (DateTime<Utc>, bool) {
    datetime::try_parse_timestamp(raw).map_or_else(
        || {
            tracing::warn!(raw = %raw, "unparseable remote date, falling back to current time");
            (Utc::now(), true)
        },
        |ts| (ts, false),
    )
}

/// Builds the expense row for a purchase.
fn expense_row(
    purchase: Purchase,
    date: DateTime<Utc>,
    title: String,
    category: String,
    account_id: &AccountId,
) -> Transaction {
    Transaction {
        id: TransactionId::new(purchase.id.as_inner().to_owned()),
        date,
        title,
        category,
        amount: purchase.amount,
        kind: TxKind::Expense,
        account_id: Some(account_id.clone()),
        source_purchase_id: Some(purchase.id.into_inner()),
    }
}

/// Builds the income row for a deposit.
fn income_row(deposit: Deposit, date: DateTime<Utc>, account_id: &AccountId, alias: &str) -> Transaction {
    Transaction {
        id: TransactionId::new(deposit.id.as_inner().to_owned()),
        date,
        title: deposit.description,
        category: alias.to_owned(),
        amount: deposit.amount,
        kind: TxKind::Income,
        account_id: Some(account_id.clone()),
        source_purchase_id: Some(deposit.id.into_inner()),
    }
}
