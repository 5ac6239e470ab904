//! Authoritative client-held financial state.
//!
//! The [`Ledger`] owns the account, transaction and budget collections and
//! computes every month-scoped derived view the screens render. Derived
//! views are pure functions of current state plus a caller-supplied
//! [`MonthWindow`]; nothing is cached, consumers recompute on demand.
//!
//! Mutations take `&mut self`, so a single logical owner is enforced by the
//! borrow checker; reconciliation batches arrive through
//! [`Ledger::merge_transactions`] only after the whole pass has settled.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Months, Utc};
use uuid::Uuid;

use crate::models::{
    Account, AccountId, Budget, BudgetId, FinancialSummary, Transaction, TransactionId, TxKind,
};
use crate::month::MonthWindow;

/// Expenses strictly below this amount count as "ant" expenses.
pub const ANT_EXPENSE_CEILING: f64 = 100.0;

/// Maximum number of transactions embedded in a [`FinancialSummary`].
const SUMMARY_RECENT_LIMIT: usize = 5;

/// Maximum number of category names embedded in a [`FinancialSummary`].
const SUMMARY_TOP_CATEGORIES: usize = 3;

/// Budget name that also absorbs "Food" expenses.
const GROCERIES_BUDGET: &str = "Groceries";

/// Category absorbed by the "Groceries" budget.
const FOOD_CATEGORY: &str = "Food";

/// Income/expense totals for one calendar month, oldest first in the
/// [`Ledger::monthly_cash_flow`] result.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCashFlow {
    /// Calendar year.
    pub year: i32,
    /// One-based month number.
    pub month: u32,
    /// Total income in the month.
    pub income: f64,
    /// Total expenses in the month.
    pub expense: f64,
}

impl MonthlyCashFlow {
    /// Net cash flow: income minus expenses.
    #[inline]
    #[must_use]
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// The authoritative, mutable collection of accounts, transactions and
/// budgets.
///
/// # Preconditions
///
/// Mutation operations assume already-validated input (non-empty titles,
/// positive amounts); validation belongs at the UI boundary, and the ledger
/// deliberately does not re-validate.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Current account list, replaced wholesale by reconciliation.
    accounts: Vec<Account>,
    /// Unified transaction set (API-sourced and manual).
    transactions: Vec<Transaction>,
    /// User-created budgets.
    budgets: Vec<Budget>,
    /// Monotonic change counter; consumers poll it to notice mutations.
    revision: u64,
}

impl Ledger {
    /// Creates an empty ledger.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a mutation for change-notification polling.
    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ── State accessors ─────────────────────────────────────────────

    /// All held accounts.
    #[inline]
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// All held transactions, in merge order.
    #[inline]
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All user-created budgets.
    #[inline]
    #[must_use]
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Monotonic counter bumped by every mutation.
    ///
    /// A consumer that saw revision `n` can re-derive its views whenever the
    /// counter moves past `n`; this is the ledger's change-notification
    /// contract.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Replaces the whole account list.
    ///
    /// Reconciliation publishes accounts wholesale; there are no partial
    /// account updates.
    #[inline]
    pub fn replace_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
        self.touch();
    }

    /// Merges a reconciliation batch into the transaction set.
    ///
    /// Rows carrying a non-empty [`Transaction::source_purchase_id`] upsert:
    /// an existing row with the same key is replaced in place, otherwise the
    /// row is appended. Rows without the key (manual entries) always append.
    /// Merging the same batch twice therefore leaves the set unchanged.
    pub fn merge_transactions(&mut self, batch: Vec<Transaction>) {
        for incoming in batch {
            let slot = incoming
                .source_purchase_id
                .as_deref()
                .filter(|key| !key.is_empty())
                .and_then(|key| {
                    self.transactions
                        .iter()
                        .position(|tx| tx.source_purchase_id.as_deref() == Some(key))
                });
            match slot {
                Some(index) => {
                    if let Some(existing) = self.transactions.get_mut(index) {
                        *existing = incoming;
                    }
                }
                None => self.transactions.push(incoming),
            }
        }
        self.touch();
    }

    /// Appends a manual expense with a freshly generated id.
    ///
    /// `date` defaults to now. Returns the new row's id.
    #[inline]
    pub fn add_expense<T, C>(
        &mut self,
        title: T,
        category: C,
        amount: f64,
        date: Option<DateTime<Utc>>,
        account_id: Option<AccountId>,
    ) -> TransactionId
    where
        T: Into<String>,
        C: Into<String>,
    {
        self.add_manual(TxKind::Expense, title.into(), category.into(), amount, date, account_id)
    }

    /// Appends a manual income row with a freshly generated id.
    ///
    /// `date` defaults to now. Returns the new row's id.
    #[inline]
    pub fn add_income<T, C>(
        &mut self,
        title: T,
        category: C,
        amount: f64,
        date: Option<DateTime<Utc>>,
        account_id: Option<AccountId>,
    ) -> TransactionId
    where
        T: Into<String>,
        C: Into<String>,
    {
        self.add_manual(TxKind::Income, title.into(), category.into(), amount, date, account_id)
    }

    /// Shared implementation of the manual add operations.
    fn add_manual(
        &mut self,
        kind: TxKind,
        title: String,
        category: String,
        amount: f64,
        date: Option<DateTime<Utc>>,
        account_id: Option<AccountId>,
    ) -> TransactionId {
        let id = TransactionId::new(Uuid::new_v4().to_string());
        self.transactions.push(Transaction {
            id: id.clone(),
            date: date.unwrap_or_else(Utc::now),
            title,
            category,
            amount,
            kind,
            account_id,
            source_purchase_id: None,
        });
        self.touch();
        id
    }

    /// Appends a budget with a freshly generated id. Returns the new id.
    #[inline]
    pub fn add_budget<T: Into<String>>(&mut self, name: T, limit: f64) -> BudgetId {
        let id = BudgetId::new(Uuid::new_v4().to_string());
        self.budgets.push(Budget {
            id: id.clone(),
            name: name.into(),
            limit,
        });
        self.touch();
        id
    }

    // ── Month-scoped derived views ──────────────────────────────────

    /// Expenses whose date falls inside the window.
    #[inline]
    #[must_use]
    pub fn expenses_in(&self, window: MonthWindow) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.is_expense() && window.contains(tx.date))
            .collect()
    }

    /// Income rows whose date falls inside the window.
    #[inline]
    #[must_use]
    pub fn income_in(&self, window: MonthWindow) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.is_income() && window.contains(tx.date))
            .collect()
    }

    /// Total spent inside the window.
    #[inline]
    #[must_use]
    pub fn total_spent(&self, window: MonthWindow) -> f64 {
        self.expenses_in(window).iter().map(|tx| tx.amount).sum()
    }

    /// Total income inside the window.
    #[inline]
    #[must_use]
    pub fn total_income(&self, window: MonthWindow) -> f64 {
        self.income_in(window).iter().map(|tx| tx.amount).sum()
    }

    /// Net cash flow inside the window: income minus spend.
    #[inline]
    #[must_use]
    pub fn net(&self, window: MonthWindow) -> f64 {
        self.total_income(window) - self.total_spent(window)
    }

    /// Expense totals grouped by category, sorted descending by amount.
    ///
    /// Ties keep the order in which a category was first encountered (the
    /// sort is stable).
    #[must_use]
    pub fn spend_by_category(&self, window: MonthWindow) -> Vec<(String, f64)> {
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, f64> = HashMap::new();
        for tx in self.expenses_in(window) {
            if !totals.contains_key(&tx.category) {
                order.push(tx.category.clone());
            }
            *totals.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
        }
        let mut grouped: Vec<(String, f64)> = order
            .into_iter()
            .map(|name| {
                let total = totals.get(&name).copied().unwrap_or(0.0);
                (name, total)
            })
            .collect();
        grouped.sort_by(|left, right| right.1.total_cmp(&left.1));
        grouped
    }

    /// Amount of the window's expenses counted against the named budget.
    ///
    /// Matching is exact and case-sensitive, with one documented special
    /// case carried over from the product: a budget named "Groceries" also
    /// absorbs expenses categorized "Food". This is a one-off alias, not a
    /// general aliasing rule.
    #[must_use]
    pub fn budget_utilization(&self, window: MonthWindow, budget_name: &str) -> f64 {
        self.expenses_in(window)
            .iter()
            .filter(|tx| {
                tx.category == budget_name
                    || (tx.category == FOOD_CATEGORY && budget_name == GROCERIES_BUDGET)
            })
            .map(|tx| tx.amount)
            .sum()
    }

    // ── Window-independent derived views ────────────────────────────

    /// Sum of balances over credit/card accounts, independent of the month
    /// window.
    #[inline]
    #[must_use]
    pub fn credit_card_debt(&self) -> f64 {
        self.accounts
            .iter()
            .filter(|account| account.is_credit_card())
            .map(|account| account.balance)
            .sum()
    }

    /// Sum of balances over checking accounts.
    #[inline]
    #[must_use]
    pub fn checking_balance(&self) -> f64 {
        self.accounts
            .iter()
            .filter(|account| account.is_checking())
            .map(|account| account.balance)
            .sum()
    }

    /// The window's most recent rows (expenses and income merged), newest
    /// first, at most `limit` of them.
    #[must_use]
    pub fn recent_rows(&self, window: MonthWindow, limit: usize) -> Vec<&Transaction> {
        let mut rows: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|tx| window.contains(tx.date))
            .collect();
        rows.sort_by_key(|tx| core::cmp::Reverse(tx.date));
        rows.truncate(limit);
        rows
    }

    /// Income/expense totals for the trailing `months` calendar months,
    /// ending with (and including) the current month, oldest first.
    #[must_use]
    pub fn monthly_cash_flow(&self, months: u32) -> Vec<MonthlyCashFlow> {
        let today = Utc::now().date_naive();
        let mut rows = Vec::new();
        for offset in (0..months).rev() {
            let Some(date) = today.checked_sub_months(Months::new(offset)) else {
                continue;
            };
            let window = MonthWindow::of_date(date);
            rows.push(MonthlyCashFlow {
                year: date.year(),
                month: date.month(),
                income: self.total_income(window),
                expense: self.total_spent(window),
            });
        }
        rows
    }

    /// Plain data snapshot for the chat assistant, or `None` when no
    /// accounts are held yet.
    ///
    /// Covers total balance, the "ant" micro-expenses (amount below
    /// [`ANT_EXPENSE_CEILING`]), their top categories by count, and the most
    /// recent transactions.
    #[must_use]
    pub fn financial_summary(&self) -> Option<FinancialSummary> {
        if self.accounts.is_empty() {
            return None;
        }
        let total_balance = self.accounts.iter().map(|account| account.balance).sum();

        let ants: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|tx| tx.is_expense() && tx.amount < ANT_EXPENSE_CEILING)
            .collect();
        let total_ant_expenses = ants.iter().map(|tx| tx.amount).sum();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tx in &ants {
            *counts.entry(tx.category.as_str()).or_insert(0) += 1;
        }
        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(right.0)));
        let top_categories = ranked
            .into_iter()
            .take(SUMMARY_TOP_CATEGORIES)
            .map(|(name, _count)| name.to_owned())
            .collect();

        let mut recent: Vec<&Transaction> = self.transactions.iter().collect();
        recent.sort_by_key(|tx| core::cmp::Reverse(tx.date));
        let recent_transactions = recent
            .into_iter()
            .take(SUMMARY_RECENT_LIMIT)
            .cloned()
            .collect();

        Some(FinancialSummary {
            total_balance,
            total_ant_expenses,
            top_categories,
            recent_transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses a fixture timestamp.
    fn ts(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    /// Builds an API-sourced fixture transaction.
    fn api_tx(source: &str, date: &str, category: &str, amount: f64, kind: TxKind) -> Transaction {
        Transaction {
            id: TransactionId::new(source.to_owned()),
            date: ts(date),
            title: format!("title for {source}"),
            category: category.to_owned(),
            amount,
            kind,
            account_id: Some(AccountId::new("a-1".to_owned())),
            source_purchase_id: Some(source.to_owned()),
        }
    }

    /// Builds a fixture account.
    fn account(id: &str, kind: &str, balance: f64) -> Account {
        Account {
            id: AccountId::new(id.to_owned()),
            kind: kind.to_owned(),
            nickname: String::new(),
            rewards: 0,
            balance,
            customer_id: None,
        }
    }

    /// Sorted snapshot of (id, amount) pairs for comparing merge results.
    fn snapshot(ledger: &Ledger) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = ledger
            .transactions()
            .iter()
            .map(|tx| (tx.id.to_string(), format!("{:.2}", tx.amount)))
            .collect();
        rows.sort();
        rows
    }

    fn march() -> MonthWindow {
        MonthWindow::of(2024, 3).unwrap()
    }

    #[test]
    fn merge_is_idempotent() {
        let batch = vec![
            api_tx("p-1", "2024-03-02T00:00:00Z", "Checking", 4.5, TxKind::Expense),
            api_tx("p-2", "2024-03-03T00:00:00Z", "Checking", 12.0, TxKind::Expense),
            api_tx("d-1", "2024-03-01T00:00:00Z", "Checking", 2000.0, TxKind::Income),
        ];
        let mut once = Ledger::new();
        once.merge_transactions(batch.clone());
        let mut twice = Ledger::new();
        twice.merge_transactions(batch.clone());
        twice.merge_transactions(batch);

        assert_eq!(snapshot(&once), snapshot(&twice));
        assert_eq!(twice.transactions().len(), 3);
    }

    #[test]
    fn upsert_replaces_by_natural_key_last_batch_wins() {
        let mut ledger = Ledger::new();
        ledger.merge_transactions(vec![api_tx(
            "p-1",
            "2024-03-02T00:00:00Z",
            "Checking",
            10.0,
            TxKind::Expense,
        )]);
        ledger.merge_transactions(vec![api_tx(
            "p-1",
            "2024-03-02T00:00:00Z",
            "Checking",
            20.0,
            TxKind::Expense,
        )]);

        assert_eq!(ledger.transactions().len(), 1);
        let survivor = ledger.transactions().first().unwrap();
        assert_eq!(survivor.source_purchase_id.as_deref(), Some("p-1"));
        assert!((survivor.amount - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn upsert_within_one_batch_keeps_last_row() {
        let mut ledger = Ledger::new();
        ledger.merge_transactions(vec![
            api_tx("p-1", "2024-03-02T00:00:00Z", "Checking", 10.0, TxKind::Expense),
            api_tx("p-1", "2024-03-02T00:00:00Z", "Checking", 30.0, TxKind::Expense),
        ]);
        assert_eq!(ledger.transactions().len(), 1);
        let survivor = ledger.transactions().first().unwrap();
        assert!((survivor.amount - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn manual_rows_always_append() {
        let mut ledger = Ledger::new();
        let first = ledger.add_expense("Coffee", "Food", 4.0, None, None);
        let second = ledger.add_expense("Coffee", "Food", 4.0, None, None);
        assert_ne!(first, second);
        assert_eq!(ledger.transactions().len(), 2);
        assert!(
            ledger
                .transactions()
                .iter()
                .all(|tx| tx.source_purchase_id.is_none())
        );
    }

    #[test]
    fn add_income_sets_kind_and_date_defaults_to_now() {
        let mut ledger = Ledger::new();
        let before = Utc::now();
        let id = ledger.add_income("Salary", "Salary", 3200.0, None, None);
        let row = ledger
            .transactions()
            .iter()
            .find(|tx| tx.id == id)
            .unwrap();
        assert!(row.is_income());
        assert!(row.date >= before && row.date <= Utc::now());
    }

    #[test]
    fn totals_and_net_are_window_scoped() {
        let mut ledger = Ledger::new();
        ledger.merge_transactions(vec![
            api_tx("p-1", "2024-03-02T00:00:00Z", "Checking", 4.5, TxKind::Expense),
            api_tx("d-1", "2024-03-01T00:00:00Z", "Checking", 2000.0, TxKind::Income),
            api_tx("p-2", "2024-04-01T00:00:00Z", "Checking", 99.0, TxKind::Expense),
        ]);

        assert!((ledger.total_spent(march()) - 4.5).abs() < f64::EPSILON);
        assert!((ledger.total_income(march()) - 2000.0).abs() < f64::EPSILON);
        assert!((ledger.net(march()) - 1995.5).abs() < f64::EPSILON);
    }

    #[test]
    fn window_boundaries_on_totals() {
        let mut ledger = Ledger::new();
        ledger.merge_transactions(vec![
            api_tx("p-start", "2024-03-01T00:00:00Z", "Bills", 10.0, TxKind::Expense),
            api_tx("p-end", "2024-04-01T00:00:00Z", "Bills", 50.0, TxKind::Expense),
        ]);
        assert!((ledger.total_spent(march()) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn spend_by_category_sorts_descending_with_stable_ties() {
        let mut ledger = Ledger::new();
        ledger.merge_transactions(vec![
            api_tx("p-1", "2024-03-02T00:00:00Z", "Transport", 12.0, TxKind::Expense),
            api_tx("p-2", "2024-03-03T00:00:00Z", "Food", 30.0, TxKind::Expense),
            api_tx("p-3", "2024-03-04T00:00:00Z", "Bills", 12.0, TxKind::Expense),
            api_tx("p-4", "2024-03-05T00:00:00Z", "Food", 18.0, TxKind::Expense),
        ]);

        let grouped = ledger.spend_by_category(march());
        let names: Vec<&str> = grouped.iter().map(|(name, _amount)| name.as_str()).collect();
        // Food 48 first; Transport and Bills tie at 12 and keep first-seen order.
        assert_eq!(names, vec!["Food", "Transport", "Bills"]);
    }

    #[test]
    fn budget_utilization_counts_exact_category() {
        let mut ledger = Ledger::new();
        ledger.merge_transactions(vec![
            api_tx("p-1", "2024-03-02T00:00:00Z", "Rent", 900.0, TxKind::Expense),
            api_tx("p-2", "2024-03-03T00:00:00Z", "rent", 1.0, TxKind::Expense),
        ]);
        // Case-sensitive: "rent" does not count against "Rent".
        assert!((ledger.budget_utilization(march(), "Rent") - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn groceries_budget_absorbs_food_expenses() {
        let mut ledger = Ledger::new();
        let _budget = ledger.add_budget("Groceries", 700.0);
        ledger.merge_transactions(vec![
            api_tx("p-1", "2024-03-02T00:00:00Z", "Food", 450.0, TxKind::Expense),
            api_tx("p-2", "2024-03-03T00:00:00Z", "Groceries", 50.0, TxKind::Expense),
        ]);

        assert!((ledger.budget_utilization(march(), "Groceries") - 500.0).abs() < f64::EPSILON);
        // The alias is one-way: a "Food" budget does not absorb "Groceries".
        assert!((ledger.budget_utilization(march(), "Food") - 450.0).abs() < f64::EPSILON);
    }

    #[test]
    fn credit_card_debt_matches_substring_case_insensitive() {
        let mut ledger = Ledger::new();
        ledger.replace_accounts(vec![
            account("a-1", "Checking", 1000.0),
            account("a-2", "Credit Card", -320.0),
            account("a-3", "CREDIT line", -80.0),
            account("a-4", "Savings", 500.0),
        ]);
        assert!((ledger.credit_card_debt() + 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn checking_balance_sums_checking_accounts() {
        let mut ledger = Ledger::new();
        ledger.replace_accounts(vec![
            account("a-1", "Checking", 1000.0),
            account("a-2", "checking", 250.0),
            account("a-3", "Credit Card", -320.0),
        ]);
        assert!((ledger.checking_balance() - 1250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn replace_accounts_is_wholesale() {
        let mut ledger = Ledger::new();
        ledger.replace_accounts(vec![account("a-1", "Checking", 1.0)]);
        ledger.replace_accounts(vec![account("a-2", "Savings", 2.0)]);
        assert_eq!(ledger.accounts().len(), 1);
        assert_eq!(ledger.accounts().first().unwrap().id.as_inner(), "a-2");
    }

    #[test]
    fn recent_rows_newest_first_and_limited() {
        let mut ledger = Ledger::new();
        ledger.merge_transactions(vec![
            api_tx("p-1", "2024-03-02T00:00:00Z", "Food", 1.0, TxKind::Expense),
            api_tx("d-1", "2024-03-10T00:00:00Z", "Salary", 2.0, TxKind::Income),
            api_tx("p-2", "2024-03-05T00:00:00Z", "Food", 3.0, TxKind::Expense),
            api_tx("p-3", "2024-02-28T00:00:00Z", "Food", 4.0, TxKind::Expense),
        ]);

        let rows = ledger.recent_rows(march(), 2);
        let ids: Vec<&str> = rows.iter().map(|tx| tx.id.as_inner()).collect();
        assert_eq!(ids, vec!["d-1", "p-2"]);
    }

    #[test]
    fn monthly_cash_flow_covers_trailing_months() {
        let now = Utc::now();
        let last_month = now.date_naive().checked_sub_months(Months::new(1)).unwrap();
        let last_month_ts = last_month
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc();

        let mut ledger = Ledger::new();
        let _expense = ledger.add_expense("Coffee", "Food", 10.0, Some(now), None);
        let _income = ledger.add_income("Invoice", "Freelance", 300.0, Some(last_month_ts), None);

        let flow = ledger.monthly_cash_flow(2);
        assert_eq!(flow.len(), 2);
        let oldest = flow.first().unwrap();
        let newest = flow.last().unwrap();
        assert!((oldest.income - 300.0).abs() < f64::EPSILON);
        assert!((oldest.net() - 300.0).abs() < f64::EPSILON);
        assert!((newest.expense - 10.0).abs() < f64::EPSILON);
        assert_eq!(
            (newest.year, newest.month),
            (now.date_naive().year(), now.date_naive().month())
        );
    }

    #[test]
    fn financial_summary_requires_accounts() {
        let ledger = Ledger::new();
        assert!(ledger.financial_summary().is_none());
    }

    #[test]
    fn financial_summary_tracks_ant_expenses() {
        let mut ledger = Ledger::new();
        ledger.replace_accounts(vec![
            account("a-1", "Checking", 1000.0),
            account("a-2", "Savings", 500.0),
        ]);
        ledger.merge_transactions(vec![
            api_tx("p-1", "2024-03-02T00:00:00Z", "Food", 48.2, TxKind::Expense),
            api_tx("p-2", "2024-03-03T00:00:00Z", "Transport", 12.0, TxKind::Expense),
            api_tx("p-3", "2024-03-04T00:00:00Z", "Food", 20.0, TxKind::Expense),
            // Not ants: too large, or income.
            api_tx("p-4", "2024-03-05T00:00:00Z", "Bills", 450.0, TxKind::Expense),
            api_tx("d-1", "2024-03-01T00:00:00Z", "Salary", 50.0, TxKind::Income),
        ]);

        let summary = ledger.financial_summary().unwrap();
        assert!((summary.total_balance - 1500.0).abs() < f64::EPSILON);
        assert!((summary.total_ant_expenses - 80.2).abs() < 1e-9);
        assert_eq!(
            summary.top_categories,
            vec!["Food".to_owned(), "Transport".to_owned()]
        );
        assert_eq!(summary.recent_transactions.len(), 5);
        // Newest first.
        assert_eq!(
            summary.recent_transactions.first().unwrap().id.as_inner(),
            "p-4"
        );
    }

    #[test]
    fn revision_bumps_on_every_mutation() {
        let mut ledger = Ledger::new();
        let initial = ledger.revision();
        ledger.replace_accounts(vec![]);
        let after_accounts = ledger.revision();
        let _id = ledger.add_expense("Coffee", "Food", 4.0, None, None);
        let after_expense = ledger.revision();
        ledger.merge_transactions(vec![]);
        let after_merge = ledger.revision();

        assert!(initial < after_accounts);
        assert!(after_accounts < after_expense);
        assert!(after_expense < after_merge);
    }
}
