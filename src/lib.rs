//! Reconciliation and ledger core for the Nessie sandbox banking API.
//!
//! This crate fetches accounts, purchases, deposits and merchants from the
//! [Nessie](http://api.nessieisreal.com/) sandbox, normalizes them into a
//! unified transaction model, merges them into a client-held
//! [`ledger::Ledger`] without double-counting across refreshes, and derives
//! the month-scoped aggregates (spend by category, budget utilization, cash
//! flow) a presentation layer renders.
//!
//! The crate is a library/state-holder: it has no CLI and no server side.
//! Remote access and category persistence sit behind the
//! [`client::BankDataSource`] and [`overrides::CategoryOverrides`] traits so
//! callers (and tests) can inject their own backends.

pub mod client;
pub mod datetime;
pub mod error;
pub mod ledger;
pub mod models;
pub mod month;
pub mod overrides;
pub mod reconcile;
