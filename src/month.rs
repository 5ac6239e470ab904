//! Calendar-month windowing.
//!
//! Every "this month" aggregate in the ledger is scoped by a [`MonthWindow`],
//! the half-open interval `[first of month, first of next month)`. The
//! [`MonthSelector`] tracks which month the user is viewing and refuses to
//! navigate past the current calendar month.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};

/// Returns the first day of the month containing `date`.
fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Midnight UTC at the start of `date`.
fn at_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// A half-open calendar-month interval `[start, end)` in UTC.
///
/// The start (first of the month, midnight) is inclusive; the end (first of
/// the next month, midnight) is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    /// Inclusive start of the window.
    start: DateTime<Utc>,
    /// Exclusive end of the window.
    end: DateTime<Utc>,
}

impl MonthWindow {
    /// The window of the calendar month containing `instant`.
    #[inline]
    #[must_use]
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self::of_date(instant.date_naive())
    }

    /// The window of the calendar month containing `date`.
    #[inline]
    #[must_use]
    pub fn of_date(date: NaiveDate) -> Self {
        let start = month_start(date);
        let end = start.checked_add_months(Months::new(1)).unwrap_or(start);
        Self {
            start: at_midnight(start),
            end: at_midnight(end),
        }
    }

    /// The window for the given year and one-based month number.
    ///
    /// Returns `None` for an out-of-range month.
    #[inline]
    #[must_use]
    pub fn of(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::of_date)
    }

    /// Whether `instant` falls inside the window (start inclusive, end
    /// exclusive).
    #[inline]
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Inclusive start of the window.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end of the window.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

/// Tracks the calendar month the user is currently viewing.
///
/// `previous()` is unconditional; `next()` is guarded here in the selector
/// rather than at the call site, so months after the current calendar month
/// are unreachable by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSelector {
    /// Any date within the viewed month.
    selected: NaiveDate,
}

impl MonthSelector {
    /// Creates a selector positioned on the current calendar month.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: Utc::now().date_naive(),
        }
    }

    /// Creates a selector positioned on the month containing `date`.
    #[inline]
    #[must_use]
    pub const fn at(date: NaiveDate) -> Self {
        Self { selected: date }
    }

    /// The date the selector currently points at.
    #[inline]
    #[must_use]
    pub const fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// The window of the viewed month.
    #[inline]
    #[must_use]
    pub fn window(&self) -> MonthWindow {
        MonthWindow::of_date(self.selected)
    }

    /// Whether the viewed month is the current calendar month.
    #[inline]
    #[must_use]
    pub fn is_current_month(&self) -> bool {
        month_start(self.selected) == month_start(Utc::now().date_naive())
    }

    /// Advances one month, unless that would move to the current calendar
    /// month's successor or beyond.
    ///
    /// Returns `true` when the selector moved.
    #[inline]
    pub fn next(&mut self) -> bool {
        if month_start(self.selected) >= month_start(Utc::now().date_naive()) {
            return false;
        }
        self.selected = self
            .selected
            .checked_add_months(Months::new(1))
            .unwrap_or(self.selected);
        true
    }

    /// Retreats one month, unconditionally.
    #[inline]
    pub fn previous(&mut self) {
        self.selected = self
            .selected
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.selected);
    }
}

impl Default for MonthSelector {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
