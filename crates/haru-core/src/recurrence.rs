use chrono::{Datelike, Days, NaiveDate};

use crate::models::{NewEventData, RepeatRule, RepeatType};

/// Configuration for recurrence expansion bounds.
#[derive(Debug, Clone)]
pub struct ExpansionConfig {
    /// Latest date an occurrence may be generated for (planning horizon).
    /// Enforced on top of any rule end date.
    pub horizon: NaiveDate,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            horizon: NaiveDate::from_ymd_opt(2025, 10, 30).unwrap(),
        }
    }
}

/// RecurrenceExpander: turns one event definition into the concrete set of
/// occurrences its repeat rule describes.
///
/// Responsibilities:
/// 1. Bound every occurrence by min(rule end date, configured horizon)
/// 2. Step anchor-relative so a skipped month or year never shifts later
///    occurrences
/// 3. Skip candidates naming a day the target month or year does not have
#[derive(Debug, Clone)]
pub struct RecurrenceExpander {
    config: ExpansionConfig,
}

impl RecurrenceExpander {
    pub fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    /// Creates an expander with the default planning horizon.
    pub fn with_defaults() -> Self {
        Self::new(ExpansionConfig::default())
    }

    pub fn horizon(&self) -> NaiveDate {
        self.config.horizon
    }

    /// Expands `base` into one record per occurrence date: payload copied
    /// verbatim, only `date` substituted. Eager and infallible; an anchor
    /// past the effective end yields an empty vec.
    pub fn expand(&self, base: &NewEventData) -> Vec<NewEventData> {
        self.occurrence_dates(base.date, &base.repeat)
            .into_iter()
            .map(|date| NewEventData {
                date,
                ..base.clone()
            })
            .collect()
    }

    /// First `count` occurrences of `base`, for display.
    pub fn preview(&self, base: &NewEventData, count: usize) -> Vec<NewEventData> {
        let mut occurrences = self.expand(base);
        occurrences.truncate(count);
        occurrences
    }

    /// The concrete occurrence dates for `rule` anchored at `anchor`.
    ///
    /// Each candidate is computed from the anchor plus k*interval whole
    /// units, never by chaining off the previous candidate. A monthly rule
    /// anchored on the 31st therefore fires only in 31-day months, and the
    /// skipped months cause no drift in later ones.
    pub fn occurrence_dates(&self, anchor: NaiveDate, rule: &RepeatRule) -> Vec<NaiveDate> {
        let end = self.effective_end(rule);
        // A zero interval would never advance the cursor; treat it as one.
        let interval = rule.interval.max(1);

        match rule.repeat_type {
            // A one-off event is exactly its own occurrence.
            RepeatType::None => vec![anchor],
            RepeatType::Daily => day_stepped(anchor, u64::from(interval), end),
            RepeatType::Weekly => day_stepped(anchor, 7 * u64::from(interval), end),
            RepeatType::Monthly => month_stepped(anchor, interval, end),
            RepeatType::Yearly => year_stepped(anchor, interval, end),
        }
    }

    fn effective_end(&self, rule: &RepeatRule) -> NaiveDate {
        match rule.end_date {
            Some(end) => end.min(self.config.horizon),
            None => self.config.horizon,
        }
    }
}

/// Dates anchor, anchor+step, anchor+2*step, ... up to and including `end`.
/// Day-level stepping always lands on a real date.
fn day_stepped(anchor: NaiveDate, step_days: u64, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    for k in 0u64.. {
        let date = match anchor.checked_add_days(Days::new(k.saturating_mul(step_days))) {
            Some(date) => date,
            None => break,
        };
        if date > end {
            break;
        }
        dates.push(date);
    }
    dates
}

/// Dates every `interval_months` whole months from the anchor, keeping the
/// anchor's day-of-month. Months lacking that day are skipped, not clamped:
/// a candidate exists only if (year, month, anchor day) constructs cleanly.
fn month_stepped(anchor: NaiveDate, interval_months: u32, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    for k in 0u32.. {
        let months = match k.checked_mul(interval_months) {
            Some(months) => months,
            None => break,
        };
        let (year, month) = match shift_month(anchor, months) {
            Some(target) => target,
            None => break,
        };
        // The first of the target month lower-bounds any candidate in it.
        let month_start = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => date,
            None => break,
        };
        if month_start > end {
            break;
        }
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, anchor.day()) {
            if date <= end {
                dates.push(date);
            }
        }
    }
    dates
}

/// Dates every `interval_years` years from the anchor, keeping month and
/// day. A Feb 29 anchor fires only in leap years.
fn year_stepped(anchor: NaiveDate, interval_years: u32, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    for k in 0u32.. {
        let years = match k.checked_mul(interval_years) {
            Some(years) => years,
            None => break,
        };
        let year = match anchor.year().checked_add_unsigned(years) {
            Some(year) => year,
            None => break,
        };
        let month_start = match NaiveDate::from_ymd_opt(year, anchor.month(), 1) {
            Some(date) => date,
            None => break,
        };
        if month_start > end {
            break;
        }
        if let Some(date) = NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day()) {
            if date <= end {
                dates.push(date);
            }
        }
    }
    dates
}

/// Calendar position `months` whole months after the anchor's month.
fn shift_month(anchor: NaiveDate, months: u32) -> Option<(i32, u32)> {
    let total = i64::from(anchor.month0()) + i64::from(months);
    let year = i64::from(anchor.year()) + total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    Some((i32::try_from(year).ok()?, month))
}
