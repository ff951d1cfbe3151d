use std::collections::HashSet;

use chrono::{Datelike, Months, NaiveDate};

/// Category of the booked service. Only affects wording: "private chef" style
/// services talk about start/end dates instead of check-in/check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceCategory {
    #[default]
    Stay,
    PrivateChef,
}

/// Result of a single date click on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Past or booked date; nothing changed.
    Ignored,
    /// The clicked date is now the (possibly re-anchored) check-in.
    CheckInSelected(NaiveDate),
    /// A full range was committed. Emitted exactly once per completed pair.
    RangeCompleted {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

/// Stateful date-range picker backing the booking calendar widget.
///
/// Drives a two-phase interaction: the next valid click sets the check-in,
/// the one after sets the check-out, and a completed pair is reported through
/// [`ClickOutcome::RangeCompleted`]. Clicking on or before the pending
/// check-in while waiting for a check-out re-anchors the range start instead
/// of erroring.
///
/// The selector is ephemeral: it lives for one calendar mount, and the caller
/// owns any durable storage of the committed pair.
#[derive(Debug, Clone)]
pub struct DateSelector {
    today: NaiveDate,
    displayed_month: NaiveDate,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    selecting_check_in: bool,
    booked_dates: HashSet<NaiveDate>,
    available_dates: Option<HashSet<NaiveDate>>,
    price_per_night: Option<f64>,
    category: ServiceCategory,
}

impl DateSelector {
    /// `today` is the caller's current date, used for past-date filtering and
    /// the optimistic availability fallback. `booked_dates` come from the
    /// booking API and are never selectable.
    pub fn new(today: NaiveDate, booked_dates: HashSet<NaiveDate>) -> Self {
        let displayed_month = today.with_day(1).expect("day 1 exists in every month");
        Self {
            today,
            displayed_month,
            check_in: None,
            check_out: None,
            selecting_check_in: true,
            booked_dates,
            available_dates: None,
            price_per_night: None,
            category: ServiceCategory::Stay,
        }
    }

    pub fn with_price(mut self, price_per_night: f64) -> Self {
        self.price_per_night = Some(price_per_night);
        self
    }

    pub fn with_category(mut self, category: ServiceCategory) -> Self {
        self.category = category;
        self
    }

    /// Pre-seed an existing selection, e.g. when re-opening the calendar with
    /// dates already chosen. The selector starts a fresh cycle on next click.
    pub fn with_selection(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = Some(check_in);
        self.check_out = Some(check_out);
        self.selecting_check_in = true;
        self
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    pub fn is_selecting_check_in(&self) -> bool {
        self.selecting_check_in
    }

    /// Handle a click on a calendar day. Past and booked dates are filtered
    /// out before the selection state machine sees them.
    pub fn select_date(&mut self, date: NaiveDate) -> ClickOutcome {
        if self.is_past(date) || self.is_booked(date) {
            return ClickOutcome::Ignored;
        }

        if self.selecting_check_in {
            self.check_in = Some(date);
            self.check_out = None;
            self.selecting_check_in = false;
            return ClickOutcome::CheckInSelected(date);
        }

        match self.check_in {
            Some(start) if date > start => {
                self.check_out = Some(date);
                self.selecting_check_in = true;
                ClickOutcome::RangeCompleted {
                    check_in: start,
                    check_out: date,
                }
            }
            _ => {
                // Clicking on or before the pending check-in re-anchors the
                // range start; the widget keeps waiting for a check-out.
                self.check_in = Some(date);
                self.check_out = None;
                ClickOutcome::CheckInSelected(date)
            }
        }
    }

    pub fn is_past(&self, date: NaiveDate) -> bool {
        date < self.today
    }

    pub fn is_booked(&self, date: NaiveDate) -> bool {
        self.booked_dates.contains(&date)
    }

    /// Availability for rendering. Until the fetch for the displayed month
    /// lands, any date from today onward is optimistically shown available.
    pub fn is_available(&self, date: NaiveDate) -> bool {
        match &self.available_dates {
            Some(set) => set.contains(&date),
            None => date >= self.today,
        }
    }

    /// Whether the date is a selection endpoint or strictly inside the
    /// selected range.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        if self.check_in == Some(date) || self.check_out == Some(date) {
            return true;
        }
        matches!(
            (self.check_in, self.check_out),
            (Some(start), Some(end)) if start < date && date < end
        )
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.is_past(date) || self.is_booked(date)
    }

    /// Displayed month as `(year, month)`.
    pub fn displayed_month(&self) -> (i32, u32) {
        (self.displayed_month.year(), self.displayed_month.month())
    }

    /// Move the calendar back one month. Selection state is untouched; the
    /// fetched availability no longer applies and is cleared until the caller
    /// refetches for the new month.
    pub fn previous_month(&mut self) {
        self.displayed_month = self.displayed_month - Months::new(1);
        self.available_dates = None;
    }

    pub fn next_month(&mut self) {
        self.displayed_month = self.displayed_month + Months::new(1);
        self.available_dates = None;
    }

    /// Install an availability fetch result. Returns false and leaves state
    /// untouched when the result is for a month the user has already
    /// navigated away from, so a stale response can never clobber the
    /// displayed month.
    pub fn apply_available_dates(
        &mut self,
        year: i32,
        month: u32,
        dates: HashSet<NaiveDate>,
    ) -> bool {
        if (year, month) != self.displayed_month() {
            return false;
        }
        self.available_dates = Some(dates);
        true
    }

    pub fn clear_available_dates(&mut self) {
        self.available_dates = None;
    }

    /// Number of nights in the current selection, 0 until both dates are set.
    pub fn nights(&self) -> i64 {
        match (self.check_in, self.check_out) {
            (Some(start), Some(end)) => (end - start).num_days(),
            _ => 0,
        }
    }

    /// Nights times the nightly price, when a price was supplied.
    pub fn total_price(&self) -> Option<f64> {
        self.price_per_night.map(|price| self.nights() as f64 * price)
    }

    pub fn check_in_label(&self) -> &'static str {
        match self.category {
            ServiceCategory::PrivateChef => "Start date",
            ServiceCategory::Stay => "Check-in",
        }
    }

    pub fn check_out_label(&self) -> &'static str {
        match self.category {
            ServiceCategory::PrivateChef => "End date",
            ServiceCategory::Stay => "Check-out",
        }
    }

    /// Prompt for the current selection phase.
    pub fn phase_prompt(&self) -> &'static str {
        match (self.selecting_check_in, self.category) {
            (true, ServiceCategory::PrivateChef) => "Select start date",
            (true, ServiceCategory::Stay) => "Select check-in date",
            (false, ServiceCategory::PrivateChef) => "Select end date",
            (false, ServiceCategory::Stay) => "Select check-out date",
        }
    }
}
