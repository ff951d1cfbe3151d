use chrono::{DateTime, Duration, Utc};

use crate::models::policy::{policy_by_id, CancellationPolicy};
use crate::models::refund::RefundCalculation;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Cancellation refund engine. Every function here is pure and total: no I/O,
/// no panics, unknown policy identifiers degrade to the default policy.
pub struct RefundService;

impl RefundService {
    /// Compute the refund owed for cancelling `total_amount` worth of booking
    /// ahead of `check_in` under the named policy, as of now.
    pub fn calculate_refund(
        total_amount: f64,
        check_in: DateTime<Utc>,
        policy_id: &str,
    ) -> RefundCalculation {
        Self::calculate_refund_at(total_amount, check_in, policy_id, Utc::now())
    }

    /// Clock-injected variant of [`RefundService::calculate_refund`].
    ///
    /// Branching uses the unclamped hour difference, so a check-in already in
    /// the past behaves exactly like "0 hours left". Only the reported
    /// `hours_until_check_in` field is clamped to zero. No rounding is applied
    /// to `refund_amount`; callers round to the currency's minor unit when
    /// displaying or charging.
    pub fn calculate_refund_at(
        total_amount: f64,
        check_in: DateTime<Utc>,
        policy_id: &str,
        now: DateTime<Utc>,
    ) -> RefundCalculation {
        let policy = policy_by_id(policy_id);
        let hours = hours_until(check_in, now);
        let refund_percentage = refund_percentage_for(policy, hours);
        let refund_amount = total_amount * f64::from(refund_percentage) / 100.0;

        RefundCalculation {
            refund_amount,
            refund_percentage,
            policy_name: policy.name.to_string(),
            hours_until_check_in: hours.max(0.0),
            description: describe_outcome(policy, refund_percentage, hours),
            is_eligible_for_refund: refund_percentage > 0,
        }
    }

    /// Whether the booking can still be cancelled at all: true iff strictly
    /// more than one hour remains before check-in. The policy only affects the
    /// refund amount, never cancellation eligibility.
    pub fn is_cancellation_allowed(check_in: DateTime<Utc>, _policy_id: &str) -> bool {
        Self::is_cancellation_allowed_at(check_in, Utc::now())
    }

    pub fn is_cancellation_allowed_at(check_in: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        hours_until(check_in, now) > 1.0
    }

    /// Latest instant at which the policy's full (baseline) refund still
    /// applies: check-in minus the policy's static `hours_required`.
    ///
    /// Known limitation kept for parity with the policy catalog: for the
    /// `flexible` policy this reports the 24-hour full-refund mark only and
    /// says nothing about the 12-hour partial-refund tier.
    pub fn cancellation_deadline(check_in: DateTime<Utc>, policy_id: &str) -> DateTime<Utc> {
        let policy = policy_by_id(policy_id);
        check_in - Duration::hours(policy.hours_required)
    }
}

/// Fractional hours from `now` until `check_in`; negative when check-in has
/// passed.
fn hours_until(check_in: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (check_in - now).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

fn refund_percentage_for(policy: &CancellationPolicy, hours: f64) -> u8 {
    match policy.id {
        "flexible" => {
            if hours >= 24.0 {
                100
            } else if hours >= 12.0 {
                50
            } else {
                0
            }
        }
        // Strict never grants a full refund, no matter how far out.
        "strict" => {
            if hours >= 72.0 {
                50
            } else {
                0
            }
        }
        _ => {
            if hours >= policy.hours_required as f64 {
                100
            } else {
                0
            }
        }
    }
}

/// Render the remaining time as human text: "Past check-in time" once the
/// check-in has been reached, otherwise a floor-decomposed day/hour phrase
/// with zero components omitted.
pub fn format_hours_until_check_in(hours: f64) -> String {
    if hours <= 0.0 {
        return "Past check-in time".to_string();
    }
    let days = (hours / 24.0).floor() as i64;
    let rem_hours = (hours % 24.0).floor() as i64;
    match (days, rem_hours) {
        (0, h) => format!("{} hour{}", h, plural(h)),
        (d, 0) => format!("{} day{}", d, plural(d)),
        (d, h) => format!("{} day{} and {} hour{}", d, plural(d), h, plural(h)),
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn describe_outcome(policy: &CancellationPolicy, percentage: u8, hours: f64) -> String {
    if hours <= 0.0 {
        return format!("Past check-in time. No refund under the {} policy.", policy.name);
    }
    let remaining = format_hours_until_check_in(hours);
    match percentage {
        0 => format!(
            "{} until check-in. No refund under the {} policy.",
            remaining, policy.name
        ),
        100 => format!(
            "{} until check-in. Full refund under the {} policy.",
            remaining, policy.name
        ),
        p => format!(
            "{} until check-in. {}% refund under the {} policy.",
            remaining, p, policy.name
        ),
    }
}
