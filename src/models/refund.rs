use serde::Serialize;

/// Outcome of running a cancellation policy against a booking. Computed fresh
/// on every call and never persisted.
///
/// `refund_amount` always lies in `[0, total_amount]`, and
/// `hours_until_check_in` is clamped to zero even when check-in has already
/// passed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundCalculation {
    pub refund_amount: f64,
    pub refund_percentage: u8,
    pub policy_name: String,
    pub hours_until_check_in: f64,
    pub description: String,
    pub is_eligible_for_refund: bool,
}
