use chrono::NaiveDate;
use serde::Serialize;

const SERVICE_FEE_RATE: f64 = 0.05;
const MIN_SERVICE_FEE: f64 = 50.0;

/// Price breakdown shown when a date range has been selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub nights: i64,
    pub subtotal: f64,
    pub service_fee: f64,
    pub total: f64,
}

pub struct PricingService;

impl PricingService {
    /// Calculate service fee (5% of subtotal with minimum 50)
    pub fn calculate_service_fee(subtotal: f64) -> f64 {
        let fee = subtotal * SERVICE_FEE_RATE;
        fee.max(MIN_SERVICE_FEE)
    }

    /// Quote a completed check-in/check-out selection at a nightly price.
    pub fn quote(check_in: NaiveDate, check_out: NaiveDate, price_per_night: f64) -> BookingQuote {
        let nights = (check_out - check_in).num_days().max(0);
        let subtotal = nights as f64 * price_per_night;
        let service_fee = Self::calculate_service_fee(subtotal);

        BookingQuote {
            nights,
            subtotal,
            service_fee,
            total: subtotal + service_fee,
        }
    }
}
