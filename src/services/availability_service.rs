use std::collections::HashSet;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

/// Calendar availability payload. The booking API has shipped two shapes for
/// this endpoint over time; both are accepted and normalised into a flat set
/// of available dates right at the boundary.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CalendarResponse {
    #[serde(rename_all = "camelCase")]
    AvailableDates { available_dates: Vec<String> },
    Days { days: Vec<CalendarDay> },
}

#[derive(Debug, Deserialize)]
pub struct CalendarDay {
    pub date: String,
    pub available: bool,
}

impl CalendarResponse {
    /// Flatten either response shape into the set of available dates.
    /// Entries that do not parse as `YYYY-MM-DD` are skipped.
    pub fn into_available_set(self) -> HashSet<NaiveDate> {
        let dates: Vec<String> = match self {
            CalendarResponse::AvailableDates { available_dates } => available_dates,
            CalendarResponse::Days { days } => days
                .into_iter()
                .filter(|day| day.available)
                .map(|day| day.date)
                .collect(),
        };
        dates
            .iter()
            .filter_map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .collect()
    }
}

/// Client for the remote availability endpoint, one request per displayed
/// month. Failures are swallowed: the calendar falls back to treating future
/// dates as available until a later fetch succeeds.
pub struct AvailabilityService {
    http_client: reqwest::Client,
    base_url: String,
}

impl AvailabilityService {
    pub fn new(base_url: impl Into<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// Available dates for one month of one service. Network errors,
    /// non-success statuses, and decode failures all degrade to an empty set
    /// with a diagnostic log line; no retry is attempted.
    pub async fn fetch_month(
        &self,
        service_id: &str,
        year: i32,
        month: u32,
    ) -> HashSet<NaiveDate> {
        match self.fetch_calendar(service_id, year, month).await {
            Ok(response) => response.into_available_set(),
            Err(e) => {
                log::warn!(
                    "Availability fetch failed for service {} ({}-{:02}): {}",
                    service_id,
                    year,
                    month,
                    e
                );
                HashSet::new()
            }
        }
    }

    async fn fetch_calendar(
        &self,
        service_id: &str,
        year: i32,
        month: u32,
    ) -> Result<CalendarResponse, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/api/services/{}/calendar?year={}&month={}",
            self.base_url, service_id, year, month
        );

        let response = self.http_client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("calendar endpoint returned {}", response.status()).into());
        }

        Ok(response.json::<CalendarResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_flat_shape() {
        let response: CalendarResponse =
            serde_json::from_str(r#"{"availableDates": ["2025-01-10", "2025-01-11"]}"#).unwrap();
        let set = response.into_available_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
    }

    #[test]
    fn test_decode_days_shape_keeps_only_available() {
        let response: CalendarResponse = serde_json::from_str(
            r#"{"days": [
                {"date": "2025-01-10", "available": true},
                {"date": "2025-01-11", "available": false}
            ]}"#,
        )
        .unwrap();
        let set = response.into_available_set();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
    }

    #[test]
    fn test_unparseable_dates_are_skipped() {
        let response: CalendarResponse =
            serde_json::from_str(r#"{"availableDates": ["2025-01-10", "not-a-date"]}"#).unwrap();
        assert_eq!(response.into_available_set().len(), 1);
    }
}
