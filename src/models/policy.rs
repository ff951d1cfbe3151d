use serde::Serialize;

/// A named cancellation rule set mapping time-before-check-in to a refund
/// percentage. Entries are static catalog data and are never mutated at
/// runtime.
///
/// `refund_percentage` is the baseline payout; the `flexible` and `strict`
/// policies layer tiered thresholds on top of it inside the refund service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CancellationPolicy {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub hours_required: i64,
    pub refund_percentage: u8,
}

/// Policy applied when the caller supplies an unknown or empty identifier.
pub const DEFAULT_POLICY_ID: &str = "24_hours";

pub static CANCELLATION_POLICIES: [CancellationPolicy; 5] = [
    CancellationPolicy {
        id: "24_hours",
        name: "24 Hours Notice",
        description: "Full refund if cancelled at least 24 hours before check-in",
        hours_required: 24,
        refund_percentage: 100,
    },
    CancellationPolicy {
        id: "48_hours",
        name: "48 Hours Notice",
        description: "Full refund if cancelled at least 48 hours before check-in",
        hours_required: 48,
        refund_percentage: 100,
    },
    CancellationPolicy {
        id: "72_hours",
        name: "72 Hours Notice",
        description: "Full refund if cancelled at least 72 hours before check-in",
        hours_required: 72,
        refund_percentage: 100,
    },
    CancellationPolicy {
        id: "flexible",
        name: "Flexible",
        description: "Full refund up to 24 hours before check-in, 50% refund up to 12 hours before",
        hours_required: 24,
        refund_percentage: 100,
    },
    CancellationPolicy {
        id: "strict",
        name: "Strict",
        description: "50% refund up to 72 hours before check-in, no refund after that",
        hours_required: 72,
        refund_percentage: 50,
    },
];

/// Case-sensitive lookup into the static catalog. Unknown identifiers fall
/// back to the default 24-hour policy rather than raising an error.
pub fn policy_by_id(id: &str) -> &'static CancellationPolicy {
    CANCELLATION_POLICIES
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| {
            CANCELLATION_POLICIES
                .iter()
                .find(|p| p.id == DEFAULT_POLICY_ID)
                .expect("default policy is always present in the catalog")
        })
}
