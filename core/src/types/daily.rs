use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A per-day, per-service measurement as persisted by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyData {
    pub id: i64,
    pub service_id: i64,
    pub date: NaiveDate,
    pub day: u32,
    pub category: Option<String>,
    pub account: Option<String>,
    pub country: Option<String>,
    pub version: Option<String>,
    pub currency: Option<String>,
    pub sku: Option<String>,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub daily_billing: f64,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub target: f64,
    #[serde(default)]
    pub churn: i64,
    #[serde(default)]
    pub gross_additions: i64,
    #[serde(default)]
    pub net_additions: i64,
    #[serde(default)]
    pub subscriber_base: i64,
}

/// Client-shaped daily input. The owning service reference is injected by the
/// mapper; a `service_id` carried here is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDataDraft {
    pub service_id: Option<i64>,
    pub date: NaiveDate,
    pub day: Option<u32>,
    pub category: Option<String>,
    pub account: Option<String>,
    pub country: Option<String>,
    pub version: Option<String>,
    pub currency: Option<String>,
    pub sku: Option<String>,
    pub rate: Option<f64>,
    pub daily_billing: Option<f64>,
    pub revenue: Option<f64>,
    pub target: Option<f64>,
    pub churn: Option<i64>,
    pub gross_additions: Option<i64>,
    pub net_additions: Option<i64>,
    pub subscriber_base: Option<i64>,
}

impl DailyDataDraft {
    /// A draft for `date` with everything else unset.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            service_id: None,
            date,
            day: None,
            category: None,
            account: None,
            country: None,
            version: None,
            currency: None,
            sku: None,
            rate: None,
            daily_billing: None,
            revenue: None,
            target: None,
            churn: None,
            gross_additions: None,
            net_additions: None,
            subscriber_base: None,
        }
    }
}

/// The exact field set the API accepts for daily-data create/update/bulk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDataPayload {
    pub service_id: i64,
    pub date: NaiveDate,
    pub day: u32,
    pub category: Option<String>,
    pub account: Option<String>,
    pub country: Option<String>,
    pub version: Option<String>,
    pub currency: Option<String>,
    pub sku: Option<String>,
    pub rate: f64,
    pub daily_billing: f64,
    pub revenue: f64,
    pub target: f64,
    pub churn: i64,
    pub gross_additions: i64,
    pub net_additions: i64,
    pub subscriber_base: i64,
}
