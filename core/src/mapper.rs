//! Pure translation from client-shaped drafts to API payloads.
//!
//! # Design
//! Total functions with no failure path. Missing amounts and counts become
//! zero; descriptive fields pass through as-is. For daily data the owning
//! service identifier is injected by the caller of the operation, overriding
//! any service reference the draft may carry. Unknown input fields cannot
//! occur: drafts are typed.

use crate::types::{DailyDataDraft, DailyDataPayload, ServiceDraft, ServicePayload};

/// Shape a service draft into the exact field set the API persists.
pub fn service_payload(draft: &ServiceDraft) -> ServicePayload {
    ServicePayload {
        name: draft.name.clone(),
        category: draft.category.clone(),
        account: draft.account.clone(),
        country: draft.country.clone(),
        version: draft.version.clone(),
        currency: draft.currency.clone(),
        exchange_rate: draft.exchange_rate.unwrap_or(0.0),
        mtd_revenue: draft.mtd_revenue.unwrap_or(0.0),
        mtd_target: draft.mtd_target.unwrap_or(0.0),
        actual_run_rate: draft.actual_run_rate.unwrap_or(0.0),
        required_run_rate: draft.required_run_rate.unwrap_or(0.0),
        subscriber_base: draft.subscriber_base.unwrap_or(0),
        mtd_net_additions: draft.mtd_net_additions.unwrap_or(0),
    }
}

/// Shape a daily draft into the exact field set the API persists, owned by
/// `service_id`.
pub fn daily_payload(draft: &DailyDataDraft, service_id: i64) -> DailyDataPayload {
    DailyDataPayload {
        service_id,
        date: draft.date,
        day: draft.day.unwrap_or(0),
        category: draft.category.clone(),
        account: draft.account.clone(),
        country: draft.country.clone(),
        version: draft.version.clone(),
        currency: draft.currency.clone(),
        sku: draft.sku.clone(),
        rate: draft.rate.unwrap_or(0.0),
        daily_billing: draft.daily_billing.unwrap_or(0.0),
        revenue: draft.revenue.unwrap_or(0.0),
        target: draft.target.unwrap_or(0.0),
        churn: draft.churn.unwrap_or(0),
        gross_additions: draft.gross_additions.unwrap_or(0),
        net_additions: draft.net_additions.unwrap_or(0),
        subscriber_base: draft.subscriber_base.unwrap_or(0),
    }
}
