use serde::{Deserialize, Serialize};

/// A service aggregate as persisted by the API.
///
/// Numeric fields default to zero when absent from a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub account: Option<String>,
    pub country: Option<String>,
    pub version: Option<String>,
    pub currency: Option<String>,
    #[serde(default)]
    pub exchange_rate: f64,
    #[serde(default)]
    pub mtd_revenue: f64,
    #[serde(default)]
    pub mtd_target: f64,
    #[serde(default)]
    pub actual_run_rate: f64,
    #[serde(default)]
    pub required_run_rate: f64,
    #[serde(default)]
    pub subscriber_base: i64,
    #[serde(default)]
    pub mtd_net_additions: i64,
}

/// Client-shaped service input. Everything but the name is optional; the
/// mapper substitutes zero for missing amounts and counts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub name: String,
    pub category: Option<String>,
    pub account: Option<String>,
    pub country: Option<String>,
    pub version: Option<String>,
    pub currency: Option<String>,
    pub exchange_rate: Option<f64>,
    pub mtd_revenue: Option<f64>,
    pub mtd_target: Option<f64>,
    pub actual_run_rate: Option<f64>,
    pub required_run_rate: Option<f64>,
    pub subscriber_base: Option<i64>,
    pub mtd_net_additions: Option<i64>,
}

/// The exact field set the API accepts for service create/update. Every field
/// is always present on the wire; descriptive fields may be null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    pub name: String,
    pub category: Option<String>,
    pub account: Option<String>,
    pub country: Option<String>,
    pub version: Option<String>,
    pub currency: Option<String>,
    pub exchange_rate: f64,
    pub mtd_revenue: f64,
    pub mtd_target: f64,
    pub actual_run_rate: f64,
    pub required_run_rate: f64,
    pub subscriber_base: i64,
    pub mtd_net_additions: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_uses_camel_case_wire_names() {
        let service = Service {
            id: 7,
            name: "Mobile TV".to_string(),
            category: Some("VAS".to_string()),
            account: None,
            country: Some("KE".to_string()),
            version: None,
            currency: Some("USD".to_string()),
            exchange_rate: 1.0,
            mtd_revenue: 1250.5,
            mtd_target: 2000.0,
            actual_run_rate: 41.7,
            required_run_rate: 55.0,
            subscriber_base: 9000,
            mtd_net_additions: 120,
        };
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["mtdRevenue"], 1250.5);
        assert_eq!(json["actualRunRate"], 41.7);
        assert_eq!(json["subscriberBase"], 9000);
        assert_eq!(json["mtdNetAdditions"], 120);
    }

    #[test]
    fn service_numeric_fields_default_to_zero() {
        let service: Service =
            serde_json::from_str(r#"{"id":1,"name":"Bare","category":null,"account":null,"country":null,"version":null,"currency":null}"#)
                .unwrap();
        assert_eq!(service.mtd_revenue, 0.0);
        assert_eq!(service.mtd_target, 0.0);
        assert_eq!(service.subscriber_base, 0);
        assert_eq!(service.mtd_net_additions, 0);
    }

    #[test]
    fn payload_serializes_every_field() {
        let payload = ServicePayload {
            name: "Bare".to_string(),
            category: None,
            account: None,
            country: None,
            version: None,
            currency: None,
            exchange_rate: 0.0,
            mtd_revenue: 0.0,
            mtd_target: 0.0,
            actual_run_rate: 0.0,
            required_run_rate: 0.0,
            subscriber_base: 0,
            mtd_net_additions: 0,
        };
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 13);
        assert!(object["category"].is_null());
        assert_eq!(object["mtdRevenue"], 0.0);
    }
}
