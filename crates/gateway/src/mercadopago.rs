use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};

const DEFAULT_BASE_URL: &str = "https://api.mercadopago.com";

/// A payment the gateway reports as collected.
pub const STATUS_APPROVED: &str = "approved";

#[derive(Debug, Clone, Serialize)]
pub struct PreferenceRequest {
    pub items: Vec<PreferenceItem>,
    pub payer: PreferencePayer,
    pub back_urls: BackUrls,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_return: Option<String>,
    pub external_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferenceItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: u32,
    /// The gateway expects a JSON number, not a decimal string.
    pub unit_price: f64,
    pub currency_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferencePayer {
    pub name: String,
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackUrls {
    pub success: String,
    pub failure: String,
    pub pending: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreferenceResponse {
    pub id: String,
    pub init_point: String,
    #[serde(default)]
    pub sandbox_init_point: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentInfo {
    pub id: i64,
    pub status: String,
    #[serde(default)]
    pub status_detail: Option<String>,
    #[serde(default)]
    pub external_reference: Option<String>,
    #[serde(default)]
    pub transaction_amount: Option<f64>,
}

impl PaymentInfo {
    pub fn is_approved(&self) -> bool {
        self.status == STATUS_APPROVED
    }
}

#[derive(Debug, Deserialize)]
struct PaymentSearchResponse {
    results: Vec<PaymentInfo>,
}

/// Client for the Mercado Pago checkout and payments API
pub struct MercadoPagoClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl MercadoPagoClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, access_token)
    }

    pub fn with_base_url(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Create a checkout preference and return the redirect link the pilot
    /// pays through.
    pub async fn create_preference(&self, request: &PreferenceRequest) -> Result<PreferenceResponse> {
        tracing::info!(
            external_reference = %request.external_reference,
            "Creating payment preference"
        );

        let response = self
            .client
            .post(format!("{}/checkout/preferences", self.base_url))
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn get_payment(&self, payment_id: &str) -> Result<PaymentInfo> {
        let response = self
            .client
            .get(format!("{}/v1/payments/{}", self.base_url, payment_id))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// All payments the gateway has recorded against an external reference
    /// (the registration id).
    pub async fn search_payments_by_reference(
        &self,
        external_reference: &str,
    ) -> Result<Vec<PaymentInfo>> {
        let response = self
            .client
            .get(format!("{}/v1/payments/search", self.base_url))
            .bearer_auth(&self.access_token)
            .query(&[("external_reference", external_reference)])
            .send()
            .await?;

        let search: PaymentSearchResponse = Self::decode(response).await?;
        Ok(search.results)
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_response_parses_gateway_json() {
        let json = r#"{
            "id": "123456789-abcd-ef00",
            "init_point": "https://www.mercadopago.com.co/checkout/v1/redirect?pref_id=123",
            "sandbox_init_point": "https://sandbox.mercadopago.com.co/checkout/v1/redirect?pref_id=123",
            "date_created": "2026-01-10T09:00:00.000-04:00"
        }"#;

        let response: PreferenceResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.id, "123456789-abcd-ef00");
        assert!(response.init_point.contains("pref_id=123"));
    }

    #[test]
    fn payment_search_parses_and_flags_approved() {
        let json = r#"{
            "paging": {"total": 2, "limit": 30, "offset": 0},
            "results": [
                {"id": 111, "status": "rejected", "status_detail": "cc_rejected_other_reason",
                 "external_reference": "reg-1", "transaction_amount": 100000.0},
                {"id": 222, "status": "approved", "status_detail": "accredited",
                 "external_reference": "reg-1", "transaction_amount": 100000.0}
            ]
        }"#;

        let search: PaymentSearchResponse = serde_json::from_str(json).unwrap();

        assert_eq!(search.results.len(), 2);
        assert!(!search.results[0].is_approved());
        assert!(search.results[1].is_approved());
    }

    #[test]
    fn payment_info_tolerates_missing_optional_fields() {
        let payment: PaymentInfo =
            serde_json::from_str(r#"{"id": 42, "status": "pending"}"#).unwrap();

        assert_eq!(payment.id, 42);
        assert_eq!(payment.external_reference, None);
    }

    #[test]
    fn preference_request_omits_absent_optionals() {
        let request = PreferenceRequest {
            items: vec![PreferenceItem {
                title: "Inscripción".to_string(),
                description: None,
                quantity: 1,
                unit_price: 100000.0,
                currency_id: "COP".to_string(),
            }],
            payer: PreferencePayer {
                name: "Test".to_string(),
                surname: "Piloto".to_string(),
                email: "test@example.com".to_string(),
            },
            back_urls: BackUrls {
                success: "https://example.com/ok".to_string(),
                failure: "https://example.com/fail".to_string(),
                pending: "https://example.com/pending".to_string(),
            },
            auto_return: None,
            external_reference: "reg-1".to_string(),
            notification_url: None,
        };

        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("auto_return").is_none());
        assert!(value.get("notification_url").is_none());
        assert_eq!(value["items"][0]["unit_price"], 100000.0);
    }

    #[tokio::test]
    #[ignore] // Only run with live sandbox credentials
    async fn live_payment_search_round_trip() {
        let token = std::env::var("MP_TEST_ACCESS_TOKEN").expect("MP_TEST_ACCESS_TOKEN not set");
        let client = MercadoPagoClient::new(token);

        let results = client
            .search_payments_by_reference("nonexistent-reference")
            .await
            .unwrap();

        assert!(results.is_empty());
    }
}
