use gateway::{
    BackUrls, GatewayError, MercadoPagoClient, PreferenceItem, PreferencePayer, PreferenceRequest,
};
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use storage::{models::Registration, repository::{platform::PlatformRepository, registration::RegistrationRepository}};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::features::registrations;
use crate::state::AppState;

/// Gateway notification body. Parsed leniently; anything unexpected is
/// simply ignored so the webhook can always be acknowledged.
#[derive(Debug, Deserialize)]
pub struct WebhookNotification {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub action: Option<String>,
    pub data: Option<WebhookData>,
}

#[derive(Debug, Deserialize)]
pub struct WebhookData {
    pub id: Option<String>,
}

pub struct CheckoutLink {
    pub preference_id: String,
    pub init_point: String,
}

/// Event credentials win; the platform's own account is the fallback.
async fn gateway_client(state: &AppState) -> WebResult<MercadoPagoClient> {
    let repo = PlatformRepository::new(state.db.pool());

    let event_config = repo.event_payment_config().await?;
    if let Some(token) = event_config.access_token() {
        return Ok(MercadoPagoClient::new(token));
    }

    let platform_config = repo.platform_config().await?;
    if let Some(token) = platform_config.access_token() {
        return Ok(MercadoPagoClient::new(token));
    }

    Err(WebError::Gateway(GatewayError::MissingCredentials))
}

/// Create the gateway checkout link a pending registration is paid through.
pub async fn create_checkout_link(state: &AppState, registration_id: Uuid) -> WebResult<CheckoutLink> {
    let repo = RegistrationRepository::new(state.db.pool());
    let registration = repo.find_by_id(registration_id).await?;

    if registration.is_completed() {
        return Err(WebError::BadRequest(
            "Registration is already paid".to_string(),
        ));
    }

    let client = gateway_client(state).await?;
    let request = preference_request(state, &registration);

    let preference = client.create_preference(&request).await?;
    repo.set_preference_id(registration.id, &preference.id).await?;

    Ok(CheckoutLink {
        preference_id: preference.id,
        init_point: preference.init_point,
    })
}

fn preference_request(state: &AppState, registration: &Registration) -> PreferenceRequest {
    let base = &state.config.public_base_url;

    PreferenceRequest {
        items: vec![PreferenceItem {
            title: format!(
                "Inscripción {} {}",
                registration.first_name, registration.last_name
            ),
            description: Some(registration.categories.join(", ")),
            quantity: 1,
            unit_price: registration.final_price.to_f64().unwrap_or(0.0),
            currency_id: "COP".to_string(),
        }],
        payer: PreferencePayer {
            name: registration.first_name.clone(),
            surname: registration.last_name.clone(),
            email: registration.email.clone(),
        },
        back_urls: BackUrls {
            success: format!("{base}/pago-exitoso?registration_id={}", registration.id),
            failure: format!("{base}/pago-fallido?registration_id={}", registration.id),
            pending: format!("{base}/pago-exitoso?registration_id={}", registration.id),
        },
        auto_return: Some("approved".to_string()),
        external_reference: registration.id.to_string(),
        notification_url: Some(format!("{base}/api/payments/webhook")),
    }
}

/// Poll the gateway for an approved payment referencing the registration.
/// Safe to call repeatedly; confirmation is idempotent.
pub async fn verify_payment(state: &AppState, registration_id: Uuid) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(state.db.pool());
    let registration = repo.find_by_id(registration_id).await?;

    if registration.is_completed() {
        return Ok(registration);
    }

    let client = gateway_client(state).await?;
    let payments = client
        .search_payments_by_reference(&registration.id.to_string())
        .await?;

    match payments.iter().find(|p| p.is_approved()) {
        Some(payment) => {
            registrations::services::complete(state, registration_id, Some(&payment.id.to_string()))
                .await
        }
        None => Ok(registration),
    }
}

/// Process a gateway notification. Errors bubble up to the handler, which
/// logs and acknowledges anyway.
pub async fn process_webhook(state: &AppState, body: &str) -> WebResult<()> {
    let notification: WebhookNotification = serde_json::from_str(body)
        .map_err(|e| WebError::BadRequest(format!("Unreadable webhook payload: {e}")))?;

    if notification.kind.as_deref() != Some("payment") {
        tracing::debug!(kind = ?notification.kind, action = ?notification.action, "Ignoring non-payment notification");
        return Ok(());
    }

    let Some(payment_id) = notification.data.and_then(|d| d.id) else {
        return Ok(());
    };

    let client = gateway_client(state).await?;
    let payment = client.get_payment(&payment_id).await?;

    if !payment.is_approved() {
        tracing::debug!(payment_id = payment.id, status = %payment.status, "Payment not approved yet");
        return Ok(());
    }

    let Some(reference) = payment.external_reference else {
        return Ok(());
    };
    let registration_id = Uuid::parse_str(&reference).map_err(|_| {
        WebError::BadRequest(format!("External reference is not a registration id: {reference}"))
    })?;

    registrations::services::complete(state, registration_id, Some(&payment.id.to_string()))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_notification_parses_gateway_body() {
        let body = r#"{"type": "payment", "action": "payment.updated", "data": {"id": "12345"}}"#;
        let notification: WebhookNotification = serde_json::from_str(body).unwrap();

        assert_eq!(notification.kind.as_deref(), Some("payment"));
        assert_eq!(notification.data.unwrap().id.as_deref(), Some("12345"));
    }

    #[test]
    fn webhook_notification_tolerates_unknown_shapes() {
        let notification: WebhookNotification =
            serde_json::from_str(r#"{"topic": "merchant_order"}"#).unwrap();

        assert_eq!(notification.kind, None);
        assert!(notification.data.is_none());
    }
}
