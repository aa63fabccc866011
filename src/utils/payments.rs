use serde::Deserialize;
use tracing::instrument;

use crate::config::payments::PaymentsConfig;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct PaymentIntent {
    client_secret: String,
}

/// Creates a card payment intent at the processor and returns its client
/// secret. `amount_cents` is the charge in the smallest currency unit.
#[instrument(skip(config))]
pub async fn create_payment_intent(
    config: &PaymentsConfig,
    amount_cents: i64,
) -> Result<String, AppError> {
    let params = [
        ("amount", amount_cents.to_string()),
        ("currency", "usd".to_string()),
        ("payment_method_types[]", "card".to_string()),
    ];

    let intent = reqwest::Client::new()
        .post(format!("{}/v1/payment_intents", config.api_base))
        .basic_auth(&config.secret_key, None::<&str>)
        .form(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<PaymentIntent>()
        .await?;

    Ok(intent.client_secret)
}
