use std::env;

#[derive(Clone, Debug)]
pub struct PaymentsConfig {
    /// Secret API key for the payment processor.
    pub secret_key: String,
    /// Processor API base URL. Overridable so tests can point at a stub.
    pub api_base: String,
}

impl PaymentsConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("STRIPE_SECRET_KEY").unwrap_or_default(),
            api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
        }
    }
}
