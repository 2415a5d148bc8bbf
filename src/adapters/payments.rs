use crate::domain::model::Payment;
use crate::domain::ports::PaymentSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Payment source backed by the external payment service's JSON API.
#[derive(Debug, Clone)]
pub struct HttpPaymentSource {
    endpoint: String,
    client: Client,
}

impl HttpPaymentSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl PaymentSource for HttpPaymentSource {
    async fn current_payments(&self) -> Result<Vec<Payment>> {
        tracing::debug!("Requesting payments from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Payment service response status: {}", response.status());

        if !response.status().is_success() {
            tracing::warn!(
                "Payment service returned {}, listing no payments",
                response.status()
            );
            return Ok(Vec::new());
        }

        let payments: Vec<Payment> = response.json().await?;
        Ok(payments)
    }
}
