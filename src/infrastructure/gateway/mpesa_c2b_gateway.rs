use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::Url;

use crate::domain::c2b_request::C2BRequest;
use crate::domain::msisdn::masked;
use crate::domain::payment_gateway::{GatewayError, PaymentGateway};
use crate::infrastructure::http::authenticated_client::{
	AuthenticatedClient, ClientSetupError,
};

#[derive(Clone)]
pub struct MpesaC2BGateway {
	client:       AuthenticatedClient,
	simulate_url: Url,
}

impl MpesaC2BGateway {
	pub fn new(
		client: AuthenticatedClient,
		simulate_url: &str,
	) -> Result<Self, ClientSetupError> {
		Ok(Self {
			client,
			simulate_url: AuthenticatedClient::parse_url(simulate_url)?,
		})
	}
}

#[async_trait]
impl PaymentGateway for MpesaC2BGateway {
	async fn simulate_c2b(
		&self,
		request: &C2BRequest,
	) -> Result<String, GatewayError> {
		let payload =
			serde_json::to_vec(request).map_err(|e| GatewayError::Encode {
				reason: e.to_string(),
			})?;

		let response = self
			.client
			.post(self.simulate_url.clone(), payload)
			.await
			.map_err(|e| {
				error!(
					"C2B simulation request to {} failed: {e}",
					self.simulate_url
				);
				GatewayError::Transport {
					reason: e.to_string(),
				}
			})?;

		let status = response.status();
		if !status.is_success() {
			warn!(
				"C2B simulation for {} answered with status {status}",
				masked(&request.msisdn)
			);
		}

		let body = response.text().await.map_err(|e| {
			error!("Failed to read C2B simulation response: {e}");
			GatewayError::BodyRead {
				reason: e.to_string(),
			}
		})?;

		info!(
			"C2B simulation for {} relayed with status {status}",
			masked(&request.msisdn)
		);

		Ok(body)
	}
}
