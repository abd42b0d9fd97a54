use async_trait::async_trait;
use derive_more::derive::{Display, Error};

use crate::domain::c2b_request::C2BRequest;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
	#[display("Could not encode the C2B request: {reason}")]
	Encode { reason: String },
	#[display("Could not reach the payment gateway: {reason}")]
	Transport { reason: String },
	#[display("Could not read the payment gateway response: {reason}")]
	BodyRead { reason: String },
}

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	/// Sends the simulation request and returns the provider's raw body,
	/// whatever its status code.
	async fn simulate_c2b(
		&self,
		request: &C2BRequest,
	) -> Result<String, GatewayError>;
}
