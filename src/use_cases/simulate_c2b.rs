use crate::domain::c2b_request::{C2BRequest, MerchantProfile};
use crate::domain::payment_gateway::{GatewayError, PaymentGateway};
use crate::use_cases::dto::SimulateC2BCommand;

#[derive(Clone)]
pub struct SimulateC2BUseCase<G: PaymentGateway> {
	gateway:  G,
	merchant: MerchantProfile,
}

impl<G: PaymentGateway> SimulateC2BUseCase<G> {
	pub fn new(gateway: G, merchant: MerchantProfile) -> Self {
		Self { gateway, merchant }
	}

	pub async fn execute(
		&self,
		command: SimulateC2BCommand,
	) -> Result<String, GatewayError> {
		let request = C2BRequest::for_merchant(
			&self.merchant,
			command.msisdn,
			command.amount,
		);

		self.gateway.simulate_c2b(&request).await
	}
}
