use actix_web::{HttpResponse, post, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{MessageResponse, PushRequest};
use crate::domain::msisdn::{masked, normalize};
use crate::infrastructure::gateway::mpesa_c2b_gateway::MpesaC2BGateway;
use crate::use_cases::dto::SimulateC2BCommand;
use crate::use_cases::simulate_c2b::SimulateC2BUseCase;

/// Body extraction for `/c2b`. Malformed bodies become `ApiError::BindingError`
/// and the content type is not enforced.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default()
		.content_type_required(false)
		.error_handler(|err, _req| {
			warn!("Failed to bind push request: {err}");
			ApiError::BindingError.into()
		})
}

/// Normalizes the phone number of an incoming push request.
pub fn preformat_push(
	push: PushRequest,
) -> Result<SimulateC2BCommand, ApiError> {
	match normalize(&push.phone) {
		Ok(msisdn) => Ok(SimulateC2BCommand {
			msisdn,
			amount: push.amount,
		}),
		Err(e) => {
			warn!("Rejected push request with an invalid phone number");
			Err(ApiError::invalid_phone(&push.phone, &e))
		}
	}
}

#[post("/c2b")]
pub async fn c2b(
	payload: web::Json<PushRequest>,
	simulate_c2b_use_case: web::Data<SimulateC2BUseCase<MpesaC2BGateway>>,
) -> Result<HttpResponse, ApiError> {
	let command = preformat_push(payload.into_inner())?;

	info!("Forwarding C2B simulation for {}", masked(&command.msisdn));

	let body = simulate_c2b_use_case.execute(command).await?;

	Ok(HttpResponse::Accepted().json(MessageResponse { message: body }))
}
