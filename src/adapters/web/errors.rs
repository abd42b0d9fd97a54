use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};

use crate::adapters::web::schema::MessageResponse;
use crate::domain::msisdn::InvalidPhoneNumber;
use crate::domain::payment_gateway::GatewayError;

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ApiError {
	#[display("A binding error occurred, required field: phone")]
	BindingError,
	#[display("The phonenumber {phone} provided is not valid. {detail}")]
	InvalidPhoneNumber { phone: String, detail: String },
	#[display("Something went wrong while trying to create new c2b request")]
	UpstreamRequestError,
	#[display("Something went wrong while reading Mpesa C2B response")]
	UpstreamResponseError,
}

impl ApiError {
	pub fn invalid_phone(phone: &str, cause: &InvalidPhoneNumber) -> Self {
		ApiError::InvalidPhoneNumber {
			phone:  phone.to_string(),
			detail: cause.detail().to_string(),
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		let mut response = HttpResponse::build(self.status_code());
		response.content_type(ContentType::json());

		match self {
			ApiError::BindingError | ApiError::InvalidPhoneNumber { .. } => {
				response.json(MessageResponse {
					message: self.to_string(),
				})
			}
			// Upstream failures answer with a bare JSON string.
			ApiError::UpstreamRequestError |
			ApiError::UpstreamResponseError => response.json(self.to_string()),
		}
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::InvalidPhoneNumber { .. } => StatusCode::BAD_REQUEST,
			ApiError::BindingError |
			ApiError::UpstreamRequestError |
			ApiError::UpstreamResponseError => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl From<GatewayError> for ApiError {
	fn from(error: GatewayError) -> Self {
		match error {
			GatewayError::Encode { .. } | GatewayError::Transport { .. } => {
				ApiError::UpstreamRequestError
			}
			GatewayError::BodyRead { .. } => ApiError::UpstreamResponseError,
		}
	}
}
