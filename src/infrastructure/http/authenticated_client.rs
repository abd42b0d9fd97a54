use derive_more::derive::{Display, Error};
use reqwest::header::{
	AUTHORIZATION, CONTENT_TYPE, HeaderValue, InvalidHeaderValue,
};
use reqwest::{Client, Method, Response, Url};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Raised while wiring outbound HTTP at startup. Once a client exists its
/// requests are always well formed.
#[derive(Debug, Display, Error)]
pub enum ClientSetupError {
	#[display("The bearer token cannot be used as a header value")]
	InvalidToken(InvalidHeaderValue),
	#[display("Invalid upstream url '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },
}

/// A `reqwest::Client` that authenticates every request with a static
/// bearer token and declares a JSON body.
#[derive(Clone)]
pub struct AuthenticatedClient {
	client:        Client,
	authorization: HeaderValue,
}

impl AuthenticatedClient {
	pub fn new(client: Client, token: &str) -> Result<Self, ClientSetupError> {
		let mut authorization =
			HeaderValue::from_str(&format!("Bearer {token}"))
				.map_err(ClientSetupError::InvalidToken)?;
		authorization.set_sensitive(true);

		Ok(Self {
			client,
			authorization,
		})
	}

	pub fn parse_url(url: &str) -> Result<Url, ClientSetupError> {
		Url::parse(url).map_err(|e| ClientSetupError::InvalidUrl {
			url:    url.to_string(),
			reason: e.to_string(),
		})
	}

	pub async fn get(&self, url: Url) -> Result<Response, reqwest::Error> {
		self.send(Method::GET, url, None).await
	}

	pub async fn post(
		&self,
		url: Url,
		body: Vec<u8>,
	) -> Result<Response, reqwest::Error> {
		self.send(Method::POST, url, Some(body)).await
	}

	async fn send(
		&self,
		method: Method,
		url: Url,
		body: Option<Vec<u8>>,
	) -> Result<Response, reqwest::Error> {
		let mut request = self
			.client
			.request(method, url)
			.header(CONTENT_TYPE, JSON_CONTENT_TYPE)
			.header(AUTHORIZATION, self.authorization.clone());

		if let Some(body) = body {
			request = request.body(body);
		}

		request.send().await
	}
}
