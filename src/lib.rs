use std::io;
use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;

use crate::infrastructure::config::settings::Config;
use crate::infrastructure::gateway::mpesa_c2b_gateway::MpesaC2BGateway;
use crate::infrastructure::http::authenticated_client::AuthenticatedClient;
use crate::use_cases::simulate_c2b::SimulateC2BUseCase;

pub mod adapters {
	pub mod web {
		pub mod c2b_handler;
		pub mod errors;
		pub mod schema;
	}
}

pub mod domain {
	pub mod c2b_request;
	pub mod msisdn;
	pub mod payment_gateway;
}

pub mod infrastructure {
	pub mod config {
		pub mod settings;
	}
	pub mod gateway {
		pub mod mpesa_c2b_gateway;
	}
	pub mod http {
		pub mod authenticated_client;
	}
}

pub mod use_cases {
	pub mod dto;
	pub mod simulate_c2b;
}

/// Builds the gateway described by `config`. Any failure here means the
/// relay could never issue a well-formed upstream request.
pub fn build_gateway(config: &Config) -> io::Result<MpesaC2BGateway> {
	let mut client_builder = Client::builder();
	if let Some(timeout) = config.upstream_timeout_secs {
		client_builder = client_builder.timeout(Duration::from_secs(timeout));
	}
	let http_client = client_builder.build().map_err(io::Error::other)?;

	let authenticated_client =
		AuthenticatedClient::new(http_client, &config.bearer_token)
			.map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

	MpesaC2BGateway::new(authenticated_client, &config.c2b_url)
		.map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

pub async fn run(config: Arc<Config>) -> io::Result<()> {
	let _ = env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.try_init();

	let gateway = build_gateway(&config)?;
	let simulate_c2b_use_case =
		web::Data::new(SimulateC2BUseCase::new(gateway, config.merchant()));

	info!(
		"Starting Actix-Web server on {}:{}...",
		config.server_host, config.server_port
	);

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.app_data(adapters::web::c2b_handler::json_config())
			.app_data(simulate_c2b_use_case.clone())
			.service(adapters::web::c2b_handler::c2b)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.server_host.as_str(), config.server_port))?
	.run()
	.await
}
