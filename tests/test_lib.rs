use std::io::ErrorKind;
use std::sync::Arc;

use mpesa_c2b_relay::infrastructure::config::settings::{
	Config, DEFAULT_C2B_URL, DEFAULT_COMMAND_ID,
};
use mpesa_c2b_relay::run;

fn config_with(port: u16, c2b_url: &str, bearer_token: &str) -> Arc<Config> {
	Arc::new(Config {
		server_host:           "127.0.0.1".to_string(),
		server_port:           port,
		server_keepalive:      5,
		c2b_url:               c2b_url.to_string(),
		bearer_token:          bearer_token.to_string(),
		short_code:            600982,
		command_id:            DEFAULT_COMMAND_ID.to_string(),
		bill_ref_number:       String::new(),
		upstream_timeout_secs: None,
	})
}

#[actix_web::test]
async fn test_run_bind_error() {
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();

	assert!(
		run(config_with(port, DEFAULT_C2B_URL, "test-token"))
			.await
			.is_err()
	);
	drop(listener);
}

#[actix_web::test]
async fn test_run_rejects_malformed_upstream_url() {
	let result = run(config_with(0, "not a url", "test-token")).await;

	assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidInput);
}

#[actix_web::test]
async fn test_run_rejects_token_unusable_as_header() {
	let result = run(config_with(0, DEFAULT_C2B_URL, "line\nbreak")).await;

	assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidInput);
}
