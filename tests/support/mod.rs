#![allow(dead_code)]

use mpesa_c2b_relay::domain::c2b_request::MerchantProfile;
use mpesa_c2b_relay::infrastructure::gateway::mpesa_c2b_gateway::MpesaC2BGateway;
use mpesa_c2b_relay::infrastructure::http::authenticated_client::AuthenticatedClient;
use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const SIMULATE_PATH: &str = "/mpesa/c2b/v1/simulate";
pub const TEST_TOKEN: &str = "test-token";
pub const BEARER_HEADER: &str = "Bearer test-token";

pub fn merchant() -> MerchantProfile {
	MerchantProfile {
		short_code:      600982,
		command_id:      "CustomerBuyGoodsOnline".to_string(),
		bill_ref_number: String::new(),
	}
}

pub fn authenticated_client() -> AuthenticatedClient {
	AuthenticatedClient::new(Client::new(), TEST_TOKEN).unwrap()
}

pub fn gateway_for(url: &str) -> MpesaC2BGateway {
	MpesaC2BGateway::new(authenticated_client(), url).unwrap()
}

/// A URL on a local port that nothing listens on.
pub fn unreachable_url() -> String {
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();
	drop(listener);
	format!("http://127.0.0.1:{port}{SIMULATE_PATH}")
}

/// Starts an upstream that answers one request with a 200 whose
/// `Content-Length` promises more bytes than it sends, then hangs up.
pub async fn truncated_body_url() -> String {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let port = listener.local_addr().unwrap().port();

	tokio::spawn(async move {
		let (mut socket, _) = listener.accept().await.unwrap();
		read_request(&mut socket).await;
		socket
			.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
			.await
			.unwrap();
		socket.flush().await.unwrap();
		socket.shutdown().await.unwrap();
	});

	format!("http://127.0.0.1:{port}{SIMULATE_PATH}")
}

// Consumes headers and the declared body so closing does not reset the
// connection before the response is read.
async fn read_request(socket: &mut tokio::net::TcpStream) {
	let mut request = Vec::new();
	let mut chunk = [0u8; 1024];

	loop {
		let read = socket.read(&mut chunk).await.unwrap();
		if read == 0 {
			return;
		}
		request.extend_from_slice(&chunk[..read]);

		let Some(header_end) =
			request.windows(4).position(|window| window == b"\r\n\r\n")
		else {
			continue;
		};

		let headers = String::from_utf8_lossy(&request[..header_end]);
		let content_length = headers
			.lines()
			.filter_map(|line| line.split_once(':'))
			.find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
			.and_then(|(_, value)| value.trim().parse::<usize>().ok())
			.unwrap_or(0);

		if request.len() >= header_end + 4 + content_length {
			return;
		}
	}
}
