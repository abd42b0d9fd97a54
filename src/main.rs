use std::sync::Arc;

use mpesa_c2b_relay::infrastructure::config::settings::Config;
use mpesa_c2b_relay::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config =
		Arc::new(Config::load().expect("Failed to load configuration"));
	run(config).await
}
