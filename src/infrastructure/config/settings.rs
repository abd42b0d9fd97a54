use serde::Deserialize;

use crate::domain::c2b_request::MerchantProfile;

pub const DEFAULT_C2B_URL: &str =
	"https://sandbox.safaricom.co.ke/mpesa/c2b/v1/simulate";
pub const DEFAULT_SHORT_CODE: i64 = 600982;
pub const DEFAULT_COMMAND_ID: &str = "CustomerBuyGoodsOnline";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub server_host:           String,
	pub server_port:           u16,
	pub server_keepalive:      u64,
	pub c2b_url:               String,
	pub bearer_token:          String,
	pub short_code:            u32,
	pub command_id:            String,
	pub bill_ref_number:       String,
	pub upstream_timeout_secs: Option<u64>,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_host", "127.0.0.1")?
			.set_default("server_port", 8000_i64)?
			.set_default("server_keepalive", 5_i64)?
			.set_default("c2b_url", DEFAULT_C2B_URL)?
			.set_default("short_code", DEFAULT_SHORT_CODE)?
			.set_default("command_id", DEFAULT_COMMAND_ID)?
			.set_default("bill_ref_number", "")?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn merchant(&self) -> MerchantProfile {
		MerchantProfile {
			short_code:      self.short_code,
			command_id:      self.command_id.clone(),
			bill_ref_number: self.bill_ref_number.clone(),
		}
	}
}
