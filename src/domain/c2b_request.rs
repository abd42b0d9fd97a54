use serde::{Deserialize, Serialize};

/// Merchant-side values that are identical for every C2B simulation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MerchantProfile {
	pub short_code:      u32,
	pub command_id:      String,
	pub bill_ref_number: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct C2BRequest {
	#[serde(rename = "ShortCode")]
	pub short_code:      u32,
	#[serde(rename = "CommandID")]
	pub command_id:      String,
	#[serde(rename = "Amount")]
	pub amount:          String,
	#[serde(rename = "Msisdn")]
	pub msisdn:          String,
	// Only meaningful for paybill short codes.
	#[serde(rename = "BillRefNumber")]
	pub bill_ref_number: String,
}

impl C2BRequest {
	pub fn for_merchant(
		merchant: &MerchantProfile,
		msisdn: String,
		amount: String,
	) -> Self {
		Self {
			short_code: merchant.short_code,
			command_id: merchant.command_id.clone(),
			amount,
			msisdn,
			bill_ref_number: merchant.bill_ref_number.clone(),
		}
	}
}
