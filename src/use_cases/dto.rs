use serde::{Deserialize, Serialize};

/// A push request whose phone number has already been normalized.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SimulateC2BCommand {
	pub msisdn: String,
	pub amount: String,
}
