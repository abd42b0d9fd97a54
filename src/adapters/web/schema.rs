use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Binds only from a JSON object; arrays and scalars are rejected.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(try_from = "Map<String, Value>")]
pub struct PushRequest {
	pub phone:  String,
	pub amount: String,
}

#[derive(Deserialize)]
struct PushFields {
	#[serde(default)]
	phone:  String,
	#[serde(default)]
	amount: String,
}

impl TryFrom<Map<String, Value>> for PushRequest {
	type Error = serde_json::Error;

	fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
		let PushFields { phone, amount } =
			serde_json::from_value(Value::Object(fields))?;

		Ok(Self { phone, amount })
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MessageResponse {
	pub message: String,
}
