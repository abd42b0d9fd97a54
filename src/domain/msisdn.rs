use derive_more::derive::{Display, Error};

const LOCAL_PREFIX: &str = "0";
const INTERNATIONAL_PREFIX: &str = "+";
const COUNTRY_CODE: &str = "254";

const MIN_LENGTH: usize = 10;
const LOCAL_LENGTH: usize = 10;
const INTERNATIONAL_LENGTH: usize = 13;

const MASK_KEEP_HEAD: usize = 4;
const MASK_KEEP_TAIL: usize = 3;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("The phonenumber provided is invalid. {detail}")]
pub struct InvalidPhoneNumber {
	detail: String,
}

impl InvalidPhoneNumber {
	fn too_short(phone: &str) -> Self {
		Self {
			detail: format!("{phone} is less than 10 digits or is empty"),
		}
	}

	pub fn detail(&self) -> &str {
		&self.detail
	}
}

/// Rewrites a phone number into the MSISDN form expected by M-Pesa.
///
/// `0712345678` becomes `254712345678` and `+254712345678` loses its plus
/// sign. Anything else of at least ten characters is returned untouched,
/// so malformed numbers of other lengths are not rejected here.
pub fn normalize(phone: &str) -> Result<String, InvalidPhoneNumber> {
	let length = phone.len();

	if phone.is_empty() || length < MIN_LENGTH {
		return Err(InvalidPhoneNumber::too_short(phone));
	}

	if length == LOCAL_LENGTH && phone.starts_with(LOCAL_PREFIX) {
		return Ok(format!("{COUNTRY_CODE}{}", &phone[LOCAL_PREFIX.len()..]));
	}

	if length == INTERNATIONAL_LENGTH && phone.starts_with(INTERNATIONAL_PREFIX)
	{
		return Ok(phone[INTERNATIONAL_PREFIX.len()..].to_string());
	}

	Ok(phone.to_string())
}

/// Hides the subscriber digits of a number for logging, keeping the first
/// four and last three characters.
pub fn masked(msisdn: &str) -> String {
	let chars: Vec<char> = msisdn.chars().collect();
	if chars.len() <= MASK_KEEP_HEAD + MASK_KEEP_TAIL {
		return "*".repeat(chars.len());
	}

	let tail_start = chars.len() - MASK_KEEP_TAIL;
	chars
		.iter()
		.enumerate()
		.map(|(i, c)| {
			if i < MASK_KEEP_HEAD || i >= tail_start {
				*c
			} else {
				'*'
			}
		})
		.collect()
}
