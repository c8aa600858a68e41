//! Successful token endpoint response.

// self
use crate::{_prelude::*, error::ParseError, token::TokenSecret};

/// Parsed body of a `200 OK` token endpoint response.
///
/// `expires_in` stays relative to the moment the response was received; no absolute expiry is
/// derived here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
	/// Opaque bearer token.
	pub access_token: TokenSecret,
	/// Token type reported by the provider, usually `Bearer`.
	#[serde(default)]
	pub token_type: Option<String>,
	/// Seconds until the token expires, passed through verbatim (negative values included).
	#[serde(default)]
	pub expires_in: Option<i64>,
}
impl TokenResponse {
	/// Decodes a response body, reporting the JSON path of any failure.
	pub fn from_slice(body: &[u8]) -> Result<Self, ParseError> {
		let mut de = serde_json::Deserializer::from_slice(body);
		let response = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ParseError::TokenResponse { source })?;

		de.end().map_err(|source| ParseError::TrailingData { source })?;

		Ok(response)
	}

	/// Returns `expires_in` as a [`Duration`], if the provider sent one.
	pub fn lifetime(&self) -> Option<Duration> {
		self.expires_in.map(Duration::seconds)
	}
}
