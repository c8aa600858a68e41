//! Outgoing client-credentials form request.

// crates.io
use oauth2::{
	HttpRequest,
	http::{
		Method,
		header::{ACCEPT, CONTENT_TYPE, HeaderValue},
	},
};
use url::form_urlencoded;
// self
use crate::{_prelude::*, config::Credentials, error::ConfigError};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Form parameters sent to the token endpoint; built per call and dropped after encoding.
#[derive(Clone, Copy, Debug)]
pub struct TokenRequest<'a> {
	credentials: &'a Credentials,
}
impl<'a> TokenRequest<'a> {
	/// RFC 6749 identifier of the only grant this crate performs.
	pub const GRANT_TYPE: &'static str = "client_credentials";

	/// Creates a request for the provided credentials.
	pub fn new(credentials: &'a Credentials) -> Self {
		Self { credentials }
	}

	/// Encodes `grant_type`, `client_id`, and `client_secret` as an
	/// `application/x-www-form-urlencoded` body.
	pub fn encode(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.append_pair("grant_type", Self::GRANT_TYPE)
			.append_pair("client_id", self.credentials.client_id().as_str())
			.append_pair("client_secret", self.credentials.client_secret().secret())
			.finish()
	}

	/// Builds the POST request addressed to `endpoint`.
	pub fn into_http_request(self, endpoint: &Url) -> Result<HttpRequest> {
		let request = oauth2::http::Request::builder()
			.method(Method::POST)
			.uri(endpoint.as_str())
			.header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
			.header(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE))
			.body(self.encode().into_bytes())
			.map_err(ConfigError::from)?;

		Ok(request)
	}
}
