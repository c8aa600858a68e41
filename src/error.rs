//! Crate-level error types shared by configuration, transport, and token parsing.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Token endpoint answered with a status other than `200 OK`.
	#[error("Token endpoint rejected the request with HTTP {status}: {body}")]
	Authorization {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Raw response body, decoded lossily as UTF-8.
		body: String,
	},
	/// Token endpoint answered `200 OK` with a body that is not a token response.
	#[error(transparent)]
	Parse(#[from] ParseError),
}
impl Error {
	/// Returns the HTTP status attached to an [`Error::Authorization`].
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Authorization { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Required environment variable is unset or empty.
	#[error("Environment variable `{name}` is missing or empty.")]
	MissingVar {
		/// Variable name.
		name: &'static str,
	},
	/// The `.env` file exists but could not be read or parsed.
	#[error("Failed to load the .env file.")]
	EnvFile {
		/// Underlying loader failure.
		#[source]
		source: dotenvy::Error,
	},
	/// Token endpoint URL cannot be parsed.
	#[error("Token endpoint `{value}` is not a valid URL.")]
	InvalidEndpoint {
		/// Raw configured value.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Timeout value is not a positive number of seconds.
	#[error("Environment variable `{name}` must be a positive number of seconds, got `{value}`.")]
	InvalidTimeout {
		/// Variable name.
		name: &'static str,
		/// Raw configured value.
		value: String,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint: {source}")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures decoding a successful token endpoint response.
#[derive(Debug, ThisError)]
pub enum ParseError {
	/// Body is not JSON or does not match the token response shape.
	#[error(
		"Token endpoint returned a malformed token response at `{}`: {}.",
		.source.path(),
		.source.inner()
	)]
	TokenResponse {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// A complete JSON document was followed by extra non-whitespace bytes.
	#[error("Token endpoint response has trailing data after the JSON document: {source}.")]
	TrailingData {
		/// Underlying JSON failure.
		#[source]
		source: serde_json::Error,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn authorization_display_carries_status_and_body() {
		let err =
			Error::Authorization { status: 401, body: "{\"error\":\"invalid_client\"}".into() };

		assert_eq!(err.status(), Some(401));
		assert_eq!(
			err.to_string(),
			"Token endpoint rejected the request with HTTP 401: {\"error\":\"invalid_client\"}"
		);
	}

	#[test]
	fn transport_display_includes_cause() {
		let err = Error::from(TransportError::network(std::io::Error::new(
			std::io::ErrorKind::ConnectionRefused,
			"connection refused",
		)));

		assert_eq!(err.status(), None);
		assert!(err.to_string().contains("connection refused"));
	}
}
