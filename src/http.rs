//! Transport primitives for token requests.
//!
//! [`TokenHttpClient`] is the fetcher's only dependency on an HTTP stack: one call that sends a
//! request and yields the status, headers, and fully drained body. Tests swap in a fake
//! implementation; production code uses [`ReqwestHttpClient`].

pub use oauth2::{HttpRequest, HttpResponse};

// crates.io
#[cfg(feature = "reqwest")] use reqwest::redirect::Policy;
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Boxed future returned by [`TokenHttpClient::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing a token request.
///
/// Implementations must be `Send + Sync + 'static` so a fetcher can be shared behind an
/// [`Arc`], and the returned future must be `Send` so callers can spawn it on any executor.
/// The response body must be read to completion before the future resolves; the connection is
/// then free to be released regardless of what the caller does with the result.
pub trait TokenHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and returns the complete response.
	///
	/// Any HTTP status counts as a response; only failures to obtain one (DNS, TCP, TLS,
	/// timeout, truncated body) are errors.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token endpoints answer directly, so the clients built here never follow redirects. Apply
/// the same policy to any client passed through [`ReqwestHttpClient::with_client`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client without a request timeout.
	pub fn new() -> Result<Self> {
		Self::build(None)
	}

	/// Builds a client that aborts any request running longer than `timeout`.
	pub fn with_timeout(timeout: Duration) -> Result<Self> {
		Self::build(Some(timeout))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	fn build(timeout: Option<Duration>) -> Result<Self> {
		let mut builder = ReqwestClient::builder().redirect(Policy::none());

		if let Some(timeout) = timeout {
			let timeout = std::time::Duration::try_from(timeout)
				.map_err(ConfigError::http_client_build)?;

			builder = builder.timeout(timeout);
		}

		Ok(Self(builder.build().map_err(ConfigError::from)?))
	}
}
#[cfg(feature = "reqwest")]
impl TokenHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(request.try_into()?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	#[test]
	fn builds_clients_with_and_without_timeout() {
		assert!(ReqwestHttpClient::new().is_ok());
		assert!(ReqwestHttpClient::with_timeout(Duration::seconds(5)).is_ok());
	}

	#[test]
	fn negative_timeout_is_a_config_error() {
		let err = ReqwestHttpClient::with_timeout(Duration::seconds(-1))
			.expect_err("Negative timeouts cannot be represented.");

		assert!(matches!(err, Error::Config(ConfigError::HttpClientBuild { .. })));
	}
}
