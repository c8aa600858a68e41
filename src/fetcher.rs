//! Client-credentials token fetcher.
//!
//! [`TokenFetcher`] turns a client identifier and secret into a bearer token with exactly one
//! POST to the token endpoint. Nothing is cached and nothing is retried: two calls mean two
//! requests, and every failure reaches the caller as soon as it happens.

// crates.io
use oauth2::http::StatusCode;
// self
use crate::{
	_prelude::*,
	config::Credentials,
	error::TransportError,
	http::TokenHttpClient,
	obs::{self, FetchOutcome, FetchSpan},
	token::{TokenRequest, TokenResponse},
};
#[cfg(feature = "reqwest")]
use crate::{
	config::{self, FetcherConfig},
	http::ReqwestHttpClient,
};

#[cfg(feature = "reqwest")]
/// Fetcher specialized for the crate's default reqwest transport.
pub type ReqwestTokenFetcher = TokenFetcher<ReqwestHttpClient>;

/// Fetches client-credentials access tokens from a single token endpoint.
#[derive(Clone)]
pub struct TokenFetcher<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// HTTP client used for every outbound token request.
	pub http_client: Arc<C>,
	endpoint: Url,
}
impl<C> TokenFetcher<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a fetcher that posts to `endpoint` through the caller-provided transport.
	pub fn with_http_client(endpoint: Url, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), endpoint }
	}

	/// Replaces the token endpoint.
	pub fn with_endpoint(mut self, endpoint: Url) -> Self {
		self.endpoint = endpoint;

		self
	}

	/// Token endpoint this fetcher posts to.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Performs the client-credentials grant and returns only the access token.
	pub async fn fetch_token(&self, client_id: &str, client_secret: &str) -> Result<String> {
		let credentials = Credentials::new(client_id, client_secret);
		let response = self.request_token(&credentials).await?;

		Ok(response.access_token.into_inner())
	}

	/// Performs the client-credentials grant and returns the full parsed response.
	pub async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse> {
		let span = FetchSpan::new("request_token", &self.endpoint);

		obs::record_fetch_outcome(FetchOutcome::Attempt);

		let result = span
			.instrument(async {
				let request = TokenRequest::new(credentials).into_http_request(&self.endpoint)?;
				let response =
					self.http_client.execute(request).await.map_err(TransportError::network)?;
				let status = response.status();

				span.record_status(status.as_u16());

				if status != StatusCode::OK {
					return Err(Error::Authorization {
						status: status.as_u16(),
						body: String::from_utf8_lossy(response.body()).into_owned(),
					});
				}

				Ok(TokenResponse::from_slice(response.body())?)
			})
			.await;

		match &result {
			Ok(_) => obs::record_fetch_outcome(FetchOutcome::Success),
			Err(_) => obs::record_fetch_outcome(FetchOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl TokenFetcher<ReqwestHttpClient> {
	/// Creates a fetcher for Spotify's token endpoint with a default reqwest transport.
	pub fn new() -> Result<Self> {
		Ok(Self::with_http_client(config::default_endpoint(), ReqwestHttpClient::new()?))
	}

	/// Creates a fetcher from loaded configuration, applying its endpoint and timeout.
	pub fn from_config(config: &FetcherConfig) -> Result<Self> {
		let http_client = match config.timeout {
			Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
			None => ReqwestHttpClient::new()?,
		};

		Ok(Self::with_http_client(config.endpoint.clone(), http_client))
	}
}
impl<C> Debug for TokenFetcher<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenFetcher").field("endpoint", &self.endpoint.as_str()).finish()
	}
}
