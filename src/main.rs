//! Prints a Spotify client-credentials access token.
//!
//! Reads `CLIENT_ID` and `CLIENT_SECRET` (plus optional `TOKEN_ENDPOINT` and
//! `TOKEN_TIMEOUT_SECS`) from the environment or a `.env` file, requests one token, and writes it
//! to stdout. Logs go to stderr and follow `RUST_LOG`.

// crates.io
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use spotify_token::{config::FetcherConfig, fetcher::ReqwestTokenFetcher};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let config = FetcherConfig::load()?;
	let fetcher = ReqwestTokenFetcher::from_config(&config)?;
	let response = fetcher.request_token(&config.credentials).await?;

	tracing::info!(
		token_type = response.token_type.as_deref().unwrap_or("unknown"),
		expires_in = response.expires_in,
		"access token issued"
	);

	println!("Access Token: {}", response.access_token.expose());

	Ok(())
}
