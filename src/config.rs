//! Boundary-step configuration: credentials and fetcher settings read once from the
//! environment (optionally seeded by a `.env` file) and handed to the fetcher as plain values.

// std
use std::{env, path::Path, sync::LazyLock};
// crates.io
use oauth2::{ClientId, ClientSecret};
// self
use crate::{_prelude::*, error::ConfigError};

/// Token endpoint of Spotify's accounts service.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

static DEFAULT_ENDPOINT: LazyLock<Url> = LazyLock::new(|| {
	Url::parse(SPOTIFY_TOKEN_URL).expect("SPOTIFY_TOKEN_URL is a valid URL literal.")
});

/// Environment variable holding the OAuth client identifier.
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
/// Environment variable holding the OAuth client secret.
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";
/// Optional override for the token endpoint URL.
pub const TOKEN_ENDPOINT_VAR: &str = "TOKEN_ENDPOINT";
/// Optional request timeout in whole seconds.
pub const TOKEN_TIMEOUT_VAR: &str = "TOKEN_TIMEOUT_SECS";

/// Client credentials supplied by the caller; never persisted.
#[derive(Clone, Debug)]
pub struct Credentials {
	client_id: ClientId,
	client_secret: ClientSecret,
}
impl Credentials {
	/// Creates credentials from raw identifier and secret strings.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: ClientId::new(client_id.into()),
			client_secret: ClientSecret::new(client_secret.into()),
		}
	}

	/// OAuth client identifier.
	pub fn client_id(&self) -> &ClientId {
		&self.client_id
	}

	/// OAuth client secret; its `Debug` output is redacted.
	pub fn client_secret(&self) -> &ClientSecret {
		&self.client_secret
	}
}

/// Everything the binary needs to build a fetcher.
#[derive(Clone, Debug)]
pub struct FetcherConfig {
	/// Client credentials presented to the token endpoint.
	pub credentials: Credentials,
	/// Token endpoint URL.
	pub endpoint: Url,
	/// Upper bound for the whole request; `None` waits indefinitely.
	pub timeout: Option<Duration>,
}
impl FetcherConfig {
	/// Applies the nearest `.env` file, then reads the process environment.
	///
	/// A missing `.env` file is fine; one that exists but cannot be parsed is an error.
	pub fn load() -> Result<Self> {
		apply_env_file(dotenvy::dotenv())?;

		Self::from_env()
	}

	/// Applies the `.env` file at `path`, then reads the process environment.
	///
	/// Same rules as [`FetcherConfig::load`], without searching parent directories.
	pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
		apply_env_file(dotenvy::from_path(path.as_ref()))?;

		Self::from_env()
	}

	/// Reads configuration from the process environment.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	/// Reads configuration through `lookup`, which maps a variable name to its value.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let client_id = required(&lookup, CLIENT_ID_VAR)?;
		let client_secret = required(&lookup, CLIENT_SECRET_VAR)?;
		let endpoint = match optional(&lookup, TOKEN_ENDPOINT_VAR) {
			Some(value) => Url::parse(&value)
				.map_err(|source| ConfigError::InvalidEndpoint { value, source })?,
			None => default_endpoint(),
		};
		let timeout = optional(&lookup, TOKEN_TIMEOUT_VAR).map(parse_timeout).transpose()?;

		Ok(Self { credentials: Credentials::new(client_id, client_secret), endpoint, timeout })
	}
}

/// Parsed [`SPOTIFY_TOKEN_URL`].
pub fn default_endpoint() -> Url {
	DEFAULT_ENDPOINT.clone()
}

fn apply_env_file<T>(outcome: Result<T, dotenvy::Error>) -> Result<()> {
	match outcome {
		Ok(_) => Ok(()),
		Err(e) if e.not_found() => Ok(()),
		Err(source) => Err(ConfigError::EnvFile { source }.into()),
	}
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String>
where
	F: Fn(&str) -> Option<String>,
{
	optional(lookup, name).ok_or_else(|| ConfigError::MissingVar { name }.into())
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
	F: Fn(&str) -> Option<String>,
{
	lookup(name).filter(|value| !value.trim().is_empty())
}

fn parse_timeout(value: String) -> Result<Duration> {
	match value.trim().parse::<i64>() {
		Ok(secs) if secs > 0 => Ok(Duration::seconds(secs)),
		_ => Err(ConfigError::InvalidTimeout { name: TOKEN_TIMEOUT_VAR, value }.into()),
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::{collections::HashMap, fs, process};
	// self
	use super::*;

	fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl 'a + Fn(&str) -> Option<String> {
		let map = vars.iter().copied().collect::<HashMap<_, _>>();

		move |name: &str| map.get(name).map(|value| (*value).to_owned())
	}

	#[test]
	fn reads_credentials_with_defaults() {
		let config =
			FetcherConfig::from_lookup(lookup(&[("CLIENT_ID", "id"), ("CLIENT_SECRET", "secret")]))
				.expect("Complete credentials should load.");

		assert_eq!(config.credentials.client_id().as_str(), "id");
		assert_eq!(config.credentials.client_secret().secret(), "secret");
		assert_eq!(config.endpoint.as_str(), SPOTIFY_TOKEN_URL);
		assert_eq!(config.timeout, None);
	}

	#[test]
	fn honors_endpoint_and_timeout_overrides() {
		let config = FetcherConfig::from_lookup(lookup(&[
			("CLIENT_ID", "id"),
			("CLIENT_SECRET", "secret"),
			("TOKEN_ENDPOINT", "http://127.0.0.1:8080/api/token"),
			("TOKEN_TIMEOUT_SECS", " 15 "),
		]))
		.expect("Overrides should load.");

		assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:8080/api/token");
		assert_eq!(config.timeout, Some(Duration::seconds(15)));
	}

	#[test]
	fn rejects_missing_or_empty_credentials() {
		let err = FetcherConfig::from_lookup(lookup(&[("CLIENT_SECRET", "secret")]))
			.expect_err("Missing CLIENT_ID must fail.");

		assert!(matches!(err, Error::Config(ConfigError::MissingVar { name: "CLIENT_ID" })));

		let err = FetcherConfig::from_lookup(lookup(&[("CLIENT_ID", "id"), ("CLIENT_SECRET", "")]))
			.expect_err("Empty CLIENT_SECRET must fail.");

		assert!(matches!(err, Error::Config(ConfigError::MissingVar { name: "CLIENT_SECRET" })));
	}

	#[test]
	fn rejects_invalid_endpoint_and_timeout() {
		let err = FetcherConfig::from_lookup(lookup(&[
			("CLIENT_ID", "id"),
			("CLIENT_SECRET", "secret"),
			("TOKEN_ENDPOINT", "not a url"),
		]))
		.expect_err("Unparseable endpoint must fail.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidEndpoint { .. })));

		for value in ["0", "-3", "soon"] {
			let err = FetcherConfig::from_lookup(lookup(&[
				("CLIENT_ID", "id"),
				("CLIENT_SECRET", "secret"),
				("TOKEN_TIMEOUT_SECS", value),
			]))
			.expect_err("Non-positive or non-numeric timeout must fail.");

			assert!(matches!(err, Error::Config(ConfigError::InvalidTimeout { .. })));
		}
	}

	fn scratch_env_file(name: &str, contents: &str) -> std::path::PathBuf {
		let path = env::temp_dir().join(format!("spotify-token-{}-{name}.env", process::id()));

		fs::write(&path, contents).expect("Scratch .env file should be writable.");

		path
	}

	#[test]
	fn missing_env_file_is_not_an_error() {
		let path = env::temp_dir().join(format!("spotify-token-{}-absent.env", process::id()));

		apply_env_file(dotenvy::from_path(&path)).expect("A missing .env file should be skipped.");

		match FetcherConfig::load_from(&path) {
			Ok(_) | Err(Error::Config(ConfigError::MissingVar { .. })) => {},
			Err(other) => panic!("Missing .env file must not surface as {other:?}."),
		}
	}

	#[test]
	fn malformed_env_file_is_a_config_error() {
		let path = scratch_env_file("malformed", "CLIENT_ID='unterminated\n");
		let outcome = FetcherConfig::load_from(&path);

		fs::remove_file(&path).expect("Scratch .env file should be removable.");

		let err = outcome.expect_err("Unterminated quote must fail.");

		assert!(matches!(err, Error::Config(ConfigError::EnvFile { .. })));
	}

	#[test]
	fn default_endpoint_matches_spotify_literal() {
		assert_eq!(default_endpoint().as_str(), SPOTIFY_TOKEN_URL);
	}

	#[test]
	fn credentials_debug_hides_secret() {
		let credentials = Credentials::new("visible-id", "hidden-secret");
		let rendered = format!("{credentials:?}");

		assert!(rendered.contains("visible-id"));
		assert!(!rendered.contains("hidden-secret"));
	}
}
