//! Optional observability hooks for token fetches.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap every fetch in a span named `spotify_token.fetch` with a `stage`
//!   field, and to emit a debug event carrying the response status.
//! - Enable `metrics` to increment the `spotify_token_fetch_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchOutcome {
	/// Entry to the fetcher.
	Attempt,
	/// Token returned to the caller.
	Success,
	/// Error propagated back to the caller.
	Failure,
}
impl FetchOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FetchOutcome::Attempt => "attempt",
			FetchOutcome::Success => "success",
			FetchOutcome::Failure => "failure",
		}
	}
}
impl Display for FetchOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
