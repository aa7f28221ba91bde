//! Connector-level error types shared by configuration and both connector operations.

// self
use crate::_prelude::*;

/// Connector-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical connector error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// The broker handed over a callback URL that cannot be parsed.
	///
	/// This is a broker configuration or programming error, not an authentication failure.
	#[error("Callback URL `{url}` is invalid: {source}.")]
	InvalidCallbackUrl {
		/// The offending URL string, verbatim.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The request has not passed through the authenticating proxy yet.
	///
	/// Brokers recover by re-issuing the login redirect.
	#[error("Header `{header}` is missing or empty; re-run the login redirect.")]
	NotAuthenticated {
		/// Name of the user header that was expected.
		header: String,
	},
}

/// Configuration and validation failures raised while opening a connector.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration document is malformed.
	#[error("Connector configuration is malformed at `{path}`.")]
	Parse {
		/// JSON path of the failing field (`.` for the document root).
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
	/// Configured user header is not a valid HTTP header name.
	#[error("User header `{header}` is not a valid HTTP header name.")]
	InvalidUserHeader {
		/// Header name as configured.
		header: String,
		/// Underlying validation failure.
		#[source]
		source: http::header::InvalidHeaderName,
	},
	/// Connector identifier failed validation.
	#[error("Connector identifier is invalid.")]
	InvalidConnectorId(#[from] crate::auth::IdentifierError),
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Parse { path, source: e.into_inner() }
	}
}
