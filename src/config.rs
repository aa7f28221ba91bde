//! Connector configuration as supplied by the broker's configuration layer.

// self
use crate::{
	_prelude::*,
	auth::ConnectorId,
	connector::{AuthProxyConnector, Connector, ConnectorConfig, headers::DEFAULT_USER_HEADER},
};

/// Configuration for an [`AuthProxyConnector`].
///
/// ```json
/// { "userHeader": "X-Forwarded-User" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
	/// Header carrying the authenticated subject; `X-Remote-User` when unset or empty.
	#[serde(default)]
	pub user_header: Option<String>,
}
impl Config {
	/// Parses a JSON configuration document, reporting the path of the first bad field.
	pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(raw);
		let config = serde_path_to_error::deserialize(&mut de)?;

		de.end().map_err(|source| ConfigError::Parse { path: ".".into(), source })?;

		Ok(config)
	}

	/// Sets the user header.
	pub fn with_user_header(mut self, header: impl Into<String>) -> Self {
		self.user_header = Some(header.into());

		self
	}

	/// Header name the connector will read, after applying the default.
	pub fn effective_user_header(&self) -> &str {
		match self.user_header.as_deref() {
			Some(header) if !header.is_empty() => header,
			_ => DEFAULT_USER_HEADER,
		}
	}

	/// Opens a connector under the broker-assigned identifier.
	pub fn open(&self, id: ConnectorId) -> Result<AuthProxyConnector, ConfigError> {
		let header = self.effective_user_header();
		let user_header = HeaderName::from_bytes(header.as_bytes())
			.map_err(|source| ConfigError::InvalidUserHeader { header: header.to_owned(), source })?;

		Ok(AuthProxyConnector::new(id, user_header))
	}
}
impl ConnectorConfig for Config {
	fn open(&self, id: ConnectorId) -> Result<Arc<dyn Connector>, ConfigError> {
		Ok(Arc::new(Config::open(self, id)?))
	}
}
