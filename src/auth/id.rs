//! Strongly typed connector identifier assigned by the broker.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("Connector identifier cannot be empty.")]
	Empty,
	/// The identifier contains whitespace characters.
	#[error("Connector identifier contains whitespace.")]
	ContainsWhitespace,
	/// The identifier would span more than one path segment.
	#[error("Connector identifier contains a path separator.")]
	ContainsSlash,
	/// The identifier exceeded the allowed character count.
	#[error("Connector identifier exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Identifier the broker assigns to a connector instance at registration time.
///
/// The value becomes the last segment of the connector's callback path, so it must be a single
/// non-empty path segment.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConnectorId(String);
impl ConnectorId {
	/// Creates a new identifier after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}

	/// Callback path suffix (`/` + identifier) routed through the proxy.
	pub fn path_suffix(&self) -> String {
		format!("/{}", self.0)
	}
}
impl Deref for ConnectorId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ConnectorId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for ConnectorId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<ConnectorId> for String {
	fn from(value: ConnectorId) -> Self {
		value.0
	}
}
impl TryFrom<String> for ConnectorId {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Debug for ConnectorId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Connector({})", self.0)
	}
}
impl Display for ConnectorId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for ConnectorId {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace);
	}
	if view.contains('/') {
		return Err(IdentifierError::ContainsSlash);
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}
