//! Identity records handed back to the broker after a successful callback.

// self
use crate::_prelude::*;

/// Identity resolved from a proxied request.
///
/// Produced fresh for every callback and owned by the caller. Optional attributes stay `None`
/// (or empty for `groups`) when the proxy did not forward them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
	/// Opaque subject identifier taken verbatim from the user header.
	pub user_id: String,
	/// Human-readable name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
	/// Stable machine-usable username, distinct from `user_id`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub preferred_username: Option<String>,
	/// Email address.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// Whether `email` was asserted by the proxy's trusted mail attribute.
	#[serde(default)]
	pub email_verified: bool,
	/// Group or affiliation memberships in the order the proxy sent them.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub groups: Vec<String>,
}
impl Identity {
	/// Creates an identity carrying only the subject identifier.
	pub fn new(user_id: impl Into<String>) -> Self {
		Self { user_id: user_id.into(), ..Default::default() }
	}

	/// Records an email asserted by a trusted attribute, marking it verified.
	///
	/// Empty addresses are ignored so the verified flag never stands alone.
	pub fn with_verified_email(mut self, email: impl Into<String>) -> Self {
		let email = email.into();

		if !email.is_empty() {
			self.email = Some(email);
			self.email_verified = true;
		}

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn verified_email_requires_value() {
		let identity = Identity::new("alice").with_verified_email("");

		assert_eq!(identity.email, None);
		assert!(!identity.email_verified);

		let identity = Identity::new("alice").with_verified_email("alice@example.com");

		assert_eq!(identity.email.as_deref(), Some("alice@example.com"));
		assert!(identity.email_verified);
	}

	#[test]
	fn serializes_camel_case() {
		let mut identity = Identity::new("alice").with_verified_email("alice@example.com");

		identity.groups = vec!["staff".into(), String::new()];

		let value = serde_json::to_value(&identity).expect("Identity should serialize.");

		assert_eq!(value["userId"], "alice");
		assert_eq!(value["emailVerified"], true);
		assert_eq!(value["groups"], serde_json::json!(["staff", ""]));
		assert!(value.get("displayName").is_none());
	}
}
