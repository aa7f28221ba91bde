//! Header names forwarded by the authenticating proxy.
//!
//! The attribute headers follow the Shibboleth SP convention of prefixing released attributes
//! with `X-Shib-`. Lookups are case-insensitive.

// crates.io
use http::header::AsHeaderName;
// self
use crate::_prelude::*;

/// User header consulted when the configuration does not name one.
pub const DEFAULT_USER_HEADER: &str = "X-Remote-User";

/// Human-readable display name.
pub const DISPLAY_NAME: &str = "X-Shib-displayName";
/// `eduPersonPrincipalName`, used as the preferred username.
pub const PRINCIPAL_NAME: &str = "X-Shib-eduPersonPrincipalName";
/// Mail attribute released by the identity provider; treated as verified.
pub const VERIFIED_MAIL: &str = "X-Shib-mail";
/// `eduPersonScopedAffiliation`, a `;`-delimited list of affiliations.
pub const SCOPED_AFFILIATION: &str = "X-Shib-eduPersonScopedAffiliation";

/// Delimiter separating entries in [`SCOPED_AFFILIATION`].
pub const AFFILIATION_DELIMITER: char = ';';

/// Reads the first value of `name`, treating an empty value as absent.
///
/// Values are decoded as UTF-8 lossily so opaque bytes never cause a rejection.
pub fn non_empty<K>(headers: &HeaderMap, name: K) -> Option<String>
where
	K: AsHeaderName,
{
	let value = headers.get(name)?;

	if value.is_empty() {
		return None;
	}

	Some(String::from_utf8_lossy(value.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
	// crates.io
	use http::HeaderValue;
	// self
	use super::*;

	#[test]
	fn non_empty_ignores_blank_and_takes_first() {
		let mut headers = HeaderMap::new();

		headers.insert(DISPLAY_NAME, HeaderValue::from_static(""));
		headers.append(VERIFIED_MAIL, HeaderValue::from_static("first@example.com"));
		headers.append(VERIFIED_MAIL, HeaderValue::from_static("second@example.com"));

		assert_eq!(non_empty(&headers, DISPLAY_NAME), None);
		assert_eq!(non_empty(&headers, PRINCIPAL_NAME), None);
		assert_eq!(non_empty(&headers, "x-shib-mail").as_deref(), Some("first@example.com"));
	}

	#[test]
	fn non_empty_keeps_opaque_bytes() {
		let mut headers = HeaderMap::new();
		let value = HeaderValue::from_bytes("Zoë Ünal".as_bytes())
			.expect("UTF-8 bytes should form a header value.");

		headers.insert(DISPLAY_NAME, value);

		assert_eq!(non_empty(&headers, DISPLAY_NAME).as_deref(), Some("Zoë Ünal"));
	}
}
