//! Connector that trusts identity headers injected by an authenticating reverse proxy.
//!
//! The broker must only be reachable through the proxy; headers are taken at face value and
//! nothing here verifies where they came from.

// self
use crate::{
	_prelude::*,
	auth::{ConnectorId, Identity, Scopes},
	connector::{Connector, headers},
	obs::{self, ConnectorOp, OpOutcome, OpSpan},
};

const STATE_PARAM: &str = "state";

/// Auth-proxy connector produced by [`Config::open`](crate::config::Config::open).
///
/// Immutable after construction, so a single instance serves concurrent logins.
#[derive(Clone, Debug)]
pub struct AuthProxyConnector {
	/// Broker-assigned identifier; its path suffix routes the callback through the proxy.
	pub id: ConnectorId,
	/// Header carrying the authenticated subject.
	pub user_header: HeaderName,
}
impl AuthProxyConnector {
	/// Creates a connector reading the subject from `user_header`.
	pub fn new(id: ConnectorId, user_header: HeaderName) -> Self {
		Self { id, user_header }
	}

	/// Appends this connector's path suffix to `callback_url` and sets the `state` parameter.
	pub fn build_login_url(&self, callback_url: &str, state: &str) -> Result<Url> {
		let mut url = Url::parse(callback_url).map_err(|source| Error::InvalidCallbackUrl {
			url: callback_url.to_owned(),
			source,
		})?;
		// A bare root path serializes as `/`; treat it as empty so `https://host` gains `/<id>`.
		let base = match url.path() {
			"/" => "",
			path => path,
		};
		let path = format!("{base}{}", self.id.path_suffix());

		url.set_path(&path);

		let mut pairs = url
			.query_pairs()
			.filter(|(key, _)| key != STATE_PARAM)
			.map(|(key, value)| (key.into_owned(), value.into_owned()))
			.collect::<Vec<_>>();

		pairs.push((STATE_PARAM.to_owned(), state.to_owned()));
		// Stable, so repeated keys keep their relative order.
		pairs.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));
		url.query_pairs_mut().clear().extend_pairs(pairs);

		Ok(url)
	}

	/// Maps proxied headers onto an [`Identity`].
	///
	/// Fails with [`Error::NotAuthenticated`] when the user header is missing or empty; every
	/// other header is optional.
	pub fn resolve_headers(&self, map: &HeaderMap) -> Result<Identity> {
		obs::log_request_headers(map);

		let Some(user_id) = headers::non_empty(map, &self.user_header) else {
			obs::log_missing_user(&self.user_header);

			return Err(Error::NotAuthenticated { header: self.user_header.to_string() });
		};
		let mut identity = Identity::new(user_id);

		identity.display_name = headers::non_empty(map, headers::DISPLAY_NAME);
		identity.preferred_username = headers::non_empty(map, headers::PRINCIPAL_NAME);

		if let Some(mail) = headers::non_empty(map, headers::VERIFIED_MAIL) {
			identity = identity.with_verified_email(mail);
		}
		if let Some(affiliation) = headers::non_empty(map, headers::SCOPED_AFFILIATION) {
			identity.groups =
				affiliation.split(headers::AFFILIATION_DELIMITER).map(str::to_owned).collect();
		}

		obs::log_resolved_user(&identity.user_id, identity.email_verified, identity.groups.len());

		Ok(identity)
	}

	fn observe<T>(&self, op: ConnectorOp, f: impl FnOnce() -> Result<T>) -> Result<T> {
		let _guard = OpSpan::new(op, &self.id).entered();

		obs::record_op_outcome(op, OpOutcome::Attempt);

		let result = f();

		match &result {
			Ok(_) => obs::record_op_outcome(op, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(op, OpOutcome::Failure),
		}

		result
	}
}
impl Connector for AuthProxyConnector {
	fn login_url(&self, _scopes: &Scopes, callback_url: &str, state: &str) -> Result<String> {
		self.observe(ConnectorOp::LoginUrl, || {
			self.build_login_url(callback_url, state).map(String::from)
		})
	}

	fn handle_callback(&self, _scopes: &Scopes, request: &Parts) -> Result<Identity> {
		self.observe(ConnectorOp::Callback, || self.resolve_headers(&request.headers))
	}
}
