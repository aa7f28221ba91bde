//! Broker-facing connector contract and the auth-proxy implementation.
//!
//! A broker registers connectors by opening a [`ConnectorConfig`] with the identifier it assigned,
//! then drives every login through the two [`Connector`] hooks: first [`Connector::login_url`] to
//! send the browser away, then [`Connector::handle_callback`] once the browser comes back.

pub mod authproxy;
pub mod headers;

pub use authproxy::*;

// self
use crate::{_prelude::*, auth::{ConnectorId, Identity, Scopes}};

/// Login strategy invoked by the broker in two phases.
///
/// Implementors are required to be `Send + Sync` so a single instance can serve concurrent
/// logins behind an `Arc<dyn Connector>`. Scopes are passed to both hooks so every connector
/// kind shares one shape, even those that never look at them.
pub trait Connector: Send + Sync {
	/// Builds the URL the browser is redirected to in order to start a login.
	fn login_url(&self, scopes: &Scopes, callback_url: &str, state: &str) -> Result<String>;

	/// Resolves the identity carried by the request that returned to the callback path.
	fn handle_callback(&self, scopes: &Scopes, request: &Parts) -> Result<Identity>;
}

/// Factory turning a connector's configuration into a ready connector instance.
pub trait ConnectorConfig {
	/// Opens a connector under the broker-assigned identifier.
	fn open(&self, id: ConnectorId) -> Result<Arc<dyn Connector>, ConfigError>;
}
