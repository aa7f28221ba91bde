//! Header-trusting identity connector for brokers that sit behind an authenticating reverse
//! proxy (Apache `mod_auth_*`, Shibboleth SP, nginx `auth_request`, ...).
//!
//! The proxy performs the real login and forwards the user in request headers; this crate turns
//! those headers into an [`auth::Identity`] and builds the redirect that routes the browser
//! through the proxy in the first place.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod connector;
pub mod error;
pub mod obs;

mod _prelude {
	pub use std::{
		collections::BTreeSet,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use http::{HeaderMap, HeaderName, request::Parts};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{ConfigError, Error, Result};
}

pub use http;
pub use url;
#[cfg(test)] use {color_eyre as _, tracing_subscriber as _};
