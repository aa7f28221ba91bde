//! Walks through both connector phases: redirecting the browser through the proxy, then
//! resolving the identity from the headers the proxy injected on the way back.
//!
//! Run with `RUST_LOG=debug` to see the proxied headers logged by the connector.

// crates.io
use color_eyre::Result;
use http::Request;
use tracing_subscriber::EnvFilter;
// self
use authproxy_connector::{
	auth::{ConnectorId, Scopes},
	config::Config,
	connector::{Connector, ConnectorConfig},
};

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

	let config = Config::from_json(r#"{"userHeader":"X-Remote-User"}"#)?;
	let connector = ConnectorConfig::open(&config, ConnectorId::new("shibboleth")?)?;
	let scopes: Scopes = "openid profile groups".parse()?;
	let login = connector.login_url(&scopes, "https://login.example.com/dex/callback", "xyz")?;

	println!("Send your user to {login}.");

	// Simulate the request the proxy forwards after a successful login.
	let (parts, ()) = Request::builder()
		.uri(login.as_str())
		.header("X-Remote-User", "jdoe@uni.example")
		.header("X-Shib-displayName", "Jane Doe")
		.header("X-Shib-mail", "jane.doe@uni.example")
		.header("X-Shib-eduPersonScopedAffiliation", "member@uni.example;staff@uni.example")
		.body(())?
		.into_parts();
	let identity = connector.handle_callback(&scopes, &parts)?;

	println!("Resolved identity: {}.", serde_json::to_string_pretty(&identity)?);

	Ok(())
}
