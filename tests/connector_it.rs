// std
use std::{str::FromStr, sync::Arc, thread};
// crates.io
use http::{Request, request::Parts};
// self
use authproxy_connector::{
	auth::{ConnectorId, Identity, Scopes},
	config::Config,
	connector::{Connector, ConnectorConfig},
	error::Error,
};

const CALLBACK: &str = "https://login.example.com/dex/callback";

fn open(json: &str, id: &str) -> Arc<dyn Connector> {
	let config = Config::from_json(json).expect("Configuration fixture should parse.");
	let id = ConnectorId::new(id).expect("Connector identifier fixture should be valid.");

	ConnectorConfig::open(&config, id).expect("Connector should open.")
}

fn proxied(headers: &[(&str, &str)]) -> Parts {
	let mut builder = Request::builder().uri("https://login.example.com/dex/callback/shib");

	for (name, value) in headers {
		builder = builder.header(*name, *value);
	}

	builder.body(()).expect("Request fixture should build.").into_parts().0
}

#[test]
fn login_round_trip_through_proxy() {
	let connector = open(r#"{"userHeader":"X-Forwarded-User"}"#, "shib");
	let scopes = Scopes::from_str("openid email groups").expect("Scopes should parse.");
	let login = connector
		.login_url(&scopes, &format!("{CALLBACK}?state=stale"), "state-token")
		.expect("Login URL should build.");

	assert_eq!(login, "https://login.example.com/dex/callback/shib?state=state-token");

	let err = connector
		.handle_callback(&scopes, &proxied(&[("X-Remote-User", "alice")]))
		.expect_err("Default header must be ignored once a custom header is configured.");

	assert!(matches!(err, Error::NotAuthenticated { .. }));
	assert!(err.to_string().contains("re-run the login redirect"));

	let identity = connector
		.handle_callback(
			&scopes,
			&proxied(&[
				("x-forwarded-user", "alice"),
				("X-Shib-mail", "alice@example.com"),
				("X-Shib-eduPersonScopedAffiliation", "staff;alumni;"),
			]),
		)
		.expect("Proxied request should resolve.");

	assert_eq!(
		identity,
		Identity {
			user_id: "alice".into(),
			email: Some("alice@example.com".into()),
			email_verified: true,
			groups: vec!["staff".into(), "alumni".into(), String::new()],
			..Default::default()
		}
	);
}

#[test]
fn malformed_callback_is_a_broker_error() {
	let connector = open("{}", "authproxy");
	let err = connector
		.login_url(&Scopes::default(), "callback", "state")
		.expect_err("Relative callback must be rejected.");

	assert!(matches!(err, Error::InvalidCallbackUrl { ref url, .. } if url == "callback"));
}

#[test]
fn shared_connector_serves_concurrent_callbacks() {
	let connector = open("{}", "authproxy");
	let handles = (0..8)
		.map(|n| {
			let connector = Arc::clone(&connector);

			thread::spawn(move || {
				let user = format!("user-{n}");

				connector
					.handle_callback(&Scopes::default(), &proxied(&[("X-Remote-User", user.as_str())]))
					.expect("Concurrent callback should resolve.")
					.user_id
			})
		})
		.collect::<Vec<_>>();

	for (n, handle) in handles.into_iter().enumerate() {
		assert_eq!(handle.join().expect("Worker thread should not panic."), format!("user-{n}"));
	}
}
