// self
use crate::{_prelude::*, obs::ConnectorOp};

/// A span builder used by connector operations.
#[derive(Clone, Debug)]
pub struct OpSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OpSpan {
	/// Creates a new span tagged with the operation and connector identifier.
	pub fn new(op: ConnectorOp, connector: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!("authproxy_connector.op", op = op.as_str(), connector);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (op, connector);

			Self {}
		}
	}

	/// Enters the span for the remainder of the operation.
	pub fn entered(self) -> OpSpanGuard {
		#[cfg(feature = "tracing")]
		{
			OpSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			OpSpanGuard {}
		}
	}
}

/// RAII guard returned by [`OpSpan::entered`].
pub struct OpSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for OpSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("OpSpanGuard(..)")
	}
}

/// Emits the full proxied header set at debug level.
///
/// Useful when the proxy forwards attributes under unexpected names.
pub fn log_request_headers(headers: &HeaderMap) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(?headers, "Received proxied request headers.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = headers;
	}
}

/// Emits a debug event for a callback that lacks the user header.
pub fn log_missing_user(header: &HeaderName) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(header = header.as_str(), "User header is missing; login redirect needed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = header;
	}
}

/// Emits a debug event for a resolved subject.
pub fn log_resolved_user(user_id: &str, email_verified: bool, groups: usize) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(user_id, email_verified, groups, "Resolved identity from proxy headers.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (user_id, email_verified, groups);
	}
}
