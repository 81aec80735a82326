//! Dispatch event passed from the host to dispatchables.

use std::sync::Arc;
use trellis_http::{RequestMessage, Response};

use crate::route_match::RouteMatch;

/// Mutable context shared between an event-driven host and the component it dispatches to.
///
/// The host fills in the request and route match; the dispatched component
/// records its outcome through [`set_result`](Self::set_result).
#[derive(Clone, Default)]
pub struct DispatchEvent {
	request: Option<Arc<dyn RequestMessage>>,
	route_match: Option<Arc<RouteMatch>>,
	result: Option<Response>,
}

impl DispatchEvent {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_request(mut self, request: Arc<dyn RequestMessage>) -> Self {
		self.request = Some(request);
		self
	}

	pub fn with_route_match(mut self, route_match: RouteMatch) -> Self {
		self.route_match = Some(Arc::new(route_match));
		self
	}

	pub fn request(&self) -> Option<&Arc<dyn RequestMessage>> {
		self.request.as_ref()
	}

	pub fn set_request(&mut self, request: Arc<dyn RequestMessage>) {
		self.request = Some(request);
	}

	pub fn route_match(&self) -> Option<&Arc<RouteMatch>> {
		self.route_match.as_ref()
	}

	pub fn set_route_match(&mut self, route_match: Option<Arc<RouteMatch>>) {
		self.route_match = route_match;
	}

	pub fn result(&self) -> Option<&Response> {
		self.result.as_ref()
	}

	pub fn set_result(&mut self, result: Response) {
		self.result = Some(result);
	}

	/// Removes and returns the recorded result.
	pub fn take_result(&mut self) -> Option<Response> {
		self.result.take()
	}
}

impl std::fmt::Debug for DispatchEvent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DispatchEvent")
			.field("request", &self.request.as_ref().map(|r| r.type_name()))
			.field("route_match", &self.route_match)
			.field("result", &self.result)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use trellis_http::ConsoleRequest;

	#[test]
	fn test_new_event_is_empty() {
		let event = DispatchEvent::new();

		assert!(event.request().is_none());
		assert!(event.route_match().is_none());
		assert!(event.result().is_none());
	}

	#[test]
	fn test_result_round_trip() {
		let mut event = DispatchEvent::new();
		event.set_result(Response::ok().with_body("done"));

		assert_eq!(event.result(), Some(&Response::ok().with_body("done")));
		assert_eq!(event.take_result(), Some(Response::ok().with_body("done")));
		assert!(event.result().is_none());
	}

	#[test]
	fn test_debug_shows_request_type() {
		let event = DispatchEvent::new().with_request(Arc::new(ConsoleRequest::default()));
		let rendered = format!("{:?}", event);

		assert!(rendered.contains("ConsoleRequest"));
	}
}
