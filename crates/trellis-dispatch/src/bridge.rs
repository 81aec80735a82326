//! Runs a middleware pipe as if it were a dispatched controller.

use async_trait::async_trait;
use std::sync::Arc;
use trellis_core::exception::{Error, Result};
use trellis_http::{MiddlewarePipe, Request, RequestMessage, Response, ServerRequest};

use crate::dispatchable::Dispatchable;
use crate::event::DispatchEvent;
use crate::final_handler::FinalHandler;
use crate::route_match::RouteMatch;

/// Attribute under which the whole [`RouteMatch`] is attached to the server request.
pub const ROUTE_MATCH_ATTRIBUTE: &str = "trellis_dispatch::RouteMatch";

/// Identifier listeners use to attach to bridge dispatches.
pub const EVENT_IDENTIFIER: &str = "trellis_dispatch::DispatchBridge";

/// Adapts dispatch events to a [`MiddlewarePipe`].
///
/// The bridge converts the event's [`Request`] into a [`ServerRequest`],
/// exposes the route match as request attributes, runs the pipe and records
/// the response on the event. It keeps no per-request state, so one bridge
/// can serve every event for its route.
///
/// # Examples
///
/// ```rust
/// use trellis_dispatch::{DispatchBridge, DispatchEvent, Dispatchable, RouteMatch};
/// use trellis_http::{Handler, Middleware, MiddlewarePipe, Request, Response, ServerRequest};
/// use serde_json::{Map, Value, json};
/// use std::sync::Arc;
///
/// struct ShowId;
///
/// #[async_trait::async_trait]
/// impl Middleware for ShowId {
///     async fn process(&self, request: ServerRequest, _next: Arc<dyn Handler>) -> trellis_core::Result<Response> {
///         let id = request.attribute::<Value>("id").and_then(Value::as_str).unwrap_or("-");
///         Ok(Response::ok().with_body(id.to_string()))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let pipe = Arc::new(MiddlewarePipe::new().pipe(Arc::new(ShowId)));
/// let bridge = DispatchBridge::new(pipe, Arc::new(Response::ok()));
///
/// let mut params = Map::new();
/// params.insert("id".to_string(), json!("42"));
/// let mut event = DispatchEvent::new()
///     .with_request(Arc::new(Request::builder().uri("/users/42").build().unwrap()))
///     .with_route_match(RouteMatch::new(params));
///
/// let response = bridge.dispatch(&mut event).await.unwrap();
/// assert_eq!(response.body, "42");
/// assert_eq!(event.result(), Some(&response));
/// # });
/// ```
#[derive(Clone)]
pub struct DispatchBridge {
	pipe: Arc<MiddlewarePipe>,
	response_prototype: Arc<Response>,
}

impl DispatchBridge {
	pub fn new(pipe: Arc<MiddlewarePipe>, response_prototype: Arc<Response>) -> Self {
		Self {
			pipe,
			response_prototype,
		}
	}

	pub fn pipe(&self) -> &Arc<MiddlewarePipe> {
		&self.pipe
	}

	pub fn response_prototype(&self) -> &Arc<Response> {
		&self.response_prototype
	}

	/// Converts the event's request into a server request.
	fn load_request(event: &DispatchEvent) -> Result<ServerRequest> {
		let Some(message) = event.request() else {
			return Err(Error::Configuration(format!(
				"Expected request to be a {}, none given",
				std::any::type_name::<Request>()
			)));
		};
		let message: &dyn RequestMessage = &**message;

		message
			.downcast_ref::<Request>()
			.map(ServerRequest::from_request)
			.ok_or_else(|| {
				Error::Configuration(format!(
					"Expected request to be a {}, {} given",
					std::any::type_name::<Request>(),
					message.type_name()
				))
			})
	}

	/// Copies every matched parameter onto the request; route values win over existing attributes.
	fn populate_request_parameters_from_route(
		request: ServerRequest,
		route_match: Option<&Arc<RouteMatch>>,
	) -> ServerRequest {
		let Some(route_match) = route_match else {
			return request;
		};

		if route_match.params().contains_key(ROUTE_MATCH_ATTRIBUTE) {
			tracing::warn!(
				attribute = ROUTE_MATCH_ATTRIBUTE,
				"route parameter overwrites the route match attribute"
			);
		}

		route_match
			.params()
			.iter()
			.fold(request, |request, (key, value)| {
				request.with_attribute(key.clone(), value.clone())
			})
	}
}

#[async_trait]
impl Dispatchable for DispatchBridge {
	fn event_identifier(&self) -> &'static str {
		EVENT_IDENTIFIER
	}

	async fn dispatch(&self, event: &mut DispatchEvent) -> Result<Response> {
		let route_match = event.route_match().cloned();

		let mut request = Self::load_request(event)?;
		if let Some(route_match) = &route_match {
			request = request.with_shared_attribute(ROUTE_MATCH_ATTRIBUTE, route_match.clone());
		}
		let request = Self::populate_request_parameters_from_route(request, route_match.as_ref());

		tracing::debug!(
			route = route_match
				.as_ref()
				.and_then(|m| m.matched_route_name())
				.unwrap_or("<unmatched>"),
			attributes = request.attributes().len(),
			"dispatching request through middleware pipe"
		);

		let terminal = Arc::new(FinalHandler::new(self.response_prototype.clone()));
		let result = self.pipe.process(request, terminal).await?;

		event.set_result(result.clone());

		Ok(result)
	}
}
