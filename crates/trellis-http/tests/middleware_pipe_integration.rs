//! Integration tests for MiddlewarePipe
//!
//! Tests how requests and responses travel through a pipe:
//! - Attributes added by one stage are visible to later stages
//! - Short-circuiting stages keep later stages and the terminal from running
//! - The same pipe serves repeated requests independently

use async_trait::async_trait;
use hyper::StatusCode;
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use trellis_core::exception::Result;
use trellis_http::{Handler, Middleware, MiddlewarePipe, Request, Response, ServerRequest};

/// Stage that tags the request with the current user
struct AuthenticateMiddleware;

#[async_trait]
impl Middleware for AuthenticateMiddleware {
	async fn process(&self, request: ServerRequest, next: Arc<dyn Handler>) -> Result<Response> {
		let user = request
			.headers()
			.get("x-user")
			.and_then(|value| value.to_str().ok())
			.map(str::to_string);

		match user {
			Some(user) => next.handle(request.with_attribute("user", user)).await,
			None => Ok(Response::new(StatusCode::UNAUTHORIZED)),
		}
	}
}

/// Stage that greets the authenticated user
struct GreetingMiddleware;

#[async_trait]
impl Middleware for GreetingMiddleware {
	async fn process(&self, request: ServerRequest, _next: Arc<dyn Handler>) -> Result<Response> {
		let user = request
			.attribute::<String>("user")
			.cloned()
			.unwrap_or_default();
		Ok(Response::ok()
			.with_header("x-greeted", &user)
			.with_body(format!("hello {user}")))
	}
}

/// Terminal handler counting how often it is reached
struct CountingHandler {
	calls: AtomicUsize,
}

#[async_trait]
impl Handler for CountingHandler {
	async fn handle(&self, _request: ServerRequest) -> Result<Response> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(Response::not_found())
	}
}

#[fixture]
fn pipe() -> MiddlewarePipe {
	MiddlewarePipe::new()
		.pipe(Arc::new(AuthenticateMiddleware))
		.pipe(Arc::new(GreetingMiddleware))
}

fn request_as(user: Option<&str>) -> ServerRequest {
	let mut builder = Request::builder().uri("/greet");
	if let Some(user) = user {
		builder = builder.header("x-user", user);
	}
	ServerRequest::from_request(&builder.build().unwrap())
}

#[rstest]
#[tokio::test]
async fn test_attribute_flows_to_later_stage(pipe: MiddlewarePipe) {
	let terminal = Arc::new(CountingHandler {
		calls: AtomicUsize::new(0),
	});

	let response = pipe
		.process(request_as(Some("ada")), terminal.clone())
		.await
		.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.body, "hello ada");
	assert_eq!(response.headers.get("x-greeted").unwrap(), "ada");
	assert_eq!(terminal.calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn test_short_circuit_skips_remaining_stages(pipe: MiddlewarePipe) {
	let terminal = Arc::new(CountingHandler {
		calls: AtomicUsize::new(0),
	});

	let response = pipe.process(request_as(None), terminal.clone()).await.unwrap();

	assert_eq!(response.status, StatusCode::UNAUTHORIZED);
	assert!(response.body.is_empty());
	assert_eq!(terminal.calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn test_pipe_is_reusable(pipe: MiddlewarePipe) {
	let pipe = Arc::new(pipe);
	let terminal = Arc::new(CountingHandler {
		calls: AtomicUsize::new(0),
	});

	let first = pipe
		.process(request_as(Some("grace")), terminal.clone())
		.await
		.unwrap();
	let second = pipe
		.process(request_as(Some("linus")), terminal.clone())
		.await
		.unwrap();

	assert_eq!(first.body, "hello grace");
	assert_eq!(second.body, "hello linus");
}
