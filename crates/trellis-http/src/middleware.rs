//! Handler and middleware traits, and the pipe that composes them.
//!
//! ## Handler
//!
//! A [`Handler`] turns a [`ServerRequest`] into a [`Response`]. It is the end
//! of the line: nothing runs after it.
//!
//! ## Middleware
//!
//! A [`Middleware`] receives the request together with the `next` handler and
//! either answers on its own or delegates by calling `next.handle(request)`.
//!
//! ## MiddlewarePipe
//!
//! A [`MiddlewarePipe`] is an ordered list of middleware. It does not own a
//! final handler; the caller supplies one per [`process`](MiddlewarePipe::process)
//! call, and it only runs when every stage delegated onward.

use async_trait::async_trait;
use std::sync::Arc;
use trellis_core::exception::Result;

use crate::{Response, ServerRequest};

/// Handler trait for processing requests.
///
/// Handlers receive a request and produce a response or an error.
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handles a request and produces a response.
	///
	/// # Errors
	///
	/// Returns an error if the request cannot be processed.
	async fn handle(&self, request: ServerRequest) -> Result<Response>;
}

/// Blanket implementation for `Arc<T>` where T: Handler.
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: ServerRequest) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// Middleware trait for request/response processing.
#[async_trait]
pub trait Middleware: Send + Sync {
	/// Processes a request through this middleware.
	///
	/// # Arguments
	///
	/// * `request` - The incoming request
	/// * `next` - The next handler in the chain to call
	///
	/// # Errors
	///
	/// Returns an error if the middleware or next handler fails.
	async fn process(&self, request: ServerRequest, next: Arc<dyn Handler>) -> Result<Response>;

	/// Determines whether this middleware should run for the given request.
	///
	/// Skipped middleware are bypassed entirely; the request goes straight to
	/// the following stage. Defaults to `true`.
	fn should_continue(&self, _request: &ServerRequest) -> bool {
		true
	}
}

/// Ordered middleware pipeline.
///
/// The pipe is built once and then only read; one pipe can serve any number
/// of concurrent `process` calls.
#[derive(Clone, Default)]
pub struct MiddlewarePipe {
	middlewares: Vec<Arc<dyn Middleware>>,
}

impl MiddlewarePipe {
	/// Creates an empty pipe.
	pub fn new() -> Self {
		Self {
			middlewares: Vec::new(),
		}
	}

	/// Appends a middleware; stages run in the order they were piped.
	///
	/// # Examples
	///
	/// ```rust
	/// use trellis_http::{Handler, Middleware, MiddlewarePipe, Response, ServerRequest};
	/// use std::sync::Arc;
	///
	/// struct Passthrough;
	///
	/// #[async_trait::async_trait]
	/// impl Middleware for Passthrough {
	///     async fn process(&self, request: ServerRequest, next: Arc<dyn Handler>) -> trellis_core::Result<Response> {
	///         next.handle(request).await
	///     }
	/// }
	///
	/// let pipe = MiddlewarePipe::new()
	///     .pipe(Arc::new(Passthrough))
	///     .pipe(Arc::new(Passthrough));
	/// assert_eq!(pipe.len(), 2);
	/// ```
	pub fn pipe(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	pub fn len(&self) -> usize {
		self.middlewares.len()
	}

	pub fn is_empty(&self) -> bool {
		self.middlewares.is_empty()
	}

	/// Runs `request` through the pipe, falling back to `terminal` when every
	/// stage delegates onward.
	///
	/// # Errors
	///
	/// Propagates the first error raised by a stage or by `terminal`.
	pub async fn process(
		&self,
		request: ServerRequest,
		terminal: Arc<dyn Handler>,
	) -> Result<Response> {
		let active: Vec<Arc<dyn Middleware>> = self
			.middlewares
			.iter()
			.rev()
			.filter(|middleware| middleware.should_continue(&request))
			.cloned()
			.collect();

		tracing::debug!(
			stages = self.middlewares.len(),
			active = active.len(),
			path = request.path(),
			"processing middleware pipe"
		);

		let mut next = terminal;
		for middleware in active {
			next = Arc::new(Stage { middleware, next });
		}

		next.handle(request).await
	}
}

/// A pipe nested in another pipe continues with the outer `next` once exhausted.
#[async_trait]
impl Middleware for MiddlewarePipe {
	async fn process(&self, request: ServerRequest, next: Arc<dyn Handler>) -> Result<Response> {
		MiddlewarePipe::process(self, request, next).await
	}
}

/// One middleware bound to the handler that follows it.
struct Stage {
	middleware: Arc<dyn Middleware>,
	next: Arc<dyn Handler>,
}

#[async_trait]
impl Handler for Stage {
	async fn handle(&self, request: ServerRequest) -> Result<Response> {
		self.middleware.process(request, self.next.clone()).await
	}
}
