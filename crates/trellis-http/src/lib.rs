//! # Trellis HTTP
//!
//! Request and response messages plus the middleware pipe that drives them.
//!
//! Two request representations live here:
//!
//! - [`Request`] is the framework's own (legacy) HTTP request, produced by the
//!   server front-end and carried through dispatch events.
//! - [`ServerRequest`] is the standard message that middleware consume. It is
//!   built from a [`Request`] and carries named [`Attributes`] that routing and
//!   middleware attach along the way.
//!
//! ## Pipes
//!
//! ```rust
//! use trellis_http::{Handler, Middleware, MiddlewarePipe, Request, Response, ServerRequest};
//! use trellis_core::Result;
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct Hello;
//!
//! #[async_trait]
//! impl Middleware for Hello {
//!     async fn process(&self, _request: ServerRequest, _next: Arc<dyn Handler>) -> Result<Response> {
//!         Ok(Response::ok().with_body("hello"))
//!     }
//! }
//!
//! struct Unreachable;
//!
//! #[async_trait]
//! impl Handler for Unreachable {
//!     async fn handle(&self, _request: ServerRequest) -> Result<Response> {
//!         Ok(Response::not_found())
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let pipe = MiddlewarePipe::new().pipe(Arc::new(Hello));
//! let request = ServerRequest::from_request(&Request::builder().uri("/").build().unwrap());
//! let response = pipe.process(request, Arc::new(Unreachable)).await.unwrap();
//! assert_eq!(response.body, "hello");
//! # });
//! ```

pub mod attributes;
pub mod console;
pub mod message;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server_request;

pub use attributes::Attributes;
pub use console::ConsoleRequest;
pub use message::RequestMessage;
pub use middleware::{Handler, Middleware, MiddlewarePipe};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use server_request::ServerRequest;

pub use trellis_core::exception::{Error, Result};
