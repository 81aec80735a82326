//! # Trellis
//!
//! Building blocks that connect an event-driven dispatch host to modern
//! middleware pipes, plus metadata types describing RPC methods.
//!
//! ## Feature Flags
//!
//! - `dispatch` - [`dispatch`]: run a [`MiddlewarePipe`](http::MiddlewarePipe) for dispatch events
//! - `rpc` - [`rpc`]: RPC method signatures and parameters
//! - `full` (default) - everything above
//!
//! The [`http`] and [`exception`] modules are always available.
//!
//! ## Quick Example
//!
//! ```rust
//! use trellis::prelude::*;
//! use std::sync::Arc;
//!
//! struct Hello;
//!
//! #[async_trait::async_trait]
//! impl Middleware for Hello {
//!     async fn process(&self, _request: ServerRequest, _next: Arc<dyn Handler>) -> Result<Response> {
//!         Ok(Response::ok().with_body("hello"))
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let bridge = DispatchBridge::new(
//!     Arc::new(MiddlewarePipe::new().pipe(Arc::new(Hello))),
//!     Arc::new(Response::ok()),
//! );
//! let mut event = DispatchEvent::new()
//!     .with_request(Arc::new(Request::builder().uri("/").build().unwrap()));
//!
//! let response = bridge.dispatch(&mut event).await.unwrap();
//! assert_eq!(event.result(), Some(&response));
//! # });
//! ```

pub use trellis_core::exception;
pub use trellis_http as http;

#[cfg(feature = "dispatch")]
pub use trellis_dispatch as dispatch;

#[cfg(feature = "rpc")]
pub use trellis_rpc as rpc;

pub use trellis_core::exception::{Error, Result};

/// Commonly used types, importable with `use trellis::prelude::*`.
pub mod prelude {
	pub use trellis_core::exception::{Error, Result};
	pub use trellis_http::{
		Attributes, ConsoleRequest, Handler, Middleware, MiddlewarePipe, Request, RequestMessage,
		Response, ServerRequest,
	};

	#[cfg(feature = "dispatch")]
	pub use trellis_dispatch::{
		DispatchBridge, DispatchEvent, Dispatchable, FinalHandler, ROUTE_MATCH_ATTRIBUTE, RouteMatch,
	};

	#[cfg(feature = "rpc")]
	pub use trellis_rpc::{MethodSignature, Parameter, ParameterKey, SignatureArray};
}
