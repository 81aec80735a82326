//! Standard request message consumed by middleware.

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use std::collections::HashMap;
use std::sync::Arc;

use crate::attributes::Attributes;
use crate::request::Request;

/// Request message passed through a [`MiddlewarePipe`](crate::MiddlewarePipe).
///
/// Mutation is value-style: `with_*` methods consume the message and return
/// the updated one, so every pipeline stage owns the exact request it was given.
#[derive(Debug, Clone)]
pub struct ServerRequest {
	method: Method,
	uri: Uri,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
	query_params: HashMap<String, String>,
	attributes: Attributes,
}

impl ServerRequest {
	/// Wraps a framework [`Request`] into a server request with no attributes.
	///
	/// Query parameters are percent-decoded on the way in.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::{Request, ServerRequest};
	///
	/// let request = Request::builder().uri("/users/42?expand=true").build().unwrap();
	/// let server_request = ServerRequest::from_request(&request);
	///
	/// assert_eq!(server_request.path(), "/users/42");
	/// assert_eq!(server_request.query_params().get("expand"), Some(&"true".to_string()));
	/// assert!(server_request.attributes().is_empty());
	/// ```
	pub fn from_request(request: &Request) -> Self {
		Self {
			method: request.method.clone(),
			uri: request.uri.clone(),
			version: request.version,
			headers: request.headers.clone(),
			body: request.body.clone(),
			query_params: request.decoded_query_params(),
			attributes: Attributes::new(),
		}
	}

	/// Returns the message with `value` stored under attribute `name`.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::{Request, ServerRequest};
	///
	/// let request = ServerRequest::from_request(&Request::builder().build().unwrap())
	///     .with_attribute("user_id", 7u64)
	///     .with_attribute("user_id", 8u64);
	///
	/// assert_eq!(request.attribute::<u64>("user_id"), Some(&8));
	/// ```
	pub fn with_attribute<T: Send + Sync + 'static>(
		mut self,
		name: impl Into<String>,
		value: T,
	) -> Self {
		self.attributes.insert(name, value);
		self
	}

	/// Like [`with_attribute`](Self::with_attribute) but stores an existing shared value.
	pub fn with_shared_attribute<T: Send + Sync + 'static>(
		mut self,
		name: impl Into<String>,
		value: Arc<T>,
	) -> Self {
		self.attributes.insert_shared(name, value);
		self
	}

	pub fn without_attribute(mut self, name: &str) -> Self {
		self.attributes.remove(name);
		self
	}

	pub fn attribute<T: 'static>(&self, name: &str) -> Option<&T> {
		self.attributes.get::<T>(name)
	}

	pub fn shared_attribute<T: Send + Sync + 'static>(&self, name: &str) -> Option<Arc<T>> {
		self.attributes.get_shared::<T>(name)
	}

	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn uri(&self) -> &Uri {
		&self.uri
	}

	pub fn path(&self) -> &str {
		self.uri.path()
	}

	pub fn version(&self) -> Version {
		self.version
	}

	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	pub fn body(&self) -> &Bytes {
		&self.body
	}

	pub fn query_params(&self) -> &HashMap<String, String> {
		&self.query_params
	}
}

impl From<&Request> for ServerRequest {
	fn from(request: &Request) -> Self {
		Self::from_request(request)
	}
}
