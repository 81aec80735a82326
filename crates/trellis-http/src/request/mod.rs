//! The framework's own HTTP request.

mod params;

use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri, Version};
use std::any::Any;
use std::collections::HashMap;
use trellis_core::exception::{Error, Result};

use crate::message::RequestMessage;

/// HTTP request as received by the server front-end.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub query_params: HashMap<String, String>,
}

impl Request {
	/// Starts building a request.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::POST)
	///     .uri("/users?page=2")
	///     .header("content-type", "application/json")
	///     .body("{}")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.method, Method::POST);
	/// assert_eq!(request.path(), "/users");
	/// assert_eq!(request.query_params.get("page"), Some(&"2".to_string()));
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}
}

impl RequestMessage for Request {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

/// Builder for [`Request`].
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	version: Option<Version>,
	headers: HeaderMap,
	raw_headers: Vec<(String, String)>,
	body: Bytes,
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = Some(version);
		self
	}

	/// Replaces all headers set so far.
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self.raw_headers.clear();
		self
	}

	/// Appends a single header; name and value are validated in [`build`](Self::build).
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.raw_headers.push((name.into(), value.into()));
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Builds the request.
	///
	/// # Errors
	///
	/// Returns [`Error::Http`] when the URI or a header is malformed.
	pub fn build(self) -> Result<Request> {
		let uri_str = self.uri.unwrap_or_else(|| "/".to_string());
		let uri: Uri = uri_str
			.parse()
			.map_err(|e| Error::Http(format!("Invalid URI '{}': {}", uri_str, e)))?;

		let mut headers = self.headers;
		for (name, value) in self.raw_headers {
			let header_name = HeaderName::from_bytes(name.as_bytes())
				.map_err(|e| Error::Http(format!("Invalid header name '{}': {}", name, e)))?;
			let header_value = HeaderValue::from_str(&value)
				.map_err(|e| Error::Http(format!("Invalid value for header '{}': {}", name, e)))?;
			headers.append(header_name, header_value);
		}

		let query_params = Request::parse_query_params(&uri);

		Ok(Request {
			method: self.method.unwrap_or(Method::GET),
			uri,
			version: self.version.unwrap_or(Version::HTTP_11),
			headers,
			body: self.body,
			query_params,
		})
	}
}
