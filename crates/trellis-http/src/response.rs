use bytes::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;
use trellis_core::exception::Result;

/// HTTP Response representation
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::ACCEPTED);
	/// assert_eq!(response.status, StatusCode::ACCEPTED);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a Response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a Response with HTTP 404 Not Found status
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Create a Response with HTTP 500 Internal Server Error status
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Set the response body
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::Response;
	/// use bytes::Bytes;
	///
	/// let response = Response::ok().with_body("Hello, World!");
	/// assert_eq!(response.body, Bytes::from("Hello, World!"));
	/// ```
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a custom header to the response
	///
	/// Invalid header names or values are ignored.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let (Ok(header_name), Ok(header_value)) = (
			HeaderName::from_bytes(name.as_bytes()),
			HeaderValue::from_str(value),
		) {
			self.headers.insert(header_name, header_value);
		}
		self
	}

	/// Set the response body to JSON and add appropriate Content-Type header
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::Response;
	/// use serde_json::json;
	///
	/// let response = Response::ok().with_json(&json!({"status": "ok"})).unwrap();
	///
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn with_json<T: Serialize>(mut self, data: &T) -> Result<Self> {
		let json = serde_json::to_vec(data)?;
		self.body = Bytes::from(json);
		self.headers
			.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		Ok(self)
	}
}

impl Default for Response {
	fn default() -> Self {
		Self::ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Response::ok(), StatusCode::OK)]
	#[case(Response::not_found(), StatusCode::NOT_FOUND)]
	#[case(Response::internal_server_error(), StatusCode::INTERNAL_SERVER_ERROR)]
	#[case(Response::default(), StatusCode::OK)]
	fn test_constructors(#[case] response: Response, #[case] expected: StatusCode) {
		assert_eq!(response.status, expected);
	}

	#[rstest]
	fn test_with_header_ignores_invalid() {
		let response = Response::ok()
			.with_header("x-valid", "yes")
			.with_header("bad header", "no");

		assert_eq!(response.headers.len(), 1);
		assert_eq!(response.headers.get("x-valid").unwrap(), "yes");
	}

	#[rstest]
	fn test_clone_is_equal() {
		let response = Response::ok().with_body("body").with_header("x-a", "1");
		assert_eq!(response.clone(), response);
		assert_ne!(response, Response::ok());
	}
}
