use super::Request;
use hyper::Uri;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

impl Request {
	/// Parse query parameters from URI
	pub(super) fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter(|pair| !pair.is_empty())
					.filter_map(|pair| {
						// Split on first '=' only to preserve '=' in values (e.g., Base64)
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// Get the request path
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::Request;
	///
	/// let request = Request::builder().uri("/api/users").build().unwrap();
	/// assert_eq!(request.path(), "/api/users");
	/// ```
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Query parameters with percent-escapes resolved in both keys and values.
	///
	/// Invalid UTF-8 sequences are replaced rather than rejected.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_http::Request;
	///
	/// let request = Request::builder().uri("/test?name=John%20Doe").build().unwrap();
	///
	/// let decoded = request.decoded_query_params();
	/// assert_eq!(decoded.get("name"), Some(&"John Doe".to_string()));
	/// ```
	pub fn decoded_query_params(&self) -> HashMap<String, String> {
		let decode = |raw: &str| percent_decode_str(raw).decode_utf8_lossy().into_owned();
		self.query_params
			.iter()
			.map(|(key, value)| (decode(key), decode(value)))
			.collect()
	}
}
