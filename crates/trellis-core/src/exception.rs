//! Framework-wide error type.

use thiserror::Error;

/// Errors raised while building, routing or dispatching a request.
#[derive(Debug, Error)]
pub enum Error {
	/// A collaborator was wired with the wrong kind of object
	/// (for example a console request handed to an HTTP middleware bridge).
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// Every stage of a middleware pipe delegated onward and nothing produced a response.
	#[error("Reached the final handler for middleware pipe - check the pipe configuration")]
	ReachedFinalHandler,

	/// Malformed HTTP input (bad URI, invalid header, ...)
	#[error("HTTP error: {0}")]
	Http(String),

	/// JSON encoding or decoding failed
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// Internal error
	#[error("Internal error: {0}")]
	Internal(String),
}

/// Result alias used by handlers and middleware.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Error::Configuration("bad wiring".to_string()), "Configuration error: bad wiring")]
	#[case(Error::Http("invalid uri".to_string()), "HTTP error: invalid uri")]
	#[case(Error::Internal("boom".to_string()), "Internal error: boom")]
	fn test_error_display(#[case] error: Error, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}

	#[test]
	fn test_reached_final_handler() {
		let error = Error::ReachedFinalHandler;
		assert!(matches!(error, Error::ReachedFinalHandler));
		assert!(error.to_string().contains("final handler"));
	}

	#[test]
	fn test_from_serde_json_error() {
		let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let error = Error::from(json_error);
		assert!(matches!(error, Error::Serialization(_)));
	}
}
