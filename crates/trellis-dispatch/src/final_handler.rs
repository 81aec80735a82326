//! Terminal delegate used when running a pipe on behalf of a dispatch event.

use async_trait::async_trait;
use std::sync::Arc;
use trellis_core::exception::{Error, Result};
use trellis_http::{Handler, Response, ServerRequest};

/// Handler placed after the last stage of a pipe.
///
/// A well-formed pipe always answers before reaching it, so reaching it is
/// reported as [`Error::ReachedFinalHandler`].
#[derive(Debug, Clone)]
pub struct FinalHandler {
	response_prototype: Arc<Response>,
}

impl FinalHandler {
	pub fn new(response_prototype: Arc<Response>) -> Self {
		Self { response_prototype }
	}

	/// Response template handed down by the bridge; never modified.
	pub fn response_prototype(&self) -> &Response {
		&self.response_prototype
	}
}

#[async_trait]
impl Handler for FinalHandler {
	async fn handle(&self, request: ServerRequest) -> Result<Response> {
		tracing::warn!(
			path = request.path(),
			"middleware pipe exhausted without producing a response"
		);
		Err(Error::ReachedFinalHandler)
	}
}
