//! Console (command line) requests.

use std::any::Any;

use crate::message::RequestMessage;

/// A request originating from a command-line invocation.
///
/// Console requests travel through the same dispatch events as HTTP requests
/// but cannot be converted into a [`ServerRequest`](crate::ServerRequest).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleRequest {
	args: Vec<String>,
}

impl ConsoleRequest {
	/// Creates a console request from its positional arguments.
	pub fn new(args: Vec<String>) -> Self {
		Self { args }
	}

	pub fn args(&self) -> &[String] {
		&self.args
	}
}

impl RequestMessage for ConsoleRequest {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}
