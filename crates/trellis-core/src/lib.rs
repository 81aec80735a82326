//! # Trellis Core
//!
//! Types shared by every Trellis crate. Handlers, middleware and the dispatch
//! bridge all report failures through [`exception::Error`].

pub mod exception;

pub use exception::{Error, Result};
