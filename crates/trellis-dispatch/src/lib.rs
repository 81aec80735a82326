//! # Trellis Dispatch
//!
//! Connects the framework's event-driven dispatch host to middleware pipes.
//!
//! ## Overview
//!
//! A host resolves a route, fills a [`DispatchEvent`] with the request and the
//! [`RouteMatch`], and hands the event to a [`Dispatchable`]. The
//! [`DispatchBridge`] is the dispatchable that runs a
//! [`MiddlewarePipe`](trellis_http::MiddlewarePipe):
//!
//! ```text
//! DispatchEvent ── Request ──► ServerRequest ── + route attributes ──► MiddlewarePipe
//!       ▲                                                                    │
//!       └──────────────────────────── set_result ◄── Response ◄──────────────┘
//!                                                        (or FinalHandler error)
//! ```
//!
//! ## Errors
//!
//! - [`Error::Configuration`](trellis_core::Error::Configuration): the event
//!   carries no request or a request that is not an HTTP
//!   [`Request`](trellis_http::Request). The pipe is not run.
//! - [`Error::ReachedFinalHandler`](trellis_core::Error::ReachedFinalHandler):
//!   every stage of the pipe delegated onward.
//!
//! Errors raised by the pipe's stages are returned unchanged.

pub mod bridge;
pub mod dispatchable;
pub mod event;
pub mod final_handler;
pub mod route_match;

pub use bridge::{DispatchBridge, EVENT_IDENTIFIER, ROUTE_MATCH_ATTRIBUTE};
pub use dispatchable::Dispatchable;
pub use event::DispatchEvent;
pub use final_handler::FinalHandler;
pub use route_match::RouteMatch;
