//! RPC support for the Trellis framework
//!
//! This crate describes the shape of RPC methods: what a method returns and
//! which parameters it takes. Servers use these signatures to publish
//! introspection data and to match incoming calls against overloads.
//!
//! # Usage
//!
//! ```
//! use trellis_rpc::{MethodSignature, Parameter};
//! use serde_json::json;
//!
//! let mut signature = MethodSignature::new();
//! signature
//!     .set_return_type("bool")
//!     .add_parameter("int")
//!     .add_parameter(Parameter::new().with_name("label").with_type("string"));
//!
//! assert_eq!(signature.parameters(), vec!["int", "string"]);
//! assert_eq!(signature.parameter("label"), signature.parameter(1usize));
//! assert_eq!(
//!     serde_json::to_value(signature.to_array()).unwrap(),
//!     json!({"returnType": "bool", "parameters": ["int", "string"]})
//! );
//! ```

pub mod method;

pub use method::{MethodSignature, Parameter, ParameterKey, SignatureArray};
