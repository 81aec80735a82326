//! Method metadata

mod options;
pub mod parameter;
pub mod signature;

pub use parameter::Parameter;
pub use signature::{MethodSignature, ParameterKey, SignatureArray};
