//! Chain validation

pub mod validator;

pub use validator::{Chain, ValidationError, validate};
