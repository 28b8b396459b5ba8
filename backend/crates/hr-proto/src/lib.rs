//! Wire messages for the `healthrecords.v1` package.
//!
//! Messages are declared with `prost` derives directly so the workspace does
//! not need `protoc` at build time. Field tags are part of the wire contract
//! and must never be reused.

pub mod article;
pub mod blood_pressure;
pub mod user;
pub mod weight;

pub use article::*;
pub use blood_pressure::*;
pub use user::*;
pub use weight::*;

/// Protobuf package every service lives in
pub const PACKAGE: &str = "healthrecords.v1";
