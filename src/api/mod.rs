//! Request payloads for the write endpoints and the field coercion they share.

pub mod fields;
pub mod payload;

pub use fields::{FieldCheck, Scalar};
pub use payload::{AuthenticationPayload, DistrictPayload, SchoolPayload, TokenRequest};
