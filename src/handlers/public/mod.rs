// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Static page, health probe, token issuance and every read route.

pub mod authentication;
pub mod home;
pub mod records;

pub use authentication::authenticate;
pub use home::{health, index};
