// handlers/elevated/mod.rs - Admin-only write handlers
//
// Routed behind `jwt_auth_middleware` and `require_admin_middleware`;
// handlers can rely on an `AuthUser` extension with `admin == true`.

pub mod districts;
pub mod schools;

pub use districts::create as create_district;
pub use schools::create as create_school;
