//! HTTP adapter for hospital registration and login.

mod dto;
mod handlers;
mod routes;

pub use dto::{HospitalResponse, LoginRequest, RegisterRequest};
pub use handlers::HospitalsState;
pub use routes::hospital_routes;
