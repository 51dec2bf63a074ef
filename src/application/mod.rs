//! Application layer - use-case orchestration over ports and the registry.

mod alert_service;
mod hospital_service;

pub use alert_service::AlertService;
pub use hospital_service::HospitalService;
