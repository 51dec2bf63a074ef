//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AlertStore` - Durable append-only alert log (insert + full scan)
//! - `HospitalDirectory` - Uniqueness-checked registration and ID lookup

mod alert_store;
mod hospital_directory;

pub use alert_store::AlertStore;
pub use hospital_directory::HospitalDirectory;
