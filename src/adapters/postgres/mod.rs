//! PostgreSQL adapters - Database implementations of the storage ports.
//!
//! - `PostgresAlertStore` - append-only alert log
//! - `PostgresHospitalDirectory` - hospital accounts with uniqueness checks

mod alert_store;
mod hospital_directory;

pub use alert_store::PostgresAlertStore;
pub use hospital_directory::PostgresHospitalDirectory;
