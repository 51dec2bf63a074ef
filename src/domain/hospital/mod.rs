//! Hospital domain - directory accounts.

mod account;

pub use account::HospitalAccount;
