//! SekMed Backend - Real-time EMS Alert Service
//!
//! This crate lets hospitals register, authenticate by opaque ID, and
//! publish/subscribe to alert events in near real time over WebSockets.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
