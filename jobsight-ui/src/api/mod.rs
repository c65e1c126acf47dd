//! API Layer
//!
//! HTTP communication with the job-portal REST API.

pub mod client;

pub use client::*;
