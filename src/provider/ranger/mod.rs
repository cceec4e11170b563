//! # Apache Ranger
//!
//! Client for the Ranger admin service's public REST API.

pub mod client;

pub use client::rest::RangerAdminREST;
