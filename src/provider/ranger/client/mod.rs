//! Ranger admin clients

pub mod common;
pub mod rest;
