//! Juniper Threads Core - Shared types library.
//!
//! This crate provides the domain types used by the `shop` web crate.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and fixed-point prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
