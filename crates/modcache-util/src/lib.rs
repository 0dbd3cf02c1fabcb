#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Shared utilities for modcache.
//!
//! This crate provides pure helper functions with no logging/tracing dependencies.
//! Logging is left to the crates that own the caches.

pub mod fs;
