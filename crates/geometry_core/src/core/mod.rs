//! Core geometry infrastructure
//!
//! This module contains the pieces every other subsystem leans on:
//!
//! - [`error`]: the failure taxonomy shared by vectors, sets and iterators
//! - [`checks`]: the build-time bounds-checking switch
//! - [`config`]: allocation and logging configuration

pub mod checks;
pub mod config;
pub mod error;

pub use error::{GeometryError, GeometryResult};
