//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Scalar element types
//! - The fixed-size `Vector<N, T>`
//! - Math aliases and interop with the engine's nalgebra types
//! - Logging utilities

pub mod logging;
pub mod math;
pub mod scalar;
pub mod vector;
