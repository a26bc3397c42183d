//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the script API:
//! - Math types shared with the host (positions, rotations, UI-space points)
//! - Logging bootstrap

pub mod math;
pub mod logging;
