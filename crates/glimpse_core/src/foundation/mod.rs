//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the showcase:
//! - Math types and operations
//! - Time management and frame clocks
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
