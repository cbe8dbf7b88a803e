//! Foundation module - Core utilities and types
//!
//! This module provides the low-level pieces the shape code builds on:
//! - Math types and operations
//! - Handle-based collections
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod logging;
