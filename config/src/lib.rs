//! # Config Crate
//!
//! Centralized configuration constants for the CSG script pipeline.
//! Reserved names and formatting defaults are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CHILDREN_KEYWORD, SCOPE_FUNCTION_PREFIX};
//!
//! // Synthesized scope names extend the reserved children keyword
//! let name = format!("{}{}", SCOPE_FUNCTION_PREFIX, 3);
//! assert!(name.starts_with(CHILDREN_KEYWORD));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants, usable from every crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
