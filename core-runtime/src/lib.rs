//! # Core Runtime Module
//!
//! Provides the ambient runtime infrastructure for metadata providers:
//! - Logging and tracing infrastructure
//! - Provider API configuration (credentials, limits)
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the other crates depend on.
//! It establishes the logging conventions and the fail-fast configuration
//! validation used throughout the workspace.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
