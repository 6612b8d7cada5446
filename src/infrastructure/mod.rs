//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, service wiring, and the process runtime.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for the in-memory services
//! - [`config`] - Configuration loading and validation
//! - [`runtime`] - Serving, signal handling and shutdown

pub mod bootstrap;
pub mod config;
pub mod runtime;
