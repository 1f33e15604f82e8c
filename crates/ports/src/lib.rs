//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Top-level directory enumeration
//! - [`metadata`]: Embedded image metadata extraction
//! - [`progress`]: Notifications while a report is written
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod metadata;
pub mod progress;
