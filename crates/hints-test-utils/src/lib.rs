//! Shared test utilities for the hintweave workspace.
//!
//! This crate provides standardised fixtures for hint config directories. It
//! is a dev-dependency only, never published.

pub mod dir;

pub use dir::HintsDir;
