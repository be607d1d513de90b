//! Shared test utilities for the jataka-dashboard workspace.
//!
//! Provides temporary project directories with real and mockup data roots,
//! plus CSV fixtures that satisfy (or deliberately violate) each dataset's
//! schema. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`csv`] - CSV fixture builders derived from the dataset registry
//! - [`data_dir`] - [`TestDataDir`] builder for a dashboard project on disk

pub mod csv;
pub mod data_dir;

pub use data_dir::TestDataDir;
