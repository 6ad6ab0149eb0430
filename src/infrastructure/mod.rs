//! Infrastructure layer.
//!
//! Configuration loading and the wiring from configuration to concrete
//! adapters. No normalization logic lives here.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Builds subgraph and contract clients from a [`config::settings::Config`]
//! - [`config`] - Configuration loading, validation and logging setup

pub mod bootstrap;
pub mod config;
