//! # labdeck-common
//!
//! Shared wire types, error definitions, configuration model, and constants
//! used across the labdeck workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate and describes the JSON contract spoken by the container
//! backend (`/create`, `/list`, `/delete`).

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
