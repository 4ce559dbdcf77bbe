//! Task management core.
//!
//! Implements the authoritative session task collection, the asynchronous
//! persistence boundary behind it, and the exclusive add/edit/delete modal
//! workflow that gates mutations. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
