//! gosmith - scaffolding for Go modules and multi-module workspaces
//!
//! This crate provides the library side of the `gosmith` CLI: workspace
//! discovery and assembly, module generation, and the process, config and
//! filesystem plumbing around them.

pub mod core;
pub mod ops;
pub mod templates;
pub mod util;

/// Test utilities and mocks for gosmith unit tests.
///
/// Only compiled for tests. Provides a recording process executor and
/// directory-tree fixtures.
#[cfg(test)]
pub mod test_support;

pub use core::{
    module::ModuleSpec, workspace::ModuleReference, workspace::WorkspaceAssembler,
};
pub use util::config::Config;
pub use util::errors::GosmithError;
