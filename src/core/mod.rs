//! Core data types for gosmith.

pub mod module;
pub mod workspace;

pub use module::{ModuleKind, ModuleSpec};
pub use workspace::{
    AssembleOutcome, ModuleReference, SubRepository, WorkspaceAssembler, WorkspaceDescriptor,
};
