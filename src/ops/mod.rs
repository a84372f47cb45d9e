//! High-level operations.
//!
//! This module contains the implementation of gosmith commands.

pub mod doctor;
pub mod editor;
pub mod gosmith_new;
pub mod gosmith_work;
pub mod vcs;

pub use doctor::{doctor, format_report, CheckResult, DoctorReport};
pub use gosmith_new::{new_module, NewOptions};
pub use gosmith_work::{generate_workspace, WorkOptions, WorkReport};
