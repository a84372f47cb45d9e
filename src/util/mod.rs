//! Shared utilities

pub mod config;
pub mod errors;
pub mod fs;
pub mod hash;
pub mod process;
pub mod version;

pub use config::Config;
pub use errors::GosmithError;
pub use process::{CommandRunner, ProcessBuilder, SystemRunner};
