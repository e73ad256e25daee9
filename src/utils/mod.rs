//! Utility modules for common functionality
//!
//! Provides process execution, shell quoting for display, and the scoped
//! capture file used by editor mode.

pub mod capture;
pub mod process;
pub mod quote;

pub use capture::CaptureFile;
pub use process::ProcessRunner;
