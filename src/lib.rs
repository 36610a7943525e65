//! Vows Support
//!
//! Building blocks for a behavior-driven test runner: locating test files by
//! glob, scaffolding new test files, and resolving assertions by name.

pub mod assertion;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod template;
pub mod timing;

pub use assertion::{AssertionHandler, AssertionResolver};
pub use discovery::{locate, LocateOptions, Locator};
pub use error::{AssertionError, AssertionNotFoundError, Error, LocateError, Result};
pub use template::{render_template, TemplateContext};
pub use timing::elapsed;

/// Version of this crate, stamped into generated templates by the `vows` binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
